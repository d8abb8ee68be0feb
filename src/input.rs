use crate::error::{GraphError, Result};
use crate::{Graph, GraphConfig, Weight};
use hashbrown::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use tracing::warn;

/// Reads a graph from a file.
///
/// Edge list input, one item per line:
/// - `label` declares a vertex (useful for isolated ones),
/// - `u,v` is an edge of weight 1,
/// - `u,v,w` is an edge of weight `w`.
///
/// Empty lines and lines starting with `#` are skipped. Vertices get indices in order of first
/// appearance, and edges are inserted in file order through [`Graph::add_edge`], so the
/// configured duplicate edge policy applies.
///
/// Example input:
/// ```text
/// # scenario A
/// A,B,2
/// A,D,7
/// B,E,9
/// B,H,3
/// D,E,13
/// D,G,6
/// E,G,11
/// E,H,1
/// G,H,2
/// ```
pub fn from_file(path: &str, config: GraphConfig) -> Result<Graph> {
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file), config)
}

/// This is equivalent to [`from_file`], but takes string as an input.
pub fn from_str(input: &str, config: GraphConfig) -> Result<Graph> {
    parse_edge_list(BufReader::new(Cursor::new(input)), config)
}

struct EdgeLine {
    line: usize,
    u: String,
    v: String,
    weight: Weight,
}

fn parse_edge_list<R: BufRead>(reader: R, config: GraphConfig) -> Result<Graph> {
    let mut vertices = Vec::new();
    let mut known = HashSet::new();
    let mut edges = Vec::new();

    let mut declare = |label: &str| {
        if known.insert(label.to_string()) {
            vertices.push(label.to_string());
        }
    };

    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split(',').map(str::trim).collect();
        if parts.iter().any(|p| p.is_empty()) {
            return Err(parse_error(line_no, "empty vertex label or weight"));
        }
        match parts.as_slice() {
            [label] => declare(*label),
            [u, v] => {
                declare(*u);
                declare(*v);
                edges.push(EdgeLine {
                    line: line_no,
                    u: u.to_string(),
                    v: v.to_string(),
                    weight: 1,
                });
            }
            [u, v, w] => {
                let weight: Weight = w
                    .parse()
                    .map_err(|_| parse_error(line_no, &format!("weight `{}` is not an integer", w)))?;
                declare(*u);
                declare(*v);
                edges.push(EdgeLine {
                    line: line_no,
                    u: u.to_string(),
                    v: v.to_string(),
                    weight,
                });
            }
            _ => return Err(parse_error(line_no, "expected `label`, `u,v` or `u,v,w`")),
        }
    }

    let mut graph = Graph::with_config(vertices, config)?;
    for edge in edges {
        graph.add_edge(&edge.u, &edge.v, edge.weight).map_err(|e| match e {
            GraphError::InvalidWeight { .. } | GraphError::DuplicateEdge { .. } => {
                parse_error(edge.line, &e.to_string())
            }
            other => other,
        })?;
    }

    Ok(graph)
}

fn parse_error(line: usize, message: &str) -> GraphError {
    warn!(line, reason = message, "malformed edge list");
    GraphError::Parse {
        line,
        message: message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DuplicateEdgePolicy;

    #[test]
    fn test_from_str() {
        let input = "A,B\nB,C,5\n";
        let graph = from_str(input, GraphConfig::new()).unwrap();
        assert_eq!(graph.vertices(), &["A", "B", "C"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.weight("A", "B").unwrap(), Some(1));
        assert_eq!(graph.weight("C", "B").unwrap(), Some(5));
    }

    #[test]
    fn test_comments_declarations_and_spaces() {
        let input = "# isolated vertex first\nZ\n\n  A , B , 3 \n";
        let graph = from_str(input, GraphConfig::new().directed(true)).unwrap();
        assert_eq!(graph.vertices(), &["Z", "A", "B"]);
        assert!(graph.is_directed());
        assert_eq!(graph.weight("A", "B").unwrap(), Some(3));
        assert_eq!(graph.weight("B", "A").unwrap(), None);
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            from_str("A,B\nA,B,C,D\n", GraphConfig::new()),
            Err(GraphError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            from_str("A,B,x\n", GraphConfig::new()),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            from_str("A,,1\n", GraphConfig::new()),
            Err(GraphError::Parse { line: 1, .. })
        ));
        assert!(matches!(
            from_str("\n\nA,B,-4\n", GraphConfig::new()),
            Err(GraphError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            from_str("# nothing\n", GraphConfig::new()),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn test_duplicate_policy_applies() {
        let input = "A,B,1\nB,A,2\n";
        let graph = from_str(input, GraphConfig::new()).unwrap();
        assert_eq!(graph.weight("A", "B").unwrap(), Some(2));

        let reject = GraphConfig::new().duplicate_edges(DuplicateEdgePolicy::Reject);
        assert!(matches!(
            from_str(input, reject),
            Err(GraphError::Parse { line: 2, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            from_file("/nonexistent/graph.in", GraphConfig::new()),
            Err(GraphError::Io(_))
        ));
    }
}
