use crate::Graph;
use crate::error::Result;

/// Returns a graph in DOT format.
///
/// It shows your vertex labels, not matrix indices. Edges are labelled with their weights.
///
/// Undirected graphs become `graph { a -- b }` with every edge once, directed graphs become
/// `digraph { a -> b }`.
///
/// Intended to be used with `neato`.
pub fn draw_graph(graph: &Graph) -> String {
    let (header, connector) = if graph.is_directed() {
        ("digraph {\n", "->")
    } else {
        ("graph {\n", "--")
    };
    let mut output = String::from(header);
    output.push_str("  mode=sgd;\n");
    output.push_str("  maxiter=1000;\n");
    output.push_str("  node [shape=circle, style=filled, fillcolor=lightblue];\n");

    // Add vertices
    for (i, label) in graph.vertices().iter().enumerate() {
        output.push_str(&format!("  {} [label=\"{}\"];\n", i, escape(label)));
    }

    // Add edges
    for u in 0..graph.vertex_count() {
        for (v, w) in graph.neighbors(u) {
            if !graph.is_directed() && v < u {
                continue;
            }
            output.push_str(&format!("  {} {} {} [label=\"{}\"];\n", u, connector, v, w));
        }
    }
    output.push_str("}\n");
    output
}

/// Writes the graph to a file in DOT format.
pub fn to_dot_file(graph: &Graph, path: &str) -> Result<()> {
    let dot_str = draw_graph(graph);
    to_file(&dot_str, path)
}

/// Writes a string to a file.
pub fn to_file(content: &str, path: &str) -> Result<()> {
    std::fs::write(path, content)?;
    Ok(())
}

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}
