use fixedbitset::FixedBitSet;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::{Graph, TreeEdge, Weight};

/// Minimum spanning tree of the component containing `root`.
///
/// The [`Default`] value is the "no tree" result: no edges and a total weight of `-1`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpanningTree {
    pub root: String,
    /// Tree edges in increasing index order of their child vertex.
    pub edges: Vec<TreeEdge>,
    pub total_weight: Weight,
}

impl Default for SpanningTree {
    fn default() -> Self {
        Self {
            root: String::new(),
            edges: Vec::new(),
            total_weight: -1,
        }
    }
}

impl SpanningTree {
    /// Number of vertices the tree spans, the root included. Zero for the "no tree" value.
    pub fn vertex_count(&self) -> usize {
        if self.total_weight < 0 {
            0
        } else {
            self.edges.len() + 1
        }
    }
}

/// Dense Prim from `start`, `O(V^2)` over the adjacency matrix.
///
/// Vertices not reachable from `start` are left out; that is not an error. On a directed
/// graph the arcs leaving already chosen vertices are used.
///
/// Fails with [`GraphError::WeightOverflow`] if the total weight does not fit into [`Weight`].
pub fn prim(graph: &Graph, start: &str) -> Result<SpanningTree> {
    let start = graph.index_of(start)?;
    let n = graph.vertex_count();
    let mut key: Vec<Option<Weight>> = vec![None; n];
    let mut parent: Vec<Option<usize>> = vec![None; n];
    let mut in_tree = FixedBitSet::with_capacity(n);
    let mut total_weight: Weight = 0;
    key[start] = Some(0);

    for _ in 0..n {
        let mut lightest: Option<(usize, Weight)> = None;
        for (v, k) in key.iter().enumerate() {
            if let Some(k) = *k {
                if !in_tree.contains(v) && lightest.is_none_or(|(_, best)| k < best) {
                    lightest = Some((v, k));
                }
            }
        }
        let Some((u, ku)) = lightest else {
            break;
        };
        in_tree.insert(u);
        total_weight = total_weight.checked_add(ku).ok_or_else(|| {
            warn!(start = graph.label(start), "spanning tree weight overflows");
            GraphError::WeightOverflow {
                from: graph.label(start).to_string(),
            }
        })?;

        for (v, w) in graph.neighbors(u) {
            if !in_tree.contains(v) && key[v].is_none_or(|kv| w < kv) {
                key[v] = Some(w);
                parent[v] = Some(u);
            }
        }
    }

    let edges: Vec<TreeEdge> = parent
        .iter()
        .enumerate()
        .filter_map(|(v, p)| {
            p.map(|p| TreeEdge {
                parent: graph.label(p).to_string(),
                child: graph.label(v).to_string(),
                weight: key[v].unwrap_or_default(),
            })
        })
        .collect();

    debug!(
        start = graph.label(start),
        edges = edges.len(),
        total_weight,
        "prim finished"
    );

    Ok(SpanningTree {
        root: graph.label(start).to_string(),
        edges,
        total_weight,
    })
}
