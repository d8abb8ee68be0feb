use std::collections::BTreeMap;

use fixedbitset::FixedBitSet;
use tracing::{debug, warn};

use crate::error::{GraphError, Result};
use crate::{Graph, Weight};

/// Single-source distances, keyed by vertex label. `None` marks an unreachable vertex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Distances {
    pub source: String,
    pub distances: BTreeMap<String, Option<Weight>>,
}

impl Distances {
    /// Distance to `label`, `None` if unreachable or unknown.
    pub fn get(&self, label: &str) -> Option<Weight> {
        self.distances.get(label).copied().flatten()
    }

    pub fn is_reachable(&self, label: &str) -> bool {
        self.get(label).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// The same map with `-1` in place of unreachable distances.
    pub fn to_sentinel_map(&self) -> BTreeMap<String, Weight> {
        self.distances
            .iter()
            .map(|(label, d)| (label.clone(), d.unwrap_or(-1)))
            .collect()
    }
}

/// Dense Dijkstra from `start`, `O(V^2)` over the adjacency matrix.
///
/// Weights are non-negative because [`Graph::add_edge`] refuses anything else. Fails with
/// [`GraphError::WeightOverflow`] if a reachable vertex has no path short enough to fit
/// into [`Weight`].
pub fn dijkstra(graph: &Graph, start: &str) -> Result<Distances> {
    let start = graph.index_of(start)?;
    let n = graph.vertex_count();
    let mut dist: Vec<Option<Weight>> = vec![None; n];
    let mut done = FixedBitSet::with_capacity(n);
    // reached only through paths longer than Weight::MAX so far
    let mut overflowed = FixedBitSet::with_capacity(n);
    dist[start] = Some(0);

    for _ in 0..n {
        // closest unfinished vertex, lowest index on ties
        let mut closest: Option<(usize, Weight)> = None;
        for (v, d) in dist.iter().enumerate() {
            if let Some(d) = *d {
                if !done.contains(v) && closest.is_none_or(|(_, best)| d < best) {
                    closest = Some((v, d));
                }
            }
        }
        let Some((u, du)) = closest else {
            break;
        };
        done.insert(u);

        for (v, w) in graph.neighbors(u) {
            if done.contains(v) {
                continue;
            }
            match du.checked_add(w) {
                Some(candidate) => {
                    if dist[v].is_none_or(|dv| candidate < dv) {
                        dist[v] = Some(candidate);
                    }
                }
                None => overflowed.insert(v),
            }
        }
    }

    if let Some(v) = overflowed.ones().find(|&v| dist[v].is_none()) {
        warn!(start = graph.label(start), vertex = graph.label(v), "path length overflows");
        return Err(GraphError::WeightOverflow {
            from: graph.label(start).to_string(),
        });
    }

    let reachable = dist.iter().filter(|d| d.is_some()).count();
    debug!(start = graph.label(start), reachable, "dijkstra finished");

    Ok(Distances {
        source: graph.label(start).to_string(),
        distances: dist
            .into_iter()
            .enumerate()
            .map(|(i, d)| (graph.label(i).to_string(), d))
            .collect(),
    })
}
