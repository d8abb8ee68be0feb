use std::collections::VecDeque;

use fixedbitset::FixedBitSet;
use tracing::debug;

use crate::Graph;
use crate::error::Result;

/// Breadth-first order of the vertices reachable from `start`.
///
/// Neighbors are enqueued in increasing index order, so the result only depends on the graph.
pub fn bfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let start = graph.index_of(start)?;
    let mut visited = FixedBitSet::with_capacity(graph.vertex_count());
    let mut queue = VecDeque::new();
    let mut order = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(u) = queue.pop_front() {
        order.push(graph.label(u).to_string());
        for (v, _) in graph.neighbors(u) {
            if !visited.put(v) {
                queue.push_back(v);
            }
        }
    }

    debug!(start = graph.label(start), visited = order.len(), "bfs finished");
    Ok(order)
}

/// Depth-first preorder of the vertices reachable from `start`.
///
/// Equivalent to the recursive version that descends into the lowest-index unvisited
/// neighbor first, but keeps its own stack of `(vertex, next neighbor to try)` frames.
pub fn dfs(graph: &Graph, start: &str) -> Result<Vec<String>> {
    let start = graph.index_of(start)?;
    let n = graph.vertex_count();
    let mut visited = FixedBitSet::with_capacity(n);
    let mut stack = vec![(start, 0)];
    let mut order = vec![graph.label(start).to_string()];
    visited.insert(start);

    while let Some(frame) = stack.last_mut() {
        let (u, cursor) = *frame;
        let next = graph
            .neighbors(u)
            .map(|(v, _)| v)
            .find(|&v| v >= cursor && !visited.contains(v));

        match next {
            Some(v) => {
                frame.1 = v + 1;
                visited.insert(v);
                order.push(graph.label(v).to_string());
                stack.push((v, 0));
            }
            None => {
                stack.pop();
            }
        }
    }

    debug!(start = graph.label(start), visited = order.len(), "dfs finished");
    Ok(order)
}
