use crate::{Graph, Weight};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

const MAX_WEIGHT: Weight = 20;

fn labelled(n: usize) -> Graph {
    Graph::new((0..n).map(|i| format!("v{}", i)), false).unwrap()
}

/// Undirected graph on `n` vertices with `m` random edge insertions.
///
/// Self-loops and repeated pairs are kept as drawn, so the graph may have fewer than `m`
/// edges and is usually disconnected for small `m`.
pub fn random_graph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = labelled(n);

    for _ in 0..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let w = rng.random_range(0..=MAX_WEIGHT);
        graph.add_edge(&format!("v{}", s), &format!("v{}", t), w).unwrap();
    }

    graph
}

/// Connected undirected graph: a random tree plus random extra edges up to `m` insertions.
pub fn random_connected_graph(n: usize, m: usize, seed: usize) -> Graph {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut graph = labelled(n);

    for i in 1..n {
        let j = rng.random_range(0..i);
        let w = rng.random_range(0..=MAX_WEIGHT);
        graph.add_edge(&format!("v{}", i), &format!("v{}", j), w).unwrap();
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        let w = rng.random_range(0..=MAX_WEIGHT);
        graph.add_edge(&format!("v{}", s), &format!("v{}", t), w).unwrap();
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traversal::bfs;

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a = random_graph(8, 12, 7);
        let b = random_graph(8, 12, 7);
        assert_eq!(a.matrix(), b.matrix());
    }

    #[test]
    fn test_connected_graph_is_connected() {
        for seed in 0..20 {
            let g = random_connected_graph(1 + seed, seed, seed);
            assert_eq!(bfs(&g, "v0").unwrap().len(), g.vertex_count());
        }
    }
}
