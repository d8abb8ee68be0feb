use crate::Graph;

/// Undirected six vertex graph with known traversal orders, distances and spanning tree.
pub(crate) fn scenario_a() -> Graph {
    let mut g = Graph::new(["A", "B", "D", "E", "G", "H"], false).unwrap();
    for (u, v, w) in [
        ("A", "B", 2),
        ("A", "D", 7),
        ("B", "E", 9),
        ("B", "H", 3),
        ("D", "E", 13),
        ("D", "G", 6),
        ("E", "G", 11),
        ("E", "H", 1),
        ("G", "H", 2),
    ] {
        g.add_edge(u, v, w).unwrap();
    }
    g
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_a_shape() {
        let g = scenario_a();
        assert_eq!(g.vertex_count(), 6);
        assert_eq!(g.edge_count(), 9);
        assert!(g.matrix().is_symmetric());
    }
}
