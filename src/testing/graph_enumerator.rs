use crate::Graph;

/// Iterates over every simple undirected graph on `n` vertices labelled `"0"`..`"n-1"`.
///
/// Bit `k` of the mask decides the `k`-th pair `(i, j)`, `i < j`, in lexicographic order.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * n.saturating_sub(1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let labels: Vec<String> = (0..self.n).map(|i| i.to_string()).collect();
        let mut graph = Graph::new(labels.iter().cloned(), false).unwrap();

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_edge(&labels[i], &labels[j], 1).unwrap();
                }
                check += 1;
            }
        }

        self.mask += 1;
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_every_edge_subset() {
        let graphs: Vec<Graph> = GraphEnumeratorState::new(3).collect();
        assert_eq!(graphs.len(), 8);
        assert_eq!(graphs[0].edge_count(), 0);
        assert_eq!(graphs[7].edge_count(), 3);
        assert_eq!(GraphEnumeratorState::new(1).count(), 1);
    }
}
