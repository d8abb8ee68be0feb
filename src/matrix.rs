use crate::Weight;

/// Dense `n x n` weight table stored row-major.
///
/// `None` means "no edge" and is different from `Some(0)`. Diagonal cells are always `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    n: usize,
    cells: Vec<Option<Weight>>,
}

impl AdjacencyMatrix {
    pub(crate) fn new(n: usize) -> Self {
        let mut cells = vec![None; n * n];
        for i in 0..n {
            cells[i * n + i] = Some(0);
        }
        Self { n, cells }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.n
    }

    pub fn get(&self, i: usize, j: usize) -> Option<Weight> {
        self.cells[i * self.n + j]
    }

    pub(crate) fn set(&mut self, i: usize, j: usize, weight: Weight) {
        self.cells[i * self.n + j] = Some(weight);
    }

    pub fn row(&self, i: usize) -> &[Option<Weight>] {
        &self.cells[i * self.n..(i + 1) * self.n]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Weight>]> {
        self.cells.chunks(self.n.max(1)).take(self.n)
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }
}
