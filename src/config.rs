/// What [`crate::Graph::add_edge`] does when the edge it inserts is already present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateEdgePolicy {
    /// Last write wins.
    #[default]
    Overwrite,
    /// Fail with [`crate::GraphError::DuplicateEdge`] and keep the stored weight.
    Reject,
}

/// Construction options for [`crate::Graph`].
#[derive(Debug, Clone, Default)]
pub struct GraphConfig {
    /// Whether `add_edge(a, b, w)` only sets the `a -> b` cell.
    pub directed: bool,
    pub duplicate_edges: DuplicateEdgePolicy,
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    #[must_use]
    pub const fn duplicate_edges(mut self, policy: DuplicateEdgePolicy) -> Self {
        self.duplicate_edges = policy;
        self
    }
}
