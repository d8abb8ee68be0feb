use std::hash::{Hash, Hasher};

/// Edge weight. Signed so that a negative weight can be rejected instead of wrapping.
pub type Weight = i64;

/// Undirected edge between two vertex labels.
///
/// `(u, v)` and `(v, u)` compare and hash equal. The fields keep the orientation in which
/// the edge was discovered, which is what gets displayed.
#[derive(Clone, Debug)]
pub struct Edge {
    pub u: String,
    pub v: String,
}

impl Edge {
    pub fn new(u: impl Into<String>, v: impl Into<String>) -> Self {
        Self {
            u: u.into(),
            v: v.into(),
        }
    }

    /// Endpoints ordered by label, used for equality and hashing.
    pub fn key(&self) -> (&str, &str) {
        if self.u <= self.v {
            (self.u.as_str(), self.v.as_str())
        } else {
            (self.v.as_str(), self.u.as_str())
        }
    }

    /// Returns true if `label` is one of the endpoints.
    pub fn touches(&self, label: &str) -> bool {
        self.u == label || self.v == label
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.u, self.v)
    }
}

/// Edge of a spanning tree, oriented from the tree parent to the child.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeEdge {
    pub parent: String,
    pub child: String,
    pub weight: Weight,
}

impl std::fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {} ({})", self.parent, self.child, self.weight)
    }
}
