use thiserror::Error;

use crate::Weight;

/// Errors reported by graph construction, edge insertion, queries and input parsing.
///
/// All of them are local: a failing call never leaves the graph in a different state
/// than before it was made.
#[derive(Debug, Error)]
pub enum GraphError {
    /// Label is not part of the graph's vertex set.
    #[error("vertex `{0}` does not exist")]
    InvalidVertex(String),

    /// Edge weights must be non-negative.
    #[error("edge weight {weight} is negative")]
    InvalidWeight { weight: Weight },

    /// Second insertion of the same edge while [`crate::DuplicateEdgePolicy::Reject`] is active.
    #[error("edge `{from}` -> `{to}` already exists")]
    DuplicateEdge { from: String, to: String },

    /// A path length or tree weight does not fit into [`Weight`].
    #[error("total weight from `{from}` overflows")]
    WeightOverflow { from: String },

    /// A graph needs at least one vertex.
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("vertex `{0}` is listed more than once")]
    DuplicateVertex(String),

    /// Malformed line in an edge list, `line` is 1-based.
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, GraphError>;
