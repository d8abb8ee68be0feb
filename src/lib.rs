//! # dense_graphs
//!
//! Weighted graphs over a fixed set of labelled vertices, stored as a dense adjacency
//! matrix, with the classic queries on top of it:
//!
//! - [`traversal::bfs`] and [`traversal::dfs`] in deterministic index order,
//! - [`shortest_path::dijkstra`] and [`spanning_tree::prim`], both `O(V^2)` matrix scans,
//! - [`biconnected::find_biconnected_components`], a low-link DFS with an edge stack that
//!   reports the biconnected components and articulation points of every connected
//!   component of the graph.
//!
//! ```
//! use dense_graphs::{Graph, biconnected::find_biconnected_components, shortest_path::dijkstra};
//!
//! let mut g = Graph::new(["A", "B", "C", "D"], false)?;
//! g.add_edge("A", "B", 2)?;
//! g.add_edge("B", "C", 1)?;
//! g.add_edge("C", "A", 4)?;
//! g.add_edge("C", "D", 1)?;
//!
//! assert_eq!(dijkstra(&g, "A")?.get("D"), Some(4));
//!
//! let bcc = find_biconnected_components(&g, "A")?;
//! assert_eq!(bcc.component_count(), 2);
//! assert!(bcc.is_articulation_point("C"));
//! # Ok::<(), dense_graphs::GraphError>(())
//! ```
//!
//! Queries fail with [`GraphError::InvalidVertex`] for an unknown start vertex. Every result
//! type implements [`Default`] as its empty value, so `unwrap_or_default()` gives the empty
//! result instead.

pub mod biconnected;
pub mod config;
pub mod debugging;
pub mod error;
pub mod graph;
pub mod input;
pub mod matrix;
pub mod output;
pub mod shortest_path;
pub mod spanning_tree;
pub mod traversal;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use config::{DuplicateEdgePolicy, GraphConfig};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use matrix::AdjacencyMatrix;
pub use types::{Edge, TreeEdge, Weight};
