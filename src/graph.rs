use hashbrown::HashMap;
use petgraph::graph::DiGraph;
use petgraph::visit::EdgeRef;
use tracing::{debug, warn};

use crate::config::{DuplicateEdgePolicy, GraphConfig};
use crate::error::{GraphError, Result};
use crate::matrix::AdjacencyMatrix;
use crate::Weight;

/// Weighted graph over a fixed set of labelled vertices, stored as a dense adjacency matrix.
///
/// Vertex `i` of the matrix is `vertices()[i]`. The vertex set and the label to index mapping
/// never change after construction; the only mutation is [`Graph::add_edge`].
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<String>,
    index: HashMap<String, usize>,
    matrix: AdjacencyMatrix,
    config: GraphConfig,
}

impl Graph {
    /// Creates a graph without edges.
    ///
    /// Fails if `vertices` is empty or contains the same label twice.
    pub fn new<I, S>(vertices: I, directed: bool) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(vertices, GraphConfig::new().directed(directed))
    }

    pub fn with_config<I, S>(vertices: I, config: GraphConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let vertices: Vec<String> = vertices.into_iter().map(Into::into).collect();
        if vertices.is_empty() {
            return Err(GraphError::EmptyGraph);
        }

        let mut index = HashMap::with_capacity(vertices.len());
        for (i, label) in vertices.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(GraphError::DuplicateVertex(label.clone()));
            }
        }

        let matrix = AdjacencyMatrix::new(vertices.len());
        debug!(vertices = vertices.len(), directed = config.directed, "created graph");

        Ok(Self {
            vertices,
            index,
            matrix,
            config,
        })
    }

    /// Sets the weight of the edge `v1 -> v2` (and `v2 -> v1` for undirected graphs).
    ///
    /// A self-loop is accepted and ignored, the diagonal stays zero.
    pub fn add_edge(&mut self, v1: &str, v2: &str, weight: Weight) -> Result<()> {
        let i = self.index_of(v1)?;
        let j = self.index_of(v2)?;
        self.insert_edge(i, j, weight)
    }

    fn insert_edge(&mut self, i: usize, j: usize, weight: Weight) -> Result<()> {
        if weight < 0 {
            warn!(
                from = %self.vertices[i],
                to = %self.vertices[j],
                weight,
                "rejected negative edge weight"
            );
            return Err(GraphError::InvalidWeight { weight });
        }
        if i == j {
            debug!(vertex = %self.vertices[i], "ignored self-loop");
            return Ok(());
        }
        if self.config.duplicate_edges == DuplicateEdgePolicy::Reject
            && self.matrix.get(i, j).is_some()
        {
            warn!(from = %self.vertices[i], to = %self.vertices[j], "rejected duplicate edge");
            return Err(GraphError::DuplicateEdge {
                from: self.vertices[i].clone(),
                to: self.vertices[j].clone(),
            });
        }

        self.matrix.set(i, j, weight);
        if !self.config.directed {
            self.matrix.set(j, i, weight);
        }
        Ok(())
    }

    /// Index of `label`, or [`GraphError::InvalidVertex`].
    pub fn index_of(&self, label: &str) -> Result<usize> {
        match self.index.get(label) {
            Some(&i) => Ok(i),
            None => {
                warn!(vertex = label, "unknown vertex");
                Err(GraphError::InvalidVertex(label.to_string()))
            }
        }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.index.contains_key(label)
    }

    /// Label of the vertex with index `i`.
    pub fn label(&self, i: usize) -> &str {
        &self.vertices[i]
    }

    pub fn vertices(&self) -> &[String] {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_directed(&self) -> bool {
        self.config.directed
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    /// Weight of `v1 -> v2`, `None` if there is no such edge.
    pub fn weight(&self, v1: &str, v2: &str) -> Result<Option<Weight>> {
        Ok(self.matrix.get(self.index_of(v1)?, self.index_of(v2)?))
    }

    /// Number of edges, counting an undirected edge once. The zero diagonal is not counted.
    pub fn edge_count(&self) -> usize {
        let n = self.vertex_count();
        if self.config.directed {
            (0..n).map(|i| self.neighbors(i).count()).sum()
        } else {
            (0..n)
                .map(|i| self.neighbors(i).filter(|&(j, _)| j > i).count())
                .sum()
        }
    }

    /// Out-neighbors of `u` with weights, in increasing index order. Skips `u` itself.
    pub fn neighbors(&self, u: usize) -> impl Iterator<Item = (usize, Weight)> + '_ {
        self.matrix
            .row(u)
            .iter()
            .enumerate()
            .filter(move |&(v, _)| v != u)
            .filter_map(|(v, w)| w.map(|w| (v, w)))
    }

    /// Neighbors of `u` in the underlying undirected graph, in increasing index order.
    pub(crate) fn undirected_neighbors(&self, u: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.vertex_count()).filter(move |&v| {
            v != u && (self.matrix.get(u, v).is_some() || self.matrix.get(v, u).is_some())
        })
    }

    /// Builds a graph from a petgraph graph. Node weights become labels through `Display`.
    ///
    /// Of several parallel edges the last one wins, self-loops are dropped.
    pub fn from_petgraph<N, Ty>(graph: &petgraph::Graph<N, Weight, Ty>) -> Result<Self>
    where
        N: std::fmt::Display,
        Ty: petgraph::EdgeType,
    {
        let labels: Vec<String> = graph.node_weights().map(|n| n.to_string()).collect();
        let mut out = Self::new(labels, graph.is_directed())?;
        for edge in graph.edge_references() {
            out.insert_edge(edge.source().index(), edge.target().index(), *edge.weight())?;
        }
        Ok(out)
    }

    /// Directed petgraph view: one arc per set off-diagonal cell, so an undirected edge
    /// becomes two opposite arcs. Node `i` is vertex `i`.
    pub fn to_petgraph(&self) -> DiGraph<String, Weight> {
        let mut out = DiGraph::with_capacity(self.vertex_count(), 0);
        let nodes: Vec<_> = self
            .vertices
            .iter()
            .map(|label| out.add_node(label.clone()))
            .collect();
        for u in 0..self.vertex_count() {
            for (v, w) in self.neighbors(u) {
                out.add_edge(nodes[u], nodes[v], w);
            }
        }
        out
    }
}
