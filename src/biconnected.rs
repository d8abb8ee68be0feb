use std::collections::BTreeSet;

use fixedbitset::FixedBitSet;
use hashbrown::HashSet;
use tracing::debug;

use crate::error::Result;
use crate::{Edge, Graph};

/// Biconnected components and articulation points of a whole graph.
///
/// Every edge of the graph belongs to exactly one component. A component with a single
/// edge is a bridge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Biconnectivity {
    /// Components as edge lists, in the order they were closed by the DFS.
    pub components: Vec<Vec<Edge>>,
    pub articulation_points: BTreeSet<String>,
}

impl Biconnectivity {
    pub fn component_count(&self) -> usize {
        self.components.len()
    }

    /// Edges whose removal disconnects their endpoints.
    pub fn bridges(&self) -> Vec<&Edge> {
        self.components
            .iter()
            .filter(|component| component.len() == 1)
            .map(|component| &component[0])
            .collect()
    }

    pub fn is_articulation_point(&self, label: &str) -> bool {
        self.articulation_points.contains(label)
    }

    /// True if there is no articulation point and at most one component.
    pub fn is_biconnected(&self) -> bool {
        self.articulation_points.is_empty() && self.components.len() <= 1
    }

    /// Vertex labels touched by component `i`, `None` if there is no such component.
    pub fn component_vertices(&self, i: usize) -> Option<BTreeSet<&str>> {
        self.components.get(i).map(|component| {
            component
                .iter()
                .flat_map(|e| [e.u.as_str(), e.v.as_str()])
                .collect()
        })
    }
}

/// Finds the biconnected components and articulation points of `graph`.
///
/// The low-link DFS starts at `start`, then restarts from every vertex it has not reached
/// yet, so the result covers all connected components. Directed graphs are read as their
/// underlying undirected graph.
pub fn find_biconnected_components(graph: &Graph, start: &str) -> Result<Biconnectivity> {
    let start = graph.index_of(start)?;
    let run = run_low_link(graph, start);
    let result = run.finish();

    debug!(
        start = graph.label(start),
        components = result.components.len(),
        articulation_points = result.articulation_points.len(),
        "biconnectivity finished"
    );
    Ok(result)
}

fn run_low_link(graph: &Graph, start: usize) -> LowLinkDfs<'_> {
    let mut run = LowLinkDfs::new(graph);
    run.dfs(start);
    run.drain_stack();

    for u in 0..graph.vertex_count() {
        if run.state[u] == VertexState::Unvisited {
            run.dfs(u);
            run.drain_stack();
        }
    }

    debug_assert!(run.edge_stack.is_empty());
    run
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum VertexState {
    Unvisited,
    /// On the DFS path.
    Active,
    Finished,
}

/// Edge between vertex indices, oriented the way the DFS walked it.
#[derive(Clone, Copy, Debug)]
struct StackEdge {
    u: usize,
    v: usize,
}

impl StackEdge {
    fn key(self) -> (usize, usize) {
        (self.u.min(self.v), self.u.max(self.v))
    }
}

/// Transient state of one query.
struct LowLinkDfs<'a> {
    graph: &'a Graph,
    // shared by all DFS trees of the query
    time: usize,
    state: Vec<VertexState>,
    discovery: Vec<usize>,
    low: Vec<usize>,
    parent: Vec<Option<usize>>,
    edge_stack: Vec<StackEdge>,
    components: Vec<Vec<StackEdge>>,
    is_cut: FixedBitSet,
}

impl<'a> LowLinkDfs<'a> {
    fn new(graph: &'a Graph) -> Self {
        let n = graph.vertex_count();
        Self {
            graph,
            time: 0,
            state: vec![VertexState::Unvisited; n],
            discovery: vec![0; n],
            low: vec![0; n],
            parent: vec![None; n],
            edge_stack: Vec::new(),
            components: Vec::new(),
            is_cut: FixedBitSet::with_capacity(n),
        }
    }

    fn dfs(&mut self, u: usize) {
        self.time += 1;
        self.discovery[u] = self.time;
        self.low[u] = self.time;
        self.state[u] = VertexState::Active;
        let mut children = 0;

        let graph = self.graph;
        for v in graph.undirected_neighbors(u) {
            match self.state[v] {
                VertexState::Unvisited => {
                    let tree_edge = StackEdge { u, v };
                    self.edge_stack.push(tree_edge);
                    self.parent[v] = Some(u);
                    children += 1;

                    self.dfs(v);

                    self.low[u] = self.low[u].min(self.low[v]);
                    // a root separates its DFS subtrees, any other vertex separates a
                    // subtree with no back edge above it
                    let is_root = self.parent[u].is_none();
                    if (is_root && children > 1) || (!is_root && self.low[v] >= self.discovery[u])
                    {
                        self.is_cut.insert(u);
                        self.pop_component(tree_edge);
                    }
                }
                VertexState::Active
                    if Some(v) != self.parent[u] && self.discovery[v] < self.discovery[u] =>
                {
                    // back edge to an ancestor
                    self.edge_stack.push(StackEdge { u, v });
                    self.low[u] = self.low[u].min(self.discovery[v]);
                }
                _ => {}
            }
        }

        self.state[u] = VertexState::Finished;
    }

    /// Pops edges up to and including `until` into a new component.
    fn pop_component(&mut self, until: StackEdge) {
        let mut component = Vec::new();
        while let Some(edge) = self.edge_stack.pop() {
            component.push(edge);
            if edge.key() == until.key() {
                break;
            }
        }
        self.components.push(component);
    }

    /// Moves whatever is left on the stack after a DFS tree into one last component.
    fn drain_stack(&mut self) {
        if !self.edge_stack.is_empty() {
            let component = self.edge_stack.drain(..).rev().collect();
            self.components.push(component);
        }
    }

    /// Keeps the first occurrence of every edge, drops components left empty and
    /// translates indices back to labels.
    fn finish(self) -> Biconnectivity {
        let graph = self.graph;
        let mut seen = HashSet::new();
        let components = self
            .components
            .into_iter()
            .map(|component| {
                component
                    .into_iter()
                    .filter(|e| seen.insert(e.key()))
                    .map(|e| Edge::new(graph.label(e.u), graph.label(e.v)))
                    .collect::<Vec<_>>()
            })
            .filter(|component| !component.is_empty())
            .collect();

        Biconnectivity {
            components,
            articulation_points: self
                .is_cut
                .ones()
                .map(|u| graph.label(u).to_string())
                .collect(),
        }
    }
}
