use dot::{Edges, GraphWalk, Labeller, Nodes};

use crate::biconnected::Biconnectivity;
use crate::error::Result;
use crate::Graph;

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    component: usize,
}

struct ComponentView<'a> {
    graph: &'a Graph,
    biconnectivity: &'a Biconnectivity,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for ComponentView<'a> {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").expect("valid DOT identifier")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("valid DOT identifier")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        let label = self.graph.label(*n);
        if self.biconnectivity.is_articulation_point(label) {
            dot::LabelText::label(format!("{}\ncut", label))
        } else {
            dot::LabelText::label(label.to_string())
        }
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(format!("c{}", e.component))
    }

    fn kind(&self) -> dot::Kind {
        dot::Kind::Graph
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for ComponentView<'a> {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.graph.vertex_count()).collect()
    }

    fn edges(&self) -> Edges<'_, Edge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &Edge) -> Node {
        e.source
    }

    fn target(&self, e: &Edge) -> Node {
        e.target
    }
}

/// Returns the biconnected components of `graph` in DOT format.
///
/// Every edge is labelled `c<i>` with the index of its component in
/// `biconnectivity.components`, articulation points have `cut` under their label.
///
/// Use returned string with `neato`.
pub fn draw_biconnectivity(graph: &Graph, biconnectivity: &Biconnectivity) -> Result<String> {
    let mut edges = Vec::new();
    for (component, component_edges) in biconnectivity.components.iter().enumerate() {
        for e in component_edges {
            edges.push(Edge {
                source: graph.index_of(&e.u)?,
                target: graph.index_of(&e.v)?,
                component,
            });
        }
    }

    let view = ComponentView {
        graph,
        biconnectivity,
        edges,
    };

    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&view, &mut buffer)?;
    String::from_utf8(buffer.into_inner())
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
