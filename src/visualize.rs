use crate::decomposition::Decomposition;
use crate::graph::Graph;
use crate::types::{ArcLabel, Vertex};
use dot::{Edges, GraphWalk, Labeller, Nodes};
use hashbrown::{HashMap, HashSet};

type Node = usize;

#[derive(Debug, Clone)]
struct Edge {
    source: Node,
    target: Node,
    label: ArcLabel,
}

struct DrawnDecomposition {
    labels: Vec<String>,
    edges: Vec<Edge>,
}

impl<'a> Labeller<'a, Node, Edge> for DrawnDecomposition {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("Decomposition").expect("static id is valid")
    }

    fn node_id(&self, n: &Node) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).expect("N<number> is a valid id")
    }

    fn node_label(&self, n: &Node) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, e: &Edge) -> dot::LabelText<'a> {
        dot::LabelText::label(e.label.to_string())
    }
}

impl<'a> GraphWalk<'a, Node, Edge> for DrawnDecomposition {
    fn nodes(&self) -> Nodes<'_, Node> {
        (0..self.labels.len()).collect()
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

/// Returns the graph in DOT format with every arborescence arc labelled `T<i>` (1-based).
///
/// Graph arcs used by no arborescence are labelled `Unused`.
/// Use returned string with `dot`.
pub fn draw_decomposition<V: Vertex>(graph: &Graph<V>, decomposition: &Decomposition<V>) -> String {
    let mut index = HashMap::new();
    let mut labels = Vec::new();
    let mut node = |v: V, labels: &mut Vec<String>| -> Node {
        *index.entry(v).or_insert_with(|| {
            labels.push(format!("{:?}", v).trim_matches('"').to_string());
            labels.len() - 1
        })
    };

    for v in graph.vertices() {
        node(v, &mut labels);
    }

    let mut edges = Vec::new();
    let mut used = HashSet::new();
    for (i, arborescence) in decomposition.iter().enumerate() {
        for &(u, v) in arborescence.arcs() {
            used.insert((u, v));
            edges.push(Edge {
                source: node(u, &mut labels),
                target: node(v, &mut labels),
                label: ArcLabel::Tree(i + 1),
            });
        }
    }
    for (u, v) in graph.arcs().filter(|arc| !used.contains(arc)) {
        edges.push(Edge {
            source: node(u, &mut labels),
            target: node(v, &mut labels),
            label: ArcLabel::Unused,
        });
    }

    let drawn = DrawnDecomposition { labels, edges };
    let mut buffer = std::io::Cursor::new(Vec::new());
    dot::render(&drawn, &mut buffer).expect("writing to memory cannot fail");
    String::from_utf8_lossy(&buffer.into_inner()).into_owned()
}
