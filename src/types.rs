use petgraph::graphmap::NodeTrait;

/// Vertex labels accepted by the crate.
///
/// Anything petgraph can key a `GraphMap` with works, as long as it can be
/// printed and sent across threads (`&'static str`, integers, small `Copy` ids).
pub trait Vertex: NodeTrait + std::fmt::Debug + Send + Sync {}

impl<T> Vertex for T where T: NodeTrait + std::fmt::Debug + Send + Sync {}

/// Returns the arc pointing the other way.
pub fn reverse_arc<V: Copy>((u, v): (V, V)) -> (V, V) {
    (v, u)
}

/// Enum representing the role of an arc in a drawn decomposition.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ArcLabel {
    Unused,
    /// Index of the arborescence that uses the arc.
    Tree(usize),
}

impl std::fmt::Display for ArcLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArcLabel::Unused => write!(f, "Unused"),
            ArcLabel::Tree(i) => write!(f, "T{}", i),
        }
    }
}
