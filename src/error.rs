/// Errors surfaced by graph mutation, arborescence growth and the decomposition algorithms.
///
/// Every variant is a precondition failure; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid arc {arc}: {reason}")]
    InvalidArc { arc: String, reason: &'static str },

    #[error("arc {arc} dangles: its target is not part of the arborescence yet")]
    DanglingArc { arc: String },

    #[error("cannot build arborescence {index} of {requested}: no admissible arc left")]
    Unconstructible { index: usize, requested: usize },

    #[error("arborescence index {index} is outside 1..={requested}")]
    IndexOutOfRange { index: usize, requested: usize },

    #[error("no arborescence stubs were given")]
    EmptyInput,

    #[error("vertex {vertex} is not part of the graph")]
    UnknownVertex { vertex: String },

    #[error("arborescence does not span the graph: {vertices} of {expected} vertices, {arcs} arcs")]
    NotSpanning {
        vertices: usize,
        arcs: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_arc<V: std::fmt::Debug>(arc: (V, V), reason: &'static str) -> Self {
        Error::InvalidArc {
            arc: format!("{:?}", arc),
            reason,
        }
    }

    pub(crate) fn dangling_arc<V: std::fmt::Debug>(arc: (V, V)) -> Self {
        Error::DanglingArc {
            arc: format!("{:?}", arc),
        }
    }

    pub(crate) fn unknown_vertex<V: std::fmt::Debug>(vertex: V) -> Self {
        Error::UnknownVertex {
            vertex: format!("{:?}", vertex),
        }
    }
}
