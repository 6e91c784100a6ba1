use crate::error::{Error, Result};
use crate::types::Vertex;
use petgraph::Direction;
use petgraph::graphmap::DiGraphMap;

/// Directed graph without parallel arcs or self-loops.
///
/// Wrapper over petgraph's `DiGraphMap`, so vertices are addressed by their labels and
/// iteration follows insertion order (removals may reshuffle it, deterministically).
///
/// Removing arcs never removes their endpoints.
#[derive(Clone, Debug)]
pub struct Graph<V: Vertex> {
    inner: DiGraphMap<V, ()>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    pub fn new() -> Self {
        Self {
            inner: DiGraphMap::new(),
        }
    }

    /// Builds a graph from arcs, adding their endpoints as vertices on the way.
    pub fn from_arcs<I: IntoIterator<Item = (V, V)>>(arcs: I) -> Result<Self> {
        let mut graph = Self::new();
        for (u, v) in arcs {
            graph.add_vertex(u);
            graph.add_vertex(v);
            graph.add_arc(u, v)?;
        }
        Ok(graph)
    }

    /// Symmetrizes an undirected edge list: each edge `{u, v}` becomes arcs `(u, v)` and `(v, u)`.
    ///
    /// Repeated edges are merged, self-loops are rejected.
    pub fn from_undirected_edges<I: IntoIterator<Item = (V, V)>>(edges: I) -> Result<Self> {
        let mut graph = Self::new();
        for (u, v) in edges {
            if u == v {
                return Err(Error::invalid_arc((u, v), "self-loop"));
            }
            graph.add_vertex(u);
            graph.add_vertex(v);
            for (a, b) in [(u, v), (v, u)] {
                if !graph.has_arc(a, b) {
                    graph.add_arc(a, b)?;
                }
            }
        }
        Ok(graph)
    }

    /// Returns `false` if the vertex was already present.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.inner.contains_node(v) {
            return false;
        }
        self.inner.add_node(v);
        true
    }

    pub fn add_arc(&mut self, u: V, v: V) -> Result<()> {
        if !self.inner.contains_node(u) || !self.inner.contains_node(v) {
            return Err(Error::invalid_arc((u, v), "endpoint missing from vertex set"));
        }
        if u == v {
            return Err(Error::invalid_arc((u, v), "self-loop"));
        }
        if self.inner.contains_edge(u, v) {
            return Err(Error::invalid_arc((u, v), "duplicate arc"));
        }
        self.inner.add_edge(u, v, ());
        Ok(())
    }

    /// Returns `false` if there was no such arc.
    pub fn remove_arc(&mut self, u: V, v: V) -> bool {
        self.inner.remove_edge(u, v).is_some()
    }

    pub fn remove_arcs<'a, I>(&mut self, arcs: I)
    where
        I: IntoIterator<Item = &'a (V, V)>,
        V: 'a,
    {
        for &(u, v) in arcs {
            self.inner.remove_edge(u, v);
        }
    }

    /// Independent copy of the graph with the given arcs removed.
    pub fn without_arcs<'a, I>(&self, arcs: I) -> Self
    where
        I: IntoIterator<Item = &'a (V, V)>,
        V: 'a,
    {
        let mut copy = self.clone();
        copy.remove_arcs(arcs);
        copy
    }

    pub fn has_vertex(&self, v: V) -> bool {
        self.inner.contains_node(v)
    }

    pub fn has_arc(&self, u: V, v: V) -> bool {
        self.inner.contains_edge(u, v)
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.inner.nodes()
    }

    pub fn arcs(&self) -> impl Iterator<Item = (V, V)> + '_ {
        self.inner.all_edges().map(|(u, v, _)| (u, v))
    }

    pub fn vertex_count(&self) -> usize {
        self.inner.node_count()
    }

    pub fn arc_count(&self) -> usize {
        self.inner.edge_count()
    }

    /// Sources of arcs entering `v`.
    pub fn neighbors_in(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.inner.neighbors_directed(v, Direction::Incoming)
    }

    /// Targets of arcs leaving `v`.
    pub fn neighbors_out(&self, v: V) -> impl Iterator<Item = V> + '_ {
        self.inner.neighbors_directed(v, Direction::Outgoing)
    }
}

impl<V: Vertex> PartialEq for Graph<V> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex_count() == other.vertex_count()
            && self.arc_count() == other.arc_count()
            && self.vertices().all(|v| other.has_vertex(v))
            && self.arcs().all(|(u, v)| other.has_arc(u, v))
    }
}

impl<V: Vertex> Eq for Graph<V> {}
