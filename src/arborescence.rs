use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Vertex, reverse_arc};
use hashbrown::{HashMap, HashSet};

/// In-tree rooted at a destination vertex.
///
/// Every arc `(u, v)` leads from a child `u` to its parent `v`, so following arcs from any member
/// reaches the destination along a unique path.
///
/// The tree only grows: an arc may be added only if its target is already a member and its
/// source is not. This keeps exactly one arc per non-destination vertex, so `arcs == vertices - 1`
/// at all times.
#[derive(Debug, Clone)]
pub struct Arborescence<V: Vertex> {
    destination: V,
    vertices: HashSet<V>,
    /// Members nothing is attached to yet.
    leaves: HashSet<V>,
    /// Insertion order of arcs.
    arcs: Vec<(V, V)>,
    parent: HashMap<V, V>,
}

impl<V: Vertex> Arborescence<V> {
    /// Empty arborescence holding just the destination.
    pub fn new(destination: V) -> Self {
        Self {
            destination,
            vertices: HashSet::from_iter([destination]),
            leaves: HashSet::from_iter([destination]),
            arcs: Vec::new(),
            parent: HashMap::new(),
        }
    }

    pub fn from_arcs<I: IntoIterator<Item = (V, V)>>(destination: V, arcs: I) -> Result<Self> {
        let mut arborescence = Self::new(destination);
        arborescence.add_arcs(arcs)?;
        Ok(arborescence)
    }

    /// Attaches `u` below `v`.
    pub fn add_arc(&mut self, u: V, v: V) -> Result<()> {
        if !self.vertices.contains(&v) {
            return Err(Error::dangling_arc((u, v)));
        }
        if self.vertices.contains(&u) {
            return Err(Error::invalid_arc((u, v), "source is already attached"));
        }

        self.leaves.remove(&v);
        self.leaves.insert(u);
        self.vertices.insert(u);
        self.parent.insert(u, v);
        self.arcs.push((u, v));
        Ok(())
    }

    /// Adds arcs in order; stops at the first failure.
    pub fn add_arcs<I: IntoIterator<Item = (V, V)>>(&mut self, arcs: I) -> Result<()> {
        for (u, v) in arcs {
            self.add_arc(u, v)?;
        }
        Ok(())
    }

    pub fn has_arc(&self, u: V, v: V) -> bool {
        self.parent.get(&u) == Some(&v)
    }

    pub fn has_vertex(&self, v: V) -> bool {
        self.vertices.contains(&v)
    }

    pub fn destination(&self) -> V {
        self.destination
    }

    pub fn arcs(&self) -> &[(V, V)] {
        &self.arcs
    }

    pub fn vertices(&self) -> impl Iterator<Item = V> + '_ {
        self.vertices.iter().copied()
    }

    pub fn leaves(&self) -> impl Iterator<Item = V> + '_ {
        self.leaves.iter().copied()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn arc_count(&self) -> usize {
        self.arcs.len()
    }

    /// Arcs pointing away from the destination, in insertion order.
    pub fn reversed_arcs(&self) -> Vec<(V, V)> {
        self.arcs.iter().map(|&arc| reverse_arc(arc)).collect()
    }

    /// The unique path `v, parent(v), ..., destination`, or `None` if `v` is not a member.
    pub fn path_to_destination(&self, v: V) -> Option<Vec<V>> {
        if !self.has_vertex(v) {
            return None;
        }
        let mut path = vec![v];
        let mut current = v;
        while let Some(&next) = self.parent.get(&current) {
            path.push(next);
            current = next;
        }
        Some(path)
    }

    /// True iff some arc of `other` is an arc of `self` or the reverse of one.
    pub fn shares_arcs(&self, other: &Self) -> bool {
        self.shares_arcs_with(other, true)
    }

    pub fn shares_arcs_with(&self, other: &Self, count_reverse: bool) -> bool {
        other
            .arcs
            .iter()
            .any(|&(u, v)| self.has_arc(u, v) || (count_reverse && self.has_arc(v, u)))
    }

    /// Covers every vertex of `graph` with exactly |V| - 1 arcs.
    pub fn is_spanning(&self, graph: &Graph<V>) -> bool {
        self.vertex_count() == graph.vertex_count()
            && self.arc_count() + 1 == graph.vertex_count()
            && self.vertices().all(|v| graph.has_vertex(v))
    }

    pub fn validate(&self, graph: &Graph<V>) -> Result<()> {
        if self.is_spanning(graph) {
            Ok(())
        } else {
            Err(Error::NotSpanning {
                vertices: self.vertex_count(),
                arcs: self.arc_count(),
                expected: graph.vertex_count(),
            })
        }
    }
}

impl<V: Vertex> PartialEq for Arborescence<V> {
    fn eq(&self, other: &Self) -> bool {
        self.destination == other.destination && self.parent == other.parent
    }
}

impl<V: Vertex> Eq for Arborescence<V> {}

impl<V: Vertex> std::fmt::Display for Arborescence<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut vertices: Vec<_> = self.vertices().collect();
        vertices.sort();
        write!(f, "Arborescence: arcs:{:?} vertices:{:?}", self.arcs, vertices)
    }
}
