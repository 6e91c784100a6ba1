use crate::arborescence::Arborescence;
use crate::config::SharingRule;
use crate::graph::Graph;
use crate::types::Vertex;
use hashbrown::HashSet;
use std::ops::Deref;

/// Ordered collection of arborescences over the same vertex set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decomposition<V: Vertex> {
    arborescences: Vec<Arborescence<V>>,
}

impl<V: Vertex> Decomposition<V> {
    pub fn new(arborescences: Vec<Arborescence<V>>) -> Self {
        Self { arborescences }
    }

    pub fn into_inner(self) -> Vec<Arborescence<V>> {
        self.arborescences
    }

    /// No arc appears in two members.
    pub fn is_arc_disjoint(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.arc_count());
        self.arborescences
            .iter()
            .flat_map(|a| a.arcs().iter())
            .all(|arc| seen.insert(*arc))
    }

    pub fn is_spanning(&self, graph: &Graph<V>) -> bool {
        self.arborescences.iter().all(|a| a.is_spanning(graph))
    }

    /// Total number of arcs over all members.
    pub fn arc_count(&self) -> usize {
        self.arborescences.iter().map(Arborescence::arc_count).sum()
    }

    /// Number of other members the `i`-th one shares arcs with. Members are told apart by
    /// position, so two identical members do count as sharing.
    pub fn sharing_partners(&self, i: usize, rule: &SharingRule) -> usize {
        let arborescence = &self.arborescences[i];
        self.arborescences
            .iter()
            .enumerate()
            .filter(|&(j, other)| j != i && arborescence.shares_arcs_with(other, rule.count_reverse))
            .count()
    }

    /// Each member shares arcs with at most `max_shared` others (bound interpreted by `rule`).
    pub fn is_c_shared(&self, max_shared: usize, rule: &SharingRule) -> bool {
        (0..self.arborescences.len()).all(|i| rule.admits(self.sharing_partners(i, rule), max_shared))
    }

    /// Identity independent of member order and arc insertion order.
    pub fn canonical_key(&self) -> Vec<Vec<(V, V)>> {
        let mut key: Vec<Vec<(V, V)>> = self
            .arborescences
            .iter()
            .map(|a| {
                let mut arcs = a.arcs().to_vec();
                arcs.sort();
                arcs
            })
            .collect();
        key.sort();
        key
    }
}

impl<V: Vertex> Deref for Decomposition<V> {
    type Target = [Arborescence<V>];

    fn deref(&self) -> &Self::Target {
        &self.arborescences
    }
}

impl<V: Vertex> FromIterator<Arborescence<V>> for Decomposition<V> {
    fn from_iter<I: IntoIterator<Item = Arborescence<V>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
