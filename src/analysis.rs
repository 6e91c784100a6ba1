use crate::brute_force::{Seed, brute_force_decomposition_with, initial_stubs};
use crate::config::{EnumerationConfig, SharingRule};
use crate::decomposition::Decomposition;
use crate::error::Result;
use crate::graph::Graph;
use crate::types::Vertex;
use hashbrown::HashSet;
use tracing::debug;

/// Counts over a finished batch of decompositions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub seeds: usize,
    pub decompositions: usize,
    /// Decompositions that differ as sets of arborescences.
    pub distinct: usize,
    pub arc_disjoint: usize,
}

/// Runs the brute force enumerator over a batch of seeds and inspects the results.
pub struct DecompositionAnalysis<V: Vertex> {
    seeds: Vec<Seed<V>>,
    complete: Vec<Decomposition<V>>,
}

impl<V: Vertex> DecompositionAnalysis<V> {
    pub fn new(seeds: Vec<Seed<V>>) -> Self {
        Self {
            seeds,
            complete: Vec::new(),
        }
    }

    /// Seeds every choice of `connectivity` arcs into `destination`, see [`initial_stubs`].
    pub fn from_graph(graph: &Graph<V>, destination: V, connectivity: usize) -> Result<Self> {
        let seeds = initial_stubs(graph, destination, connectivity)?;
        debug!(seeds = seeds.len(), "distinct starting stub combinations");
        Ok(Self::new(seeds))
    }

    /// Enumerates all completions of every seed, replacing earlier results.
    pub fn brute_force_decompositions(&mut self, config: &EnumerationConfig) -> Result<()> {
        self.complete.clear();
        for (i, (stubs, graph)) in self.seeds.iter().enumerate() {
            debug!(seed = i, remaining_arcs = graph.arc_count(), "enumerating seed");
            let found = brute_force_decomposition_with(stubs.clone(), graph, config)?;
            self.complete.extend(found);
        }
        debug!(decompositions = self.complete.len(), "enumeration finished");
        Ok(())
    }

    pub fn seeds(&self) -> &[Seed<V>] {
        &self.seeds
    }

    pub fn complete_decompositions(&self) -> &[Decomposition<V>] {
        &self.complete
    }

    pub fn count_c_shared(&self, max_shared: usize, rule: &SharingRule) -> usize {
        count_c_shared(&self.complete, max_shared, rule)
    }

    pub fn filter_c_shared(&self, max_shared: usize, rule: &SharingRule) -> Vec<&Decomposition<V>> {
        self.complete
            .iter()
            .filter(|d| d.is_c_shared(max_shared, rule))
            .collect()
    }

    pub fn summary(&self) -> Summary {
        let distinct: HashSet<_> = self.complete.iter().map(Decomposition::canonical_key).collect();
        Summary {
            seeds: self.seeds.len(),
            decompositions: self.complete.len(),
            distinct: distinct.len(),
            arc_disjoint: self.complete.iter().filter(|d| d.is_arc_disjoint()).count(),
        }
    }
}

/// Number of decompositions in `batch` that are c-shared. An empty batch gives 0.
pub fn count_c_shared<V: Vertex>(
    batch: &[Decomposition<V>],
    max_shared: usize,
    rule: &SharingRule,
) -> usize {
    batch
        .iter()
        .filter(|d| d.is_c_shared(max_shared, rule))
        .count()
}
