use crate::admission::tarjan_condition;
use crate::arborescence::Arborescence;
use crate::config::{AdbedConfig, ParityRule};
use crate::connectivity::{ConnectivityOracle, PetgraphMaxFlow};
use crate::decomposition::Decomposition;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::{Vertex, reverse_arc};
use hashbrown::HashSet;
use std::collections::BTreeSet;
use tracing::{debug, trace, warn};

/// Builds `connectivity` arc-disjoint spanning arborescences towards `destination`.
///
/// Uses [`PetgraphMaxFlow`] and the default [`AdbedConfig`]. See [`adbed_decomposition_with`].
pub fn adbed_decomposition<V: Vertex>(
    graph: &Graph<V>,
    connectivity: usize,
    destination: V,
) -> Result<Decomposition<V>> {
    adbed_decomposition_with(
        graph,
        connectivity,
        destination,
        &PetgraphMaxFlow,
        AdbedConfig::default(),
    )
}

/// Arc-disjoint branching decomposition, one arborescence after another.
///
/// Each arborescence grows from `destination` outwards along arcs of `graph`; a candidate arc is
/// committed only if [`tarjan_condition`] says the arborescences still to come remain
/// constructible. Arcs are tried at most once per arborescence, in the order of the priority pools
/// and then of all usable arcs (sorted by vertex label).
///
/// The committed arcs point away from the destination; the returned arborescences hold them
/// reversed, so every vertex reaches the destination. For a symmetric graph these are arcs of
/// `graph` again. For an asymmetric graph they need not be: an arborescence may hold `(v, u)`
/// although `graph` only has `(u, v)`.
///
/// Fails with [`Error::Unconstructible`] when no admissible arc is left, which happens when the
/// edge connectivity towards `destination` is below `connectivity` (the caller is expected to
/// check this, see [`crate::connectivity::destination_connectivity`]). The parity heuristic does
/// not backtrack, so unlucky arc orders can fail as well.
pub fn adbed_decomposition_with<V, O>(
    graph: &Graph<V>,
    connectivity: usize,
    destination: V,
    oracle: &O,
    config: AdbedConfig,
) -> Result<Decomposition<V>>
where
    V: Vertex,
    O: ConnectivityOracle,
{
    let mut state = ConstructionState::new(graph, connectivity, destination, oracle, config)?;
    for j in 1..=connectivity {
        state.build_arborescence(j)?;
    }
    state.finish()
}

/// Working sets of one constructive run.
///
/// - `edges_used`: arcs committed to any arborescence so far,
/// - `edges_odd`, `edges_even`: priority pools filled with reversed arcs of committed ones.
pub struct ConstructionState<'a, V: Vertex, O> {
    graph: &'a Graph<V>,
    destination: V,
    connectivity: usize,
    oracle: &'a O,
    config: AdbedConfig,
    pub edges_used: BTreeSet<(V, V)>,
    pub edges_odd: BTreeSet<(V, V)>,
    pub edges_even: BTreeSet<(V, V)>,
    /// Committed arcs per finished arborescence, in growth direction.
    built: Vec<Vec<(V, V)>>,
}

impl<'a, V, O> ConstructionState<'a, V, O>
where
    V: Vertex,
    O: ConnectivityOracle,
{
    pub fn new(
        graph: &'a Graph<V>,
        connectivity: usize,
        destination: V,
        oracle: &'a O,
        config: AdbedConfig,
    ) -> Result<Self> {
        if !graph.has_vertex(destination) {
            return Err(Error::unknown_vertex(destination));
        }

        Ok(Self {
            graph,
            destination,
            connectivity,
            oracle,
            config,
            edges_used: BTreeSet::new(),
            edges_odd: BTreeSet::new(),
            edges_even: BTreeSet::new(),
            built: Vec::with_capacity(connectivity),
        })
    }

    /// Builds arborescence `j` (1-based) and returns its arcs in growth direction.
    ///
    /// `j` must lie in `1..=connectivity`, otherwise [`Error::IndexOutOfRange`] is returned and
    /// the working sets are left untouched.
    pub fn build_arborescence(&mut self, j: usize) -> Result<Vec<(V, V)>> {
        let Some(remaining) = self.connectivity.checked_sub(j).filter(|_| j > 0) else {
            return Err(Error::IndexOutOfRange {
                index: j,
                requested: self.connectivity,
            });
        };
        debug!(j, of = self.connectivity, "constructing arborescence");
        let odd = j % 2 == 1;

        let mut members = HashSet::with_capacity(self.graph.vertex_count());
        members.insert(self.destination);
        let mut arcs = Vec::with_capacity(self.graph.vertex_count().saturating_sub(1));

        let mut edges_usable: BTreeSet<(V, V)> = self
            .graph
            .arcs()
            .filter(|arc| !self.edges_used.contains(arc))
            .collect();

        if self.config.parity == ParityRule::Alternating {
            if odd && j != self.connectivity {
                edges_usable.retain(|arc| !self.edges_even.contains(arc));
            } else if !odd {
                edges_usable.retain(|arc| !self.edges_odd.contains(arc));
            }
        }

        while members.len() != self.graph.vertex_count() {
            let pool = if odd { &self.edges_odd } else { &self.edges_even };
            let candidate = find_incident_arc(&members, pool, &edges_usable)
                .or_else(|| find_incident_arc(&members, &edges_usable, &edges_usable));

            let Some(arc) = candidate else {
                warn!(j, of = self.connectivity, spanned = members.len(), "no admissible arc left");
                return Err(Error::Unconstructible {
                    index: j,
                    requested: self.connectivity,
                });
            };
            edges_usable.remove(&arc);

            if !tarjan_condition(
                self.oracle,
                arc,
                self.graph,
                &self.edges_used,
                remaining,
                self.destination,
            ) {
                trace!(?arc, remaining, "rejected");
                continue;
            }

            members.insert(arc.1);
            arcs.push(arc);
            self.edges_used.insert(arc);

            let (own, opposite) = if odd {
                (&mut self.edges_odd, &mut self.edges_even)
            } else {
                (&mut self.edges_even, &mut self.edges_odd)
            };
            own.remove(&arc);
            let reverse = reverse_arc(arc);
            if !self.edges_used.contains(&reverse) {
                opposite.insert(reverse);
            }
        }

        self.built.push(arcs.clone());
        Ok(arcs)
    }

    /// Reverses the committed arcs of every built arborescence.
    pub fn finish(self) -> Result<Decomposition<V>> {
        let arborescences = self
            .built
            .iter()
            .map(|arcs| {
                Arborescence::from_arcs(self.destination, arcs.iter().map(|&arc| reverse_arc(arc)))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Decomposition::new(arborescences))
    }
}

/// First arc of `pool` that is still usable and leaves the tree: source inside, target outside.
fn find_incident_arc<V: Vertex>(
    members: &HashSet<V>,
    pool: &BTreeSet<(V, V)>,
    usable: &BTreeSet<(V, V)>,
) -> Option<(V, V)> {
    pool.iter()
        .find(|&&(u, v)| members.contains(&u) && !members.contains(&v) && usable.contains(&(u, v)))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::generators::{
        complete_graph, hypercube, joined_cliques, petersen, wheel,
    };

    fn assert_valid<V: Vertex>(graph: &Graph<V>, decomposition: &Decomposition<V>, k: usize) {
        assert_eq!(decomposition.len(), k);
        assert!(decomposition.is_arc_disjoint());
        assert!(decomposition.is_spanning(graph));
        for arborescence in decomposition.iter() {
            assert_eq!(arborescence.arc_count(), graph.vertex_count() - 1);
            assert!(arborescence.arcs().iter().all(|&(u, v)| graph.has_arc(u, v)));
            for v in graph.vertices() {
                let path = arborescence.path_to_destination(v).unwrap();
                assert_eq!(path.last(), Some(&arborescence.destination()));
            }
        }
    }

    fn sorted_arcs<V: Vertex>(arborescence: &Arborescence<V>) -> Vec<(V, V)> {
        let mut arcs = arborescence.arcs().to_vec();
        arcs.sort();
        arcs
    }

    #[test]
    fn test_complete_graph_k4() {
        let graph = complete_graph(&["d", "v1", "v2", "v3"]);
        let decomposition = adbed_decomposition(&graph, 3, "d").unwrap();
        assert_valid(&graph, &decomposition, 3);
        assert_eq!(decomposition.arc_count(), 9);
        assert_eq!(graph.arc_count(), 12);

        assert_eq!(
            sorted_arcs(&decomposition[0]),
            vec![("v1", "d"), ("v2", "v1"), ("v3", "v1")]
        );
        assert_eq!(
            sorted_arcs(&decomposition[1]),
            vec![("v1", "v2"), ("v2", "d"), ("v3", "v2")]
        );
        assert_eq!(
            sorted_arcs(&decomposition[2]),
            vec![("v1", "v3"), ("v2", "v3"), ("v3", "d")]
        );
    }

    #[test]
    fn test_triangle() {
        let graph = complete_graph(&["d", "v1", "v2"]);
        let decomposition = adbed_decomposition(&graph, 2, "d").unwrap();
        assert_valid(&graph, &decomposition, 2);
    }

    #[test]
    fn test_three_connected_graphs() {
        let graph = joined_cliques();
        assert_valid(&graph, &adbed_decomposition(&graph, 3, "d").unwrap(), 3);

        let graph = hypercube(3);
        assert_valid(&graph, &adbed_decomposition(&graph, 3, 0).unwrap(), 3);

        let graph = wheel(5);
        assert_valid(&graph, &adbed_decomposition(&graph, 3, "d").unwrap(), 3);

        let graph = petersen();
        assert_valid(&graph, &adbed_decomposition(&graph, 3, 0).unwrap(), 3);
    }

    #[test]
    fn test_fewer_arborescences_than_connectivity() {
        let graph = complete_graph(&["d", "v1", "v2", "v3"]);
        assert_valid(&graph, &adbed_decomposition(&graph, 1, "d").unwrap(), 1);
        assert_valid(&graph, &adbed_decomposition(&graph, 2, "d").unwrap(), 2);
    }

    #[test]
    fn test_parity_disabled_on_k5() {
        let graph = complete_graph(&["d", "v1", "v2", "v3", "v4"]);
        let config = AdbedConfig {
            parity: ParityRule::Disabled,
        };
        let decomposition = adbed_decomposition_with(&graph, 4, "d", &PetgraphMaxFlow, config).unwrap();
        assert_valid(&graph, &decomposition, 4);
    }

    #[test]
    fn test_insufficient_connectivity() {
        let graph = complete_graph(&["d", "v1"]);
        assert_eq!(
            adbed_decomposition(&graph, 2, "d").unwrap_err(),
            Error::Unconstructible {
                index: 1,
                requested: 2
            }
        );
    }

    #[test]
    fn test_degenerate_inputs() {
        let graph = complete_graph(&["d", "v1", "v2"]);
        assert!(adbed_decomposition(&graph, 0, "d").unwrap().is_empty());
        assert!(matches!(
            adbed_decomposition(&graph, 1, "x"),
            Err(Error::UnknownVertex { .. })
        ));

        let mut lone = Graph::new();
        lone.add_vertex("d");
        let decomposition = adbed_decomposition(&lone, 2, "d").unwrap();
        assert_eq!(decomposition.len(), 2);
        assert_eq!(decomposition.arc_count(), 0);
    }

    #[test]
    fn test_single_round_updates_working_sets() {
        let graph = complete_graph(&["d", "v1", "v2", "v3"]);
        let mut state =
            ConstructionState::new(&graph, 3, "d", &PetgraphMaxFlow, AdbedConfig::default()).unwrap();

        let arcs = state.build_arborescence(1).unwrap();
        assert_eq!(arcs, vec![("d", "v1"), ("v1", "v2"), ("v1", "v3")]);
        assert_eq!(state.edges_used, BTreeSet::from_iter(arcs.iter().copied()));
        assert_eq!(
            state.edges_even,
            BTreeSet::from([("v1", "d"), ("v2", "v1"), ("v3", "v1")])
        );
        assert!(state.edges_odd.is_empty());

        let decomposition = state.finish().unwrap();
        assert_eq!(decomposition.len(), 1);
        assert!(decomposition[0].has_arc("v3", "v1"));
    }

    #[test]
    fn test_asymmetric_graph_yields_reversed_arcs() {
        let graph = Graph::from_arcs([("d", "a"), ("a", "b"), ("b", "d"), ("a", "d")]).unwrap();
        let decomposition = adbed_decomposition(&graph, 1, "d").unwrap();

        let mut arcs = decomposition[0].arcs().to_vec();
        arcs.sort();
        assert_eq!(arcs, vec![("a", "d"), ("b", "a")]);
        assert!(!graph.has_arc("b", "a"));
        assert!(decomposition.is_spanning(&graph));
    }

    #[test]
    fn test_round_index_out_of_range() {
        let graph = complete_graph(&["d", "v1", "v2", "v3"]);
        let mut state =
            ConstructionState::new(&graph, 3, "d", &PetgraphMaxFlow, AdbedConfig::default()).unwrap();

        for j in [0, 4, usize::MAX] {
            assert_eq!(
                state.build_arborescence(j),
                Err(Error::IndexOutOfRange {
                    index: j,
                    requested: 3
                })
            );
        }
        assert!(state.edges_used.is_empty());
        assert!(state.edges_even.is_empty());
        assert!(state.finish().unwrap().is_empty());

        let mut empty =
            ConstructionState::new(&graph, 0, "d", &PetgraphMaxFlow, AdbedConfig::default()).unwrap();
        assert!(matches!(
            empty.build_arborescence(1),
            Err(Error::IndexOutOfRange { .. })
        ));
    }
}
