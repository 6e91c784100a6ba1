use crate::connectivity::{ConnectivityOracle, FlowNetwork};
use crate::graph::Graph;
use crate::types::Vertex;
use std::collections::BTreeSet;
use tracing::trace;

/// Decides whether committing `arc` still leaves room for `remaining` further arborescences.
///
/// Reference: R. E. Tarjan, *A good algorithm for edge-disjoint branching* (1974).
///
/// The probe network is `graph` without the `committed` arcs and without `arc` itself, plus
/// `remaining` two-hop paths `u -> h_i -> destination` through fresh auxiliary vertices.
/// The arc `(u, v)` is admitted iff the probe still holds `remaining` arc-disjoint paths from
/// `u` to `v`.
///
/// Dropping `arc` from the probe is not part of Tarjan's formulation; the constructive algorithm
/// relies on it and it is kept on purpose.
///
/// Always admits when `remaining == 0`. An arc with an endpoint (or a destination) missing from
/// `graph` is never admitted otherwise.
pub fn tarjan_condition<V, O>(
    oracle: &O,
    arc: (V, V),
    graph: &Graph<V>,
    committed: &BTreeSet<(V, V)>,
    remaining: usize,
    destination: V,
) -> bool
where
    V: Vertex,
    O: ConnectivityOracle,
{
    if remaining == 0 {
        return true;
    }

    let mut probe = FlowNetwork::from_graph(graph, |a| a != arc && !committed.contains(&a));
    let (Some(u), Some(v), Some(d)) = (
        probe.node(arc.0),
        probe.node(arc.1),
        probe.node(destination),
    ) else {
        return false;
    };

    for _ in 0..remaining {
        let helper = probe.add_auxiliary_vertex();
        probe.add_arc(u, helper);
        probe.add_arc(helper, d);
    }

    let connectivity = oracle.edge_connectivity(&probe.network, u, v);
    trace!(?arc, remaining, connectivity, "admission probe");
    connectivity >= remaining
}
