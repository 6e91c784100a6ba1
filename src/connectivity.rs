use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Vertex;
use fixedbitset::FixedBitSet;
use hashbrown::HashMap;
use petgraph::Direction;
use petgraph::algo::ford_fulkerson;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;

/// Source of s-t edge connectivity for the decomposition algorithms.
///
/// Implementations must be pure: the same network, source and sink always give the same answer.
pub trait ConnectivityOracle {
    /// Maximum number of arc-disjoint directed paths from `s` to `t`. 0 if `t` is unreachable.
    fn edge_connectivity<N, E>(&self, network: &DiGraph<N, E>, s: NodeIndex, t: NodeIndex)
    -> usize;

    /// Arcs of a minimum `s`-`t` cut.
    fn minimum_edge_cut<N, E>(
        &self,
        network: &DiGraph<N, E>,
        s: NodeIndex,
        t: NodeIndex,
    ) -> Vec<EdgeIndex>;
}

/// Max-flow oracle backed by [`petgraph::algo::ford_fulkerson`] on a unit-capacity copy of the
/// network (BFS augmenting paths, i.e. Edmonds-Karp).
#[derive(Clone, Copy, Debug, Default)]
pub struct PetgraphMaxFlow;

impl PetgraphMaxFlow {
    /// Maximum flow value and the flow on every edge, indexed by edge index.
    fn unit_flow<N, E>(network: &DiGraph<N, E>, s: NodeIndex, t: NodeIndex) -> (u32, Vec<u32>) {
        let capacities: DiGraph<(), u32> = network.map(|_, _| (), |_, _| 1);
        ford_fulkerson(&capacities, s, t)
    }
}

impl ConnectivityOracle for PetgraphMaxFlow {
    fn edge_connectivity<N, E>(
        &self,
        network: &DiGraph<N, E>,
        s: NodeIndex,
        t: NodeIndex,
    ) -> usize {
        if !is_valid_pair(network, s, t) {
            return 0;
        }
        let (flow, _) = Self::unit_flow(network, s, t);
        flow as usize
    }

    fn minimum_edge_cut<N, E>(
        &self,
        network: &DiGraph<N, E>,
        s: NodeIndex,
        t: NodeIndex,
    ) -> Vec<EdgeIndex> {
        if !is_valid_pair(network, s, t) {
            return Vec::new();
        }
        let (_, flows) = Self::unit_flow(network, s, t);
        let source_side = residual_reachable(network, &flows, s);

        network
            .edge_references()
            .filter(|e| {
                source_side.contains(e.source().index()) && !source_side.contains(e.target().index())
            })
            .map(|e| e.id())
            .collect()
    }
}

fn is_valid_pair<N, E>(network: &DiGraph<N, E>, s: NodeIndex, t: NodeIndex) -> bool {
    s != t && s.index() < network.node_count() && t.index() < network.node_count()
}

/// Vertices reachable from `s` in the residual network of a unit-capacity flow: forward along
/// unsaturated edges, backward along edges carrying flow.
fn residual_reachable<N, E>(network: &DiGraph<N, E>, flows: &[u32], s: NodeIndex) -> FixedBitSet {
    let mut visited = FixedBitSet::with_capacity(network.node_count());
    let mut stack = vec![s];
    visited.insert(s.index());

    while let Some(u) = stack.pop() {
        let forward = network
            .edges_directed(u, Direction::Outgoing)
            .filter(|e| flows[e.id().index()] == 0)
            .map(|e| e.target());
        let backward = network
            .edges_directed(u, Direction::Incoming)
            .filter(|e| flows[e.id().index()] > 0)
            .map(|e| e.source());
        for v in forward.chain(backward) {
            if !visited.put(v.index()) {
                stack.push(v);
            }
        }
    }

    visited
}

/// Index-based copy of a [`Graph`] handed to a [`ConnectivityOracle`].
///
/// Real vertices carry `Some(label)`, auxiliary vertices added later carry `None`.
#[derive(Debug, Clone)]
pub struct FlowNetwork<V: Vertex> {
    pub network: DiGraph<Option<V>, ()>,
    index: HashMap<V, NodeIndex>,
}

impl<V: Vertex> FlowNetwork<V> {
    /// Copies every vertex of `graph` and the arcs accepted by `keep`.
    pub fn from_graph<F>(graph: &Graph<V>, keep: F) -> Self
    where
        F: Fn((V, V)) -> bool,
    {
        let mut network = DiGraph::with_capacity(graph.vertex_count(), graph.arc_count());
        let mut index = HashMap::with_capacity(graph.vertex_count());
        for v in graph.vertices() {
            index.insert(v, network.add_node(Some(v)));
        }
        for arc in graph.arcs().filter(|&arc| keep(arc)) {
            network.add_edge(index[&arc.0], index[&arc.1], ());
        }
        Self { network, index }
    }

    pub fn node(&self, v: V) -> Option<NodeIndex> {
        self.index.get(&v).copied()
    }

    pub fn add_auxiliary_vertex(&mut self) -> NodeIndex {
        self.network.add_node(None)
    }

    pub fn add_arc(&mut self, u: NodeIndex, v: NodeIndex) -> EdgeIndex {
        self.network.add_edge(u, v, ())
    }
}

/// Smallest `edge_connectivity(v, destination)` over all other vertices `v`.
///
/// This is the largest number of arborescences a caller can ask [`crate::adbed`] for.
/// A graph consisting of the destination alone yields 0.
pub fn destination_connectivity<V, O>(graph: &Graph<V>, destination: V, oracle: &O) -> Result<usize>
where
    V: Vertex,
    O: ConnectivityOracle,
{
    let flow = FlowNetwork::from_graph(graph, |_| true);
    let sink = flow
        .node(destination)
        .ok_or_else(|| Error::unknown_vertex(destination))?;

    Ok(graph
        .vertices()
        .filter(|&v| v != destination)
        .filter_map(|v| flow.node(v))
        .map(|s| oracle.edge_connectivity(&flow.network, s, sink))
        .min()
        .unwrap_or(0))
}
