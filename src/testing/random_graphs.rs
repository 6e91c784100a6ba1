use crate::Graph;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Connected symmetric graph on `0..n` with about `m` undirected edges.
///
/// A random spanning tree first, then random extra edges; repeats and loops are dropped.
pub fn random_symmetric_graph(n: usize, m: usize, seed: usize) -> Graph<u32> {
    let mut rng = StdRng::seed_from_u64(seed as u64);
    let mut edges = Vec::new();

    for i in 1..n {
        let j = rng.random_range(0..i);
        edges.push((i as u32, j as u32));
    }

    for _ in n.saturating_sub(1)..m {
        let s = rng.random_range(0..n) as u32;
        let t = rng.random_range(0..n) as u32;
        if s != t {
            edges.push((s, t));
        }
    }

    let mut graph = Graph::from_undirected_edges(edges).unwrap();
    graph.add_vertex(0);
    graph
}
