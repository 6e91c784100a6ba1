use crate::Graph;
use crate::types::Vertex;

/// Symmetric complete graph on the given vertices.
pub fn complete_graph<V: Vertex>(vertices: &[V]) -> Graph<V> {
    let mut edges = Vec::new();
    for (i, &u) in vertices.iter().enumerate() {
        for &v in &vertices[i + 1..] {
            edges.push((u, v));
        }
    }
    let mut graph = Graph::from_undirected_edges(edges).unwrap();
    for &v in vertices {
        graph.add_vertex(v);
    }
    graph
}

/// Symmetric complete bipartite graph between `a` and `b`.
pub fn complete_bipartite_graph<V: Vertex>(a: &[V], b: &[V]) -> Graph<V> {
    Graph::from_undirected_edges(a.iter().flat_map(|&u| b.iter().map(move |&v| (u, v)))).unwrap()
}

/// Triangles `a1 a2 a3` and `b1 b2 b3`, every vertex joined to `d`. Symmetric, 3-connected to `d`.
pub fn joined_cliques() -> Graph<&'static str> {
    let mut edges = vec![
        ("a1", "a2"),
        ("a2", "a3"),
        ("a3", "a1"),
        ("b1", "b2"),
        ("b2", "b3"),
        ("b3", "b1"),
    ];
    for v in ["a1", "a2", "a3", "b1", "b2", "b3"] {
        edges.push(("d", v));
    }
    Graph::from_undirected_edges(edges).unwrap()
}

/// Symmetric hypercube of the given dimension, vertices are bitmasks.
pub fn hypercube(dimension: u32) -> Graph<u32> {
    let mut edges = Vec::new();
    for u in 0..(1u32 << dimension) {
        for bit in 0..dimension {
            let v = u ^ (1 << bit);
            if u < v {
                edges.push((u, v));
            }
        }
    }
    Graph::from_undirected_edges(edges).unwrap()
}

const RIM: [&str; 8] = ["r0", "r1", "r2", "r3", "r4", "r5", "r6", "r7"];

/// Cycle `r0 .. r(n-1)` with hub `d`.
pub fn wheel(n: usize) -> Graph<&'static str> {
    assert!((3..=RIM.len()).contains(&n));
    let mut edges = Vec::new();
    for i in 0..n {
        edges.push((RIM[i], RIM[(i + 1) % n]));
        edges.push(("d", RIM[i]));
    }
    Graph::from_undirected_edges(edges).unwrap()
}

/// Symmetric Petersen graph: outer cycle 0..5, spokes `i -- i + 5`, inner pentagram.
pub fn petersen() -> Graph<u32> {
    let mut edges = Vec::new();
    for i in 0..5 {
        edges.push((i, (i + 1) % 5));
        edges.push((i, i + 5));
        edges.push((5 + i, 5 + (i + 2) % 5));
    }
    Graph::from_undirected_edges(edges).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_sizes() {
        assert_eq!(complete_graph(&["d", "v1", "v2", "v3"]).arc_count(), 12);
        assert_eq!(complete_bipartite_graph(&[1, 2, 3, 4], &[5, 6, 7, 8]).arc_count(), 32);
        assert_eq!(joined_cliques().arc_count(), 24);
        assert_eq!(hypercube(3).arc_count(), 24);
        assert_eq!(wheel(5).arc_count(), 20);
        assert_eq!(petersen().arc_count(), 30);
        assert_eq!(petersen().vertex_count(), 10);
    }
}
