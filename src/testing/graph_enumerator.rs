use crate::Graph;

/// Yields every symmetric graph on vertices `0..n`, one per subset (`mask`) of the undirected pairs.
pub(crate) struct GraphEnumeratorState {
    pub n: usize,
    pub mask: usize,
    pub last_mask: usize,
}

impl GraphEnumeratorState {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            mask: 0,
            last_mask: 1 << (n * (n - 1) / 2),
        }
    }
}

impl Iterator for GraphEnumeratorState {
    type Item = Graph<u32>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.mask == self.last_mask {
            return None;
        }

        let mut graph = Graph::new();
        for i in 0..self.n {
            graph.add_vertex(i as u32);
        }

        let mut check = 0;
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.mask & (1 << check) != 0 {
                    graph.add_arc(i as u32, j as u32).unwrap();
                    graph.add_arc(j as u32, i as u32).unwrap();
                }
                check += 1;
            }
        }

        self.mask = self.mask.wrapping_add(1);
        Some(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerates_all_masks() {
        let graphs: Vec<_> = GraphEnumeratorState::new(3).collect();
        assert_eq!(graphs.len(), 8);
        assert_eq!(graphs[0].arc_count(), 0);
        assert_eq!(graphs[7].arc_count(), 6);
        assert!(graphs.iter().all(|g| g.vertex_count() == 3));
    }
}
