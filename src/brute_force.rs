use crate::arborescence::Arborescence;
use crate::config::EnumerationConfig;
use crate::decomposition::Decomposition;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::types::Vertex;
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::trace;

/// Arborescence stubs together with the graph of arcs still available to them.
pub type Seed<V> = (Vec<Arborescence<V>>, Graph<V>);

/// Every way to grow `stubs` into spanning, pairwise arc-disjoint arborescences.
///
/// `graph` must not contain the arcs already committed to the stubs. See
/// [`brute_force_decomposition_with`].
pub fn brute_force_decomposition<V: Vertex>(
    stubs: Vec<Arborescence<V>>,
    graph: &Graph<V>,
) -> Result<Vec<Decomposition<V>>> {
    brute_force_decomposition_with(stubs, graph, &EnumerationConfig::default())
}

/// Exhaustive decomposition search.
///
/// The first stub that does not span `graph` is completed in every possible way
/// ([`complete_arborescence`]); for each completion its arcs are removed from the graph and the
/// search continues with the next incomplete stub. Once all stubs span the graph the stub list is
/// one result.
///
/// An empty result is a valid answer. Exponential in the number of candidate arcs per round, so
/// only meant for small graphs.
pub fn brute_force_decomposition_with<V: Vertex>(
    stubs: Vec<Arborescence<V>>,
    graph: &Graph<V>,
    config: &EnumerationConfig,
) -> Result<Vec<Decomposition<V>>> {
    if stubs.is_empty() {
        return Err(Error::EmptyInput);
    }
    for stub in &stubs {
        if let Some(v) = stub.vertices().find(|&v| !graph.has_vertex(v)) {
            return Err(Error::unknown_vertex(v));
        }
    }

    extend_stubs(stubs, graph.clone(), config)
}

fn extend_stubs<V: Vertex>(
    stubs: Vec<Arborescence<V>>,
    graph: Graph<V>,
    config: &EnumerationConfig,
) -> Result<Vec<Decomposition<V>>> {
    let Some(i) = stubs
        .iter()
        .position(|stub| stub.vertex_count() < graph.vertex_count())
    else {
        return Ok(vec![Decomposition::new(stubs)]);
    };

    let variants = complete_arborescence(&stubs[i], &graph)?;
    trace!(stub = i, variants = variants.len(), "stub completed");

    // every branch owns its graph and stub list
    let branch = |variant: Arborescence<V>| {
        let residual = graph.without_arcs(variant.arcs());
        let mut next = stubs.clone();
        next[i] = variant;
        extend_stubs(next, residual, config)
    };

    let found: Vec<Vec<Decomposition<V>>> = if config.parallel {
        variants.into_par_iter().map(branch).collect::<Result<_>>()?
    } else {
        variants.into_iter().map(branch).collect::<Result<_>>()?
    };

    Ok(found.into_iter().flatten().collect())
}

/// All spanning arborescences of `graph` that extend `stub`.
///
/// Grows the stub in rounds. A round attaches a non-empty set of outside vertices, each through
/// exactly one arc into the stub. Candidate arcs of a round that were not picked are dropped for
/// the rest of this completion: a vertex that could attach now but did not has to attach to a
/// vertex added later. Every completion is therefore produced exactly once.
pub fn complete_arborescence<V: Vertex>(
    stub: &Arborescence<V>,
    graph: &Graph<V>,
) -> Result<Vec<Arborescence<V>>> {
    let n = graph.vertex_count();
    if stub.vertex_count() >= n {
        // fundamental property of trees
        return Ok(if stub.arc_count() + 1 == n {
            vec![stub.clone()]
        } else {
            Vec::new()
        });
    }

    let candidates: Vec<(V, V)> = graph
        .arcs()
        .filter(|&(u, v)| !stub.has_vertex(u) && stub.has_vertex(v))
        .collect();
    if candidates.is_empty() {
        return Ok(Vec::new());
    }
    let residual = graph.without_arcs(&candidates);

    let mut by_source: BTreeMap<V, Vec<(V, V)>> = BTreeMap::new();
    for arc in candidates {
        by_source.entry(arc.0).or_default().push(arc);
    }
    let groups: Vec<Vec<(V, V)>> = by_source.into_values().collect();

    let mut results = Vec::new();
    for round in rounds(&groups) {
        let mut next = stub.clone();
        next.add_arcs(round)?;
        results.extend(complete_arborescence(&next, &residual)?);
    }

    Ok(results)
}

/// Picks at most one arc per group, skipping the empty pick.
fn rounds<V: Copy>(groups: &[Vec<(V, V)>]) -> Vec<Vec<(V, V)>> {
    let mut picks: Vec<Vec<(V, V)>> = vec![Vec::new()];
    for group in groups {
        let mut next = Vec::with_capacity(picks.len() * (group.len() + 1));
        for pick in &picks {
            next.push(pick.clone());
            for &arc in group {
                let mut extended = pick.clone();
                extended.push(arc);
                next.push(extended);
            }
        }
        picks = next;
    }
    picks.retain(|pick| !pick.is_empty());
    picks
}

/// One seed per choice of `connectivity` arcs into `destination`: each chosen arc starts its own
/// stub and is removed from the seed's graph.
pub fn initial_stubs<V: Vertex>(
    graph: &Graph<V>,
    destination: V,
    connectivity: usize,
) -> Result<Vec<Seed<V>>> {
    if !graph.has_vertex(destination) {
        return Err(Error::unknown_vertex(destination));
    }
    if connectivity == 0 {
        return Err(Error::EmptyInput);
    }

    let init_arcs: Vec<(V, V)> = graph
        .neighbors_in(destination)
        .map(|v| (v, destination))
        .collect();

    combinations(&init_arcs, connectivity)
        .into_iter()
        .map(|combination| {
            let stubs = combination
                .iter()
                .map(|&arc| Arborescence::from_arcs(destination, [arc]))
                .collect::<Result<Vec<_>>>()?;
            Ok((stubs, graph.without_arcs(&combination)))
        })
        .collect()
}

fn combinations<T: Copy>(items: &[T], k: usize) -> Vec<Vec<T>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    let mut result = Vec::new();
    for (i, &first) in items.iter().enumerate() {
        for rest in combinations(&items[i + 1..], k - 1) {
            let mut combination = Vec::with_capacity(k);
            combination.push(first);
            combination.extend(rest);
            result.push(combination);
        }
    }
    result
}
