pub mod generators;
pub mod graph_enumerator;
pub mod random_graphs;
