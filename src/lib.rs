// #![warn(missing_docs)]

//! # arborescence_packing
//!
//! Arc-disjoint spanning arborescence decompositions of a directed graph towards a destination
//! vertex: `k` in-trees rooted at the destination, no two sharing an arc.
//!
//! Two ways to get them:
//! - [`adbed::adbed_decomposition`] builds one decomposition constructively, one arborescence
//!   at a time, admitting arcs with Tarjan's connectivity condition,
//! - [`brute_force::brute_force_decomposition`] enumerates every completion of given
//!   arborescence stubs, for small graphs and for checking the constructive result.
//!
//! [`analysis::DecompositionAnalysis`] runs the enumerator over a batch of seeds and classifies
//! the results (c-shared decompositions and plain counts).
//!
//! Based on [`petgraph`](https://docs.rs/petgraph).
//!
//! ## Reference:
//! - R. E. Tarjan, *A good algorithm for edge-disjoint branching*, Information Processing
//!   Letters 3 (1974)

pub mod adbed;
pub mod admission;
pub mod analysis;
pub mod arborescence;
pub mod brute_force;
pub mod config;
pub mod connectivity;
pub mod decomposition;
pub mod error;
pub mod graph;
pub mod types;
pub mod visualize;

#[cfg(test)]
pub(crate) mod testing;

pub use adbed::{adbed_decomposition, adbed_decomposition_with};
pub use arborescence::Arborescence;
pub use brute_force::{brute_force_decomposition, brute_force_decomposition_with};
pub use config::{AdbedConfig, EnumerationConfig, ParityRule, SharingBound, SharingRule};
pub use connectivity::{ConnectivityOracle, PetgraphMaxFlow};
pub use decomposition::Decomposition;
pub use error::{Error, Result};
pub use graph::Graph;
pub use types::Vertex;
