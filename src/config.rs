//! Tunables for the decomposition algorithms.
//!
//! All of them are plain values with a `Default`; nothing is read from files or the environment.

/// Which arcs a round of the constructive algorithm withholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ParityRule {
    /// Odd rounds (but the last) withhold the even pool, even rounds withhold the odd pool.
    #[default]
    Alternating,
    /// Every round sees all uncommitted arcs. Pools still steer the search order.
    Disabled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdbedConfig {
    pub parity: ParityRule,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumerationConfig {
    /// Explore sibling branches on the rayon thread pool.
    pub parallel: bool,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// How the number of sharing partners is compared with `c`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SharingBound {
    /// `shared <= c` passes.
    #[default]
    Inclusive,
    /// `shared < c` passes.
    Strict,
}

/// What counts as two arborescences sharing arcs in the c-shared predicate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SharingRule {
    /// Also count an arc whose reverse appears in the other arborescence.
    pub count_reverse: bool,
    pub bound: SharingBound,
}

impl Default for SharingRule {
    fn default() -> Self {
        Self {
            count_reverse: true,
            bound: SharingBound::Inclusive,
        }
    }
}

impl SharingRule {
    pub fn admits(&self, shared: usize, max_shared: usize) -> bool {
        match self.bound {
            SharingBound::Inclusive => shared <= max_shared,
            SharingBound::Strict => shared < max_shared,
        }
    }
}
