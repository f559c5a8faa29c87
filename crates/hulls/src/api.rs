//! Curated surface for collaborators (CLI, services, worker wrappers).
//!
//! The three engine operations plus the types needed to drive and read them.
//! Prefer these re-exports over reaching into submodules.

pub use crate::analysis::{
    compute_hulls, compute_hulls_with_steps, sweep, HullPair, HullRun, StepPair, StepRun,
    SweepCfg, SweepRow,
};
pub use crate::hull::{Chain, Step, StepKind};
pub use crate::metrics::{convexity_ratio, Bounds, HullComparison};
pub use crate::points::{generate, generate_with, Distribution, GenCfg};
pub use crate::Point;

/// Seed used when a caller supplies none: the point count.
pub fn seed_or_count(seed: Option<i64>, n: usize) -> u64 {
    seed.map(|s| s as u64).unwrap_or(n as u64)
}
