//! Planar convex hulls: seeded point clouds, two hull algorithms, teach traces.
//!
//! Layout
//! - `rng`, `points`: reproducible point clouds (five distributions, grid dedup).
//! - `hull`: Gift Wrapping (Jarvis March) and Monotone Chain, each with a plain
//!   and a traced entry point sharing one implementation.
//! - `metrics`, `analysis`: area/perimeter/convexity, timed runs, size sweeps.
//!
//! API Policy
//! - Every operation is a pure function of its inputs; there is no global state.
//! - Tolerances live in `tolerance` and nowhere else.

pub mod analysis;
pub mod api;
pub mod hull;
pub mod metrics;
pub mod points;
pub mod rng;
pub mod tolerance;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A point in the plane. Serializes as `[x, y]`.
pub type Point = nalgebra::Vector2<f64>;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::analysis::{
        compute_hulls, compute_hulls_with_steps, sweep, HullPair, HullRun, StepPair, StepRun,
        SweepCfg, SweepRow,
    };
    pub use crate::hull::{
        graham_hull, graham_with_steps, jarvis_hull, jarvis_with_steps, Chain, Step, StepKind,
        Traced,
    };
    pub use crate::metrics::{convexity_ratio, perimeter, polygon_area, Bounds, HullComparison};
    pub use crate::points::{dedup, generate, generate_with, Distribution, GenCfg};
    pub use crate::rng::SplitMix64;
    pub use crate::tolerance::EPS;
    pub use crate::Point;
}
