//! Convex hulls of planar point sets.
//!
//! Purpose
//! - Gift Wrapping (Jarvis March, O(n·h)) and Monotone Chain (O(n log n)).
//! - Both return the hull counterclockwise, starting at the leftmost vertex,
//!   with collinear boundary points dropped. Degenerate input degrades to a
//!   pass-through (n ≤ 1) or to the two extreme points (all collinear).
//!
//! Teach mode
//! - `*_with_steps` run the same code as the plain variants with a recording
//!   sink (see `trace`), so their hulls are identical by construction.

mod graham;
mod jarvis;
mod trace;

pub use graham::{graham_hull, graham_with_steps};
pub use jarvis::{jarvis_hull, jarvis_with_steps};
pub use trace::{Chain, NoTrace, Step, StepKind, StepSink, Trace, Traced};

use crate::Point;

/// Twice the signed area of triangle `(o, a, b)`; positive for a left turn.
#[inline]
pub fn cross(o: Point, a: Point, b: Point) -> f64 {
    (a.x - o.x) * (b.y - o.y) - (a.y - o.y) * (b.x - o.x)
}

#[inline]
pub fn dist2(p: Point, q: Point) -> f64 {
    (p - q).norm_squared()
}
