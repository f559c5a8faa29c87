//! Tolerance defaults shared by generation, dedup and both hull algorithms.
//!
//! Policy
//! - One fixed epsilon for the whole crate. Tie-breaking in Jarvis and the
//!   dedup grid must agree, so nothing else defines its own threshold.

use std::cmp::Ordering;

use crate::Point;

/// Equality threshold for coordinates and cross products; also the dedup grid width.
pub const EPS: f64 = 1e-9;

/// Three-way compare that treats values closer than `EPS` as equal.
#[inline]
pub fn cmp_eps(a: f64, b: f64) -> Ordering {
    if (a - b).abs() < EPS {
        Ordering::Equal
    } else if a < b {
        Ordering::Less
    } else {
        Ordering::Greater
    }
}

/// Dedup key: the tolerance-grid cell of `p`.
///
/// Each axis is snapped to `round(v / EPS)` and keyed by the bit pattern of the
/// snapped float, so distinct cells never collide even far outside `i64` range.
#[inline]
pub fn grid_key(p: &Point) -> (u64, u64) {
    (snap(p.x).to_bits(), snap(p.y).to_bits())
}

#[inline]
fn snap(v: f64) -> f64 {
    // `+ 0.0` folds -0.0 into 0.0 so both signs of zero share a cell.
    (v / EPS).round() + 0.0
}

/// Total order by x, then y. Used wherever the algorithms sort or pick extremes.
#[inline]
pub fn cmp_xy(a: &Point, b: &Point) -> Ordering {
    a.x.total_cmp(&b.x).then_with(|| a.y.total_cmp(&b.y))
}
