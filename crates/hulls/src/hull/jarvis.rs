//! Gift Wrapping (Jarvis March).
//!
//! - Wraps counterclockwise from the leftmost point (lowest y on tolerant x ties).
//!   At each vertex the most clockwise candidate wins; exact-collinear candidates
//!   are resolved toward the farthest one, so collinear boundary points are
//!   skipped rather than reported.
//! - Input is deduplicated on the tolerance grid first, like the monotone chain;
//!   a copy of the current vertex would otherwise be taken as its successor.

use std::cmp::Ordering;

use super::trace::{NoTrace, Step, StepKind, StepSink, Trace, Traced};
use super::{cross, dist2};
use crate::points::dedup;
use crate::tolerance::{cmp_eps, cmp_xy, EPS};
use crate::Point;

/// Hull by gift wrapping. Fewer than two distinct points are returned deduplicated.
pub fn jarvis_hull(points: &[Point]) -> Vec<Point> {
    wrap(points, &mut NoTrace)
}

/// [`jarvis_hull`] plus the start vertex, each committed edge and a finish marker.
pub fn jarvis_with_steps(points: &[Point]) -> Traced {
    let mut trace = Trace::new();
    let hull = wrap(points, &mut trace);
    Traced {
        hull,
        steps: trace.into_steps(),
    }
}

fn wrap<S: StepSink>(points: &[Point], sink: &mut S) -> Vec<Point> {
    let distinct = dedup(points);
    let points = distinct.as_slice();
    let n = points.len();
    if n == 0 {
        sink.record(|| Step::new(StepKind::Finish { hull_size: 0 }, "No points"));
        return Vec::new();
    }
    let left = leftmost(points);
    sink.record(|| {
        Step::new(
            StepKind::Start { at: points[left] },
            "Start at leftmost (tie: lowest y)",
        )
    });
    if n == 1 {
        sink.record(|| Step::new(StepKind::Finish { hull_size: 1 }, "Single point"));
        return distinct;
    }

    let mut hull = Vec::new();
    let mut p = left;
    loop {
        hull.push(points[p]);
        let q = most_clockwise(points, p);
        let index = hull.len() - 1;
        sink.record(|| {
            Step::new(
                StepKind::Edge {
                    from: points[p],
                    to: points[q],
                    index,
                },
                format!("Select edge {index}"),
            )
        });
        p = q;
        // A walk can visit each input point at most once.
        if p == left || hull.len() >= n {
            break;
        }
    }

    if hull.len() > 2 {
        let size = hull.len();
        sink.record(|| {
            Step::new(
                StepKind::Finish { hull_size: size },
                "Wrapped back to the start vertex",
            )
        });
        return hull;
    }
    let (lo, hi) = extremes(points);
    sink.record(|| {
        Step::new(
            StepKind::Finish { hull_size: 2 },
            "All points collinear: keep the two extremes",
        )
    });
    vec![lo, hi]
}

/// Index of the leftmost point; x ties (within `EPS`) go to the lower y.
fn leftmost(points: &[Point]) -> usize {
    let mut left = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let l = &points[left];
        if p.x < l.x || (cmp_eps(p.x, l.x) == Ordering::Equal && p.y < l.y) {
            left = i;
        }
    }
    left
}

/// Next hull vertex after `p`: no input point lies strictly clockwise of `p → q`.
fn most_clockwise(points: &[Point], p: usize) -> usize {
    let n = points.len();
    let from = points[p];
    let mut q = (p + 1) % n;
    for r in 0..n {
        if r == p || r == q {
            continue;
        }
        let c = cross(from, points[q], points[r]);
        if c < -EPS || (c.abs() < EPS && dist2(from, points[r]) > dist2(from, points[q])) {
            q = r;
        }
    }
    q
}

/// Smallest and largest point by (x, y).
fn extremes(points: &[Point]) -> (Point, Point) {
    let mut lo = points[0];
    let mut hi = points[0];
    for p in &points[1..] {
        if cmp_xy(p, &lo) == Ordering::Less {
            lo = *p;
        }
        if cmp_xy(p, &hi) != Ordering::Less {
            hi = *p;
        }
    }
    (lo, hi)
}
