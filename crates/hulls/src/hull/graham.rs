//! Andrew's Monotone Chain (Graham-style scan over x-sorted points).
//!
//! Lower chain left→right, upper chain right→left; a point is popped whenever
//! the last three chain points fail to turn left (`cross ≤ 0`), so collinear
//! points never survive on the hull.

use super::cross;
use super::trace::{Chain, NoTrace, Step, StepKind, StepSink, Trace, Traced};
use crate::points::dedup;
use crate::tolerance::cmp_xy;
use crate::Point;

/// Hull by monotone chain. Input is deduplicated on the tolerance grid first.
pub fn graham_hull(points: &[Point]) -> Vec<Point> {
    monotone_chain(points, &mut NoTrace)
}

/// [`graham_hull`] plus every push/pop on both chains and a final concatenation marker.
pub fn graham_with_steps(points: &[Point]) -> Traced {
    let mut trace = Trace::new();
    let hull = monotone_chain(points, &mut trace);
    Traced {
        hull,
        steps: trace.into_steps(),
    }
}

fn monotone_chain<S: StepSink>(points: &[Point], sink: &mut S) -> Vec<Point> {
    let mut ps = dedup(points);
    ps.sort_by(cmp_xy);
    if ps.len() <= 1 {
        let size = ps.len();
        sink.record(|| {
            Step::new(
                StepKind::Finish { hull_size: size },
                "Fewer than two distinct points",
            )
        });
        return ps;
    }

    let mut lower: Vec<Point> = Vec::with_capacity(ps.len());
    for p in &ps {
        push_left_turning(&mut lower, *p, Chain::Lower, sink);
    }
    let mut upper: Vec<Point> = Vec::with_capacity(ps.len());
    for p in ps.iter().rev() {
        push_left_turning(&mut upper, *p, Chain::Upper, sink);
    }

    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    let size = hull.len();
    sink.record(|| {
        Step::new(
            StepKind::Finish { hull_size: size },
            "Concatenate lower + upper (drop duplicate endpoints)",
        )
    });
    hull
}

/// Push `p`, then drop middle points until the chain's tail turns strictly left.
fn push_left_turning<S: StepSink>(chain: &mut Vec<Point>, p: Point, which: Chain, sink: &mut S) {
    sink.record(|| {
        Step::new(
            StepKind::Push { which, point: p },
            format!("Push to {which} chain"),
        )
    });
    chain.push(p);
    while chain.len() >= 3 {
        let k = chain.len();
        if cross(chain[k - 3], chain[k - 2], chain[k - 1]) > 0.0 {
            break;
        }
        let mid = chain.remove(k - 2);
        sink.record(|| {
            Step::new(
                StepKind::Pop { which, point: mid },
                "Right turn or collinear: pop",
            )
        });
    }
}
