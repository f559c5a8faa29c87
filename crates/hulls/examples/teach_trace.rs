//! Print a teach-mode trace for a small cloud.
//!
//! Usage:
//!   cargo run -p hulls --example teach_trace -- [square|circle|annulus|gaussian|clusters] [n]
//!
//! Prints every Jarvis step, then the Graham steps (capped), then both hulls.

use hulls::api::{compute_hulls, compute_hulls_with_steps, generate, Distribution, StepKind};

fn main() {
    let mut args = std::env::args().skip(1);
    let dist = Distribution::parse_lenient(&args.next().unwrap_or_default());
    let n: usize = args.next().and_then(|s| s.parse().ok()).unwrap_or(12);

    let pts = generate(n, n as u64, dist);
    let trace = compute_hulls_with_steps(&pts);
    println!("{dist}: {} points", pts.len());

    println!("-- jarvis ({} steps)", trace.jarvis.steps.len());
    for s in &trace.jarvis.steps {
        if let StepKind::Edge { from, to, .. } = s.kind {
            println!("{:>28}  ({:.1},{:.1}) -> ({:.1},{:.1})", s.note, from.x, from.y, to.x, to.y);
        } else {
            println!("{:>28}", s.note);
        }
    }

    println!("-- graham ({} steps, first 40)", trace.graham.steps.len());
    for s in trace.graham.steps.iter().take(40) {
        match s.kind {
            StepKind::Push { point, .. } | StepKind::Pop { point, .. } => {
                println!("{:>28}  ({:.1},{:.1})", s.note, point.x, point.y)
            }
            _ => println!("{:>28}", s.note),
        }
    }

    let pair = compute_hulls(&pts);
    println!(
        "jarvis: {} vertices in {:.3} ms, graham: {} vertices in {:.3} ms, agree: {}",
        pair.jarvis.size,
        pair.jarvis.millis(),
        pair.graham.size,
        pair.graham.millis(),
        pair.comparison().agrees()
    );
}
