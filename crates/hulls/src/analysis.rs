//! Collaborator-facing runs: timed hull pairs, teach traces, and size sweeps.
//!
//! Why this design
//! - Callers (CLI, services, benches) only ever need "both hulls for this input",
//!   "both traces for this input" or "timings across sizes". Each is one call
//!   returning a serializable value; nothing here touches I/O.
//! - Step caps are a payload concern of the caller (`StepPair::truncated`).

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use crate::hull::{graham_hull, graham_with_steps, jarvis_hull, jarvis_with_steps, Step};
use crate::metrics::HullComparison;
use crate::points::{generate, Distribution};
use crate::Point;

/// One algorithm's hull plus its wall-clock time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullRun {
    pub size: usize,
    pub points: Vec<Point>,
    #[serde(rename = "ms", with = "millis")]
    pub elapsed: Duration,
}

impl HullRun {
    fn timed(points: &[Point], algo: fn(&[Point]) -> Vec<Point>) -> Self {
        let t0 = Instant::now();
        let hull = algo(points);
        let elapsed = t0.elapsed();
        Self {
            size: hull.len(),
            points: hull,
            elapsed,
        }
    }

    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HullPair {
    pub jarvis: HullRun,
    pub graham: HullRun,
}

impl HullPair {
    pub fn comparison(&self) -> HullComparison {
        HullComparison::of(&self.jarvis.points, &self.graham.points)
    }
}

/// Both hulls of `points`, each timed separately (Jarvis first).
pub fn compute_hulls(points: &[Point]) -> HullPair {
    let jarvis = HullRun::timed(points, jarvis_hull);
    let graham = HullRun::timed(points, graham_hull);
    tracing::debug!(
        n = points.len(),
        jarvis = jarvis.size,
        graham = graham.size,
        "computed hulls"
    );
    HullPair { jarvis, graham }
}

/// Hull size and full teach trace of one algorithm.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepRun {
    pub hull_size: usize,
    pub steps: Vec<Step>,
}

impl StepRun {
    fn truncated(mut self, cap: usize) -> Self {
        self.steps.truncate(cap);
        self
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StepPair {
    pub jarvis: StepRun,
    pub graham: StepRun,
}

impl StepPair {
    /// Keep at most `cap` steps per algorithm; hull sizes are untouched.
    pub fn truncated(self, cap: usize) -> Self {
        Self {
            jarvis: self.jarvis.truncated(cap),
            graham: self.graham.truncated(cap),
        }
    }
}

/// Both teach traces of `points`, uncapped.
pub fn compute_hulls_with_steps(points: &[Point]) -> StepPair {
    let j = jarvis_with_steps(points);
    let g = graham_with_steps(points);
    StepPair {
        jarvis: StepRun {
            hull_size: j.hull.len(),
            steps: j.steps,
        },
        graham: StepRun {
            hull_size: g.hull.len(),
            steps: g.steps,
        },
    }
}

/// Geometric size sweep: `n = min, ⌊n·mult⌋, …` while `n ≤ max`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepCfg {
    pub min: usize,
    pub max: usize,
    pub mult: f64,
    /// Each row uses seed `seed_base + n`.
    pub seed_base: u64,
    pub dist: Distribution,
}

impl Default for SweepCfg {
    fn default() -> Self {
        Self {
            min: 1000,
            max: 100_000,
            mult: 2.0,
            seed_base: 1000,
            dist: Distribution::Square,
        }
    }
}

impl SweepCfg {
    /// Sizes visited by the sweep. Always advances by at least one.
    pub fn sizes(&self) -> Vec<usize> {
        let mut out = Vec::new();
        let mut n = self.min;
        while n <= self.max {
            out.push(n);
            let grown = (n as f64 * self.mult).floor();
            let grown = if grown.is_finite() && grown > 0.0 {
                grown as usize
            } else {
                0
            };
            n = grown.max(n + 1);
        }
        out
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub n: usize,
    pub jarvis_ms: f64,
    pub graham_ms: f64,
}

/// Time both algorithms on fresh clouds of growing size.
pub fn sweep(cfg: &SweepCfg) -> Vec<SweepRow> {
    cfg.sizes()
        .into_iter()
        .map(|n| {
            let seed = cfg.seed_base.wrapping_add(n as u64);
            let pts = generate(n, seed, cfg.dist);
            let pair = compute_hulls(&pts);
            let row = SweepRow {
                n,
                jarvis_ms: pair.jarvis.millis(),
                graham_ms: pair.graham.millis(),
            };
            tracing::debug!(
                n,
                seed,
                jarvis_ms = row.jarvis_ms,
                graham_ms = row.graham_ms,
                "sweep row"
            );
            row
        })
        .collect()
}

/// `Duration` as fractional milliseconds on the wire.
mod millis {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_f64(d.as_secs_f64() * 1e3)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Duration, D::Error> {
        let ms = f64::deserialize(d)?;
        Ok(Duration::from_secs_f64(ms.max(0.0) / 1e3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::convexity_ratio;

    #[test]
    fn hull_pair_agrees_and_serializes() {
        let pts = generate(2000, 5, Distribution::Annulus);
        let pair = compute_hulls(&pts);
        assert_eq!(pair.jarvis.size, pair.jarvis.points.len());
        assert!(pair.comparison().agrees());
        let v = serde_json::to_value(&pair).unwrap();
        assert!(v["jarvis"]["ms"].is_f64());
        assert_eq!(v["graham"]["size"], pair.graham.size);
        assert_eq!(v["graham"]["points"][0].as_array().unwrap().len(), 2);
    }

    #[test]
    fn step_pair_sizes_match_plain_hulls() {
        let pts = generate(800, 12, Distribution::Clusters);
        let steps = compute_hulls_with_steps(&pts);
        let pair = compute_hulls(&pts);
        assert_eq!(steps.jarvis.hull_size, pair.jarvis.size);
        assert_eq!(steps.graham.hull_size, pair.graham.size);
        assert!(steps.graham.steps.len() >= 2 * pts.len());

        let capped = steps.clone().truncated(600);
        assert_eq!(capped.graham.steps.len(), 600);
        assert_eq!(capped.graham.steps[..], steps.graham.steps[..600]);
        assert_eq!(capped.graham.hull_size, steps.graham.hull_size);
        assert_eq!(capped.jarvis.steps.len(), steps.jarvis.steps.len().min(600));
    }

    #[test]
    fn sweep_sizes_follow_multiplier() {
        let cfg = SweepCfg {
            min: 1000,
            max: 8000,
            mult: 2.0,
            ..SweepCfg::default()
        };
        assert_eq!(cfg.sizes(), vec![1000, 2000, 4000, 8000]);
        // Multipliers at or below one still make progress.
        let slow = SweepCfg {
            min: 5,
            max: 8,
            mult: 0.5,
            ..SweepCfg::default()
        };
        assert_eq!(slow.sizes(), vec![5, 6, 7, 8]);
        let empty = SweepCfg {
            min: 10,
            max: 5,
            ..SweepCfg::default()
        };
        assert!(empty.sizes().is_empty());
    }

    #[test]
    fn sweep_rows_cover_sizes() {
        let cfg = SweepCfg {
            min: 100,
            max: 400,
            mult: 2.0,
            seed_base: 7,
            dist: Distribution::Gaussian,
        };
        let rows = sweep(&cfg);
        let ns: Vec<usize> = rows.iter().map(|r| r.n).collect();
        assert_eq!(ns, vec![100, 200, 400]);
        assert!(rows.iter().all(|r| r.jarvis_ms >= 0.0 && r.graham_ms >= 0.0));
    }

    #[test]
    fn convexity_ratio_separates_shapes() {
        let ratio = |d| {
            let pts = generate(5000, 5000, d);
            let pair = compute_hulls(&pts);
            convexity_ratio(&pts, &pair.graham.points)
        };
        let square = ratio(Distribution::Square);
        let gaussian = ratio(Distribution::Gaussian);
        let clusters = ratio(Distribution::Clusters);
        assert!(square > 0.95, "square {square}");
        assert!(gaussian < 0.85, "gaussian {gaussian}");
        assert!(clusters < 0.85, "clusters {clusters}");
    }
}
