//! Reproducible point clouds.
//!
//! Model
//! - Every cloud is drawn from one `SplitMix64` stream seeded by the caller,
//!   in a fixed draw order, at scale `R = 1e6`.
//! - Distributions are area-uniform where they are uniform at all (circle,
//!   annulus); gaussian shapes use Box–Muller with the first uniform clamped
//!   away from zero.
//! - The result is deduplicated on the tolerance grid (first occurrence wins,
//!   insertion order kept), so hull code never sees two points closer than `EPS`.

use std::collections::HashSet;
use std::convert::Infallible;
use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::rng::SplitMix64;
use crate::tolerance::grid_key;
use crate::Point;

/// Half-width of the sampling window.
pub const SCALE: f64 = 1e6;
/// Annulus inner radius as a fraction of `SCALE`.
const ANNULUS_INNER: f64 = 0.6;
/// Outliers are spread over `[-OUTLIER_SPAN * R, OUTLIER_SPAN * R]²`.
const OUTLIER_SPAN: f64 = 3.0;
/// Box–Muller clamp on the first uniform (avoids `ln 0`).
const GAUSS_FLOOR: f64 = 1e-12;
/// Largest up-front reservation; bigger clouds grow the buffer as they go.
const RESERVE_LIMIT: usize = 1 << 20;

/// Shape of the sampled cloud. Deserializes leniently, like [`Distribution::parse_lenient`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Distribution {
    #[default]
    Square,
    Circle,
    Annulus,
    Gaussian,
    Clusters,
}

impl Distribution {
    pub const ALL: [Distribution; 5] = [
        Distribution::Square,
        Distribution::Circle,
        Distribution::Annulus,
        Distribution::Gaussian,
        Distribution::Clusters,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Distribution::Square => "square",
            Distribution::Circle => "circle",
            Distribution::Annulus => "annulus",
            Distribution::Gaussian => "gaussian",
            Distribution::Clusters => "clusters",
        }
    }

    /// Case-insensitive, whitespace-tolerant lookup; unknown tags become `Square`.
    pub fn parse_lenient(tag: &str) -> Self {
        let tag = tag.trim();
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(tag))
            .unwrap_or_default()
    }
}

impl FromStr for Distribution {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<String> for Distribution {
    fn from(tag: String) -> Self {
        Self::parse_lenient(&tag)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generation request: count, seed, shape and optional far-out noise points.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenCfg {
    pub n: usize,
    pub seed: u64,
    pub dist: Distribution,
    /// Extra points drawn uniformly over a window three times wider than the cloud.
    pub outliers: usize,
}

impl GenCfg {
    /// Seed defaults to the point count.
    pub fn new(n: usize, dist: Distribution) -> Self {
        Self {
            n,
            seed: n as u64,
            dist,
            outliers: 0,
        }
    }

    /// Points drawn before deduplication (saturating).
    pub fn total(&self) -> usize {
        self.n.saturating_add(self.outliers)
    }
}

impl Default for GenCfg {
    fn default() -> Self {
        Self::new(1000, Distribution::Square)
    }
}

/// `n` deduplicated points of shape `dist`, fully determined by `seed`.
pub fn generate(n: usize, seed: u64, dist: Distribution) -> Vec<Point> {
    generate_with(&GenCfg {
        n,
        seed,
        dist,
        outliers: 0,
    })
}

/// Like [`generate`], plus `cfg.outliers` noise points drawn after the main cloud.
pub fn generate_with(cfg: &GenCfg) -> Vec<Point> {
    let mut rng = SplitMix64::new(cfg.seed);
    let mut pts = Vec::with_capacity(cfg.total().min(RESERVE_LIMIT));
    match cfg.dist {
        Distribution::Square => {
            for _ in 0..cfg.n {
                pts.push(uniform_box(&mut rng, SCALE));
            }
        }
        Distribution::Circle => {
            for _ in 0..cfg.n {
                let t = TAU * rng.next_f64();
                let r = rng.next_f64().sqrt() * SCALE;
                pts.push(Point::new(r * t.cos(), r * t.sin()));
            }
        }
        Distribution::Annulus => {
            let r0 = ANNULUS_INNER * SCALE;
            let r1 = SCALE;
            for _ in 0..cfg.n {
                let t = TAU * rng.next_f64();
                let r = (r0 * r0 + (r1 * r1 - r0 * r0) * rng.next_f64()).sqrt();
                pts.push(Point::new(r * t.cos(), r * t.sin()));
            }
        }
        Distribution::Gaussian => {
            let s = SCALE / 3.0;
            for _ in 0..cfg.n {
                let x = gauss(&mut rng) * s;
                let y = gauss(&mut rng) * s;
                pts.push(Point::new(x, y));
            }
        }
        Distribution::Clusters => {
            let centers = [
                Point::new(-0.5 * SCALE, -0.2 * SCALE),
                Point::new(0.6 * SCALE, 0.4 * SCALE),
                Point::new(-0.1 * SCALE, 0.7 * SCALE),
            ];
            let s = SCALE / 12.0;
            for i in 0..cfg.n {
                let c = centers[i % centers.len()];
                let x = c.x + gauss(&mut rng) * s;
                let y = c.y + gauss(&mut rng) * s;
                pts.push(Point::new(x, y));
            }
        }
    }
    for _ in 0..cfg.outliers {
        pts.push(uniform_box(&mut rng, OUTLIER_SPAN * SCALE));
    }
    let out = dedup(&pts);
    tracing::debug!(
        n = cfg.n,
        seed = cfg.seed,
        dist = %cfg.dist,
        kept = out.len(),
        "generated points"
    );
    out
}

/// Keep the first point of every tolerance-grid cell, in input order.
pub fn dedup(points: &[Point]) -> Vec<Point> {
    let mut seen = HashSet::with_capacity(points.len());
    points
        .iter()
        .filter(|p| seen.insert(grid_key(p)))
        .copied()
        .collect()
}

#[inline]
fn uniform_box(rng: &mut SplitMix64, half: f64) -> Point {
    let x = (rng.next_f64() * 2.0 - 1.0) * half;
    let y = (rng.next_f64() * 2.0 - 1.0) * half;
    Point::new(x, y)
}

/// Standard normal via Box–Muller (cosine branch).
#[inline]
fn gauss(rng: &mut SplitMix64) -> f64 {
    let u1 = rng.next_f64().max(GAUSS_FLOOR);
    let u2 = rng.next_f64();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}
