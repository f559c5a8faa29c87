use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use hulls::api::{
    compute_hulls, compute_hulls_with_steps, convexity_ratio, generate_with, seed_or_count, sweep,
    Bounds, Distribution, GenCfg, HullRun, Point, SweepCfg,
};
use serde::Serialize;
use serde_json::json;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod provenance;

/// Upper bound on generated points for `generate` and `report`.
const MAX_POINTS: usize = 1_000_000;
/// Upper bound on points for teach traces (steps grow with n).
const MAX_STEP_POINTS: usize = 200_000;

#[derive(Parser)]
#[command(name = "hulls-cli")]
#[command(about = "Convex hulls of seeded point clouds: Jarvis March vs Monotone Chain")]
struct Cmd {
    #[command(subcommand)]
    action: Action,
}

#[derive(Args, Clone, Debug)]
struct Cloud {
    /// Point count (clamped to the command's bound, at least 1)
    #[arg(short, long, default_value_t = 1000)]
    n: usize,
    /// Integer seed; missing or non-numeric falls back to the point count
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,
    /// square | circle | annulus | gaussian | clusters (anything else: square)
    #[arg(long, default_value = "square")]
    dist: Distribution,
}

impl Cloud {
    /// Clamp `n` to `[1, max]` and resolve the seed.
    fn resolve(&self, max: usize) -> (usize, i64) {
        let n = self.n.clamp(1, max);
        let seed = parse_seed(self.seed.as_deref()).unwrap_or(n as i64);
        (n, seed)
    }
}

#[derive(Subcommand)]
enum Action {
    /// Read N from stdin, print both hulls as (x,y) tuples
    Hull {
        #[arg(long, default_value = "square")]
        dist: Distribution,
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<String>,
    },
    /// Generate a deterministic point cloud as JSON
    Generate {
        #[command(flatten)]
        cloud: Cloud,
        /// Extra uniform noise points over a 3x wider window (at most 1e6)
        #[arg(long, default_value_t = 0)]
        outliers: usize,
        /// Write to this file (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Teach-mode traces of both algorithms as JSON
    Steps {
        #[command(flatten)]
        cloud: Cloud,
        /// Keep at most this many steps per algorithm
        #[arg(long, default_value_t = 600)]
        cap: usize,
    },
    /// Timing sweep over growing point counts
    Analyze {
        #[arg(long, default_value_t = 1000)]
        min: usize,
        #[arg(long, default_value_t = 100_000)]
        max: usize,
        #[arg(long, default_value_t = 2.0)]
        mult: f64,
        /// Base seed; row n uses seed + n (defaults to --min)
        #[arg(long, allow_hyphen_values = true)]
        seed: Option<String>,
        #[arg(long, default_value = "square")]
        dist: Distribution,
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Sizes, timings, areas, perimeters and convexity ratio for one cloud
    Report {
        #[command(flatten)]
        cloud: Cloud,
        #[arg(long, default_value_t = 0)]
        outliers: usize,
    },
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull { dist, seed } => hull(dist, seed),
        Action::Generate {
            cloud,
            outliers,
            out,
        } => generate(cloud, outliers, out),
        Action::Steps { cloud, cap } => steps(cloud, cap),
        Action::Analyze {
            min,
            max,
            mult,
            seed,
            dist,
            out,
        } => analyze(min, max, mult, seed, dist, out),
        Action::Report { cloud, outliers } => report(cloud, outliers),
    }
}

fn hull(dist: Distribution, seed: Option<String>) -> Result<()> {
    let stdin = io::stdin();
    let mut count = None;
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        if let Some(v) = leading_int(&line) {
            count = Some(v);
            break;
        }
    }
    let Some(count) = count else {
        bail!("Please provide an integer N on stdin");
    };
    let seed = parse_seed(seed.as_deref()).unwrap_or(count);
    let n = stdin_count(count);
    tracing::info!(n, seed, dist = %dist, "hull");

    let cfg = GenCfg {
        n,
        seed: seed_or_count(Some(seed), n),
        dist,
        outliers: 0,
    };
    let pts = generate_with(&cfg);
    let pair = compute_hulls(&pts);
    let mut out = io::stdout().lock();
    writeln!(out, "Jarvis: {} {}", pair.jarvis.size, tuples(&pair.jarvis.points))?;
    writeln!(out, "Graham: {} {}", pair.graham.size, tuples(&pair.graham.points))?;
    Ok(())
}

#[derive(Serialize)]
struct Generated<'a> {
    points: &'a [Point],
    n: usize,
    seed: i64,
    dist: Distribution,
}

fn generate(cloud: Cloud, outliers: usize, out: Option<PathBuf>) -> Result<()> {
    let (n, seed) = cloud.resolve(MAX_POINTS);
    let outliers = noise_count(outliers);
    tracing::info!(n, seed, dist = %cloud.dist, outliers, "generate");
    let cfg = GenCfg {
        n,
        seed: seed_or_count(Some(seed), n),
        dist: cloud.dist,
        outliers,
    };
    let pts = generate_with(&cfg);
    let body = serde_json::to_vec(&Generated {
        points: &pts,
        n,
        seed,
        dist: cloud.dist,
    })?;
    let params = json!({ "n": n, "seed": seed, "dist": cloud.dist, "outliers": outliers });
    emit("generate", &body, params, out.as_deref())
}

fn steps(cloud: Cloud, cap: usize) -> Result<()> {
    let (n, seed) = cloud.resolve(MAX_STEP_POINTS);
    tracing::info!(n, seed, dist = %cloud.dist, cap, "steps");
    let pts = generate_with(&GenCfg {
        n,
        seed: seed_or_count(Some(seed), n),
        dist: cloud.dist,
        outliers: 0,
    });
    let trace = compute_hulls_with_steps(&pts).truncated(cap);
    println!("{}", serde_json::to_string(&trace)?);
    Ok(())
}

fn analyze(
    min: usize,
    max: usize,
    mult: f64,
    seed: Option<String>,
    dist: Distribution,
    out: Option<PathBuf>,
) -> Result<()> {
    let seed_base = parse_seed(seed.as_deref()).unwrap_or(min as i64);
    let cfg = SweepCfg {
        min,
        max,
        mult,
        seed_base: seed_base as u64,
        dist,
    };
    tracing::info!(min, max, mult, seed_base, dist = %dist, "analyze");
    let rows = sweep(&cfg);
    for r in &rows {
        tracing::info!(n = r.n, jarvis_ms = r.jarvis_ms, graham_ms = r.graham_ms, "row");
    }
    let body = serde_json::to_vec(&rows)?;
    let params = json!({ "min": min, "max": max, "mult": mult, "seed": seed_base, "dist": dist });
    emit("analyze", &body, params, out.as_deref())
}

#[derive(Serialize)]
struct RunSummary {
    size: usize,
    ms: f64,
    area: f64,
    perimeter: f64,
}

impl RunSummary {
    fn of(run: &HullRun, area: f64, perimeter: f64) -> Self {
        Self {
            size: run.size,
            ms: run.millis(),
            area,
            perimeter,
        }
    }
}

fn report(cloud: Cloud, outliers: usize) -> Result<()> {
    let (n, seed) = cloud.resolve(MAX_POINTS);
    let outliers = noise_count(outliers);
    tracing::info!(n, seed, dist = %cloud.dist, outliers, "report");
    let pts = generate_with(&GenCfg {
        n,
        seed: seed_or_count(Some(seed), n),
        dist: cloud.dist,
        outliers,
    });
    let pair = compute_hulls(&pts);
    let cmp = pair.comparison();
    let bbox_area = Bounds::of(&pts).map(|b| b.area()).unwrap_or(0.0);
    let ratio = convexity_ratio(&pts, &pair.jarvis.points)
        .max(convexity_ratio(&pts, &pair.graham.points));
    if !cmp.agrees() {
        tracing::warn!(
            jarvis = cmp.jarvis_size,
            graham = cmp.graham_size,
            "hulls differ"
        );
    }
    let doc = json!({
        "n": n,
        "seed": seed,
        "dist": cloud.dist,
        "total_points": pts.len(),
        "jarvis": RunSummary::of(&pair.jarvis, cmp.jarvis_area, cmp.jarvis_perimeter),
        "graham": RunSummary::of(&pair.graham, cmp.graham_area, cmp.graham_perimeter),
        "bbox_area": bbox_area,
        "convexity_ratio": ratio,
        "agrees": cmp.agrees(),
    });
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}

/// Print `body` to stdout, or write it to `out` with a provenance sidecar.
fn emit(
    command: &'static str,
    body: &[u8],
    params: serde_json::Value,
    out: Option<&Path>,
) -> Result<()> {
    match out {
        Some(path) => {
            provenance::write_with_sidecar(path, body, provenance::Payload::new(command, params))?;
            tracing::info!(out = %path.display(), "wrote");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(body)?;
            writeln!(stdout)?;
        }
    }
    Ok(())
}

/// Leading integer of a trimmed line (`"42 points"` → 42); `None` if it starts otherwise.
fn leading_int(line: &str) -> Option<i64> {
    let s = line.trim_start();
    let digits_from = usize::from(s.starts_with(['-', '+']));
    let end = s[digits_from..]
        .find(|c: char| !c.is_ascii_digit())
        .map_or(s.len(), |i| i + digits_from);
    if end == digits_from {
        return None;
    }
    s[..end].parse().ok()
}

/// Point count for `hull`: negatives give an empty cloud, large values are capped.
fn stdin_count(count: i64) -> usize {
    usize::try_from(count).unwrap_or(0).min(MAX_POINTS)
}

/// Outlier count, capped like the main cloud.
fn noise_count(outliers: usize) -> usize {
    outliers.min(MAX_POINTS)
}

fn parse_seed(raw: Option<&str>) -> Option<i64> {
    let raw = raw?.trim();
    raw.parse::<i64>()
        .ok()
        .or_else(|| raw.parse::<f64>().ok().filter(|v| v.is_finite()).map(|v| v as i64))
}

fn tuples(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("({:.6},{:.6})", p.x, p.y))
        .collect::<Vec<_>>()
        .join(" ")
}
