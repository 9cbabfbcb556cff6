use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

use planar::containment::points_in_poly_with;
use planar::sample::{draw_batch, BatchSampleCfg, ReplayToken};
use planar::segments::{multi_segment_cross_with, naive_multi_segment_cross};
use planar::{BatchCfg, Polygon};

mod io;
mod provenance;

use provenance::{write_sidecar, Payload};

#[derive(Parser)]
#[command(name = "planar")]
#[command(about = "Segment crossing and point-in-polygon batch runner")]
struct Cmd {
    /// Log core batch timings (debug level)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// All crossing pairs among indexed segments over a vertex pool
    Segments {
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        segments: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Use the parallel path from this many segments on
        #[arg(long)]
        parallel_min: Option<usize>,
    },
    /// Boundary-inclusive containment of query points in one polygon
    Contains {
        #[arg(long)]
        polygon: PathBuf,
        #[arg(long)]
        points: PathBuf,
        #[arg(long)]
        out: PathBuf,
        #[arg(long)]
        parallel_min: Option<usize>,
    },
    /// Random pool + segments; checks the batch path against the reference loop
    Random {
        #[arg(long, default_value_t = 10_000)]
        points: usize,
        #[arg(long, default_value_t = 100)]
        segments: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Debug, Serialize)]
struct SegmentsOut {
    points: usize,
    segments: usize,
    crossings: Vec<(usize, usize)>,
}

#[derive(Serialize)]
struct ContainsOut {
    vertices: usize,
    points: usize,
    inside: Vec<bool>,
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Segments {
            points,
            segments: segs,
            out,
            parallel_min,
        } => {
            let res = segments(&points, &segs, BatchCfg::parallel_from(parallel_min))?;
            write_output(
                &out,
                &res,
                Payload::new(
                    "segments",
                    json!({
                        "points": points.display().to_string(),
                        "segments": segs.display().to_string(),
                        "parallel_min": parallel_min,
                    }),
                ),
            )
        }
        Action::Contains {
            polygon,
            points,
            out,
            parallel_min,
        } => {
            let res = contains(&polygon, &points, BatchCfg::parallel_from(parallel_min))?;
            write_output(
                &out,
                &res,
                Payload::new(
                    "contains",
                    json!({
                        "polygon": polygon.display().to_string(),
                        "points": points.display().to_string(),
                        "parallel_min": parallel_min,
                    }),
                ),
            )
        }
        Action::Random {
            points,
            segments: n_segments,
            seed,
            out,
        } => {
            let res = random(points, n_segments, seed)?;
            write_output(
                &out,
                &res,
                Payload::new(
                    "random",
                    json!({ "points": points, "segments": n_segments, "seed": seed }),
                ),
            )
        }
        Action::Report => report(),
    }
}

fn segments(points: &Path, segs: &Path, cfg: BatchCfg) -> Result<SegmentsOut> {
    let pool = io::load_points(points)?;
    let idx = io::load_segments(segs)?;
    let crossings = multi_segment_cross_with(&pool, &idx, cfg)
        .with_context(|| format!("checking segments from {}", segs.display()))?;
    tracing::info!(
        points = pool.len(),
        segments = idx.len(),
        crossings = crossings.len(),
        "segments"
    );
    Ok(SegmentsOut {
        points: pool.len(),
        segments: idx.len(),
        crossings: crossings.into_iter().map(Into::into).collect(),
    })
}

fn contains(polygon: &Path, points: &Path, cfg: BatchCfg) -> Result<ContainsOut> {
    let poly = Polygon::new(io::load_points(polygon)?)
        .with_context(|| format!("building polygon from {}", polygon.display()))?;
    let pts = io::load_points(points)?;
    let inside = points_in_poly_with(poly.vertices(), &pts, cfg)?;
    tracing::info!(
        vertices = poly.len(),
        points = pts.len(),
        inside = inside.iter().filter(|&&b| b).count(),
        "contains"
    );
    Ok(ContainsOut {
        vertices: poly.len(),
        points: pts.len(),
        inside,
    })
}

fn random(points: usize, n_segments: usize, seed: u64) -> Result<SegmentsOut> {
    let sample = draw_batch(
        BatchSampleCfg {
            points,
            segments: n_segments,
            ..BatchSampleCfg::default()
        },
        ReplayToken::new(seed),
    );
    let crossings: Vec<(usize, usize)> = multi_segment_cross_with(
        &sample.pool,
        &sample.segments,
        BatchCfg::default(),
    )?
    .into_iter()
    .map(Into::into)
    .collect();
    let reference = naive_multi_segment_cross(&sample.pool, &sample.segment_tuples());
    anyhow::ensure!(
        crossings == reference,
        "batch path disagrees with reference loop ({} vs {} crossings)",
        crossings.len(),
        reference.len()
    );
    tracing::info!(points, segments = n_segments, seed, crossings = crossings.len(), "random");
    Ok(SegmentsOut {
        points,
        segments: sample.segments.len(),
        crossings,
    })
}

fn write_output<T: Serialize>(out: &Path, value: &T, payload: Payload) -> Result<()> {
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("creating {}", parent.display()))?;
        }
    }
    std::fs::write(out, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", out.display()))?;
    let prov = write_sidecar(out, payload)?;
    tracing::info!(out = %out.display(), provenance = %prov.display(), "written");
    Ok(())
}

fn report() -> Result<()> {
    let obj = json!({
        "code_rev": provenance::current_git_rev(),
        "planar_version": planar::VERSION,
        "command": "report",
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}
