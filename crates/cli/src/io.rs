//! Tabular inputs (CSV or Parquet) read through polars.
//!
//! - Point tables: columns `x`, `y` (any numeric type); a `z` column is ignored.
//! - Segment tables: columns `a`, `b` holding non-negative vertex indices.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use nalgebra::Vector2;
use planar::IndexSegment;
use polars::prelude::*;

fn read_table(path: &Path) -> Result<DataFrame> {
    let lf = match path.extension().and_then(|e| e.to_str()) {
        Some("parquet") => LazyFrame::scan_parquet(path, ScanArgsParquet::default())
            .with_context(|| format!("scanning {}", path.display()))?,
        _ => LazyCsvReader::new(path)
            .with_infer_schema_length(Some(100))
            .finish()
            .with_context(|| format!("scanning {}", path.display()))?,
    };
    let df = lf
        .collect()
        .with_context(|| format!("reading {}", path.display()))?;
    tracing::info!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "table_loaded"
    );
    Ok(df)
}

fn f64_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<f64>> {
    let col = df
        .column(name)
        .with_context(|| format!("{}: missing column `{name}`", path.display()))?
        .cast(&DataType::Float64)?;
    col.f64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.ok_or_else(|| anyhow!("{}: null `{name}` in row {row}", path.display()))
        })
        .collect()
}

fn index_column(df: &DataFrame, name: &str, path: &Path) -> Result<Vec<usize>> {
    let col = df
        .column(name)
        .with_context(|| format!("{}: missing column `{name}`", path.display()))?
        .cast(&DataType::UInt64)?;
    col.u64()?
        .into_iter()
        .enumerate()
        .map(|(row, v)| {
            v.map(|i| i as usize).ok_or_else(|| {
                anyhow!(
                    "{}: `{name}` in row {row} is null or negative",
                    path.display()
                )
            })
        })
        .collect()
}

/// Load `x`,`y` rows as points. Non-finite coordinates are rejected.
pub fn load_points(path: &Path) -> Result<Vec<Vector2<f64>>> {
    let df = read_table(path)?;
    let xs = f64_column(&df, "x", path)?;
    let ys = f64_column(&df, "y", path)?;
    xs.into_iter()
        .zip(ys)
        .enumerate()
        .map(|(row, (x, y))| {
            if x.is_finite() && y.is_finite() {
                Ok(Vector2::new(x, y))
            } else {
                Err(anyhow!("{}: non-finite point in row {row}", path.display()))
            }
        })
        .collect()
}

/// Load `a`,`b` rows as index segments (range is checked by the batch call).
pub fn load_segments(path: &Path) -> Result<Vec<IndexSegment>> {
    let df = read_table(path)?;
    let a = index_column(&df, "a", path)?;
    let b = index_column(&df, "b", path)?;
    Ok(a.into_iter().zip(b).map(|(a, b)| IndexSegment(a, b)).collect())
}
