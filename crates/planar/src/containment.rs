//! Point-in-polygon via crossing number (ray casting), boundary-inclusive.
//!
//! Model
//! - Cast a ray from the query point in +x; an edge counts if its endpoints
//!   straddle the query y (one strictly above, the other at or below) and its
//!   interpolated x lies strictly right of the query. Odd count = inside.
//! - Before counting, every edge is checked for exact incidence (zero
//!   `side_of_line` plus coordinate-range containment); any hit is "inside".
//! - A closing duplicate of the first vertex yields a zero-length edge that
//!   neither straddles nor adds a boundary case, so it is harmless here.

use std::time::Instant;

use nalgebra::Vector2;
use rayon::prelude::*;

use crate::predicates::{side_of_line, within_extent};
use crate::types::{BatchCfg, GeomError, XY};

/// Boundary-inclusive containment of a single point.
///
/// Errors with `TooFewVertices` if `poly` has fewer than 3 vertices.
pub fn crossings_test<P: XY>(poly: &[Vector2<f64>], p: P) -> Result<bool, GeomError> {
    check_poly(poly)?;
    Ok(crossings_unchecked(poly, p.x(), p.y()))
}

/// One result per query point, in input order. Extra coordinates are ignored.
pub fn points_in_poly<P: XY + Sync>(
    poly: &[Vector2<f64>],
    points: &[P],
) -> Result<Vec<bool>, GeomError> {
    points_in_poly_with(poly, points, BatchCfg::default())
}

/// Parallel variant of `points_in_poly`.
pub fn points_in_poly_par<P: XY + Sync>(
    poly: &[Vector2<f64>],
    points: &[P],
) -> Result<Vec<bool>, GeomError> {
    points_in_poly_with(poly, points, BatchCfg::parallel())
}

/// `points_in_poly` with explicit batch options (`parallel_min` only).
pub fn points_in_poly_with<P: XY + Sync>(
    poly: &[Vector2<f64>],
    points: &[P],
    cfg: BatchCfg,
) -> Result<Vec<bool>, GeomError> {
    check_poly(poly)?;
    let started = Instant::now();
    let parallel = points.len() >= cfg.parallel_min;
    let out: Vec<bool> = if parallel {
        points
            .par_iter()
            .map(|p| crossings_unchecked(poly, p.x(), p.y()))
            .collect()
    } else {
        points
            .iter()
            .map(|p| crossings_unchecked(poly, p.x(), p.y()))
            .collect()
    };
    tracing::debug!(
        vertices = poly.len(),
        points = points.len(),
        inside = out.iter().filter(|&&b| b).count(),
        parallel,
        elapsed_us = started.elapsed().as_micros() as u64,
        "points_in_poly"
    );
    Ok(out)
}

fn check_poly(poly: &[Vector2<f64>]) -> Result<(), GeomError> {
    let n = match (poly.first(), poly.last()) {
        (Some(f), Some(l)) if poly.len() > 1 && f == l => poly.len() - 1,
        _ => poly.len(),
    };
    if n < 3 {
        return Err(GeomError::TooFewVertices { got: n });
    }
    Ok(())
}

/// Exact incidence of `(tx, ty)` with some edge (vertices included).
pub fn on_boundary(poly: &[Vector2<f64>], tx: f64, ty: f64) -> bool {
    let t = Vector2::new(tx, ty);
    let n = poly.len();
    (0..n).any(|k| {
        let a = poly[k];
        let b = poly[(k + 1) % n];
        side_of_line(a.x, a.y, b.x, b.y, tx, ty) == 0.0 && within_extent(a, b, t)
    })
}

pub(crate) fn crossings_unchecked(poly: &[Vector2<f64>], tx: f64, ty: f64) -> bool {
    if on_boundary(poly, tx, ty) {
        return true;
    }
    let n = poly.len();
    let mut inside = false;
    let mut prev = poly[n - 1];
    for &cur in poly {
        if (prev.y > ty) != (cur.y > ty) {
            // straddles: cur.y != prev.y here
            let x = prev.x + (ty - prev.y) * (cur.x - prev.x) / (cur.y - prev.y);
            if tx < x {
                inside = !inside;
            }
        }
        prev = cur;
    }
    inside
}
