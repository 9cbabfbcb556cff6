use std::time::Instant;

use nalgebra::Vector2;
use rayon::prelude::*;

use super::cross::{segment_cross, segment_cross_pts};
use crate::types::{BatchCfg, CrossingPair, GeomError, IndexSegment, Segment};

/// Index-level relation between two segments of one batch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SegmentRelation {
    /// Same undirected pair of vertex indices: always reported.
    Identical,
    /// Exactly one shared vertex index: never reported, never tested.
    Adjacent,
    /// No shared index: decided by `segment_cross`.
    Independent,
}

/// Classify two index segments without looking at coordinates.
#[inline]
pub fn classify(s: IndexSegment, t: IndexSegment) -> SegmentRelation {
    let IndexSegment(s0, s1) = s;
    let IndexSegment(t0, t1) = t;
    if (s0 == t0 && s1 == t1) || (s0 == t1 && s1 == t0) {
        SegmentRelation::Identical
    } else if s0 == t0 || s0 == t1 || s1 == t0 || s1 == t1 {
        SegmentRelation::Adjacent
    } else {
        SegmentRelation::Independent
    }
}

/// All crossing pairs `(i, j)`, `i < j`, ordered by `i` then `j`.
///
/// Equivalent to `multi_segment_cross_with(pool, segments, BatchCfg::default())`.
pub fn multi_segment_cross<S>(
    pool: &[Vector2<f64>],
    segments: &[S],
) -> Result<Vec<CrossingPair>, GeomError>
where
    S: Copy + Into<IndexSegment>,
{
    multi_segment_cross_with(pool, segments, BatchCfg::default())
}

/// Parallel variant; same output as the serial path.
pub fn multi_segment_cross_par<S>(
    pool: &[Vector2<f64>],
    segments: &[S],
) -> Result<Vec<CrossingPair>, GeomError>
where
    S: Copy + Into<IndexSegment>,
{
    multi_segment_cross_with(pool, segments, BatchCfg::parallel())
}

/// Batch crossing detection with explicit options.
///
/// Every independent pair goes through `segment_cross`; there is no
/// bounding-box shortcut, since rounded orientation signs can report a
/// crossing for near-collinear segments whose boxes are disjoint.
///
/// All indices are validated before any pair is examined, so the call either
/// returns the full list or an `IndexOutOfRange` error.
pub fn multi_segment_cross_with<S>(
    pool: &[Vector2<f64>],
    segments: &[S],
    cfg: BatchCfg,
) -> Result<Vec<CrossingPair>, GeomError>
where
    S: Copy + Into<IndexSegment>,
{
    let started = Instant::now();
    let idx: Vec<IndexSegment> = segments.iter().map(|&s| s.into()).collect();
    let resolved = resolve_all(pool, &idx)?;
    let batch = Batch {
        idx: &idx,
        resolved: &resolved,
    };

    let parallel = idx.len() >= cfg.parallel_min;
    let out = if parallel {
        (0..idx.len())
            .into_par_iter()
            .map(|i| batch.row(i))
            .collect::<Vec<_>>()
            .concat()
    } else {
        let mut out = Vec::new();
        for i in 0..idx.len() {
            batch.row_into(i, &mut out);
        }
        out
    };

    tracing::debug!(
        segments = idx.len(),
        crossings = out.len(),
        parallel,
        elapsed_us = started.elapsed().as_micros() as u64,
        "multi_segment_cross"
    );
    Ok(out)
}

fn resolve_all(pool: &[Vector2<f64>], idx: &[IndexSegment]) -> Result<Vec<Segment>, GeomError> {
    idx.iter()
        .enumerate()
        .map(|(k, s)| {
            s.resolve(pool).ok_or_else(|| GeomError::IndexOutOfRange {
                segment: k,
                index: if s.0 >= pool.len() { s.0 } else { s.1 },
                len: pool.len(),
            })
        })
        .collect()
}

/// Borrowed, validated view of one batch call.
struct Batch<'a> {
    idx: &'a [IndexSegment],
    resolved: &'a [Segment],
}

impl Batch<'_> {
    #[inline]
    fn crosses(&self, i: usize, j: usize) -> bool {
        match classify(self.idx[i], self.idx[j]) {
            SegmentRelation::Identical => true,
            SegmentRelation::Adjacent => false,
            SegmentRelation::Independent => segment_cross(&self.resolved[i], &self.resolved[j]),
        }
    }

    fn row_into(&self, i: usize, out: &mut Vec<CrossingPair>) {
        for j in (i + 1)..self.idx.len() {
            if self.crosses(i, j) {
                out.push(CrossingPair { i, j });
            }
        }
    }

    fn row(&self, i: usize) -> Vec<CrossingPair> {
        let mut out = Vec::new();
        self.row_into(i, &mut out);
        out
    }
}

/// Reference pair loop with the endpoint policy written inline.
///
/// # Panics
/// If any index is out of range for `pool`.
pub fn naive_multi_segment_cross(
    pool: &[Vector2<f64>],
    segments: &[(usize, usize)],
) -> Vec<(usize, usize)> {
    let mut crosses = Vec::new();
    for i in 0..segments.len() {
        let (p11, p12) = segments[i];
        for j in (i + 1)..segments.len() {
            let (p21, p22) = segments[j];
            if (p11 == p21 && p12 == p22) || (p11 == p22 && p12 == p21) {
                crosses.push((i, j));
                continue;
            }
            if p11 == p21 || p11 == p22 || p12 == p21 || p12 == p22 {
                continue;
            }
            if segment_cross_pts(pool[p11], pool[p12], pool[p21], pool[p22]) {
                crosses.push((i, j));
            }
        }
    }
    crosses
}
