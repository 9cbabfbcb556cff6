//! Reproducible random inputs for profiling and tests.
//!
//! Model
//! - Vertex pools are uniform in `[0, scale)²`; segments pick both endpoint
//!   indices uniformly (so duplicates, adjacency and zero-length segments all
//!   occur naturally for small pools).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::types::{BBox, IndexSegment};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    pub fn new(seed: u64) -> Self {
        Self { seed, index: 0 }
    }

    /// Same seed, next index.
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64-style mixing, cheap and stable.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Sizes for a random crossing batch.
#[derive(Clone, Copy, Debug)]
pub struct BatchSampleCfg {
    pub points: usize,
    pub segments: usize,
    pub scale: f64,
}

impl Default for BatchSampleCfg {
    fn default() -> Self {
        Self {
            points: 10_000,
            segments: 100,
            scale: 100.0,
        }
    }
}

/// Vertex pool plus index segments into it.
#[derive(Clone, Debug)]
pub struct BatchSample {
    pub pool: Vec<Vector2<f64>>,
    pub segments: Vec<IndexSegment>,
}

impl BatchSample {
    /// Segments as plain tuples (for `naive_multi_segment_cross`).
    pub fn segment_tuples(&self) -> Vec<(usize, usize)> {
        self.segments.iter().map(|s| (s.0, s.1)).collect()
    }
}

/// Draw a random batch. An empty pool yields no segments.
pub fn draw_batch(cfg: BatchSampleCfg, tok: ReplayToken) -> BatchSample {
    let mut rng = tok.to_std_rng();
    let scale = if cfg.scale.is_finite() && cfg.scale > 0.0 {
        cfg.scale
    } else {
        1.0
    };
    let pool: Vec<Vector2<f64>> = (0..cfg.points)
        .map(|_| Vector2::new(rng.gen::<f64>() * scale, rng.gen::<f64>() * scale))
        .collect();
    let segments = if pool.is_empty() {
        Vec::new()
    } else {
        (0..cfg.segments)
            .map(|_| IndexSegment(rng.gen_range(0..pool.len()), rng.gen_range(0..pool.len())))
            .collect()
    };
    BatchSample { pool, segments }
}

/// Uniform query points in `bbox` (empty for a null box).
pub fn draw_points_in(bbox: &BBox, n: usize, tok: ReplayToken) -> Vec<Vector2<f64>> {
    if bbox.is_null() {
        return Vec::new();
    }
    let mut rng = tok.to_std_rng();
    let (w, h) = (bbox.width(), bbox.height());
    (0..n)
        .map(|_| bbox.min + Vector2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h))
        .collect()
}

/// Star-shaped simple polygon: `n` sorted angles with jittered radii in `[0.5, 1.5) * radius`.
pub fn draw_star_polygon(n: usize, radius: f64, tok: ReplayToken) -> Vec<Vector2<f64>> {
    let mut rng = tok.to_std_rng();
    let n = n.max(3);
    let delta = std::f64::consts::TAU / (n as f64);
    (0..n)
        .map(|k| {
            let th = (k as f64 + rng.gen::<f64>() * 0.5) * delta;
            let r = radius * (0.5 + rng.gen::<f64>());
            Vector2::new(th.cos() * r, th.sin() * r)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Polygon;

    #[test]
    fn replay_is_deterministic() {
        let cfg = BatchSampleCfg {
            points: 20,
            segments: 30,
            scale: 10.0,
        };
        let tok = ReplayToken::new(2024);
        let a = draw_batch(cfg, tok);
        let b = draw_batch(cfg, tok);
        assert_eq!(a.pool, b.pool);
        assert_eq!(a.segments, b.segments);
        let c = draw_batch(cfg, tok.next());
        assert_ne!(a.pool, c.pool);
        assert!(a.segments.iter().all(|s| s.0 < 20 && s.1 < 20));
        assert!(a.pool.iter().all(|p| (0.0..10.0).contains(&p.x) && (0.0..10.0).contains(&p.y)));
    }

    #[test]
    fn default_batch_is_profiling_sized() {
        let cfg = BatchSampleCfg::default();
        assert_eq!((cfg.points, cfg.segments, cfg.scale), (10_000, 100, 100.0));
        let sample = draw_batch(cfg, ReplayToken::new(7));
        assert_eq!(sample.pool.len(), 10_000);
        let tuples = sample.segment_tuples();
        assert_eq!(tuples.len(), 100);
        assert!(tuples
            .iter()
            .zip(&sample.segments)
            .all(|(&(a, b), s)| (a, b) == (s.0, s.1)));
    }

    #[test]
    fn empty_pool_has_no_segments() {
        let cfg = BatchSampleCfg {
            points: 0,
            segments: 5,
            scale: 1.0,
        };
        assert!(draw_batch(cfg, ReplayToken::new(1)).segments.is_empty());
    }

    #[test]
    fn star_polygon_is_valid_and_query_points_in_box() {
        let verts = draw_star_polygon(12, 2.0, ReplayToken::new(3));
        let poly = Polygon::new(verts).unwrap();
        assert_eq!(poly.len(), 12);
        assert!(poly.contains((0.0, 0.0)));
        let bb = poly.bbox();
        let pts = draw_points_in(&bb, 50, ReplayToken::new(4));
        assert_eq!(pts.len(), 50);
        assert!(pts.iter().all(|p| bb.point_inside(*p)));
        assert!(draw_points_in(&BBox::null(), 5, ReplayToken::new(4)).is_empty());
    }
}
