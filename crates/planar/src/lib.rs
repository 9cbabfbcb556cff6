//! Exact 2D planar predicates: segment crossings and point-in-polygon.
//!
//! Layers (bottom-up)
//! - `predicates`: cross product and side-of-line (orientation) tests.
//! - `segments`: single segment-vs-segment test and the all-pairs batch driver
//!   over a shared vertex pool.
//! - `containment`: crossing-number point-in-polygon, boundary-inclusive.
//!
//! Conventions
//! - Points are `nalgebra::Vector2<f64>` (re-exported as `Vec2`).
//! - Sign tests are exact: no epsilon is applied anywhere in the predicates.
//! - Every entry point is a pure function; batch drivers validate all inputs
//!   before producing output.

pub mod api;
pub mod containment;
pub mod predicates;
pub mod sample;
pub mod segments;
pub mod types;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use nalgebra::Vector2 as Vec2;
pub use types::{
    BBox, BatchCfg, CrossingPair, GeomError, IndexSegment, Polygon, PolygonSet, Segment, XY,
};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::containment::{
        crossings_test, points_in_poly, points_in_poly_par, points_in_poly_with,
    };
    pub use crate::predicates::{cross_product, side_of_line, Side};
    pub use crate::segments::{
        multi_segment_cross, multi_segment_cross_par, multi_segment_cross_with, segment_cross,
        SegmentRelation,
    };
    pub use crate::types::{
        BBox, BatchCfg, CrossingPair, GeomError, IndexSegment, Polygon, PolygonSet, Segment, XY,
    };
    pub use nalgebra::Vector2 as Vec2;
}
