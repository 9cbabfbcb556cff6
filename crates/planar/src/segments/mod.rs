//! Segment intersection: single pair and all-pairs batch over a vertex pool.
//!
//! - `segment_cross`: closed-segment test; touching and collinear overlap count.
//! - `multi_segment_cross`: O(n²) pair loop with an explicit classification
//!   step (`SegmentRelation`) deciding identical / adjacent / independent.
//! - `naive_multi_segment_cross`: straight pair loop kept as a reference for
//!   tests, benches and profiling.
//!
//! Code cross-refs: `predicates::{orient, Side, within_extent}`, `types::BatchCfg`

mod batch;
mod cross;

pub use batch::{
    classify, multi_segment_cross, multi_segment_cross_par, multi_segment_cross_with,
    naive_multi_segment_cross, SegmentRelation,
};
pub use cross::{segment_cross, segment_cross_pts};
