use nalgebra::Vector2;

use crate::predicates::{orient, within_extent, Side};
use crate::types::Segment;

/// Do the closed segments `s1` and `s2` share at least one point?
///
/// Proper crossings need strictly opposite sides both ways. A zero side value
/// puts an endpoint on the other segment's line; it then counts only if it
/// also lies within that segment's coordinate range. This covers endpoint
/// contact, T-junctions, collinear overlap and zero-length segments.
pub fn segment_cross(s1: &Segment, s2: &Segment) -> bool {
    segment_cross_pts(s1.a, s1.b, s2.a, s2.b)
}

/// `segment_cross` on raw endpoints.
#[inline]
pub fn segment_cross_pts(
    p1: Vector2<f64>,
    p2: Vector2<f64>,
    q1: Vector2<f64>,
    q2: Vector2<f64>,
) -> bool {
    let d1 = orient(p1, p2, q1);
    let d2 = orient(p1, p2, q2);
    let d3 = orient(q1, q2, p1);
    let d4 = orient(q1, q2, p2);

    if Side::of(d1).opposes(Side::of(d2)) && Side::of(d3).opposes(Side::of(d4)) {
        return true;
    }
    (d1 == 0.0 && within_extent(p1, p2, q1))
        || (d2 == 0.0 && within_extent(p1, p2, q2))
        || (d3 == 0.0 && within_extent(q1, q2, p1))
        || (d4 == 0.0 && within_extent(q1, q2, p2))
}
