//! Curated flat API under the names callers know from the bindings.
//!
//! `CrossingsTest` maps to `crossings_test`; everything else keeps its name.

pub use crate::containment::{
    crossings_test, on_boundary, points_in_poly, points_in_poly_par, points_in_poly_with,
};
pub use crate::predicates::{cross_product, orient, side_of_line, within_extent, Side};
pub use crate::sample::{
    draw_batch, draw_points_in, draw_star_polygon, BatchSample, BatchSampleCfg, ReplayToken,
};
pub use crate::segments::{
    classify, multi_segment_cross, multi_segment_cross_par, multi_segment_cross_with,
    naive_multi_segment_cross, segment_cross, segment_cross_pts, SegmentRelation,
};
pub use crate::types::{
    points_from_rows, BBox, BatchCfg, CrossingPair, GeomError, IndexSegment, Polygon,
    PolygonSet, Segment, XY,
};

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn square_scenario_through_polygon_type() {
        let sq = Polygon::new(vec![
            vector![0.0, 0.0],
            vector![0.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 0.0],
        ])
        .unwrap();
        assert!(sq.contains((0.5, 0.5)));
        assert!(!sq.contains((2.0, 2.0)));
        assert!(sq.contains((1.0, 1.0)));
        assert_eq!(
            crossings_test(sq.vertices(), (1.0, 1.0)),
            Ok(sq.contains((1.0, 1.0)))
        );
    }

    #[test]
    fn polygon_edges_only_touch_neighbours() {
        // Edges of a simple polygon as an index batch: no crossings reported.
        let verts = draw_star_polygon(16, 1.0, ReplayToken::new(11));
        let n = verts.len();
        let segs: Vec<IndexSegment> = (0..n).map(|k| IndexSegment(k, (k + 1) % n)).collect();
        assert!(multi_segment_cross(&verts, &segs).unwrap().is_empty());
        // a chord may cross edges, but never one it shares a vertex with
        let mut with_chord = segs.clone();
        with_chord.push(IndexSegment(0, n / 2));
        let got = multi_segment_cross(&verts, &with_chord).unwrap();
        assert!(got
            .iter()
            .all(|c| classify(with_chord[c.i], with_chord[c.j]) == SegmentRelation::Independent));
    }
}
