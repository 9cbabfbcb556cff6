//! Orientation and segment-crossing bindings.

use crate::common::{map_geom_err, points_arg, segment_arg};
use pyo3::prelude::*;

#[pyfunction]
pub fn cross_product(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    planar::predicates::cross_product(x1, y1, x2, y2)
}

#[pyfunction]
#[allow(non_snake_case)]
pub fn side_of_line(x1: f64, y1: f64, x2: f64, y2: f64, Px: f64, Py: f64) -> f64 {
    planar::predicates::side_of_line(x1, y1, x2, y2, Px, Py)
}

/// `S1`, `S2`: two endpoint rows each, `(x, y)` or `(x, y, z)`.
#[pyfunction]
#[allow(non_snake_case)]
pub fn segment_cross(S1: &PyAny, S2: &PyAny) -> PyResult<bool> {
    let (p1, p2) = segment_arg(S1)?;
    let (q1, q2) = segment_arg(S2)?;
    Ok(planar::segments::segment_cross_pts(p1, p2, q1, q2))
}

/// All crossing pairs `(i, j)` among `lines` (index pairs into `points`).
#[pyfunction]
pub fn multi_segment_cross(
    py: Python<'_>,
    points: &PyAny,
    lines: Vec<(usize, usize)>,
) -> PyResult<Vec<(usize, usize)>> {
    let pool = points_arg(points)?;
    let found = py
        .allow_threads(|| planar::segments::multi_segment_cross(&pool, &lines))
        .map_err(map_geom_err)?;
    Ok(found.into_iter().map(Into::into).collect())
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(cross_product, m)?)?;
    m.add_function(wrap_pyfunction!(side_of_line, m)?)?;
    m.add_function(wrap_pyfunction!(segment_cross, m)?)?;
    m.add_function(wrap_pyfunction!(multi_segment_cross, m)?)?;
    Ok(())
}
