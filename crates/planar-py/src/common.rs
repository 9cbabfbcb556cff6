use nalgebra::Vector2;
use pyo3::exceptions::{PyIndexError, PyValueError};
use pyo3::prelude::*;
use planar::types::points_from_rows;
use planar::GeomError;

/// Coordinates pulled out of a Python argument, before validation.
pub enum Coords {
    /// A flat sequence of numbers: one point.
    One(Vec<f64>),
    /// A sequence of rows: many points.
    Many(Vec<Vec<f64>>),
}

/// Accepts any iterable of numbers or of number iterables: lists, tuples,
/// numpy arrays and their rows all work. Strings fail with `TypeError`.
pub fn extract_coords(obj: &PyAny) -> PyResult<Coords> {
    let items = obj.iter()?.collect::<PyResult<Vec<&PyAny>>>()?;
    if !items.is_empty() {
        if let Ok(one) = items
            .iter()
            .map(|v| v.extract::<f64>())
            .collect::<PyResult<Vec<f64>>>()
        {
            return Ok(Coords::One(one));
        }
    }
    items
        .into_iter()
        .map(row_values)
        .collect::<PyResult<_>>()
        .map(Coords::Many)
}

fn row_values(row: &PyAny) -> PyResult<Vec<f64>> {
    row.iter()?.map(|v| v?.extract::<f64>()).collect()
}

/// Point rows (`N x 2` or `N x 3`) from a Python sequence.
pub fn points_arg(obj: &PyAny) -> PyResult<Vec<Vector2<f64>>> {
    match extract_coords(obj)? {
        Coords::Many(rows) => points_from_rows(&rows).map_err(map_geom_err),
        Coords::One(_) => Err(PyValueError::new_err(
            "expected a sequence of points, got a single point",
        )),
    }
}

/// A single `(x, y[, z])` point.
pub fn point_arg(obj: &PyAny) -> PyResult<Vector2<f64>> {
    match extract_coords(obj)? {
        Coords::One(row) => Ok(points_from_rows(&[row]).map_err(map_geom_err)?[0]),
        Coords::Many(_) => Err(PyValueError::new_err(
            "expected a single point, got a sequence of points",
        )),
    }
}

/// One segment as two endpoint rows.
pub fn segment_arg(obj: &PyAny) -> PyResult<(Vector2<f64>, Vector2<f64>)> {
    match points_arg(obj)?.as_slice() {
        [a, b] => Ok((*a, *b)),
        pts => Err(PyValueError::new_err(format!(
            "a segment needs 2 endpoints, got {}",
            pts.len()
        ))),
    }
}

/// Out-of-range indices become `IndexError`; everything else `ValueError`.
pub fn map_geom_err(err: GeomError) -> PyErr {
    match err {
        GeomError::IndexOutOfRange { .. } => PyIndexError::new_err(err.to_string()),
        GeomError::TooFewVertices { .. }
        | GeomError::NonFinite { .. }
        | GeomError::RowWidth { .. } => PyValueError::new_err(err.to_string()),
    }
}
