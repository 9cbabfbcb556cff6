//! Point-in-polygon bindings.

use crate::common::{extract_coords, map_geom_err, point_arg, points_arg, Coords};
use planar::types::points_from_rows;
use pyo3::prelude::*;

#[pyfunction]
#[pyo3(name = "CrossingsTest")]
pub fn crossings_test(poly: &PyAny, point: &PyAny) -> PyResult<bool> {
    let verts = points_arg(poly)?;
    planar::containment::crossings_test(&verts, point_arg(point)?).map_err(map_geom_err)
}

/// `points` is one point `(x, y[, z])` (returns a bool) or a sequence of them
/// (returns a list of bools, same order).
#[pyfunction]
pub fn points_in_poly(py: Python<'_>, poly: &PyAny, points: &PyAny) -> PyResult<PyObject> {
    let verts = points_arg(poly)?;
    match extract_coords(points)? {
        Coords::Many(rows) => {
            let pts = points_from_rows(&rows).map_err(map_geom_err)?;
            let inside = py
                .allow_threads(|| planar::containment::points_in_poly(&verts, &pts))
                .map_err(map_geom_err)?;
            Ok(inside.into_py(py))
        }
        Coords::One(row) => {
            let p = points_from_rows(&[row]).map_err(map_geom_err)?[0];
            let inside = planar::containment::crossings_test(&verts, p).map_err(map_geom_err)?;
            Ok(inside.into_py(py))
        }
    }
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(crossings_test, m)?)?;
    m.add_function(wrap_pyfunction!(points_in_poly, m)?)?;
    Ok(())
}
