//! PyO3 bindings for the `planar` predicates.
//!
//! Notes
//! - Names follow the Python package this replaces (`CrossingsTest` included).
//! - Point arguments take any iterable of 2- or 3-coordinate rows (lists,
//!   tuples, numpy arrays). Non-numeric entries raise `TypeError`; rows of
//!   another width raise `ValueError`.
//! - Batch calls release the GIL while they compute.

use pyo3::prelude::*;

mod common;
mod containment;
mod segments;

#[pymodule]
fn planar_native(_py: Python, m: &PyModule) -> PyResult<()> {
    segments::register(m)?;
    containment::register(m)?;
    m.add("__version__", planar::VERSION)?;
    Ok(())
}
