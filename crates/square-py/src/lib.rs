//! Python bindings for the square kernel
//!
//! PyO3 extension module `core`. It registers a single callable, `square`,
//! which squares one real number in f32 precision:
//!
//! ```python
//! import core
//! core.square(-5.0)  # 25.0
//! core.square("abc")  # TypeError: must be real number, not str
//! ```

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyTuple;
use square_core::{check_arity, square_boxed, ArgumentError};

/// Raise an `ArgumentError` as the host's argument `TypeError`.
fn type_error(err: ArgumentError) -> PyErr {
    PyTypeError::new_err(err.to_string())
}

/// Square function
#[pyfunction]
#[pyo3(signature = (*args))]
fn square(args: &PyTuple) -> PyResult<f64> {
    check_arity(args.len()).map_err(type_error)?;
    // f64 extraction goes through PyFloat_AsDouble, so conversion errors
    // reach the caller exactly as the interpreter raised them.
    let value: f64 = args.get_item(0)?.extract()?;
    Ok(square_boxed(value))
}

/// Square extension module
#[pymodule]
#[pyo3(name = "core")]
fn core_module(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(square, m)?)?;

    tracing::debug!(module = m.name()?, "registered extension module");
    Ok(())
}
