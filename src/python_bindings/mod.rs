//! Python bindings for windowed entropy.
//!
//! Functions accept `bytes` or `str`. A `str` is measured over its UTF-8
//! encoding; one holding lone surrogates cannot be encoded and raises
//! `ValueError` instead of being silently replaced.

use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::{PyBytes, PyString};

use crate::api;
use crate::input::Input;

/// Register all Python bindings with the module.
pub fn register_python_bindings(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(shannon_entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(sliding_window_entropy_py, m)?)?;
    m.add_function(wrap_pyfunction!(sliding_window_entropy_with_positions_py, m)?)?;
    m.add_function(wrap_pyfunction!(compute_entropy_range_py, m)?)?;
    m.add_function(wrap_pyfunction!(init_logging_py, m)?)?;
    Ok(())
}

/// Resolves a Python `bytes`/`str` argument into tagged input and runs `f`.
fn with_input<R>(
    data: &Bound<'_, PyAny>,
    f: impl FnOnce(Input<'_>) -> crate::Result<R>,
) -> PyResult<R> {
    if let Ok(bytes) = data.downcast::<PyBytes>() {
        return Ok(f(Input::Binary(bytes.as_bytes()))?);
    }

    if let Ok(text) = data.downcast::<PyString>() {
        if let Ok(s) = text.to_str() {
            return Ok(f(Input::Text(s))?);
        }
        // Not valid UTF-8 (lone surrogates): hand the raw code units over so
        // the normalizer reports where encoding fails.
        let encoded = text.call_method1("encode", ("utf-16-le", "surrogatepass"))?;
        let raw = encoded.downcast::<PyBytes>()?.as_bytes();
        let units: Vec<u16> = raw
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        return Ok(f(Input::Utf16(&units))?);
    }

    Err(PyTypeError::new_err("expected bytes or str"))
}

/// Whole-input Shannon entropy in bits.
#[pyfunction]
#[pyo3(name = "shannon_entropy")]
fn shannon_entropy_py(data: &Bound<'_, PyAny>) -> PyResult<f64> {
    with_input(data, |input| api::shannon_entropy(input))
}

/// Entropy of every window, in start order.
#[pyfunction]
#[pyo3(name = "sliding_window_entropy")]
fn sliding_window_entropy_py(data: &Bound<'_, PyAny>, window_size: i64) -> PyResult<Vec<f64>> {
    with_input(data, |input| api::sliding_window_entropy(input, window_size))
}

/// Entropy of every window as `(start, entropy)` tuples.
#[pyfunction]
#[pyo3(name = "sliding_window_entropy_with_positions")]
fn sliding_window_entropy_with_positions_py(
    data: &Bound<'_, PyAny>,
    window_size: i64,
) -> PyResult<Vec<(usize, f64)>> {
    let results = with_input(data, |input| {
        api::sliding_window_entropy_with_positions(input, window_size)
    })?;
    Ok(results.into_iter().map(|r| (r.start, r.entropy)).collect())
}

/// `(min, max)` window entropy.
#[pyfunction]
#[pyo3(name = "compute_entropy_range")]
fn compute_entropy_range_py(data: &Bound<'_, PyAny>, window_size: i64) -> PyResult<(f64, f64)> {
    with_input(data, |input| api::entropy_range(input, window_size))
}

/// Install a tracing subscriber, optionally emitting JSON.
#[pyfunction]
#[pyo3(name = "init_logging")]
#[pyo3(signature = (json=false))]
fn init_logging_py(json: bool) -> PyResult<()> {
    if json {
        crate::logging::init_tracing_json();
    } else {
        crate::logging::init_tracing();
    }
    Ok(())
}
