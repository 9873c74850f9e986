//! ffi.rs
//! Thin wrappers: argument conversion and error mapping only.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyBytes;

use chieru_core::constants::{BANNER, ERROR_SENTINEL, MARKER};

/// Encode a document (banner-prefixed).
#[pyfunction]
fn encode_text(text: &str) -> String {
    chieru_core::encode_text(text)
}

/// Decode a document; raises `ValueError` on the first malformed word.
#[pyfunction]
fn decode_text(text: &str) -> PyResult<String> {
    chieru_core::decode_text(text).map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Decode a document, replacing malformed words with `ERROR_SENTINEL`.
#[pyfunction]
fn decode_text_lossy(text: &str) -> String {
    chieru_core::decode_text_lossy(text)
}

#[pyfunction]
fn encode_word(data: &[u8]) -> String {
    chieru_core::encode_word(data)
}

#[pyfunction]
fn decode_word<'py>(py: Python<'py>, glyphs: &str) -> PyResult<Bound<'py, PyBytes>> {
    let bytes = chieru_core::decode_word(glyphs).map_err(|e| PyValueError::new_err(e.to_string()))?;
    Ok(PyBytes::new_bound(py, &bytes))
}

pub fn register(_py: Python<'_>, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(encode_text, m)?)?;
    m.add_function(wrap_pyfunction!(decode_text, m)?)?;
    m.add_function(wrap_pyfunction!(decode_text_lossy, m)?)?;
    m.add_function(wrap_pyfunction!(encode_word, m)?)?;
    m.add_function(wrap_pyfunction!(decode_word, m)?)?;

    m.add("BANNER", BANNER)?;
    m.add("MARKER", MARKER.to_string())?;
    m.add("ERROR_SENTINEL", ERROR_SENTINEL)?;
    Ok(())
}
