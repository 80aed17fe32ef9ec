//! Python bindings for the macro-op fusion model.
//!
//! This crate exposes the fusion unit to Python via PyO3. It provides:
//! 1. **Window Records:** `PyDecodeEntry` for building decode windows.
//! 2. **Model:** `PyFusionModel` for per-step evaluation and trace replay.
//! 3. **Statistics:** `PyStats` for counters and selective section printing.
//! 4. **Utilities:** Version string and dict→config conversion helpers.

use pyo3::prelude::*;

/// Python dict to Rust `Config` conversion.
pub mod conversion;
/// Decode-window record binding (`PyDecodeEntry`).
pub mod entry;
/// Fusion model binding (`PyFusionModel`).
pub mod model;
/// Statistics binding (`PyStats`).
pub mod stats;
/// Utility functions (e.g., version).
pub mod utils;

/// Registers all fusion-model classes and functions onto the given Python
/// module.
///
/// Called from the `#[pymodule]` entry point to expose `PyDecodeEntry`,
/// `PyFusionModel`, `PyStats`, and `version`.
///
/// # Arguments
///
/// * `m` - The Python module to register types and functions on.
///
/// # Returns
///
/// `Ok(())` on success, or a `PyErr` if registration fails.
pub fn register_fusion_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<entry::PyDecodeEntry>()?;
    m.add_class::<model::PyFusionModel>()?;
    m.add_class::<stats::PyStats>()?;

    m.add_function(wrap_pyfunction!(utils::version, m)?)?;
    m.add_function(wrap_pyfunction!(utils::init_tracing, m)?)?;

    Ok(())
}

#[pymodule]
fn rvfuse(m: &Bound<'_, PyModule>) -> PyResult<()> {
    register_fusion_module(m)?;
    Ok(())
}
