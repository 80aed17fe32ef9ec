//! Utility functions exposed to Python.
//!
//! Provides version and logging helpers for the `rvfuse` module.

use pyo3::prelude::*;

/// Returns the fusion model version string (e.g., for scripting or
/// diagnostics).
///
/// # Returns
///
/// A version string such as `"0.3.1"`.
#[pyfunction]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Installs an env-filtered `tracing` subscriber writing to stderr.
///
/// Call once from Python before stepping a model to see fusion-decision
/// trace events (`RUST_LOG=trace`). Subsequent calls are no-ops.
#[pyfunction]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}
