//! Statistics Python binding.
//!
//! Exposes fusion statistics to Python: getters for step, pattern, and
//! backpressure counters; `print` / `print_sections` for human-readable
//! output; `to_dict` for JSON-serializable export.

use pyo3::prelude::*;
use rvfuse_core::stats::FusionStats;

/// Python-exposed statistics: wraps `FusionStats` for read and print from
/// Python.
#[pyclass]
#[derive(Clone)]
pub struct PyStats {
    /// The wrapped counters.
    pub inner: FusionStats,
}

#[pymethods]
impl PyStats {
    /// Print all stats (full dump).
    fn print(&self) {
        self.inner.print();
    }

    /// Print only the given sections. Options: "summary", "patterns",
    /// "backpressure". Pass an empty list for a full dump.
    fn print_sections(&self, sections: Vec<String>) {
        self.inner.print_sections(&sections);
    }

    #[getter]
    fn steps(&self) -> u64 {
        self.inner.steps
    }
    #[getter]
    fn pass_throughs(&self) -> u64 {
        self.inner.pass_throughs
    }
    #[getter]
    fn fused_add_load(&self) -> u64 {
        self.inner.fused_add_load
    }
    #[getter]
    fn fused_add_add(&self) -> u64 {
        self.inner.fused_add_add
    }
    #[getter]
    fn fused_total(&self) -> u64 {
        self.inner.fused_total()
    }
    #[getter]
    fn slots_freed(&self) -> u64 {
        self.inner.slots_freed()
    }
    #[getter]
    fn stall_holds(&self) -> u64 {
        self.inner.stall_holds
    }
    #[getter]
    fn stall_replays(&self) -> u64 {
        self.inner.stall_replays
    }
    #[getter]
    fn stall_retires(&self) -> u64 {
        self.inner.stall_retires
    }
    #[getter]
    fn stall_overwrites(&self) -> u64 {
        self.inner.stall_overwrites
    }
    #[getter]
    fn resets(&self) -> u64 {
        self.inner.resets
    }

    /// Export all stats as a Python dict (JSON-serializable) for
    /// reproducible experiments.
    fn to_dict(&self, py: Python<'_>) -> PyResult<Py<pyo3::types::PyDict>> {
        let d = pyo3::types::PyDict::new(py);
        let s = &self.inner;
        d.set_item("steps", s.steps)?;
        d.set_item("pass_throughs", s.pass_throughs)?;
        d.set_item("fused_add_load", s.fused_add_load)?;
        d.set_item("fused_add_add", s.fused_add_add)?;
        d.set_item("fused_total", s.fused_total())?;
        d.set_item("slots_freed", s.slots_freed())?;
        d.set_item("stall_holds", s.stall_holds)?;
        d.set_item("stall_replays", s.stall_replays)?;
        d.set_item("stall_retires", s.stall_retires)?;
        d.set_item("stall_overwrites", s.stall_overwrites)?;
        d.set_item("resets", s.resets)?;

        let steps = if s.steps == 0 { 1 } else { s.steps };
        d.set_item("fusion_rate", s.fused_total() as f64 / steps as f64)?;

        Ok(d.into())
    }
}

impl From<FusionStats> for PyStats {
    fn from(inner: FusionStats) -> Self {
        Self { inner }
    }
}
