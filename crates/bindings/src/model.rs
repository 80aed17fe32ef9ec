//! Fusion model Python binding.
//!
//! Exposes the trace-replay model to Python: create from a config dict,
//! evaluate single steps or whole traces, reset, and retrieve statistics.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;
use rvfuse_core::config::Config;
use rvfuse_core::core::pipeline::signals::FusionSlot;
use rvfuse_core::sim::{FusionModel, ModelOutput, StepInput};

use crate::conversion::py_dict_to_config;
use crate::entry::PyDecodeEntry;
use crate::stats::PyStats;

/// Python-exposed fusion model: wraps `FusionModel` for stepping and replay
/// from Python.
#[pyclass]
pub struct PyFusionModel {
    /// The wrapped model.
    pub inner: FusionModel,
}

/// Renders one model output as a Python dict.
fn output_to_dict(py: Python<'_>, out: &ModelOutput) -> PyResult<Py<PyDict>> {
    let d = PyDict::new(py);
    let slots: Vec<PyDecodeEntry> = out
        .slots()
        .iter()
        .map(|slot| PyDecodeEntry::from(slot.clone()))
        .collect();
    d.set_item("slots", slots)?;
    match out {
        ModelOutput::Narrow(narrow) => {
            d.set_item("first_valid", narrow.first_valid)?;
        }
        ModelOutput::Wide(wide) => {
            d.set_item("ready", wide.ready)?;
            d.set_item(
                "fused_slot",
                wide.fused_slot.map(|slot| match slot {
                    FusionSlot::Slot0 => 0u8,
                    FusionSlot::Slot1 => 1u8,
                }),
            )?;
        }
    }
    Ok(d.into())
}

#[pymethods]
impl PyFusionModel {
    /// Creates a new fusion model.
    ///
    /// # Arguments
    /// * `py` - Python interpreter token.
    /// * `config_dict` - Optional configuration dict; defaults apply when
    ///   omitted.
    ///
    /// # Errors
    /// Returns a `PyValueError` if the configuration is invalid or names an
    /// unscannable window width.
    #[new]
    #[pyo3(signature = (config_dict=None))]
    fn new(py: Python<'_>, config_dict: Option<&Bound<'_, PyAny>>) -> PyResult<Self> {
        let config = match config_dict {
            Some(dict) => py_dict_to_config(py, dict)?,
            None => Config::default(),
        };
        let inner =
            FusionModel::new(config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(Self { inner })
    }

    /// Evaluates one step.
    ///
    /// # Arguments
    /// * `window` - Decode window records; slots beyond the supplied records
    ///   are presented invalid.
    /// * `ready` - Downstream accept bits per output slot.
    /// * `reset` - Assert the external reset before evaluating this step.
    ///
    /// # Returns
    /// A dict with `slots` plus `first_valid` (narrow unit) or
    /// `ready`/`fused_slot` (wide unit).
    #[pyo3(signature = (window, ready=(true, true), reset=false))]
    fn step(
        &mut self,
        py: Python<'_>,
        window: Vec<PyDecodeEntry>,
        ready: (bool, bool),
        reset: bool,
    ) -> PyResult<Py<PyDict>> {
        let input = StepInput {
            window: window.into_iter().map(|entry| entry.inner).collect(),
            ready: [ready.0, ready.1],
            reset,
        };
        let out = self.inner.step(&input);
        output_to_dict(py, &out)
    }

    /// Replays a trace of `(window, ready, reset)` steps, returning one
    /// output dict per step.
    fn run(
        &mut self,
        py: Python<'_>,
        trace: Vec<(Vec<PyDecodeEntry>, (bool, bool), bool)>,
    ) -> PyResult<Vec<Py<PyDict>>> {
        trace
            .into_iter()
            .map(|(window, ready, reset)| {
                let input = StepInput {
                    window: window.into_iter().map(|entry| entry.inner).collect(),
                    ready: [ready.0, ready.1],
                    reset,
                };
                let out = self.inner.step(&input);
                output_to_dict(py, &out)
            })
            .collect()
    }

    /// Applies the external reset: any held fusion is dropped.
    fn reset(&mut self) {
        self.inner.reset();
    }

    /// Origin PC of the currently held fusion, or None.
    fn held_pc(&self) -> Option<u64> {
        self.inner.held_pc()
    }

    /// Returns a snapshot of the accumulated statistics.
    fn get_stats(&self) -> PyStats {
        PyStats::from(self.inner.stats().clone())
    }
}
