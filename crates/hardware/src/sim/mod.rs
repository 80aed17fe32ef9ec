//! Trace replay for the fusion unit.
//!
//! Provides a small driver that feeds a recorded sequence of decode windows
//! through a configured fusion unit and collects statistics, standing in for
//! the surrounding pipeline in tests and experiments.

pub mod model;

pub use model::{FusionModel, ModelOutput, StepInput};
