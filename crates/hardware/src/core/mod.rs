//! Core decision logic of the fusion model.
//!
//! Everything under this module is a pure function of the current step's
//! inputs, except the stall-aware scanner's single hold register.

/// Pipeline records, signals, and the fusion unit.
pub mod pipeline;
