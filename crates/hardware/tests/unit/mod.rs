//! # Unit Tests
//!
//! Fine-grained tests for the fusion model, organized by module:
//! common types, configuration, the fusion unit itself, and the trace
//! replay driver.

/// Unit tests for shared types (traps, record predicates).
pub mod common;



/// Unit tests for the window-trace replay model and its statistics.
pub mod sim;
