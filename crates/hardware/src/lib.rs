//! Decode-stage macro-op fusion model.
//!
//! This crate implements the decision logic of an instruction-fusion unit in
//! a processor front end, as used by cycle-stepped pipeline models:
//! 1. **Core:** Window records, opcode classification, pattern matching, and
//!    merged-record construction.
//! 2. **Scanners:** Narrow (2-wide), wide (3-wide, arbitrating), and the
//!    stall-aware variant that holds a fused record across backpressure.
//! 3. **Configuration:** Pattern enables and window geometry, JSON-loadable.
//! 4. **Simulation:** Window-trace replay driver and fusion statistics.

/// Common types and constants (instruction sizes, traps, config errors).
pub mod common;
/// Model configuration (defaults, fusion knobs, JSON entry point).
pub mod config;
/// Core decision logic (window records, signals, fusion unit).
pub mod core;
/// Window-trace replay driver.
pub mod sim;
/// Fusion statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Trace replay driver; owns the configured scanner and statistics.
pub use crate::sim::FusionModel;
/// Run statistics; counters plus aligned report printing.
pub use crate::stats::FusionStats;
