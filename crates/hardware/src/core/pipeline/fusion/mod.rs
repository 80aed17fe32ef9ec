//! Decode-stage macro-op fusion unit.
//!
//! Detects adjacent producer/consumer pairs in a just-decoded window that
//! match a dependency-and-opcode pattern and merges each into a single
//! combined operation, freeing an issue slot. The unit is organized as:
//! 1. **Matcher:** Pattern and invariant checks over the window.
//! 2. **Fuser:** Construction of the merged record.
//! 3. **Scanners:** Window-level composition: narrow, wide, and the
//!    stall-aware variant that survives downstream backpressure.

/// Merged-record construction.
pub mod fuse;
/// Pattern matching and window arbitration.
pub mod matcher;
/// Combinational 2- and 3-wide scanners.
pub mod scanner;
/// Backpressure-aware scan with the cross-step hold register.
pub mod stall;

pub use fuse::fuse;
pub use matcher::{FusionDecision, FusionKind, FusionPolicy, match_window2, match_window3};
pub use scanner::{FusionOutput, ThreeWideScanner, TwoWideScanner, WideFusionOutput};
pub use stall::{PendingFusion, StallAwareScanner};
