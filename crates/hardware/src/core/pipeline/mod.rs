//! Pipeline-facing data types and the fusion unit.
//!
//! This module holds everything the decode stage hands across the fusion
//! boundary:
//! 1. **Window Records:** The per-slot decoded-instruction entry.
//! 2. **Signals:** Opcode classes, compression tags, and slot selectors.
//! 3. **Fusion Unit:** Matcher, fuser, and the scanner variants.

/// Macro-op fusion unit (matcher, fuser, scanners).
pub mod fusion;
/// Decode-window record definitions.
pub mod latches;
/// Enumerated signal domains (opcode classes, tags, slots).
pub mod signals;
