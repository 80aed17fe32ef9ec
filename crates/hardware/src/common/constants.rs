//! Structural constants of the decode window and instruction stream.
//!
//! This module defines the fixed quantities the fusion unit is built around.
//! It includes:
//! 1. **Instruction Sizes:** Byte lengths of compressed and standard encodings.
//! 2. **Window Geometry:** Input window widths and the fixed output width.
//! 3. **Register Bounds:** Size of the architectural register file.

/// Size of a compressed (16-bit) instruction in bytes.
///
/// A PC-relative immediate produced by a compressed instruction is
/// compensated by this amount when the producing instruction folds into
/// its consumer.
pub const INSTRUCTION_SIZE_16: i64 = 2;

/// Size of a standard (32-bit) instruction in bytes.
pub const INSTRUCTION_SIZE_32: i64 = 4;

/// Number of instructions in the narrow scan window.
pub const NARROW_WINDOW: usize = 2;

/// Number of instructions in the wide scan window.
pub const WIDE_WINDOW: usize = 3;

/// Number of output slots every scan presents, regardless of window width.
pub const NUM_OUTPUT_SLOTS: usize = 2;

/// Number of architectural integer registers addressable by `rd`/`rs1`/`rs2`.
pub const NUM_REGISTERS: usize = 32;
