//! Decode-window record carried into the fusion unit.
//!
//! This module defines the per-slot entry type the decoders hand to the
//! fusion unit each step:
//! 1. **Instruction Identity:** PC, class, and register operands.
//! 2. **Operand Shape:** Immediate/PC-relative flags and the wide immediate.
//! 3. **Provenance and Faults:** Compressed-encoding origin, fusion tag, and
//!    any trap already pending on the instruction.

use crate::common::error::Trap;
use crate::core::pipeline::signals::{FusionTag, OpClass};

/// One decoded instruction as presented to the fusion unit.
///
/// Every field defaults to the plain pass-through value, so a record built
/// from `Default` and selectively overridden behaves exactly like an
/// unfusable instruction until proven otherwise.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DecodeEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Instruction class as seen by the pattern table.
    pub op_class: OpClass,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Operand 2 is an immediate rather than a register value.
    pub use_imm: bool,
    /// The operand is PC-relative (AUIPC-style).
    pub use_pc: bool,
    /// The instruction originated from a short (16-bit) encoding.
    pub is_compressed: bool,
    /// Compression provenance when this record is a fusion result.
    pub fusion: FusionTag,
    /// Immediate operand, or PC-relative base, prior to fusion; a fusion
    /// result carries the folded immediate here.
    pub result: i64,
    /// Trap already pending on this instruction, if any.
    pub trap: Option<Trap>,
    /// Validity bit supplied by the upstream fetch stage, independent of the
    /// record's own fields.
    pub valid: bool,
}

impl DecodeEntry {
    /// Whether this record may participate in fusion at all.
    ///
    /// Invalid or faulted instructions fail open: they are never matched and
    /// propagate unmodified.
    #[inline]
    pub fn fusable(&self) -> bool {
        self.valid && self.trap.is_none()
    }
}
