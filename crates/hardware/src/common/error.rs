//! Trap and configuration error definitions.
//!
//! This module defines the error surfaces of the fusion model. It provides:
//! 1. **Trap Representation:** Faults a decoded instruction may already carry
//!    when it reaches the fusion unit.
//! 2. **Configuration Errors:** Failures while parsing or validating a model
//!    configuration.
//!
//! The fusion logic itself is total: a record carrying a trap is never fused
//! and propagates unmodified, so `Trap` is data flowing through the unit
//! rather than an error returned by it.

use std::fmt;

/// Faults an instruction can carry into the decode stage.
///
/// A record with a pending trap is excluded from fusion and passed through
/// so the downstream exception logic sees it exactly as decoded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Trap {
    /// Instruction fetch violated memory protection or touched invalid
    /// memory. The associated value is the faulting address.
    InstructionAccessFault(u64),

    /// The instruction encoding is invalid or not implemented.
    /// The associated value is the raw encoding.
    IllegalInstruction(u32),

    /// A breakpoint was hit at this instruction.
    /// The associated value is the program counter.
    Breakpoint(u64),

    /// Instruction fetch crossed a page and the second half faulted.
    /// The associated value is the faulting address.
    InstructionPageFault(u64),
}

impl fmt::Display for Trap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InstructionAccessFault(addr) => {
                write!(f, "InstructionAccessFault({addr:#x})")
            }
            Self::IllegalInstruction(inst) => write!(f, "IllegalInstruction({inst:#010x})"),
            Self::Breakpoint(pc) => write!(f, "Breakpoint({pc:#x})"),
            Self::InstructionPageFault(addr) => write!(f, "InstructionPageFault({addr:#x})"),
        }
    }
}

impl std::error::Error for Trap {}

/// Errors produced while parsing or validating a model configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration JSON did not match the expected schema.
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    /// The configuration parsed but describes an unusable model.
    #[error("unsupported configuration: {0}")]
    Unsupported(String),
}
