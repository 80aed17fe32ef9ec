//! Fusion pattern matching over the decode window.
//!
//! This module decides whether adjacent decoded instructions form a fusable
//! pair. It provides:
//! 1. **Pair Rule:** The register-chain invariant and fail-open gates shared
//!    by every pattern.
//! 2. **Pattern Table:** Add-then-load and add-then-add detection.
//! 3. **Window Arbitration:** Earliest-pair-first selection between the two
//!    overlapping candidates of a 3-wide window.

use crate::common::constants::{NARROW_WINDOW, WIDE_WINDOW};
use crate::core::pipeline::latches::DecodeEntry;

/// Which fusion patterns a matcher is allowed to take.
///
/// Both patterns are enabled by default; a disabled pattern simply never
/// matches, leaving the window to pass through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FusionPolicy {
    /// Allow fusing an add-family producer into a following load.
    pub allow_add_load: bool,
    /// Allow fusing two immediate add-family instructions.
    pub allow_add_add: bool,
}

impl Default for FusionPolicy {
    fn default() -> Self {
        Self {
            allow_add_load: true,
            allow_add_add: true,
        }
    }
}

/// The fusion pattern a matched pair belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FusionKind {
    /// Address-compute instruction feeding a load of any width.
    AddLoad,
    /// Split-immediate arithmetic: two immediate adds folded into one.
    AddAdd,
}

/// Outcome of matching a decode window.
///
/// Indices are positions in the *input* window of the producer and consumer
/// of the winning pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FusionDecision {
    /// No pair qualifies; every slot passes through unchanged.
    #[default]
    None,

    /// An add-family compute followed by a load.
    AddLoad {
        /// Window index of the address-computing instruction.
        producer: usize,
        /// Window index of the load.
        consumer: usize,
    },

    /// Two immediate add-family instructions.
    AddAdd {
        /// Window index of the first add.
        producer: usize,
        /// Window index of the second add.
        consumer: usize,
    },
}

impl FusionDecision {
    /// Whether no fusion was selected.
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, Self::None)
    }

    /// Producer and consumer window indices of the winning pair, if any.
    #[inline]
    pub const fn pair(self) -> Option<(usize, usize)> {
        match self {
            Self::None => None,
            Self::AddLoad { producer, consumer } | Self::AddAdd { producer, consumer } => {
                Some((producer, consumer))
            }
        }
    }

    /// Pattern of the winning pair, if any.
    #[inline]
    pub const fn kind(self) -> Option<FusionKind> {
        match self {
            Self::None => None,
            Self::AddLoad { .. } => Some(FusionKind::AddLoad),
            Self::AddAdd { .. } => Some(FusionKind::AddAdd),
        }
    }
}

/// Matches one adjacent producer/consumer pair against the pattern table.
///
/// The upstream decoder marks fusable chains by reusing the producer's
/// destination as the consumer's declared destination, so a qualifying pair
/// satisfies `producer.rd == consumer.rs1 && producer.rd == consumer.rd`.
/// Invalid or faulted records never match.
fn match_pair(
    producer: &DecodeEntry,
    consumer: &DecodeEntry,
    policy: &FusionPolicy,
) -> Option<FusionKind> {
    if !producer.fusable() || !consumer.fusable() {
        return None;
    }
    if producer.rd != consumer.rs1 || producer.rd != consumer.rd {
        return None;
    }
    if !producer.op_class.is_add() {
        return None;
    }

    if policy.allow_add_load && consumer.op_class.is_load() {
        return Some(FusionKind::AddLoad);
    }
    if policy.allow_add_add
        && consumer.op_class.is_add()
        && producer.use_imm
        && consumer.use_imm
        && !consumer.use_pc
    {
        return Some(FusionKind::AddAdd);
    }
    None
}

/// Builds the decision for a matched pair at the given window indices.
const fn decide(kind: FusionKind, producer: usize, consumer: usize) -> FusionDecision {
    match kind {
        FusionKind::AddLoad => FusionDecision::AddLoad { producer, consumer },
        FusionKind::AddAdd => FusionDecision::AddAdd { producer, consumer },
    }
}

/// Matches a 2-wide window: only the (0,1) pair is considered.
pub fn match_window2(window: &[DecodeEntry; NARROW_WINDOW], policy: &FusionPolicy) -> FusionDecision {
    match match_pair(&window[0], &window[1], policy) {
        Some(kind) => decide(kind, 0, 1),
        None => FusionDecision::None,
    }
}

/// Matches a 3-wide window, arbitrating between the overlapping (0,1) and
/// (1,2) candidates.
///
/// Pair (0,1) always wins when it matches. Pair (1,2) is considered only
/// afterwards and additionally requires slot 0 to be valid, since that slot
/// must be safely routed as the unfused output.
pub fn match_window3(window: &[DecodeEntry; WIDE_WINDOW], policy: &FusionPolicy) -> FusionDecision {
    if let Some(kind) = match_pair(&window[0], &window[1], policy) {
        return decide(kind, 0, 1);
    }
    if window[0].valid {
        if let Some(kind) = match_pair(&window[1], &window[2], policy) {
            return decide(kind, 1, 2);
        }
    }
    FusionDecision::None
}
