//! Combinational fusion scanners over 2- and 3-wide decode windows.
//!
//! Each scanner is a pure function of the current window: it matches, fuses,
//! and routes into a fixed pair of output slots. It provides:
//! 1. **Narrow Scan:** One candidate pair, fused record placed on a
//!    call-site-selected slot.
//! 2. **Wide Scan:** Two overlapping candidate pairs with earliest-pair-first
//!    arbitration and a readiness flag for the downstream consumer.

use crate::common::constants::{NARROW_WINDOW, NUM_OUTPUT_SLOTS, WIDE_WINDOW};
use crate::core::pipeline::fusion::fuse::fuse;
use crate::core::pipeline::fusion::matcher::{FusionPolicy, match_window2, match_window3};
use crate::core::pipeline::latches::DecodeEntry;
use crate::core::pipeline::signals::FusionSlot;

/// Output of a narrow (2-wide) scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FusionOutput {
    /// The two output slots, in fixed order.
    pub slots: [DecodeEntry; NUM_OUTPUT_SLOTS],
    /// Whether slot 0 carries an instruction independent of slot 1. When a
    /// fusion was taken the window collapsed into a single operation and
    /// this is `false`; slot 1's validity is implied by convention.
    pub first_valid: bool,
}

/// Output of a wide (3-wide) scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WideFusionOutput {
    /// The two output slots, in fixed order.
    pub slots: [DecodeEntry; NUM_OUTPUT_SLOTS],
    /// Per-step readiness of the presented pair. When the winning pair was
    /// (0,1) this equals slot 2's validity, because consuming the fused
    /// result still depends on a third instruction being available to pair
    /// with the unused slot next step; otherwise it is unconditionally true.
    pub ready: bool,
    /// Which output slot holds the fused record, or `None` when the window
    /// passed through.
    pub fused_slot: Option<FusionSlot>,
}

/// Narrow scanner: matches the single (0,1) pair of a 2-wide window.
///
/// Call sites differ in which output slot receives the fused record, so the
/// placement is fixed at construction.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoWideScanner {
    placement: FusionSlot,
    policy: FusionPolicy,
}

impl TwoWideScanner {
    /// Creates a scanner placing fused records on the given output slot.
    pub const fn new(placement: FusionSlot, policy: FusionPolicy) -> Self {
        Self { placement, policy }
    }

    /// The patterns this scanner is allowed to take.
    pub const fn policy(&self) -> &FusionPolicy {
        &self.policy
    }

    /// Scans one window, producing the two output slots and the
    /// first-slot-independent flag.
    ///
    /// The default is plain pass-through; a match overwrites exactly one
    /// slot with the fused record and drops the flag, marking the pair as
    /// collapsed into a single operation.
    pub fn scan(&self, window: &[DecodeEntry; NARROW_WINDOW]) -> FusionOutput {
        let mut out = FusionOutput {
            slots: [window[0].clone(), window[1].clone()],
            first_valid: true,
        };

        if let Some((producer, consumer)) = match_window2(window, &self.policy).pair() {
            out.slots[self.placement.index()] = fuse(&window[producer], &window[consumer]);
            out.first_valid = false;
        }

        out
    }
}

/// Wide scanner: arbitrates the overlapping (0,1) and (1,2) pairs of a
/// 3-wide window with a fixed earliest-pair-first policy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ThreeWideScanner {
    policy: FusionPolicy,
}

impl ThreeWideScanner {
    /// Creates a wide scanner with the given pattern policy.
    pub const fn new(policy: FusionPolicy) -> Self {
        Self { policy }
    }

    /// The patterns this scanner is allowed to take.
    pub const fn policy(&self) -> &FusionPolicy {
        &self.policy
    }

    /// Scans one window. The instruction not participating in the winning
    /// pair is routed unchanged to the remaining output slot.
    pub fn scan(&self, window: &[DecodeEntry; WIDE_WINDOW]) -> WideFusionOutput {
        let mut out = WideFusionOutput {
            slots: [window[0].clone(), window[1].clone()],
            ready: true,
            fused_slot: None,
        };

        match match_window3(window, &self.policy).pair() {
            Some((0, _)) => {
                out.slots[0] = fuse(&window[0], &window[1]);
                out.slots[1] = window[2].clone();
                out.fused_slot = Some(FusionSlot::Slot0);
                out.ready = window[2].valid;
            }
            Some((producer, consumer)) => {
                out.slots[1] = fuse(&window[producer], &window[consumer]);
                out.fused_slot = Some(FusionSlot::Slot1);
            }
            None => {}
        }

        out
    }
}
