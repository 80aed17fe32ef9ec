//! Stall-aware fusion scan with a single cross-step hold register.
//!
//! When the downstream consumer cannot accept a freshly fused record in the
//! step it was produced, the record must not be lost: it is parked in a
//! one-entry register and re-presented once the producing window position
//! returns to the head slot. This module provides:
//! 1. **Hold Register:** The only mutable cross-step state in the unit.
//! 2. **Re-Present Override:** A held record replaces the head output slot
//!    when its origin PC reappears there.
//! 3. **Retirement:** The register empties once the stream moves past the
//!    origin PC, and unconditionally on reset.

use crate::common::constants::{NARROW_WINDOW, NUM_OUTPUT_SLOTS};
use crate::core::pipeline::fusion::matcher::FusionPolicy;
use crate::core::pipeline::fusion::scanner::{FusionOutput, TwoWideScanner};
use crate::core::pipeline::latches::DecodeEntry;
use crate::core::pipeline::signals::FusionSlot;

/// A fused record that was produced but not yet accepted downstream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingFusion {
    /// The held fused record.
    pub entry: DecodeEntry,
    /// PC occupying window slot 0 in the step the fusion was produced. The
    /// held record itself is attributed the consumer's PC, so the origin is
    /// tracked separately for re-presentation and retirement.
    pub pc: u64,
}

/// Narrow scanner with backpressure handling.
///
/// Wraps a [`TwoWideScanner`] that places fused records on output slot 1,
/// plus the one-entry hold register. Everything except the register is
/// recomputed fresh from the window every step; the register value observed
/// at step *N* is exactly the value written at step *N−1*.
#[derive(Clone, Debug)]
pub struct StallAwareScanner {
    inner: TwoWideScanner,
    pending: Option<PendingFusion>,
}

impl Default for StallAwareScanner {
    fn default() -> Self {
        Self::new(FusionPolicy::default())
    }
}

impl StallAwareScanner {
    /// Creates a stall-aware scanner with an empty hold register.
    pub const fn new(policy: FusionPolicy) -> Self {
        Self {
            inner: TwoWideScanner::new(FusionSlot::Slot1, policy),
            pending: None,
        }
    }

    /// The patterns this scanner is allowed to take.
    pub const fn policy(&self) -> &FusionPolicy {
        self.inner.policy()
    }

    /// The currently held record, if any.
    pub const fn pending(&self) -> Option<&PendingFusion> {
        self.pending.as_ref()
    }

    /// Forces the hold register empty, overriding any transition this step.
    pub fn reset(&mut self) {
        self.pending = None;
    }

    /// Evaluates one step.
    ///
    /// `ready` carries the downstream accept bits per output slot. The
    /// combinational scan runs first; a held record whose origin PC is back
    /// at the head of the window then overrides slot 0 (and restores the
    /// first-slot-independent flag, since the re-presented fusion is a
    /// complete operation on its own). The register transition is evaluated
    /// once, strictly after the outputs are final:
    ///
    /// - a fused record on slot 1 that the downstream could not take
    ///   (accept-slot-0-only readiness) is parked;
    /// - a held record whose origin PC has moved on from the head slot is
    ///   retired;
    /// - otherwise the register is unchanged.
    ///
    /// Retirement compares the *incoming* head-of-window PC, not the
    /// overridden output, so a re-presented record does not clear its own
    /// hold in the step it re-appears.
    pub fn step(
        &mut self,
        window: &[DecodeEntry; NARROW_WINDOW],
        ready: [bool; NUM_OUTPUT_SLOTS],
    ) -> FusionOutput {
        let mut out = self.inner.scan(window);

        if let Some(held) = &self.pending {
            if held.pc == window[0].pc {
                out.slots[0] = held.entry.clone();
                out.slots[1] = window[1].clone();
                out.first_valid = true;
            }
        }

        if out.slots[1].fusion.is_fused() && ready[0] && !ready[1] {
            if let Some(held) = &self.pending {
                if held.pc != window[0].pc {
                    // One register, two outstanding holds: the documented
                    // single-entry limit. Flag it, then latest wins.
                    tracing::warn!(
                        held_pc = held.pc,
                        new_pc = window[0].pc,
                        "fusion hold overwritten while a different pc was held"
                    );
                }
            }
            self.pending = Some(PendingFusion {
                entry: out.slots[1].clone(),
                pc: window[0].pc,
            });
        } else if self
            .pending
            .as_ref()
            .is_some_and(|held| held.pc != window[0].pc)
        {
            self.pending = None;
        }

        out
    }
}
