//! Window-trace replay model: owns the unit, its configuration, and stats.
//!
//! The model stands in for the surrounding pipeline front end: each step it
//! presents one decode window (with downstream readiness and an optional
//! reset) to the configured fusion unit, collects the outputs, and keeps the
//! statistics a real front end would report. It performs:
//! 1. **Unit Selection:** Narrow stall-aware or wide arbitrating scan, from
//!    the configured window width.
//! 2. **Replay:** Per-step evaluation with reset handling and window padding.
//! 3. **Accounting:** Pattern mix and hold-register traffic counters.

use crate::common::constants::{NARROW_WINDOW, NUM_OUTPUT_SLOTS, WIDE_WINDOW};
use crate::common::error::ConfigError;
use crate::config::Config;
use crate::core::pipeline::fusion::{
    FusionKind, FusionOutput, StallAwareScanner, ThreeWideScanner, WideFusionOutput,
    match_window2, match_window3,
};
use crate::core::pipeline::latches::DecodeEntry;
use crate::stats::FusionStats;

/// One step of a recorded window trace.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepInput {
    /// The decode window for this step. Slots beyond the supplied records
    /// are presented to the unit as invalid entries, the same way a
    /// starved fetch stage under-fills its window.
    pub window: Vec<DecodeEntry>,
    /// Downstream accept bits per output slot. Ignored by the wide unit,
    /// which signals readiness instead of consuming it.
    pub ready: [bool; NUM_OUTPUT_SLOTS],
    /// Assert the external reset before evaluating this step.
    pub reset: bool,
}

impl StepInput {
    /// A step presenting the given window with an all-ready downstream.
    pub fn new(window: Vec<DecodeEntry>) -> Self {
        Self {
            window,
            ready: [true, true],
            reset: false,
        }
    }
}

/// Output of one model step, matching the configured unit's contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelOutput {
    /// Narrow (2-wide, stall-aware) scan result.
    Narrow(FusionOutput),
    /// Wide (3-wide, arbitrating) scan result.
    Wide(WideFusionOutput),
}

impl ModelOutput {
    /// The two output slots, regardless of unit width.
    pub const fn slots(&self) -> &[DecodeEntry; NUM_OUTPUT_SLOTS] {
        match self {
            Self::Narrow(out) => &out.slots,
            Self::Wide(out) => &out.slots,
        }
    }
}

/// The scanner variant a model drives.
#[derive(Clone, Debug)]
enum Unit {
    Narrow(StallAwareScanner),
    Wide(ThreeWideScanner),
}

/// Trace replay driver: configuration, the fusion unit, and statistics.
#[derive(Clone, Debug)]
pub struct FusionModel {
    config: Config,
    unit: Unit,
    stats: FusionStats,
}

impl FusionModel {
    /// Creates a model for the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Unsupported`] when the configuration names a
    /// window width the unit cannot scan.
    pub fn new(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let unit = match config.fusion.window_width {
            3 => Unit::Wide(ThreeWideScanner::new(config.fusion.policy())),
            _ => Unit::Narrow(StallAwareScanner::new(config.fusion.policy())),
        };
        Ok(Self {
            config,
            unit,
            stats: FusionStats::new(),
        })
    }

    /// The model's configuration.
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Statistics accumulated so far.
    pub const fn stats(&self) -> &FusionStats {
        &self.stats
    }

    /// Origin PC of the currently held fusion, when the narrow unit is
    /// holding one.
    pub fn held_pc(&self) -> Option<u64> {
        match &self.unit {
            Unit::Narrow(scanner) => scanner.pending().map(|held| held.pc),
            Unit::Wide(_) => None,
        }
    }

    /// Applies the external reset: the hold register empties unconditionally.
    pub fn reset(&mut self) {
        if let Unit::Narrow(scanner) = &mut self.unit {
            scanner.reset();
        }
        self.stats.resets += 1;
    }

    /// Evaluates one step of the trace.
    pub fn step(&mut self, input: &StepInput) -> ModelOutput {
        if input.reset {
            self.reset();
        }
        self.stats.steps += 1;

        match &mut self.unit {
            Unit::Narrow(scanner) => {
                let window = pad_window::<NARROW_WINDOW>(&input.window);
                let decision = match_window2(&window, scanner.policy());
                let held_before = scanner.pending().map(|held| held.pc);

                let out = scanner.step(&window, input.ready);

                record_kind(&mut self.stats, decision.kind());
                let held_after = scanner.pending().map(|held| held.pc);
                match (held_before, held_after) {
                    (None, Some(_)) => self.stats.stall_holds += 1,
                    (Some(before), Some(after)) if before != after => {
                        self.stats.stall_holds += 1;
                        self.stats.stall_overwrites += 1;
                    }
                    (Some(_), None) => self.stats.stall_retires += 1,
                    _ => {}
                }
                if held_before.is_some_and(|pc| pc == window[0].pc) {
                    self.stats.stall_replays += 1;
                }

                if self.config.general.trace_decisions {
                    eprintln!(
                        "FU  pc={:#x} decision={:?} first_valid={} held={:?}",
                        window[0].pc, decision, out.first_valid, held_after,
                    );
                }
                tracing::trace!(pc = window[0].pc, ?decision, "narrow fusion step");

                ModelOutput::Narrow(out)
            }
            Unit::Wide(scanner) => {
                let window = pad_window::<WIDE_WINDOW>(&input.window);
                let decision = match_window3(&window, scanner.policy());

                let out = scanner.scan(&window);

                record_kind(&mut self.stats, decision.kind());
                if self.config.general.trace_decisions {
                    eprintln!(
                        "FU  pc={:#x} decision={:?} ready={} fused_slot={:?}",
                        window[0].pc, decision, out.ready, out.fused_slot,
                    );
                }
                tracing::trace!(pc = window[0].pc, ?decision, "wide fusion step");

                ModelOutput::Wide(out)
            }
        }
    }

    /// Replays a recorded trace, returning the per-step outputs.
    pub fn run(&mut self, trace: &[StepInput]) -> Vec<ModelOutput> {
        trace.iter().map(|input| self.step(input)).collect()
    }
}

/// Clones up to `N` records from a trace line, padding with invalid entries.
fn pad_window<const N: usize>(records: &[DecodeEntry]) -> [DecodeEntry; N] {
    std::array::from_fn(|i| records.get(i).cloned().unwrap_or_default())
}

/// Bumps the pattern-mix counters for one decision.
fn record_kind(stats: &mut FusionStats, kind: Option<FusionKind>) {
    match kind {
        Some(FusionKind::AddLoad) => stats.fused_add_load += 1,
        Some(FusionKind::AddAdd) => stats.fused_add_add += 1,
        None => stats.pass_throughs += 1,
    }
}
