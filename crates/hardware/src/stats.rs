//! Fusion statistics collection and reporting.
//!
//! This module tracks what the fusion unit did over a run. It provides:
//! 1. **Step Counts:** Evaluation steps and pass-through windows.
//! 2. **Pattern Mix:** Fused pairs by pattern, and issue slots freed.
//! 3. **Backpressure:** Hold-register traffic (parks, re-presents, retires,
//!    overwrites) and resets.

/// Counters describing one run of the fusion unit.
///
/// All counters are plain totals; derived ratios (fusion rate, hold
/// survival) are computed at print time with divide-by-zero guards.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FusionStats {
    /// Evaluation steps presented to the unit.
    pub steps: u64,
    /// Windows that passed through without fusing.
    pub pass_throughs: u64,

    /// Pairs fused by the add-then-load pattern.
    pub fused_add_load: u64,
    /// Pairs fused by the add-then-add pattern.
    pub fused_add_add: u64,

    /// Fused records parked in the hold register under backpressure.
    pub stall_holds: u64,
    /// Held records re-presented on the head output slot.
    pub stall_replays: u64,
    /// Holds retired after the stream moved past their origin.
    pub stall_retires: u64,
    /// Holds overwritten while a different record was already held.
    pub stall_overwrites: u64,

    /// External resets applied to the unit.
    pub resets: u64,
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"patterns"`, `"backpressure"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "patterns", "backpressure"];

impl FusionStats {
    /// Creates a zeroed statistics block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total pairs fused across all patterns.
    #[inline]
    pub const fn fused_total(&self) -> u64 {
        self.fused_add_load + self.fused_add_add
    }

    /// Issue slots freed by fusion (one per fused pair).
    #[inline]
    pub const fn slots_freed(&self) -> u64 {
        self.fused_total()
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of `"summary"`,
    /// `"patterns"`, or `"backpressure"`. Pass an empty slice to print all
    /// sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let steps = if self.steps == 0 { 1 } else { self.steps };

        if want("summary") {
            let fusion_rate = self.fused_total() as f64 / steps as f64;
            println!("\n==========================================================");
            println!("MACRO-OP FUSION STATISTICS");
            println!("==========================================================");
            println!("fusion_steps             {}", self.steps);
            println!("fusion_pairs             {}", self.fused_total());
            println!("fusion_rate              {:.4} pairs/step", fusion_rate);
            println!("slots_freed              {}", self.slots_freed());
            println!("----------------------------------------------------------");
        }
        if want("patterns") {
            println!("PATTERN MIX");
            println!(
                "  fused.add_load         {} ({:.2}%)",
                self.fused_add_load,
                (self.fused_add_load as f64 / steps as f64) * 100.0
            );
            println!(
                "  fused.add_add          {} ({:.2}%)",
                self.fused_add_add,
                (self.fused_add_add as f64 / steps as f64) * 100.0
            );
            println!(
                "  pass_through           {} ({:.2}%)",
                self.pass_throughs,
                (self.pass_throughs as f64 / steps as f64) * 100.0
            );
            println!("----------------------------------------------------------");
        }
        if want("backpressure") {
            println!("BACKPRESSURE");
            println!("  holds.parked           {}", self.stall_holds);
            println!("  holds.replayed         {}", self.stall_replays);
            println!("  holds.retired          {}", self.stall_retires);
            println!("  holds.overwritten      {}", self.stall_overwrites);
            println!("  resets                 {}", self.resets);
            println!("----------------------------------------------------------");
        }
    }
}
