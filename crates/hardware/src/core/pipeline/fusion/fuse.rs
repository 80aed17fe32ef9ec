//! Merging a matched pair into one combined record.
//!
//! This module builds the fused record for a pair the matcher accepted. It
//! performs:
//! 1. **Operand Rerouting:** The fused record reads the producer's sources
//!    instead of the placeholder chain register.
//! 2. **PC-Offset Compensation:** A PC-relative producer immediate is
//!    corrected for the producer's own instruction length.
//! 3. **Immediate Folding:** Producer and consumer immediates are summed in
//!    wide signed arithmetic.
//! 4. **Compression Tagging:** Provenance of the pair's encodings is recorded.

use crate::common::constants::{INSTRUCTION_SIZE_16, INSTRUCTION_SIZE_32};
use crate::core::pipeline::latches::DecodeEntry;
use crate::core::pipeline::signals::FusionTag;

/// Merges a matched producer/consumer pair into a single record.
///
/// The consumer is the base: the fused operation keeps its destination,
/// class, and program counter, and is attributed the consumer's PC. Because
/// a PC-relative producer computed its base from its *own* PC, the folded
/// immediate is corrected by the producer's instruction length (2 bytes for
/// a compressed producer, 4 otherwise). When the producer carries no
/// immediate at all, only operand routing happens and the consumer's value
/// is kept.
///
/// Pure and total: must only be called for a pair the matcher accepted.
pub fn fuse(producer: &DecodeEntry, consumer: &DecodeEntry) -> DecodeEntry {
    let mut fused = consumer.clone();

    fused.rs1 = producer.rs1;
    fused.rs2 = producer.rs2;

    let mut pc_offset: i64 = 0;
    if producer.use_imm && producer.use_pc {
        fused.use_pc = true;
        pc_offset = if producer.is_compressed {
            INSTRUCTION_SIZE_16
        } else {
            INSTRUCTION_SIZE_32
        };
    }

    if producer.use_imm {
        fused.result = producer
            .result
            .wrapping_add(consumer.result)
            .wrapping_sub(pc_offset);
    }

    fused.fusion = FusionTag::from_pair(producer.is_compressed, consumer.is_compressed);
    fused
}
