//! Instruction classification and fusion tagging.
//!
//! This module defines the enumerated signal domains the fusion unit decides
//! over. It performs:
//! 1. **Opcode Classification:** Groups decoded instructions into the classes
//!    the pattern table distinguishes, with set-membership predicates.
//! 2. **Compression Provenance:** Records which halves of a fused pair came
//!    from short encodings, for retirement and debug accounting.
//! 3. **Slot Selection:** Names the output slot a fused record lands in.

/// Instruction class of a decoded record, as seen by the fusion unit.
///
/// Only the classes that participate in a fusion pattern are distinguished;
/// everything else lands in [`OpClass::Other`] and is passed through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum OpClass {
    /// Register-immediate or register-register addition.
    Add,

    /// Word-width (32-bit operand) addition.
    AddWide,

    /// 8-bit load, sign-extended.
    LoadByte,

    /// 8-bit load, zero-extended.
    LoadByteU,

    /// 16-bit load, sign-extended.
    LoadHalf,

    /// 16-bit load, zero-extended.
    LoadHalfU,

    /// 32-bit load, sign-extended.
    LoadWord,

    /// 32-bit load, zero-extended.
    LoadWordU,

    /// 64-bit load.
    LoadDouble,

    /// Any instruction the fusion unit has no pattern for.
    #[default]
    Other,
}

impl OpClass {
    /// Whether this class is an add-family compute instruction that can
    /// open a fusion pair.
    #[inline]
    pub const fn is_add(self) -> bool {
        matches!(self, Self::Add | Self::AddWide)
    }

    /// Whether this class is a load of any width.
    ///
    /// One membership test replaces the per-pattern opcode lists so every
    /// scanner variant agrees on what counts as a load.
    #[inline]
    pub const fn is_load(self) -> bool {
        matches!(
            self,
            Self::LoadByte
                | Self::LoadByteU
                | Self::LoadHalf
                | Self::LoadHalfU
                | Self::LoadWord
                | Self::LoadWordU
                | Self::LoadDouble
        )
    }
}

/// Compression provenance of a fused record.
///
/// Downstream retirement accounting needs to know how many short encodings a
/// fused operation stands for. The 2-bit wire encoding is preserved through
/// [`FusionTag::code`]; `None` (encoding 0) is the default on every record
/// that is not a fusion result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FusionTag {
    /// Not a fusion result.
    #[default]
    None,

    /// Both source instructions were compressed.
    BothCompressed,

    /// Exactly one source instruction was compressed.
    HalfCompressed,

    /// Neither source instruction was compressed.
    Uncompressed,
}

impl FusionTag {
    /// Tag for a fused pair, from the producer's and consumer's
    /// compressed-encoding flags.
    #[inline]
    pub const fn from_pair(producer_compressed: bool, consumer_compressed: bool) -> Self {
        match (producer_compressed, consumer_compressed) {
            (true, true) => Self::BothCompressed,
            (true, false) | (false, true) => Self::HalfCompressed,
            (false, false) => Self::Uncompressed,
        }
    }

    /// The 2-bit wire encoding of this tag.
    #[inline]
    pub const fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::BothCompressed => 1,
            Self::HalfCompressed => 2,
            Self::Uncompressed => 3,
        }
    }

    /// Whether this tag marks a fusion result.
    #[inline]
    pub const fn is_fused(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Output slot a fused record is placed in.
///
/// The narrow scanner is instantiated at call sites that want the fused
/// record on either slot; the wide scanner reports which slot it chose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FusionSlot {
    /// The fused record occupies output slot 0.
    #[default]
    Slot0,

    /// The fused record occupies output slot 1.
    Slot1,
}

impl FusionSlot {
    /// Index of the slot within the output pair.
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Self::Slot0 => 0,
            Self::Slot1 => 1,
        }
    }
}
