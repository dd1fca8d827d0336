//! Memory transfer widths.
//!
//! Loads and stores transfer one, two, or four bytes. The width travels with
//! the instruction through the pipeline control signals and is also the value
//! exposed (encoded) on the Memory-stage observation probe.

use serde::Serialize;

/// Width of a memory transfer.
///
/// `Nop` is carried by instructions that perform no memory access; the
/// Memory stage never issues a transaction for it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub enum MemWidth {
    /// No memory operation.
    #[default]
    Nop,

    /// 8-bit byte access.
    Byte,

    /// 16-bit half-word access.
    Half,

    /// 32-bit word access.
    Word,
}

impl MemWidth {
    /// Number of bytes transferred.
    pub fn bytes(self) -> u32 {
        match self {
            Self::Nop => 0,
            Self::Byte => 1,
            Self::Half => 2,
            Self::Word => 4,
        }
    }

    /// Address bits that must be zero for an aligned access.
    pub fn align_mask(self) -> u32 {
        match self {
            Self::Nop | Self::Byte => 0,
            Self::Half => 1,
            Self::Word => 3,
        }
    }

    /// Two-bit size encoding on the Memory-stage probe: 0 = byte,
    /// 1 = half-word, 2 = word.
    pub fn encoded(self) -> u32 {
        match self {
            Self::Nop | Self::Byte => 0,
            Self::Half => 1,
            Self::Word => 2,
        }
    }
}
