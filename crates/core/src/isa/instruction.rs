//! Instruction field extraction.
//!
//! Bit-level access to the fixed fields of a 32-bit RV32I encoding, plus the
//! `Decoded` record produced once per instruction by the Decode stage.

/// Bit mask for the opcode field (bits 6-0).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for a 5-bit register index field.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the funct3 field (bits 14-12).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for the funct7 field (bits 31-25).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Field extraction for encoded instructions.
///
/// Every field is defined for every encoding; fields that do not apply to a
/// given opcode are extracted anyway and ignored downstream.
pub trait InstructionBits {
    /// Major opcode (bits 6-0).
    fn opcode(&self) -> u32;

    /// Destination register index (bits 11-7).
    fn rd(&self) -> usize;

    /// First source register index (bits 19-15).
    fn rs1(&self) -> usize;

    /// Second source register index (bits 24-20).
    fn rs2(&self) -> usize;

    /// funct3 field (bits 14-12).
    fn funct3(&self) -> u32;

    /// funct7 field (bits 31-25).
    fn funct7(&self) -> u32;

    /// Shift amount (bits 24-20; aliases the rs2 field).
    fn shamt(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & REG_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }

    #[inline(always)]
    fn shamt(&self) -> u32 {
        (self >> 20) & REG_MASK
    }
}

/// All fields extracted from one instruction encoding.
///
/// Produced once per instruction by Decode. Fields not applicable to the
/// opcode (for example `rs2` of an I-type) are defined but never read by
/// later stages for that opcode.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decoded {
    /// Raw 32-bit encoding.
    pub raw: u32,
    /// Major opcode.
    pub opcode: u32,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// funct3 field.
    pub funct3: u32,
    /// funct7 field.
    pub funct7: u32,
    /// Immediate, sign- or zero-extended per the opcode's format.
    pub imm: i32,
    /// Shift amount (bits 24-20).
    pub shamt: u32,
}
