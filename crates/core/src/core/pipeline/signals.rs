//! Control signals.
//!
//! Decode classifies every instruction into one `ControlSignals` bundle.
//! The bundle travels down the latch chain with the instruction and is the
//! only thing later stages consult to decide what to do.

use crate::common::data::MemWidth;

/// ALU operation selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    #[default]
    Add,
    /// Wrapping subtraction.
    Sub,
    /// Logical left shift.
    Sll,
    /// Signed less-than comparison.
    Slt,
    /// Unsigned less-than comparison.
    Sltu,
    /// Bitwise exclusive or.
    Xor,
    /// Logical right shift.
    Srl,
    /// Arithmetic right shift.
    Sra,
    /// Bitwise or.
    Or,
    /// Bitwise and.
    And,
}

/// First ALU operand source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpASrc {
    /// rs1 value read in Decode.
    #[default]
    Reg1,
    /// Program counter of the instruction.
    Pc,
    /// Constant zero (LUI).
    Zero,
}

/// Second ALU operand source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpBSrc {
    /// Decoded immediate.
    #[default]
    Imm,
    /// rs2 value read in Decode.
    Reg2,
}

/// Per-instruction control bundle produced by Decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Writeback writes the register file.
    pub reg_write: bool,
    /// Memory performs a load.
    pub mem_read: bool,
    /// Memory performs a store.
    pub mem_write: bool,
    /// Conditional branch; Execute resolves the condition.
    pub branch: bool,
    /// Unconditional jump (JAL/JALR); Writeback writes the link value.
    pub jump: bool,
    /// ECALL/EBREAK; the datapath halts when this retires.
    pub halt: bool,
    /// Loads sign-extend the fetched value.
    pub signed_load: bool,
    /// The instruction actually reads rs1 (hazard tracking).
    pub reads_rs1: bool,
    /// The instruction actually reads rs2 (hazard tracking).
    pub reads_rs2: bool,
    /// Memory access width; `Nop` outside loads and stores.
    pub width: MemWidth,
    /// ALU operation.
    pub alu: AluOp,
    /// First ALU operand source.
    pub a_src: OpASrc,
    /// Second ALU operand source.
    pub b_src: OpBSrc,
}
