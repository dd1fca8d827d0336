//! Inter-stage latch entries.
//!
//! One struct per latch bank. A latch holds `Option<Entry>`; `None` is a
//! bubble. A `fault` attached to an entry suppresses the instruction's side
//! effects in every later stage and is reported when the slot reaches
//! Writeback.

use crate::common::error::Fault;
use crate::core::pipeline::signals::ControlSignals;

/// IF/ID: the fetched instruction word.
#[derive(Clone, Copy, Debug, Default)]
pub struct IfIdEntry {
    /// Address the word was fetched from.
    pub pc: u32,
    /// Raw instruction word; zero when the fetch itself faulted.
    pub insn: u32,
    /// Fault raised by Fetch, if any.
    pub fault: Option<Fault>,
}

/// ID/EX: decoded fields, operands and control.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdExEntry {
    /// Instruction address.
    pub pc: u32,
    /// Raw instruction word.
    pub insn: u32,
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
    /// Decoded immediate.
    pub imm: i32,
    /// Shift amount.
    pub shamt: u32,
    /// rs1 value read this cycle.
    pub rv1: u32,
    /// rs2 value read this cycle.
    pub rv2: u32,
    /// Control bundle.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage or raised by Decode.
    pub fault: Option<Fault>,
}

/// EX/MEM: ALU result and resolved control flow.
#[derive(Clone, Copy, Debug, Default)]
pub struct ExMemEntry {
    /// Instruction address.
    pub pc: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result; the effective address for loads and stores, the target
    /// for taken branches and jumps.
    pub alu: u32,
    /// rs2 value, forwarded for stores.
    pub store_data: u32,
    /// Branch condition resolved true (always true for jumps).
    pub branch_taken: bool,
    /// Control bundle.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage.
    pub fault: Option<Fault>,
}

/// MEM/WB: the value headed for the register write port.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemWbEntry {
    /// Instruction address.
    pub pc: u32,
    /// Destination register index.
    pub rd: usize,
    /// ALU result (writeback value for ALU ops; link base for jumps).
    pub alu: u32,
    /// Value loaded from memory, already extended.
    pub load_data: u32,
    /// Control bundle.
    pub ctrl: ControlSignals,
    /// Fault carried from an earlier stage or raised by Memory.
    pub fault: Option<Fault>,
}
