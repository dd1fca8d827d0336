//! Per-cycle observation records.
//!
//! Every call to [`Datapath::tick`](crate::core::Datapath::tick) returns a
//! [`Snapshot`] describing what each stage did during that cycle. Stage
//! groups are `Option`al: `None` means the stage held a bubble, or a slot
//! whose fault suppressed the stage's work. A faulted slot becomes visible
//! again on the Writeback probe, where it retires. The register file group
//! is always present; its write-port fields mirror Writeback and its read
//! ports mirror the instruction sitting in Decode.
//!
//! Snapshots serialize to JSON so external checkers can diff them against a
//! reference trace.

use serde::Serialize;

use crate::common::error::Fault;

/// What Fetch did this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct FetchProbe {
    /// Address fetched from.
    pub pc: u32,
    /// Instruction word fetched; zero if the fetch faulted.
    pub insn: u32,
}

/// Decoded fields of the instruction in Decode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DecodeProbe {
    /// Instruction address.
    pub pc: u32,
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
    /// Decoded immediate.
    pub imm: i32,
    /// Shift amount.
    pub shamt: u32,
}

/// Register file port activity this cycle.
///
/// The write port mirrors the Writeback slot; the read ports mirror the
/// Decode slot. Idle ports read as zero with their enables false.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RegFileProbe {
    /// Write port asserted this cycle.
    pub write_enable: bool,
    /// Write port register index.
    pub write_addr: usize,
    /// Write port data.
    pub write_data: u32,
    /// First read port register index.
    pub rs1_addr: usize,
    /// Second read port register index.
    pub rs2_addr: usize,
    /// First read port data.
    pub rs1_data: u32,
    /// Second read port data.
    pub rs2_data: u32,
}

/// What Execute produced this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ExecuteProbe {
    /// Instruction address.
    pub pc: u32,
    /// ALU result (effective address or branch target where applicable).
    pub alu_result: u32,
    /// Branch resolved taken (true for every jump).
    pub branch_taken: bool,
}

/// What Memory did this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MemoryProbe {
    /// Instruction address.
    pub pc: u32,
    /// Effective address driven on the port.
    pub address: u32,
    /// A load was performed.
    pub read: bool,
    /// A store was performed.
    pub write: bool,
    /// Access width: 0 byte, 1 halfword, 2 word.
    pub width: u32,
    /// Data driven for a store.
    pub store_data: u32,
}

/// What Writeback retired this cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct WritebackProbe {
    /// Instruction address.
    pub pc: u32,
    /// Register write performed.
    pub enable: bool,
    /// Destination register index.
    pub rd: usize,
    /// Value written.
    pub data: u32,
    /// Fault the instruction retired with, if any.
    pub fault: Option<Fault>,
}

/// One cycle of observable datapath activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Cycle number, counted from zero at reset.
    pub cycle: u64,
    /// Fetch activity; `None` when Fetch was idle.
    pub fetch: Option<FetchProbe>,
    /// Decode activity; `None` on a bubble.
    pub decode: Option<DecodeProbe>,
    /// Register file port activity. Always present.
    pub regfile: RegFileProbe,
    /// Execute activity; `None` on a bubble.
    pub execute: Option<ExecuteProbe>,
    /// Memory activity; `None` on a bubble.
    pub memory: Option<MemoryProbe>,
    /// Writeback activity; `None` on a bubble.
    pub writeback: Option<WritebackProbe>,
}
