//! Fault taxonomy and error types.
//!
//! This module defines error handling for the simulator:
//! 1. **Faults:** Per-instruction pipeline faults. A fault attaches to the
//!    pipeline slot where it originates, suppresses that instruction's
//!    register and memory side effects, and is surfaced to the harness when
//!    the slot reaches Writeback, never thrown mid-pipeline.
//! 2. **Memory Errors:** The explicit error return of the memory
//!    collaborators for invalid addresses.
//! 3. **Simulation Errors:** Top-level failures reported by the simulation
//!    front end (surfaced faults, bad images, I/O).

use serde::Serialize;
use thiserror::Error;

/// A per-instruction pipeline fault.
///
/// Faults travel with the slot that raised them and become observable on the
/// Writeback probe at a fixed depth after their origin. There is no variant
/// for structural hazards: a single-issue pipeline cannot raise one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error, Serialize)]
pub enum Fault {
    /// The program counter is not aligned to the instruction width.
    #[error("instruction address misaligned: {0:#010x}")]
    InstructionAddressMisaligned(u32),

    /// An instruction fetch targeted an address outside memory.
    #[error("instruction access fault: {0:#010x}")]
    InstructionAccessFault(u32),

    /// Decode could not classify the instruction encoding.
    #[error("illegal instruction: {0:#010x}")]
    IllegalInstruction(u32),

    /// A load's effective address violates the access alignment.
    #[error("load address misaligned: {0:#010x}")]
    LoadAddressMisaligned(u32),

    /// A load targeted an address outside memory.
    #[error("load access fault: {0:#010x}")]
    LoadAccessFault(u32),

    /// A store's effective address violates the access alignment.
    #[error("store address misaligned: {0:#010x}")]
    StoreAddressMisaligned(u32),

    /// A store targeted an address outside memory.
    #[error("store access fault: {0:#010x}")]
    StoreAccessFault(u32),
}

/// Error returned by the memory collaborators for an invalid request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The access falls (partly) outside the addressable range.
    #[error("address {addr:#010x} is outside the memory range")]
    OutOfRange {
        /// First byte of the failed access.
        addr: u32,
    },
}

/// Top-level simulation error.
#[derive(Debug, Error)]
pub enum SimError {
    /// A pipeline fault reached Writeback.
    #[error("{fault} at pc {pc:#010x} (cycle {cycle})")]
    Fault {
        /// The surfaced fault.
        fault: Fault,
        /// Program counter of the faulting instruction.
        pc: u32,
        /// Cycle at which the fault retired.
        cycle: u64,
    },

    /// A program image could not be parsed or does not fit in memory.
    #[error("invalid program image: {0}")]
    InvalidImage(String),

    /// A direct memory access outside the pipeline failed.
    #[error(transparent)]
    Memory(#[from] MemoryError),

    /// An underlying I/O failure (image loading).
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
