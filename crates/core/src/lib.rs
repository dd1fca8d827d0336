//! Cycle-accurate RV32I pipeline simulator library.
//!
//! This crate implements a single-issue, in-order, five-deep instruction
//! pipeline for the RV32I base integer ISA with the following:
//! 1. **Core:** Pipeline (fetch, decode, execute, memory, writeback), the
//!    register file, and the ALU/branch units.
//! 2. **ISA:** Field extraction, immediate decoding, and opcode/function
//!    tables for RV32I.
//! 3. **Memory:** A flat little-endian RAM with explicit out-of-range errors,
//!    serving both instruction fetch and data access.
//! 4. **Observation:** A per-cycle, per-stage probe surface (the signal
//!    contract consumed by an external verification harness).
//! 5. **Simulation:** Image loader, configuration, and statistics collection.

/// Common types (fault taxonomy, access widths, constants).
pub mod common;
/// Simulator configuration (memory layout, reset vector).
pub mod config;
/// Datapath core (pipeline, architectural state, functional units).
pub mod core;
/// Instruction set (field extraction, decode, RV32I tables).
pub mod isa;
/// Flat RAM model with explicit error returns.
pub mod mem;
/// Simulation front end (simulator loop, image loader).
pub mod sim;
/// Statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Datapath state: program counter, register file, latches, memory.
pub use crate::core::Datapath;
/// Per-cycle observation record, one probe per pipeline stage group.
pub use crate::core::pipeline::probes::Snapshot;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
