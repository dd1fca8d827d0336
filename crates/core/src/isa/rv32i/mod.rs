//! RV32I base integer instruction tables.
//!
//! Opcode, funct3, and funct7 constant tables for the base integer set.

/// funct3 codes (bits 14-12).
pub mod funct3;

/// funct7 codes (bits 31-25).
pub mod funct7;

/// Major opcodes (bits 6-0).
pub mod opcodes;
