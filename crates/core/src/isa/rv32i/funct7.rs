//! RV32I funct7 codes (bits 31-25).
//!
//! Distinguishes R-type operations sharing a funct3 (ADD vs SUB, SRL vs SRA)
//! and validates the upper immediate bits of SLLI/SRLI/SRAI.

/// Default operation (ADD, SRL, SLL, ...).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation (SUB, SRA).
pub const ALT: u32 = 0b0100000;
