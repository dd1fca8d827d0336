//! Branch resolution unit.

use crate::isa::rv32i::funct3;

/// Resolves a conditional branch from its funct3 and operand values.
///
/// Callers only pass funct3 values Decode already accepted; anything else
/// resolves not-taken.
pub fn branch_taken(funct3: u32, rv1: u32, rv2: u32) -> bool {
    match funct3 {
        funct3::BEQ => rv1 == rv2,
        funct3::BNE => rv1 != rv2,
        funct3::BLT => (rv1 as i32) < (rv2 as i32),
        funct3::BGE => (rv1 as i32) >= (rv2 as i32),
        funct3::BLTU => rv1 < rv2,
        funct3::BGEU => rv1 >= rv2,
        _ => false,
    }
}
