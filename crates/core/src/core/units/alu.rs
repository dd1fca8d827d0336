//! Arithmetic logic unit.

use crate::common::constants::SHIFT_MASK;
use crate::core::pipeline::signals::AluOp;

/// The integer ALU.
///
/// Purely combinational: one operation, two operands, one result per call.
/// Arithmetic wraps and shifts use only the low five bits of the second
/// operand, matching the hardware semantics of RV32I.
pub struct Alu;

impl Alu {
    /// Computes `op` over `a` and `b`.
    pub fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Sub => a.wrapping_sub(b),
            AluOp::Sll => a.wrapping_shl(b & SHIFT_MASK),
            AluOp::Slt => u32::from((a as i32) < (b as i32)),
            AluOp::Sltu => u32::from(a < b),
            AluOp::Xor => a ^ b,
            AluOp::Srl => a.wrapping_shr(b & SHIFT_MASK),
            AluOp::Sra => ((a as i32).wrapping_shr(b & SHIFT_MASK)) as u32,
            AluOp::Or => a | b,
            AluOp::And => a & b,
        }
    }
}
