//! Instruction word decoding.
//!
//! [`decode`] splits a raw 32-bit instruction word into its constituent
//! fields and reconstructs the immediate for the word's format class. It
//! never fails: legality checks belong to the Decode stage, which needs the
//! raw fields to report a precise illegal-instruction fault.

use crate::isa::instruction::{Decoded, InstructionBits};
use crate::isa::rv32i::opcodes;

/// Sign-extends the low `bits` bits of `value`.
#[inline(always)]
fn sign_extend(value: u32, bits: u32) -> i32 {
    let shift = 32 - bits;
    ((value << shift) as i32) >> shift
}

/// Decodes an instruction word into its fields and format-appropriate
/// immediate.
///
/// Opcodes outside the recognised set decode with a zero immediate; the
/// Decode stage rejects them when it classifies the result.
pub fn decode(insn: u32) -> Decoded {
    let opcode = insn.opcode();

    let imm = match opcode {
        // I-type: loads, OP-IMM, JALR, SYSTEM.
        opcodes::OP_LOAD | opcodes::OP_IMM | opcodes::OP_JALR | opcodes::OP_SYSTEM => {
            (insn as i32) >> 20
        }
        // S-type: imm[11:5] in bits 31:25, imm[4:0] in bits 11:7.
        opcodes::OP_STORE => {
            let value = ((insn >> 25) << 5) | ((insn >> 7) & 0x1F);
            sign_extend(value, 12)
        }
        // B-type: imm[12|10:5|4:1|11], always even.
        opcodes::OP_BRANCH => {
            let value = ((insn >> 31) << 12)
                | (((insn >> 7) & 0x1) << 11)
                | (((insn >> 25) & 0x3F) << 5)
                | (((insn >> 8) & 0xF) << 1);
            sign_extend(value, 13)
        }
        // U-type: imm[31:12] already in place, low 12 bits zero.
        opcodes::OP_LUI | opcodes::OP_AUIPC => (insn & 0xFFFF_F000) as i32,
        // J-type: imm[20|10:1|11|19:12], always even.
        opcodes::OP_JAL => {
            let value = ((insn >> 31) << 20)
                | (((insn >> 12) & 0xFF) << 12)
                | (((insn >> 20) & 0x1) << 11)
                | (((insn >> 21) & 0x3FF) << 1);
            sign_extend(value, 21)
        }
        _ => 0,
    };

    Decoded {
        raw: insn,
        opcode,
        rd: insn.rd(),
        rs1: insn.rs1(),
        rs2: insn.rs2(),
        funct3: insn.funct3(),
        funct7: insn.funct7(),
        imm,
        shamt: insn.shamt(),
    }
}
