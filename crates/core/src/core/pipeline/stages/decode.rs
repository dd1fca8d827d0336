//! Instruction Decode (ID) stage.
//!
//! Splits the fetched word into fields, classifies it into control signals,
//! reads both source registers and fills the ID/EX latch. Decode also owns
//! the two pipeline interlocks:
//!
//! 1. A redirect resolved by Execute this cycle squashes the slot.
//! 2. A read-after-write hazard against an in-flight producer stalls the
//!    slot in place and injects a bubble into Execute.
//!
//! Register reads are combinational within this stage's cycle and see any
//! write Writeback performed earlier in the same cycle.

use crate::common::data::MemWidth;
use crate::common::error::Fault;
use crate::core::Datapath;
use crate::core::pipeline::hazards::need_stall;
use crate::core::pipeline::latches::IdExEntry;
use crate::core::pipeline::probes::DecodeProbe;
use crate::core::pipeline::signals::{AluOp, ControlSignals, OpASrc, OpBSrc};
use crate::isa::decode::decode;
use crate::isa::instruction::Decoded;
use crate::isa::rv32i::{funct3, funct7, opcodes};

/// Executes the decode stage for one cycle.
pub fn decode_stage(dp: &mut Datapath) {
    // A taken branch or jump resolved in Execute earlier this cycle. The
    // instruction sitting here is wrong-path; squash it.
    if dp.redirect.is_some() {
        if dp.if_id.take().is_some() {
            dp.stats.squashed += 1;
            tracing::trace!("ID squash (redirect)");
        }
        dp.id_ex = None;
        dp.snap.decode = None;
        return;
    }

    let Some(entry) = dp.if_id else {
        dp.id_ex = None;
        dp.snap.decode = None;
        return;
    };

    // A fetch fault rides its slot down the pipe untouched.
    if let Some(fault) = entry.fault {
        dp.if_id = None;
        dp.id_ex = Some(IdExEntry {
            pc: entry.pc,
            fault: Some(fault),
            ..Default::default()
        });
        dp.snap.decode = None;
        return;
    }

    let decoded = decode(entry.insn);

    let ctrl = match classify(&decoded) {
        Ok(ctrl) => ctrl,
        Err(fault) => {
            tracing::trace!(
                "ID  pc={:#010x} insn={:#010x} illegal",
                entry.pc,
                entry.insn
            );
            dp.if_id = None;
            dp.id_ex = Some(IdExEntry {
                pc: entry.pc,
                insn: entry.insn,
                fault: Some(fault),
                ..Default::default()
            });
            dp.snap.decode = None;
            return;
        }
    };

    // Read ports are driven whether or not the slot advances.
    let rv1 = dp.regs.read(decoded.rs1);
    let rv2 = dp.regs.read(decoded.rs2);
    dp.snap.regfile.rs1_addr = decoded.rs1;
    dp.snap.regfile.rs2_addr = decoded.rs2;
    dp.snap.regfile.rs1_data = rv1;
    dp.snap.regfile.rs2_data = rv2;
    dp.snap.decode = Some(DecodeProbe {
        pc: entry.pc,
        opcode: decoded.opcode,
        rd: decoded.rd,
        rs1: decoded.rs1,
        rs2: decoded.rs2,
        funct3: decoded.funct3,
        funct7: decoded.funct7,
        imm: decoded.imm,
        shamt: decoded.shamt,
    });

    // The entries now in EX/MEM and MEM/WB write the register file one and
    // two cycles from now; a reader of either destination waits here.
    if need_stall(
        &ctrl,
        decoded.rs1,
        decoded.rs2,
        dp.ex_mem.as_ref(),
        dp.mem_wb.as_ref(),
    ) {
        tracing::trace!("ID  pc={:#010x} stall (RAW)", entry.pc);
        dp.stall = true;
        dp.stats.stall_cycles += 1;
        dp.id_ex = None;
        return;
    }

    dp.if_id = None;
    dp.id_ex = Some(IdExEntry {
        pc: entry.pc,
        insn: entry.insn,
        rd: decoded.rd,
        rs1: decoded.rs1,
        rs2: decoded.rs2,
        funct3: decoded.funct3,
        funct7: decoded.funct7,
        imm: decoded.imm,
        shamt: decoded.shamt,
        rv1,
        rv2,
        ctrl,
        fault: None,
    });
}

/// Classifies a decoded instruction into its control bundle, rejecting
/// encodings outside RV32I.
pub fn classify(d: &Decoded) -> Result<ControlSignals, Fault> {
    let illegal = Fault::IllegalInstruction(d.raw);
    let mut ctrl = ControlSignals::default();

    match d.opcode {
        opcodes::OP_LUI => {
            ctrl.reg_write = true;
            ctrl.a_src = OpASrc::Zero;
        }
        opcodes::OP_AUIPC => {
            ctrl.reg_write = true;
            ctrl.a_src = OpASrc::Pc;
        }
        opcodes::OP_JAL => {
            ctrl.reg_write = true;
            ctrl.jump = true;
            ctrl.a_src = OpASrc::Pc;
        }
        opcodes::OP_JALR => {
            if d.funct3 != funct3::JALR {
                return Err(illegal);
            }
            ctrl.reg_write = true;
            ctrl.jump = true;
            ctrl.reads_rs1 = true;
        }
        opcodes::OP_BRANCH => {
            match d.funct3 {
                funct3::BEQ | funct3::BNE | funct3::BLT | funct3::BGE | funct3::BLTU
                | funct3::BGEU => {}
                _ => return Err(illegal),
            }
            ctrl.branch = true;
            ctrl.a_src = OpASrc::Pc;
            ctrl.reads_rs1 = true;
            ctrl.reads_rs2 = true;
        }
        opcodes::OP_LOAD => {
            let (width, signed) = match d.funct3 {
                funct3::LB => (MemWidth::Byte, true),
                funct3::LH => (MemWidth::Half, true),
                funct3::LW => (MemWidth::Word, true),
                funct3::LBU => (MemWidth::Byte, false),
                funct3::LHU => (MemWidth::Half, false),
                _ => return Err(illegal),
            };
            ctrl.reg_write = true;
            ctrl.mem_read = true;
            ctrl.signed_load = signed;
            ctrl.width = width;
            ctrl.reads_rs1 = true;
        }
        opcodes::OP_STORE => {
            ctrl.width = match d.funct3 {
                funct3::SB => MemWidth::Byte,
                funct3::SH => MemWidth::Half,
                funct3::SW => MemWidth::Word,
                _ => return Err(illegal),
            };
            ctrl.mem_write = true;
            ctrl.reads_rs1 = true;
            ctrl.reads_rs2 = true;
        }
        opcodes::OP_IMM => {
            ctrl.reg_write = true;
            ctrl.reads_rs1 = true;
            ctrl.alu = match d.funct3 {
                funct3::ADD_SUB => AluOp::Add,
                funct3::SLT => AluOp::Slt,
                funct3::SLTU => AluOp::Sltu,
                funct3::XOR => AluOp::Xor,
                funct3::OR => AluOp::Or,
                funct3::AND => AluOp::And,
                funct3::SLL => {
                    if d.funct7 != funct7::DEFAULT {
                        return Err(illegal);
                    }
                    AluOp::Sll
                }
                funct3::SRL_SRA => match d.funct7 {
                    funct7::DEFAULT => AluOp::Srl,
                    funct7::ALT => AluOp::Sra,
                    _ => return Err(illegal),
                },
                _ => return Err(illegal),
            };
        }
        opcodes::OP_REG => {
            ctrl.reg_write = true;
            ctrl.b_src = OpBSrc::Reg2;
            ctrl.reads_rs1 = true;
            ctrl.reads_rs2 = true;
            ctrl.alu = match (d.funct7, d.funct3) {
                (funct7::DEFAULT, funct3::ADD_SUB) => AluOp::Add,
                (funct7::ALT, funct3::ADD_SUB) => AluOp::Sub,
                (funct7::DEFAULT, funct3::SLL) => AluOp::Sll,
                (funct7::DEFAULT, funct3::SLT) => AluOp::Slt,
                (funct7::DEFAULT, funct3::SLTU) => AluOp::Sltu,
                (funct7::DEFAULT, funct3::XOR) => AluOp::Xor,
                (funct7::DEFAULT, funct3::SRL_SRA) => AluOp::Srl,
                (funct7::ALT, funct3::SRL_SRA) => AluOp::Sra,
                (funct7::DEFAULT, funct3::OR) => AluOp::Or,
                (funct7::DEFAULT, funct3::AND) => AluOp::And,
                _ => return Err(illegal),
            };
        }
        opcodes::OP_MISC_MEM => {
            // FENCE and FENCE.I are no-ops in a single-hart flat-memory
            // machine; they flow through without side effects.
            match d.funct3 {
                funct3::FENCE | funct3::FENCE_I => {}
                _ => return Err(illegal),
            }
        }
        opcodes::OP_SYSTEM => {
            // ECALL (imm 0) and EBREAK (imm 1) both halt the machine
            // cleanly when they retire.
            if d.funct3 != funct3::PRIV || d.rd != 0 || d.rs1 != 0 || !(d.imm == 0 || d.imm == 1)
            {
                return Err(illegal);
            }
            ctrl.halt = true;
        }
        _ => return Err(illegal),
    }

    Ok(ctrl)
}
