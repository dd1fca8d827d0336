//! Fluent RV32I instruction encoder for tests.

use ripple_core::isa::rv32i::funct3;
use ripple_core::isa::rv32i::funct7;
use ripple_core::isa::rv32i::opcodes::*;

pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            funct7: 0,
            imm: 0,
        }
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: u32) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: u32) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: u32) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i32) -> Self {
        self.imm = imm;
        self
    }

    // --- R-type ---

    fn r_type(mut self, f3: u32, f7: u32, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.opcode = OP_REG;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.funct7 = f7;
        self
    }

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::ADD_SUB, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::ADD_SUB, funct7::ALT, rd, rs1, rs2)
    }

    pub fn and(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::AND, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn or(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::OR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn xor(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::XOR, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::SLT, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::SLTU, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sll(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::SLL, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::SRL_SRA, funct7::DEFAULT, rd, rs1, rs2)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.r_type(funct3::SRL_SRA, funct7::ALT, rd, rs1, rs2)
    }

    // --- I-type ---

    fn i_type(mut self, opcode: u32, f3: u32, rd: u32, rs1: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_IMM, funct3::ADD_SUB, rd, rs1, imm)
    }

    pub fn andi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_IMM, funct3::AND, rd, rs1, imm)
    }

    pub fn ori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_IMM, funct3::OR, rd, rs1, imm)
    }

    pub fn xori(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_IMM, funct3::XOR, rd, rs1, imm)
    }

    pub fn slti(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_IMM, funct3::SLT, rd, rs1, imm)
    }

    pub fn slli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i_type(OP_IMM, funct3::SLL, rd, rs1, shamt as i32)
    }

    pub fn srli(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i_type(OP_IMM, funct3::SRL_SRA, rd, rs1, shamt as i32)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        self.i_type(OP_IMM, funct3::SRL_SRA, rd, rs1, (0x400 | shamt) as i32)
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_LOAD, funct3::LB, rd, rs1, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_LOAD, funct3::LH, rd, rs1, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_LOAD, funct3::LW, rd, rs1, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_LOAD, funct3::LBU, rd, rs1, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_LOAD, funct3::LHU, rd, rs1, imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.i_type(OP_JALR, funct3::JALR, rd, rs1, imm)
    }

    pub fn ecall(self) -> Self {
        self.i_type(OP_SYSTEM, funct3::PRIV, 0, 0, 0)
    }

    pub fn ebreak(self) -> Self {
        self.i_type(OP_SYSTEM, funct3::PRIV, 0, 0, 1)
    }

    pub fn fence(self) -> Self {
        self.i_type(OP_MISC_MEM, funct3::FENCE, 0, 0, 0)
    }

    pub fn nop(self) -> Self {
        self.addi(0, 0, 0)
    }

    // --- S-type ---

    fn s_type(mut self, f3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_STORE;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    pub fn sb(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.s_type(funct3::SB, rs1, rs2, imm)
    }

    pub fn sh(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.s_type(funct3::SH, rs1, rs2, imm)
    }

    pub fn sw(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.s_type(funct3::SW, rs1, rs2, imm)
    }

    // --- B-type ---

    fn b_type(mut self, f3: u32, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BEQ, rs1, rs2, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BNE, rs1, rs2, imm)
    }

    pub fn blt(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BLT, rs1, rs2, imm)
    }

    pub fn bge(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BGE, rs1, rs2, imm)
    }

    pub fn bltu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BLTU, rs1, rs2, imm)
    }

    pub fn bgeu(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.b_type(funct3::BGEU, rs1, rs2, imm)
    }

    // --- U- and J-type ---

    /// `imm20` is the 20-bit value placed in bits 31:12.
    pub fn lui(mut self, rd: u32, imm20: u32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = (imm20 << 12) as i32;
        self
    }

    /// `imm20` is the 20-bit value placed in bits 31:12.
    pub fn auipc(mut self, rd: u32, imm20: u32) -> Self {
        self.opcode = OP_AUIPC;
        self.rd = rd;
        self.imm = (imm20 << 12) as i32;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    /// Encodes the instruction per the format its opcode implies.
    pub fn build(self) -> u32 {
        let imm = self.imm as u32;
        match self.opcode {
            OP_REG => {
                (self.funct7 << 25)
                    | (self.rs2 << 20)
                    | (self.rs1 << 15)
                    | (self.funct3 << 12)
                    | (self.rd << 7)
                    | self.opcode
            }
            OP_IMM | OP_LOAD | OP_JALR | OP_SYSTEM | OP_MISC_MEM => {
                ((imm & 0xFFF) << 20)
                    | (self.rs1 << 15)
                    | (self.funct3 << 12)
                    | (self.rd << 7)
                    | self.opcode
            }
            OP_STORE => {
                (((imm >> 5) & 0x7F) << 25)
                    | (self.rs2 << 20)
                    | (self.rs1 << 15)
                    | (self.funct3 << 12)
                    | ((imm & 0x1F) << 7)
                    | self.opcode
            }
            OP_BRANCH => {
                (((imm >> 12) & 0x1) << 31)
                    | (((imm >> 5) & 0x3F) << 25)
                    | (self.rs2 << 20)
                    | (self.rs1 << 15)
                    | (self.funct3 << 12)
                    | (((imm >> 1) & 0xF) << 8)
                    | (((imm >> 11) & 0x1) << 7)
                    | self.opcode
            }
            OP_LUI | OP_AUIPC => (imm & 0xFFFF_F000) | (self.rd << 7) | self.opcode,
            OP_JAL => {
                (((imm >> 20) & 0x1) << 31)
                    | (((imm >> 1) & 0x3FF) << 21)
                    | (((imm >> 11) & 0x1) << 20)
                    | (((imm >> 12) & 0xFF) << 12)
                    | (self.rd << 7)
                    | self.opcode
            }
            _ => panic!("unknown opcode {:#09b}", self.opcode),
        }
    }
}
