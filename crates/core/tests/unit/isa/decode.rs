use ripple_core::isa::decode::decode;
use ripple_core::isa::rv32i::opcodes;

use crate::common::InstructionBuilder;

#[test]
fn i_type_fields_and_negative_immediate() {
    // addi x1, x0, -1
    let d = decode(0xFFF0_0093);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.rd, 1);
    assert_eq!(d.rs1, 0);
    assert_eq!(d.funct3, 0);
    assert_eq!(d.imm, -1);
}

#[test]
fn load_immediate_is_sign_extended() {
    // lw x2, 8(x1)
    let d = decode(0x0080_A103);
    assert_eq!(d.opcode, opcodes::OP_LOAD);
    assert_eq!(d.rd, 2);
    assert_eq!(d.rs1, 1);
    assert_eq!(d.imm, 8);

    let d = decode(InstructionBuilder::new().lw(2, 1, -8).build());
    assert_eq!(d.imm, -8);
}

#[test]
fn s_type_immediate_reassembles() {
    // sw x2, 12(x1)
    let d = decode(0x0020_A623);
    assert_eq!(d.opcode, opcodes::OP_STORE);
    assert_eq!(d.rs1, 1);
    assert_eq!(d.rs2, 2);
    assert_eq!(d.imm, 12);

    let d = decode(InstructionBuilder::new().sb(7, 3, -100).build());
    assert_eq!(d.imm, -100);
}

#[test]
fn b_type_immediate_reassembles() {
    // beq x1, x2, -4
    let d = decode(0xFE20_8EE3);
    assert_eq!(d.opcode, opcodes::OP_BRANCH);
    assert_eq!(d.rs1, 1);
    assert_eq!(d.rs2, 2);
    assert_eq!(d.imm, -4);

    let d = decode(InstructionBuilder::new().bne(5, 6, 0xFFC).build());
    assert_eq!(d.imm, 0xFFC);
}

#[test]
fn u_type_keeps_high_twenty_bits() {
    // lui x5, 0x12345
    let d = decode(0x1234_52B7);
    assert_eq!(d.opcode, opcodes::OP_LUI);
    assert_eq!(d.rd, 5);
    assert_eq!(d.imm, 0x1234_5000);

    let d = decode(InstructionBuilder::new().auipc(3, 0xFFFFF).build());
    assert_eq!(d.imm as u32, 0xFFFF_F000);
}

#[test]
fn j_type_immediate_reassembles() {
    // jal x1, 8
    let d = decode(0x0080_00EF);
    assert_eq!(d.opcode, opcodes::OP_JAL);
    assert_eq!(d.rd, 1);
    assert_eq!(d.imm, 8);

    let d = decode(InstructionBuilder::new().jal(0, -2048).build());
    assert_eq!(d.imm, -2048);
}

#[test]
fn shamt_aliases_rs2_bits() {
    // srai x1, x2, 3
    let d = decode(0x4031_5093);
    assert_eq!(d.opcode, opcodes::OP_IMM);
    assert_eq!(d.shamt, 3);
    assert_eq!(d.funct7, 0b0100000);
}

#[test]
fn system_encodings() {
    let d = decode(0x0000_0073); // ecall
    assert_eq!(d.opcode, opcodes::OP_SYSTEM);
    assert_eq!(d.imm, 0);

    let d = decode(0x0010_0073); // ebreak
    assert_eq!(d.imm, 1);
}
