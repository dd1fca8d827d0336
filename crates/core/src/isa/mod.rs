//! RV32I instruction set support.
//!
//! This module covers everything the pipeline needs to know about the ISA:
//! 1. **Field Extraction:** Bit-level access to opcode, register, and
//!    function fields.
//! 2. **Decode:** Immediate reconstruction per instruction format.
//! 3. **Tables:** Major opcodes and funct3/funct7 codes for the base
//!    integer set.
//! 4. **ABI:** Register naming for dumps and diagnostics.

/// ABI register names.
pub mod abi;

/// Immediate decoding per instruction format.
pub mod decode;

/// Instruction field extraction.
pub mod instruction;

/// RV32I opcode and function-code tables.
pub mod rv32i;

pub use decode::decode;
pub use instruction::{Decoded, InstructionBits};
