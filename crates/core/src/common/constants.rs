//! Constants used throughout the simulator.

/// Width of one RV32I instruction in bytes. Also the fetch increment.
pub const INSTRUCTION_BYTES: u32 = 4;

/// Number of general-purpose registers (x0-x31).
pub const REG_COUNT: usize = 32;

/// Mask applied to ALU shift amounts (RV32 shifts use the low 5 bits).
pub const SHIFT_MASK: u32 = 0x1F;
