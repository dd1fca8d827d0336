//! ABI register names.

/// Hardwired zero register.
pub const REG_ZERO: usize = 0;
/// Return address register.
pub const REG_RA: usize = 1;
/// Stack pointer register.
pub const REG_SP: usize = 2;
/// First argument / return value register.
pub const REG_A0: usize = 10;

/// ABI names of the 32 general-purpose registers, indexed by register number.
pub const NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1",
    "a2", "a3", "a4", "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7",
    "s8", "s9", "s10", "s11", "t3", "t4", "t5", "t6",
];

/// ABI name of a register index, or `"x?"` for an out-of-range index.
pub fn name(idx: usize) -> &'static str {
    NAMES.get(idx).copied().unwrap_or("x?")
}
