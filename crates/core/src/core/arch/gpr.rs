//! General-purpose register file.

use crate::common::constants::REG_COUNT;
use crate::isa::abi;

/// The 32 general-purpose registers.
///
/// Register `x0` is hardwired to zero: reads always return 0 and writes to
/// index 0 are dropped at the write port. The stored array keeps slot 0 at
/// zero so dumps stay honest without special cases.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; REG_COUNT],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads register `idx`. Index 0 always returns 0.
    #[inline]
    pub fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Writes `value` to register `idx`. Writes to index 0 are dropped.
    #[inline]
    pub fn write(&mut self, idx: usize, value: u32) {
        if idx != 0 {
            self.regs[idx] = value;
        }
    }

    /// Renders every register with its ABI name, four per line.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (idx, value) in self.regs.iter().enumerate() {
            out.push_str(&format!("{:>4}: {:#010x}  ", abi::name(idx), value));
            if idx % 4 == 3 {
                out.push('\n');
            }
        }
        out
    }
}
