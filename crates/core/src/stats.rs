//! Execution statistics.

use serde::Serialize;

/// Counters accumulated over a run.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct Stats {
    /// Cycles simulated.
    pub cycles: u64,
    /// Instructions that reached Writeback without faulting.
    pub instructions_retired: u64,
    /// Retired ALU and nop instructions.
    pub inst_alu: u64,
    /// Retired loads.
    pub inst_load: u64,
    /// Retired stores.
    pub inst_store: u64,
    /// Retired conditional branches.
    pub inst_branch: u64,
    /// Retired jumps.
    pub inst_jump: u64,
    /// Retired system instructions.
    pub inst_system: u64,
    /// Cycles Decode spent stalled on a data hazard.
    pub stall_cycles: u64,
    /// Wrong-path slots squashed by redirects.
    pub squashed: u64,
    /// Conditional branches resolved in Execute.
    pub branches: u64,
    /// Of those, branches resolved taken.
    pub branches_taken: u64,
    /// Faults that reached Writeback.
    pub faults: u64,
}

impl Stats {
    /// Cycles per retired instruction, or 0.0 before anything retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }
}

impl std::fmt::Display for Stats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "cycles:        {}", self.cycles)?;
        writeln!(f, "retired:       {}", self.instructions_retired)?;
        writeln!(
            f,
            "  alu {} / load {} / store {} / branch {} / jump {} / system {}",
            self.inst_alu,
            self.inst_load,
            self.inst_store,
            self.inst_branch,
            self.inst_jump,
            self.inst_system
        )?;
        writeln!(f, "stall cycles:  {}", self.stall_cycles)?;
        writeln!(f, "squashed:      {}", self.squashed)?;
        writeln!(
            f,
            "branches:      {} ({} taken)",
            self.branches, self.branches_taken
        )?;
        writeln!(f, "faults:        {}", self.faults)?;
        write!(f, "cpi:           {:.3}", self.cpi())
    }
}
