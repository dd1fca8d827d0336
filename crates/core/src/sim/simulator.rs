//! Top-level simulator.
//!
//! Wraps a [`Datapath`] with program loading and a run loop. `step`
//! advances one cycle and hands back the cycle's [`Snapshot`]; `run` ticks
//! until a halt instruction retires, a fault retires or a cycle budget is
//! exhausted.

use crate::common::data::MemWidth;
use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Datapath;
use crate::core::pipeline::probes::Snapshot;

/// Why [`Simulator::run`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// An ECALL or EBREAK retired.
    Halted,
    /// The cycle budget ran out first.
    CycleLimit,
}

/// A datapath plus the plumbing to load and run programs on it.
#[derive(Clone, Debug)]
pub struct Simulator {
    /// The machine being simulated. Public so harnesses can preload
    /// registers and memory or inspect latches directly.
    pub datapath: Datapath,
}

impl Simulator {
    /// Creates a simulator in the reset state for `config`.
    pub fn new(config: &Config) -> Self {
        Self {
            datapath: Datapath::new(config),
        }
    }

    /// Places `image` at the reset pc.
    pub fn load_program(&mut self, image: &[u8]) -> Result<(), SimError> {
        let pc = self.datapath.pc;
        self.datapath
            .mem
            .load_image(pc, image)
            .map_err(|e| SimError::InvalidImage(e.to_string()))?;
        tracing::debug!("loaded {} bytes at {pc:#010x}", image.len());
        Ok(())
    }

    /// Advances the machine one cycle.
    pub fn step(&mut self) -> Snapshot {
        self.datapath.tick()
    }

    /// Runs until halt, fault or `max_cycles` elapsed cycles, whichever
    /// comes first. A retired fault is returned as an error.
    pub fn run(&mut self, max_cycles: u64) -> Result<StopReason, SimError> {
        for _ in 0..max_cycles {
            let snapshot = self.datapath.tick();
            if let Some((fault, pc)) = self.datapath.retired_fault {
                return Err(SimError::Fault {
                    fault,
                    pc,
                    cycle: snapshot.cycle,
                });
            }
            if self.datapath.halted {
                return Ok(StopReason::Halted);
            }
        }
        Ok(StopReason::CycleLimit)
    }

    /// Reads a word from RAM, bypassing the pipeline.
    pub fn read_word(&self, addr: u32) -> Result<u32, SimError> {
        Ok(self.datapath.mem.read(addr, MemWidth::Word)?)
    }

    /// Writes a word to RAM, bypassing the pipeline.
    pub fn write_word(&mut self, addr: u32, value: u32) -> Result<(), SimError> {
        Ok(self.datapath.mem.write(addr, MemWidth::Word, value)?)
    }
}
