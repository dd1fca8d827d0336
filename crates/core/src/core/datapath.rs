//! The pipelined datapath.
//!
//! Holds every piece of machine state and advances it one cycle per call
//! to [`Datapath::tick`]. The stages run in reverse pipeline order each
//! cycle:
//!
//! 1. Writeback retires MEM/WB and writes the register file.
//! 2. Memory consumes EX/MEM and performs the load or store.
//! 3. Execute consumes ID/EX and may post a redirect.
//! 4. Decode consumes IF/ID, reads registers and handles interlocks.
//! 5. Fetch refills IF/ID and advances the pc.
//!
//! Running in this order gives every latch single-cycle occupancy without
//! double buffering, and makes the register file write-then-read within a
//! cycle. A redirect posted by Execute is applied after Fetch has run, so
//! the corrected pc reaches Fetch on the next cycle and the wrong-path
//! slot fetched this cycle is squashed.

use crate::common::error::Fault;
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, MemWbEntry};
use crate::core::pipeline::probes::Snapshot;
use crate::core::pipeline::stages::{
    decode_stage, execute_stage, fetch_stage, memory_stage, writeback_stage,
};
use crate::mem::Ram;
use crate::stats::Stats;

/// Complete state of the pipelined machine.
///
/// Fields are public for the stage functions and for test harnesses that
/// need to preload registers or memory.
#[derive(Clone, Debug)]
pub struct Datapath {
    /// Program counter: the next address Fetch will read.
    pub pc: u32,
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Flat RAM, shared by the fetch and data ports.
    pub mem: Ram,
    /// IF/ID latch.
    pub if_id: Option<IfIdEntry>,
    /// ID/EX latch.
    pub id_ex: Option<IdExEntry>,
    /// EX/MEM latch.
    pub ex_mem: Option<ExMemEntry>,
    /// MEM/WB latch.
    pub mem_wb: Option<MemWbEntry>,
    /// Execution statistics.
    pub stats: Stats,
    /// Redirect target posted by Execute this cycle.
    pub redirect: Option<u32>,
    /// Decode is holding its instruction this cycle.
    pub stall: bool,
    /// Fetch idles after a fetch fault until a redirect arrives.
    pub fetch_stopped: bool,
    /// Observation record being assembled for the current cycle.
    pub snap: Snapshot,
    /// Cycles elapsed since reset.
    pub cycle: u64,
    /// A halt instruction has retired.
    pub halted: bool,
    /// Fault that reached Writeback this cycle, with the pc it retired
    /// from.
    pub retired_fault: Option<(Fault, u32)>,
}

impl Datapath {
    /// Creates a datapath in its reset state for the given configuration.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.reset_pc,
            regs: RegisterFile::new(),
            mem: Ram::new(config.mem_base, config.mem_size),
            if_id: None,
            id_ex: None,
            ex_mem: None,
            mem_wb: None,
            stats: Stats::default(),
            redirect: None,
            stall: false,
            fetch_stopped: false,
            snap: Snapshot::default(),
            cycle: 0,
            halted: false,
            retired_fault: None,
        }
    }

    /// Advances the machine by one cycle and returns its observation
    /// record.
    pub fn tick(&mut self) -> Snapshot {
        self.snap = Snapshot {
            cycle: self.cycle,
            ..Snapshot::default()
        };
        self.stall = false;
        self.retired_fault = None;

        writeback_stage(self);
        memory_stage(self);
        execute_stage(self);
        decode_stage(self);
        fetch_stage(self);

        if let Some(target) = self.redirect.take() {
            // The slot Fetch filled this cycle is wrong-path.
            if self.if_id.take().is_some() {
                self.stats.squashed += 1;
            }
            self.pc = target;
            self.fetch_stopped = false;
        }

        self.stats.cycles += 1;
        self.cycle += 1;
        self.snap
    }
}
