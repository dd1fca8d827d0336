//! Data hazard detection.
//!
//! The datapath resolves read-after-write hazards by stalling: Decode holds
//! its instruction until every producer it depends on has written the
//! register file. There is no forwarding network. Because the register file
//! writes before it is read within a cycle, an instruction in EX/MEM clears
//! the hazard two cycles later and one in MEM/WB clears it one cycle later,
//! so a dependent instruction stalls at most two cycles.

use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::ControlSignals;

/// True when the in-flight entry will write register `reg`.
///
/// Faulted entries never write, and writes to x0 are dropped, so neither
/// creates a hazard.
#[inline]
fn pending_write(reg_write: bool, rd: usize, faulted: bool, reg: usize) -> bool {
    reg_write && !faulted && rd != 0 && rd == reg
}

/// Decides whether the instruction being decoded must stall.
///
/// `ctrl` carries which source registers the instruction actually reads;
/// register index fields of formats without a source (U- and J-type) never
/// trigger a stall.
pub fn need_stall(
    ctrl: &ControlSignals,
    rs1: usize,
    rs2: usize,
    ex_mem: Option<&ExMemEntry>,
    mem_wb: Option<&MemWbEntry>,
) -> bool {
    let hazard = |reg: usize| {
        ex_mem.is_some_and(|e| pending_write(e.ctrl.reg_write, e.rd, e.fault.is_some(), reg))
            || mem_wb.is_some_and(|e| pending_write(e.ctrl.reg_write, e.rd, e.fault.is_some(), reg))
    };

    (ctrl.reads_rs1 && hazard(rs1)) || (ctrl.reads_rs2 && hazard(rs2))
}
