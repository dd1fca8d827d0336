//! Instruction Fetch (IF) stage.
//!
//! Reads the word at the program counter, deposits it in the IF/ID latch
//! and advances the pc by four. Control flow is always predicted
//! not-taken; Execute redirects the pc when it resolves otherwise.
//!
//! A misaligned or out-of-range pc produces a single faulted slot, after
//! which Fetch idles until a redirect supplies a fresh pc. During a stall
//! cycle Fetch holds the pc and re-drives the probe without touching the
//! latch.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::common::error::Fault;
use crate::core::Datapath;
use crate::core::pipeline::latches::IfIdEntry;
use crate::core::pipeline::probes::FetchProbe;

/// Executes the fetch stage for one cycle.
pub fn fetch_stage(dp: &mut Datapath) {
    if dp.stall {
        // Decode is holding its instruction; keep the pc and the IF/ID
        // latch untouched but keep the fetch port visibly driven.
        let insn = dp.mem.read_word(dp.pc).unwrap_or(0);
        tracing::trace!("IF  pc={:#010x} hold (stall)", dp.pc);
        dp.snap.fetch = Some(FetchProbe { pc: dp.pc, insn });
        return;
    }

    if dp.fetch_stopped {
        dp.snap.fetch = None;
        return;
    }

    if dp.pc & (INSTRUCTION_BYTES - 1) != 0 {
        tracing::trace!("IF  pc={:#010x} misaligned", dp.pc);
        dp.if_id = Some(IfIdEntry {
            pc: dp.pc,
            insn: 0,
            fault: Some(Fault::InstructionAddressMisaligned(dp.pc)),
        });
        dp.fetch_stopped = true;
        dp.snap.fetch = Some(FetchProbe { pc: dp.pc, insn: 0 });
        return;
    }

    match dp.mem.read_word(dp.pc) {
        Ok(insn) => {
            tracing::trace!("IF  pc={:#010x} insn={insn:#010x}", dp.pc);
            dp.if_id = Some(IfIdEntry {
                pc: dp.pc,
                insn,
                fault: None,
            });
            dp.snap.fetch = Some(FetchProbe { pc: dp.pc, insn });
            dp.pc = dp.pc.wrapping_add(INSTRUCTION_BYTES);
        }
        Err(_) => {
            tracing::trace!("IF  pc={:#010x} access fault", dp.pc);
            dp.if_id = Some(IfIdEntry {
                pc: dp.pc,
                insn: 0,
                fault: Some(Fault::InstructionAccessFault(dp.pc)),
            });
            dp.fetch_stopped = true;
            dp.snap.fetch = Some(FetchProbe { pc: dp.pc, insn: 0 });
        }
    }
}
