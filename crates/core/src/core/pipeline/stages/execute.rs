//! Execute (EX) stage.
//!
//! Drives the ALU, resolves branch and jump outcomes and fills the EX/MEM
//! latch. For loads and stores the ALU result is the effective address; for
//! taken branches and jumps it is the redirect target.
//!
//! A taken control transfer posts a redirect which the datapath applies at
//! the end of the cycle, so the corrected pc reaches Fetch one cycle after
//! it resolves here.

use crate::core::Datapath;
use crate::core::pipeline::latches::ExMemEntry;
use crate::core::pipeline::probes::ExecuteProbe;
use crate::core::pipeline::signals::{OpASrc, OpBSrc};
use crate::core::units::{Alu, bru};

/// Executes the execute stage for one cycle.
pub fn execute_stage(dp: &mut Datapath) {
    let Some(entry) = dp.id_ex.take() else {
        dp.snap.execute = None;
        return;
    };

    if entry.fault.is_some() {
        dp.ex_mem = Some(ExMemEntry {
            pc: entry.pc,
            rd: entry.rd,
            ctrl: entry.ctrl,
            fault: entry.fault,
            ..Default::default()
        });
        dp.snap.execute = None;
        return;
    }

    let a = match entry.ctrl.a_src {
        OpASrc::Reg1 => entry.rv1,
        OpASrc::Pc => entry.pc,
        OpASrc::Zero => 0,
    };
    let b = match entry.ctrl.b_src {
        OpBSrc::Imm => entry.imm as u32,
        OpBSrc::Reg2 => entry.rv2,
    };

    let mut alu = Alu::execute(entry.ctrl.alu, a, b);
    if entry.ctrl.jump {
        // JALR clears bit 0 of the target; harmless for JAL.
        alu &= !1;
    }

    let taken = entry.ctrl.jump
        || (entry.ctrl.branch && bru::branch_taken(entry.funct3, entry.rv1, entry.rv2));

    if entry.ctrl.branch {
        dp.stats.branches += 1;
        if taken {
            dp.stats.branches_taken += 1;
        }
    }

    if taken {
        tracing::trace!("EX  pc={:#010x} redirect target={alu:#010x}", entry.pc);
        dp.redirect = Some(alu);
    } else {
        tracing::trace!("EX  pc={:#010x} alu={alu:#010x}", entry.pc);
    }

    dp.ex_mem = Some(ExMemEntry {
        pc: entry.pc,
        rd: entry.rd,
        alu,
        store_data: entry.rv2,
        branch_taken: taken,
        ctrl: entry.ctrl,
        fault: None,
    });
    dp.snap.execute = Some(ExecuteProbe {
        pc: entry.pc,
        alu_result: alu,
        branch_taken: taken,
    });
}
