//! Writeback (WB) stage.
//!
//! Retires the instruction in MEM/WB: writes the register file, selects
//! between ALU result, loaded value and link address, and accounts for the
//! retirement in the statistics. Faulted slots retire without side effects
//! and park their fault on the datapath for the simulator to report.
//!
//! Writeback runs first each cycle, so its register write is visible to
//! the register reads Decode performs later in the same cycle.

use crate::common::constants::INSTRUCTION_BYTES;
use crate::core::Datapath;
use crate::core::pipeline::probes::WritebackProbe;

/// Executes the writeback stage for one cycle.
pub fn writeback_stage(dp: &mut Datapath) {
    let Some(entry) = dp.mem_wb.take() else {
        dp.snap.writeback = None;
        return;
    };

    if let Some(fault) = entry.fault {
        tracing::trace!("WB  pc={:#010x} fault: {fault}", entry.pc);
        dp.stats.faults += 1;
        dp.retired_fault = Some((fault, entry.pc));
        dp.snap.writeback = Some(WritebackProbe {
            pc: entry.pc,
            enable: false,
            rd: 0,
            data: 0,
            fault: Some(fault),
        });
        return;
    }

    let data = if entry.ctrl.mem_read {
        entry.load_data
    } else if entry.ctrl.jump {
        entry.pc.wrapping_add(INSTRUCTION_BYTES)
    } else {
        entry.alu
    };

    if entry.ctrl.reg_write {
        dp.regs.write(entry.rd, data);
        tracing::trace!("WB  pc={:#010x} x{}={data:#010x}", entry.pc, entry.rd);
    }

    if entry.ctrl.halt {
        dp.halted = true;
    }

    dp.stats.instructions_retired += 1;
    if entry.ctrl.halt {
        dp.stats.inst_system += 1;
    } else if entry.ctrl.jump {
        dp.stats.inst_jump += 1;
    } else if entry.ctrl.branch {
        dp.stats.inst_branch += 1;
    } else if entry.ctrl.mem_read {
        dp.stats.inst_load += 1;
    } else if entry.ctrl.mem_write {
        dp.stats.inst_store += 1;
    } else {
        dp.stats.inst_alu += 1;
    }

    let probe = WritebackProbe {
        pc: entry.pc,
        enable: entry.ctrl.reg_write,
        rd: entry.rd,
        data,
        fault: None,
    };
    dp.snap.writeback = Some(probe);

    // The write port group mirrors what retired.
    dp.snap.regfile.write_enable = probe.enable;
    dp.snap.regfile.write_addr = probe.rd;
    dp.snap.regfile.write_data = probe.data;
}
