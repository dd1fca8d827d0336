//! Memory (MEM) stage.
//!
//! Performs the load or store for the instruction in EX/MEM, checking
//! alignment before touching the RAM. A misaligned or out-of-range access
//! faults the slot instead of performing the access; the fault surfaces at
//! Writeback. Instructions without a memory operation pass straight
//! through with the address port still visibly driven.

use crate::common::data::MemWidth;
use crate::common::error::Fault;
use crate::core::Datapath;
use crate::core::pipeline::latches::MemWbEntry;
use crate::core::pipeline::probes::MemoryProbe;

/// Executes the memory stage for one cycle.
pub fn memory_stage(dp: &mut Datapath) {
    let Some(entry) = dp.ex_mem.take() else {
        dp.snap.memory = None;
        return;
    };

    let mut out = MemWbEntry {
        pc: entry.pc,
        rd: entry.rd,
        alu: entry.alu,
        load_data: 0,
        ctrl: entry.ctrl,
        fault: entry.fault,
    };

    if entry.fault.is_some() {
        dp.mem_wb = Some(out);
        dp.snap.memory = None;
        return;
    }

    let addr = entry.alu;
    let width = entry.ctrl.width;
    let mut probe = MemoryProbe {
        pc: entry.pc,
        address: addr,
        read: false,
        write: false,
        width: width.encoded(),
        store_data: entry.store_data,
    };

    if entry.ctrl.mem_read {
        out.fault = match access(dp, addr, width, false, 0) {
            Ok(raw) => {
                out.load_data = extend(raw, width, entry.ctrl.signed_load);
                probe.read = true;
                tracing::trace!("MEM load  addr={addr:#010x} data={:#010x}", out.load_data);
                None
            }
            Err(fault) => Some(fault),
        };
    } else if entry.ctrl.mem_write {
        out.fault = match access(dp, addr, width, true, entry.store_data) {
            Ok(_) => {
                probe.write = true;
                tracing::trace!(
                    "MEM store addr={addr:#010x} data={:#010x}",
                    entry.store_data
                );
                None
            }
            Err(fault) => Some(fault),
        };
    }

    dp.mem_wb = Some(out);
    dp.snap.memory = Some(probe);
}

/// Checks alignment and performs the access, mapping RAM errors to the
/// matching load or store fault. Stores return zero.
fn access(
    dp: &mut Datapath,
    addr: u32,
    width: MemWidth,
    store: bool,
    data: u32,
) -> Result<u32, Fault> {
    if addr & width.align_mask() != 0 {
        return Err(if store {
            Fault::StoreAddressMisaligned(addr)
        } else {
            Fault::LoadAddressMisaligned(addr)
        });
    }
    if store {
        dp.mem
            .write(addr, width, data)
            .map(|()| 0)
            .map_err(|_| Fault::StoreAccessFault(addr))
    } else {
        dp.mem
            .read(addr, width)
            .map_err(|_| Fault::LoadAccessFault(addr))
    }
}

/// Extends a raw loaded value to 32 bits.
fn extend(raw: u32, width: MemWidth, signed: bool) -> u32 {
    if !signed {
        return raw;
    }
    match width {
        MemWidth::Byte => raw as u8 as i8 as i32 as u32,
        MemWidth::Half => raw as u16 as i16 as i32 as u32,
        _ => raw,
    }
}
