//! Pipeline structure.
//!
//! The datapath is a single-issue, in-order, five-slot pipeline. Four latch
//! banks separate the stages:
//!
//! 1. `IF/ID`  - fetched instruction word and its pc.
//! 2. `ID/EX`  - decoded fields, read operands and control signals.
//! 3. `EX/MEM` - ALU result, resolved branch outcome and store data.
//! 4. `MEM/WB` - value headed for the register write port.
//!
//! Each latch is an `Option`: `None` is a bubble. Register reads happen
//! combinationally inside the Decode stage's cycle, so a register write
//! commits exactly four cycles after its instruction was fetched when no
//! hazard intervenes.

pub mod hazards;
pub mod latches;
pub mod probes;
pub mod signals;
pub mod stages;
