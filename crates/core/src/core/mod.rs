//! Datapath core.
//!
//! Architectural state, pipeline latches and stage logic, and the
//! combinational units the stages drive.

pub mod arch;
pub mod datapath;
pub mod pipeline;
pub mod units;

pub use datapath::Datapath;
