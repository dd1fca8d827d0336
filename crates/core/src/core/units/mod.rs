//! Combinational units driven by the Execute stage.

pub mod alu;
pub mod bru;

pub use alu::Alu;
