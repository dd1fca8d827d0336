//! Architectural state.

pub mod gpr;

pub use gpr::RegisterFile;
