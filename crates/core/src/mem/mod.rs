//! Memory subsystem.

pub mod ram;

pub use ram::Ram;
