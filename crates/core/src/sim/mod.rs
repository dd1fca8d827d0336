//! Simulation driver.

pub mod loader;
pub mod simulator;

pub use simulator::{Simulator, StopReason};
