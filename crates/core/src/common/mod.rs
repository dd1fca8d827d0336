//! Common types shared across the simulator.
//!
//! This module provides the building blocks used by every component:
//! 1. **Constants:** Instruction width and register-file geometry.
//! 2. **Access Widths:** Byte/half/word transfer sizes and their encodings.
//! 3. **Error Handling:** The pipeline fault taxonomy and memory/simulation
//!    error types.

/// System-wide constants.
pub mod constants;

/// Memory transfer width definitions.
pub mod data;

/// Fault taxonomy and error types.
pub mod error;

pub use data::MemWidth;
pub use error::{Fault, MemoryError, SimError};
