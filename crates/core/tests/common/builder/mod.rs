//! Builders for constructing test inputs.

pub mod instruction;
