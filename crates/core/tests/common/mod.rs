//! Shared test infrastructure.

pub mod builder;

pub use builder::instruction::InstructionBuilder;
pub use harness::TestContext;
