//! Pipeline stage logic.
//!
//! One free function per stage, each operating on the whole datapath. The
//! datapath runs them in reverse pipeline order every cycle so that each
//! stage consumes the latch its predecessor filled on the previous cycle.

pub mod decode;
pub mod execute;
pub mod fetch;
pub mod memory;
pub mod writeback;

pub use decode::decode_stage;
pub use execute::execute_stage;
pub use fetch::fetch_stage;
pub use memory::memory_stage;
pub use writeback::writeback_stage;
