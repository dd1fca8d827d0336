//! Simulator configuration.
//!
//! Defaults match the flat memory map the verification harness assumes:
//! 1 MiB of RAM based at `0x0100_0000` with the reset vector at its base.
//! Configuration is supplied as JSON (see the CLI's `--config`) or via
//! `Config::default()` in tests.

use serde::Deserialize;

/// Baseline hardware constants used when a field is not overridden.
mod defaults {
    /// Base address of the flat RAM.
    pub const MEM_BASE: u32 = 0x0100_0000;

    /// RAM size in bytes (1 MiB).
    pub const MEM_SIZE: usize = 0x0010_0000;
}

/// Top-level simulator configuration.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base address of the flat RAM serving fetch and data access.
    pub mem_base: u32,

    /// RAM size in bytes.
    pub mem_size: usize,

    /// Program counter at reset. Program images are loaded at `mem_base`,
    /// so this defaults to the same address.
    pub reset_pc: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mem_base: defaults::MEM_BASE,
            mem_size: defaults::MEM_SIZE,
            reset_pc: defaults::MEM_BASE,
        }
    }
}
