//! Unit tests, organised to mirror the source tree.


/// Configuration defaults and JSON deserialization.
pub mod config;

/// Decoder field extraction and immediate reconstruction.
pub mod isa;

/// Hex image parsing.
pub mod loader;
