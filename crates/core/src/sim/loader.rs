//! Program image loading.
//!
//! Two image formats:
//! 1. Raw binary: the file's bytes verbatim, placed at the reset pc.
//! 2. Hex text: one 32-bit instruction word per line as eight hex digits
//!    (an optional `0x` prefix is accepted). Blank lines and lines starting
//!    with `#` or `//` are skipped, as is anything after the word on a
//!    line. Words are emitted little-endian.

use std::fs;
use std::path::Path;

use crate::common::error::SimError;

/// Reads a raw binary image.
pub fn load_binary(path: &Path) -> Result<Vec<u8>, SimError> {
    Ok(fs::read(path)?)
}

/// Reads and parses a hex text image.
pub fn load_hex(path: &Path) -> Result<Vec<u8>, SimError> {
    let text = fs::read_to_string(path)?;
    parse_hex(&text)
}

/// Parses hex text into a little-endian byte image.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, SimError> {
    let mut image = Vec::new();

    for (lineno, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }

        let token = line
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .trim_start_matches("0x");
        if token.len() != 8 {
            return Err(SimError::InvalidImage(format!(
                "line {}: expected 8 hex digits, got {token:?}",
                lineno + 1
            )));
        }
        let word = u32::from_str_radix(token, 16).map_err(|e| {
            SimError::InvalidImage(format!("line {}: {e}", lineno + 1))
        })?;
        image.extend_from_slice(&word.to_le_bytes());
    }

    if image.is_empty() {
        return Err(SimError::InvalidImage("image contains no words".into()));
    }

    Ok(image)
}
