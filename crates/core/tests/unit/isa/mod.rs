/// Field extraction and per-format immediate reconstruction.
pub mod decode;
