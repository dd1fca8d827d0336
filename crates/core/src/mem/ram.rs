//! Flat little-endian RAM.
//!
//! A single contiguous array mapped at a configurable base address. Both
//! the fetch port and the data port read from the same array, so a store
//! is visible to a fetch of the same address on the next cycle. Accesses
//! outside the mapped range fail with [`MemoryError::OutOfRange`]; the
//! pipeline turns that into the appropriate access fault.

use crate::common::data::MemWidth;
use crate::common::error::MemoryError;

/// Byte-addressed RAM mapped at `base`.
#[derive(Clone, Debug)]
pub struct Ram {
    base: u32,
    bytes: Vec<u8>,
}

impl Ram {
    /// Allocates `size` zeroed bytes mapped at `base`.
    pub fn new(base: u32, size: usize) -> Self {
        Self {
            base,
            bytes: vec![0; size],
        }
    }

    /// First mapped address.
    pub fn base(&self) -> u32 {
        self.base
    }

    /// Mapped size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Maps an address to an offset, checking that `len` bytes fit.
    fn offset(&self, addr: u32, len: usize) -> Result<usize, MemoryError> {
        let off = addr
            .checked_sub(self.base)
            .ok_or(MemoryError::OutOfRange { addr })? as usize;
        if off.checked_add(len).is_none_or(|end| end > self.bytes.len()) {
            return Err(MemoryError::OutOfRange { addr });
        }
        Ok(off)
    }

    /// Reads `width` bytes at `addr`, zero-extended to 32 bits.
    ///
    /// `MemWidth::Nop` reads nothing and returns 0.
    pub fn read(&self, addr: u32, width: MemWidth) -> Result<u32, MemoryError> {
        let len = width.bytes() as usize;
        if len == 0 {
            return Ok(0);
        }
        let off = self.offset(addr, len)?;
        let mut value: u32 = 0;
        for i in (0..len).rev() {
            value = (value << 8) | u32::from(self.bytes[off + i]);
        }
        Ok(value)
    }

    /// Writes the low `width` bytes of `value` at `addr`.
    pub fn write(&mut self, addr: u32, width: MemWidth, value: u32) -> Result<(), MemoryError> {
        let len = width.bytes() as usize;
        let off = self.offset(addr, len)?;
        for i in 0..len {
            self.bytes[off + i] = (value >> (8 * i)) as u8;
        }
        Ok(())
    }

    /// Reads a full word at `addr` (the fetch port).
    pub fn read_word(&self, addr: u32) -> Result<u32, MemoryError> {
        self.read(addr, MemWidth::Word)
    }

    /// Copies `image` into RAM starting at `addr`.
    pub fn load_image(&mut self, addr: u32, image: &[u8]) -> Result<(), MemoryError> {
        let off = self.offset(addr, image.len())?;
        self.bytes[off..off + image.len()].copy_from_slice(image);
        Ok(())
    }
}
