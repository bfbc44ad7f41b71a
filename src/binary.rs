//! Bounded little-endian cursor and write helpers.
//!
//! Record payloads are decoded from an in-memory slice through
//! [`BiffReader`], which tracks its own position and refuses to read
//! past the end of the payload. Writes go straight to any
//! `std::io::Write` sink as little-endian bytes.

use std::io::Write;

use zerocopy::{FromBytes, I32, LE, U16, U64};

use crate::error::{BiffError, BiffResult};

/// Bounded cursor over a record payload.
///
/// Each decode operates on its own cursor; a failed read consumes
/// nothing, so the error position is always the start of the field
/// that could not be read.
#[derive(Debug)]
pub struct BiffReader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> BiffReader<'a> {
    /// Create a cursor positioned at the start of `data`.
    #[inline]
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Bytes left before the end of the payload.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    /// Current offset from the start of the payload.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    fn take(&mut self, n: usize) -> BiffResult<&'a [u8]> {
        if n > self.remaining() {
            return Err(BiffError::TruncatedInput {
                needed: n,
                remaining: self.remaining(),
            });
        }
        let slice = &self.data[self.pos..self.pos + n];
        self.pos += n;
        Ok(slice)
    }

    /// Read a single byte.
    #[inline]
    pub fn read_u8(&mut self) -> BiffResult<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a little-endian u16.
    #[inline]
    pub fn read_u16(&mut self) -> BiffResult<u16> {
        let bytes = self.take(2)?;
        Ok(U16::<LE>::read_from_bytes(bytes).map(|v| v.get()).unwrap_or(0))
    }

    /// Read a little-endian i32.
    #[inline]
    pub fn read_i32(&mut self) -> BiffResult<i32> {
        let bytes = self.take(4)?;
        Ok(I32::<LE>::read_from_bytes(bytes).map(|v| v.get()).unwrap_or(0))
    }

    /// Read a little-endian u64.
    #[inline]
    pub fn read_u64(&mut self) -> BiffResult<u64> {
        let bytes = self.take(8)?;
        Ok(U64::<LE>::read_from_bytes(bytes).map(|v| v.get()).unwrap_or(0))
    }

    /// Read exactly `n` raw bytes.
    #[inline]
    pub fn read_slice(&mut self, n: usize) -> BiffResult<&'a [u8]> {
        self.take(n)
    }
}

/// Write a single byte.
#[inline]
pub fn write_u8<W: Write>(writer: &mut W, value: u8) -> BiffResult<()> {
    writer.write_all(&[value])?;
    Ok(())
}

/// Write a u16 as little-endian bytes.
#[inline]
pub fn write_u16<W: Write>(writer: &mut W, value: u16) -> BiffResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Write an i32 as little-endian bytes.
#[inline]
pub fn write_i32<W: Write>(writer: &mut W, value: i32) -> BiffResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}

/// Write a u64 as little-endian bytes.
#[inline]
pub fn write_u64<W: Write>(writer: &mut W, value: u64) -> BiffResult<()> {
    writer.write_all(&value.to_le_bytes())?;
    Ok(())
}
