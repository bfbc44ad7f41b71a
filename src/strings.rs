//! Dual-encoding BIFF string codec.
//!
//! BIFF stores text in one of two wire encodings chosen per string by
//! content: "compressed" (one byte per character) when every character
//! fits in a single byte, UTF-16LE ("wide") otherwise. A one-byte flag
//! in front of the character data records the choice. There is no
//! length prefix at this level; the character count lives in a field
//! owned by the enclosing record.
//!
//! Character counts are UTF-16 code units, so the length field and the
//! wide payload always agree, including for supplementary-plane text.

use std::io::Write;

use crate::binary::BiffReader;
use crate::error::{BiffError, BiffResult};

/// Encoding flag for compressed (single-byte) strings.
pub const FLAG_COMPRESSED: u8 = 0x00;
/// Encoding flag for wide (UTF-16LE) strings.
pub const FLAG_WIDE: u8 = 0x01;

/// True if the string contains a character outside the single-byte
/// range and therefore needs the wide encoding.
#[inline]
pub fn has_multibyte(s: &str) -> bool {
    s.chars().any(|c| c as u32 > 0xFF)
}

/// Character count as stored in BIFF length fields (UTF-16 code units).
#[inline]
pub fn char_count(s: &str) -> usize {
    s.encode_utf16().count()
}

/// Byte length of the encoded character data, excluding the flag byte.
#[inline]
pub fn encoded_len(s: &str) -> usize {
    if has_multibyte(s) {
        char_count(s) * 2
    } else {
        char_count(s)
    }
}

/// Write the encoding flag followed by the character data.
///
/// The compressed branch writes one byte per character (the low byte of
/// the code point), not UTF-8, so characters in 0x80..=0xFF occupy a
/// single byte on the wire.
pub fn write_string<W: Write>(writer: &mut W, value: &str) -> BiffResult<()> {
    if has_multibyte(value) {
        writer.write_all(&[FLAG_WIDE])?;
        for code_unit in value.encode_utf16() {
            writer.write_all(&code_unit.to_le_bytes())?;
        }
    } else {
        writer.write_all(&[FLAG_COMPRESSED])?;
        for ch in value.chars() {
            writer.write_all(&[ch as u8])?;
        }
    }
    Ok(())
}

/// Read a flag byte plus exactly `count` characters.
///
/// The caller supplies the character count from the record's own length
/// field. A flag other than 0/1 is malformed input, not a value to
/// guess around.
pub fn read_string(reader: &mut BiffReader<'_>, count: usize) -> BiffResult<String> {
    match reader.read_u8()? {
        FLAG_COMPRESSED => read_compressed(reader, count),
        FLAG_WIDE => read_wide(reader, count),
        found => Err(BiffError::InvalidDiscriminator { found }),
    }
}

/// Read `count` single-byte characters (flag already consumed).
pub fn read_compressed(reader: &mut BiffReader<'_>, count: usize) -> BiffResult<String> {
    let bytes = reader.read_slice(count)?;
    Ok(bytes.iter().map(|&b| b as char).collect())
}

/// Read `count` UTF-16LE code units (flag already consumed).
pub fn read_wide(reader: &mut BiffReader<'_>, count: usize) -> BiffResult<String> {
    let bytes = reader.read_slice(count * 2)?;
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();
    String::from_utf16(&units)
        .map_err(|e| BiffError::Encoding(format!("invalid UTF-16 string data: {}", e)))
}
