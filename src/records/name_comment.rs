//! NAMECMT record (0x0894) - comment attached to a defined name.
//!
//! # Payload layout
//!
//! All integers little-endian:
//!
//! | Offset | Size | Field |
//! |--------|------|-------|
//! | 0 | 2 | record type |
//! | 2 | 2 | frt cell ref flag |
//! | 4 | 8 | reserved |
//! | 12 | 2 | name length (characters) |
//! | 14 | 2 | comment length (characters) |
//! | 16 | 1 | name encoding flag |
//! | 17 | var | name characters |
//! | + | 1 | comment encoding flag |
//! | + | var | comment characters |
//!
//! The length fields count characters, not bytes; a wide-encoded string
//! occupies twice as many bytes as its length field says.

use std::fmt;
use std::io::Write;

use crate::binary::{self, BiffReader};
use crate::error::BiffResult;
use crate::strings;

/// Comment associated with a defined name in the workbook.
///
/// The two leading header words and the 8-byte reserved field carry no
/// semantic value but must round-trip verbatim, so they are stored as
/// read rather than discarded. Length fields are never stored; every
/// encode re-derives them from the current strings, so setter mutation
/// is always reflected.
///
/// Not internally synchronized: concurrent mutation through the setters
/// needs caller-supplied locking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameCommentRecord {
    record_type: u16,
    frt_cell_ref_flag: u16,
    reserved: u64,
    name: String,
    comment: String,
}

impl NameCommentRecord {
    /// Record type tag in the workbook stream.
    pub const SID: u16 = 0x0894;

    /// Create a new record with zeroed header fields.
    pub fn new(name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            record_type: 0,
            frt_cell_ref_flag: 0,
            reserved: 0,
            name: name.into(),
            comment: comment.into(),
        }
    }

    /// Decode a payload positioned just past the stream header.
    pub fn decode(reader: &mut BiffReader<'_>) -> BiffResult<Self> {
        let record_type = reader.read_u16()?;
        let frt_cell_ref_flag = reader.read_u16()?;
        let reserved = reader.read_u64()?;
        let name_length = reader.read_u16()? as usize;
        let comment_length = reader.read_u16()? as usize;

        let name = strings::read_string(reader, name_length)?;
        let comment = strings::read_string(reader, comment_length)?;

        Ok(Self {
            record_type,
            frt_cell_ref_flag,
            reserved,
            name,
            comment,
        })
    }

    /// Serialize the payload (header excluded).
    ///
    /// The caller sizes its buffer and the stream header length field
    /// with [`payload_size`](Self::payload_size).
    pub fn serialize<W: Write>(&self, writer: &mut W) -> BiffResult<()> {
        binary::write_u16(writer, self.record_type)?;
        binary::write_u16(writer, self.frt_cell_ref_flag)?;
        binary::write_u64(writer, self.reserved)?;
        binary::write_u16(writer, strings::char_count(&self.name) as u16)?;
        binary::write_u16(writer, strings::char_count(&self.comment) as u16)?;

        strings::write_string(writer, &self.name)?;
        strings::write_string(writer, &self.comment)?;
        Ok(())
    }

    /// Exact byte length [`serialize`](Self::serialize) will produce.
    ///
    /// 18 fixed bytes (four u16 fields, one u64, two encoding flags)
    /// plus the encoded bytes of both strings. Recomputed on every call.
    pub fn payload_size(&self) -> usize {
        18 + strings::encoded_len(&self.name) + strings::encoded_len(&self.comment)
    }

    /// Name of the defined name this comment applies to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Update the associated name, normally when the defined name it
    /// refers to is renamed.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The comment text.
    pub fn comment(&self) -> &str {
        &self.comment
    }

    /// Replace the comment text.
    pub fn set_comment(&mut self, comment: impl Into<String>) {
        self.comment = comment.into();
    }

    /// Sub-variant tag read from the wire (zero for new records).
    pub fn record_type(&self) -> u16 {
        self.record_type
    }

    /// Future-record cell reference flag as read from the wire.
    pub fn frt_cell_ref_flag(&self) -> u16 {
        self.frt_cell_ref_flag
    }
}

impl fmt::Display for NameCommentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[NAMECMT]")?;
        writeln!(f, "    .record type       = 0x{:04X}", self.record_type)?;
        writeln!(f, "    .frt cell ref flag = 0x{:04X}", self.frt_cell_ref_flag)?;
        writeln!(f, "    .reserved          = {}", self.reserved)?;
        writeln!(f, "    .name length       = {}", strings::char_count(&self.name))?;
        writeln!(f, "    .comment length    = {}", strings::char_count(&self.comment))?;
        writeln!(f, "    .name              = {}", self.name)?;
        writeln!(f, "    .comment           = {}", self.comment)?;
        write!(f, "[/NAMECMT]")
    }
}
