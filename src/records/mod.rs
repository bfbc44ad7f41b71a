//! BIFF record contract and tag dispatch.
//!
//! Each record travels in the workbook stream as a 4-byte header
//! (2-byte type tag + 2-byte payload length) followed by the payload.
//! Records re-derive their payload length from current field state at
//! every encode; nothing is cached. The tag-to-decoder table is built
//! once and is read-only thereafter, so a stream reader can dispatch
//! without embedding per-record knowledge.

use std::collections::HashMap;
use std::io::Write;

use once_cell::sync::Lazy;

use crate::binary::BiffReader;
use crate::error::{BiffError, BiffResult};

pub mod name_comment;

pub use name_comment::NameCommentRecord;

/// A record decoded through the dispatch table.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum DecodedRecord {
    /// NAMECMT (0x0894)
    NameComment(NameCommentRecord),
}

/// Decode function for one record tag.
pub type RecordDecoder = fn(&mut BiffReader<'_>) -> BiffResult<DecodedRecord>;

static RECORD_DECODERS: Lazy<HashMap<u16, RecordDecoder>> = Lazy::new(|| {
    let mut table: HashMap<u16, RecordDecoder> = HashMap::new();
    table.insert(NameCommentRecord::SID, |reader| {
        NameCommentRecord::decode(reader).map(DecodedRecord::NameComment)
    });
    table
});

/// Look up the decoder registered for a record tag.
#[inline]
pub fn decoder_for(tag: u16) -> Option<RecordDecoder> {
    RECORD_DECODERS.get(&tag).copied()
}

/// Decode a record payload by tag, or `None` for tags this crate does
/// not model.
pub fn decode_record(tag: u16, reader: &mut BiffReader<'_>) -> Option<BiffResult<DecodedRecord>> {
    decoder_for(tag).map(|decode| decode(reader))
}

/// Write a BIFF record header (type tag + payload length).
#[inline]
pub fn write_record_header<W: Write>(
    writer: &mut W,
    record_type: u16,
    data_len: u16,
) -> BiffResult<()> {
    writer.write_all(&record_type.to_le_bytes())?;
    writer.write_all(&data_len.to_le_bytes())?;
    Ok(())
}

/// Write a complete NAMECMT record, header included.
///
/// The header length field is sized from [`NameCommentRecord::payload_size`]
/// at the moment of the call; payloads past the 16-bit record length cap
/// are rejected.
pub fn write_record<W: Write>(writer: &mut W, record: &NameCommentRecord) -> BiffResult<()> {
    let size = record.payload_size();
    if size > u16::MAX as usize {
        return Err(BiffError::PayloadTooLarge { size });
    }
    write_record_header(writer, NameCommentRecord::SID, size as u16)?;
    record.serialize(writer)
}
