//! Rambutan BIFF - byte-exact codec for BIFF records and Escher drawing
//! properties from legacy Excel (.xls) binaries.
//!
//! Two format families live here:
//!
//! - **BIFF records**: tagged, length-prefixed structures from the
//!   workbook stream, exemplified by the NAMECMT record (0x0894) that
//!   attaches a comment to a defined name.
//! - **Escher properties**: bit-packed drawing properties from the
//!   Office Drawing (MS-ODRAW) sub-stream, in simple (fixed 32-bit)
//!   and complex (variable-length) flavors.
//!
//! Round-trip fidelity is the contract: decode followed by re-encode
//! produces identical bytes, including always-zero reserved fields and
//! the content-driven dual string encoding the format keeps for
//! historical compatibility.
//!
//! # Example - encoding and decoding a record payload
//!
//! ```
//! use rambutan_biff::binary::BiffReader;
//! use rambutan_biff::records::NameCommentRecord;
//!
//! # fn main() -> rambutan_biff::BiffResult<()> {
//! let record = NameCommentRecord::new("Sales", "Q1 totals");
//! let mut payload = Vec::with_capacity(record.payload_size());
//! record.serialize(&mut payload)?;
//! assert_eq!(payload.len(), record.payload_size());
//!
//! let decoded = NameCommentRecord::decode(&mut BiffReader::new(&payload))?;
//! assert_eq!(decoded.name(), "Sales");
//! assert_eq!(decoded.comment(), "Q1 totals");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - packing a drawing property
//!
//! ```
//! use rambutan_biff::escher::{EscherProperty, EscherSimpleProperty};
//!
//! # fn main() -> rambutan_biff::BiffResult<()> {
//! // Fill color property (0x0181), plain 32-bit value
//! let prop = EscherSimpleProperty::new(0x0181, false, false, 0x00FF_FFFF)?;
//! let mut buf = Vec::new();
//! assert_eq!(prop.serialize_fixed_part(&mut buf)?, 6);
//! assert_eq!(prop.serialize_variable_part(&mut buf)?, 0);
//! # Ok(())
//! # }
//! ```

/// Bounded little-endian cursor and write helpers
pub mod binary;

/// Unified error type for record and property codecs
pub mod error;

/// Escher (Office Drawing) property identifier packing and codecs
pub mod escher;

/// BIFF record types and tag dispatch
pub mod records;

/// Dual-encoding (compressed / wide) BIFF string codec
pub mod strings;

// Re-export commonly used types for convenience
pub use error::{BiffError, BiffResult};
pub use escher::{EscherComplexProperty, EscherProperty, EscherSimpleProperty, PropertyId};
pub use records::NameCommentRecord;
