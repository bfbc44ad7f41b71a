//! Error types for record and property codecs.
//!
//! A decode either completes fully or fails with one of these variants;
//! there is no partial-success mode and nothing is retried at this layer.
use thiserror::Error;

/// Result type alias for codec operations.
pub type BiffResult<T> = std::result::Result<T, BiffError>;

/// Errors surfaced by record and property encode/decode.
#[derive(Error, Debug)]
pub enum BiffError {
    /// I/O error from the output sink
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended before a declared field could be read
    #[error("truncated input: needed {needed} more bytes, {remaining} remaining")]
    TruncatedInput {
        /// Bytes the field required
        needed: usize,
        /// Bytes left in the cursor
        remaining: usize,
    },

    /// A string encoding flag byte was neither 0 nor 1
    #[error("invalid string encoding flag: 0x{found:02X}")]
    InvalidDiscriminator {
        /// The offending byte
        found: u8,
    },

    /// Property number does not fit the 14-bit identifier field
    #[error("property number 0x{number:04X} exceeds the 14-bit range")]
    PropertyNumberOutOfRange {
        /// The rejected property number
        number: u16,
    },

    /// Wire text was not valid in its declared encoding
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Record payload too large for the 16-bit record length field
    #[error("record payload of {size} bytes exceeds the 16-bit length limit")]
    PayloadTooLarge {
        /// Computed payload size in bytes
        size: usize,
    },
}
