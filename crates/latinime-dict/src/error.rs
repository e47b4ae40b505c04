//! Error types for dictionary views and header parsing

use thiserror::Error;

/// Errors that can occur when opening or inspecting a dictionary buffer
#[derive(Error, Debug)]
pub enum DictError {
    /// The header declares more bytes than the buffer holds
    #[error("Truncated dictionary header: header needs {header_size} bytes, buffer has {buffer_len}")]
    TruncatedHeader {
        /// Header size computed for the detected format
        header_size: usize,
        /// Length of the supplied buffer
        buffer_len: usize,
    },

    /// The header declares a size smaller than its own fixed prefix
    #[error("Invalid header size {header_size}: must be at least {minimum}")]
    InvalidHeaderSize {
        /// Declared header size
        header_size: usize,
        /// Smallest valid header size for the format
        minimum: usize,
    },

    /// Header attributes do not fit in the 32-bit header size field
    #[error("Header too large: {attributes_len} bytes of attributes exceed the header size field")]
    HeaderTooLarge {
        /// Encoded length of the attribute area
        attributes_len: usize,
    },

    /// The buffer does not carry a recognized magic number
    #[error("Unrecognized dictionary format")]
    UnknownFormat,

    /// A header string ran past the end of the header without a terminator
    #[error("Unterminated header string starting at offset {offset}")]
    UnterminatedString {
        /// Offset of the first byte of the string
        offset: usize,
    },

    /// A three-byte character decoded to something that is not a code point
    #[error("Invalid code point {value:#x} at offset {offset}")]
    InvalidCodePoint {
        /// Offset of the first byte of the character
        offset: usize,
        /// Decoded value
        value: u32,
    },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `BinRw` parsing/writing error
    #[error("Binary format error: {0}")]
    BinRw(#[from] binrw::Error),
}

/// Type alias for dictionary operation results
pub type Result<T> = std::result::Result<T, DictError>;
