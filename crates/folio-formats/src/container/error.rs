//! Error types for container operations

use thiserror::Error;

/// Container operation result type
pub type ContainerResult<T> = Result<T, ContainerError>;

/// Error types for container parsing and building
#[derive(Debug, Error)]
pub enum ContainerError {
    /// Container does not start with the expected magic signature
    #[error("Invalid container magic: expected 'FC', got {0:02x?}")]
    InvalidMagic([u8; 2]),

    /// Container format version is not supported
    #[error("Unsupported container version: {0}")]
    UnsupportedVersion(u8),

    /// Reserved header byte carries an unexpected value
    #[error("Invalid reserved header byte: {0:#04x}")]
    InvalidReserved(u8),

    /// Two entries share the same path
    #[error("Duplicate entry path: {0}")]
    DuplicateEntry(String),

    /// Entry path is not valid UTF-8
    #[error("Entry path is not valid UTF-8: {0}")]
    InvalidPath(#[from] std::string::FromUtf8Error),

    /// Entry path exceeds the 16-bit length field
    #[error("Entry path too long: {0} bytes")]
    PathTooLong(usize),

    /// Entry payload exceeds the 32-bit length field
    #[error("Entry '{path}' too large: {size} bytes")]
    EntryTooLarge {
        /// Path of the oversized entry
        path: String,
        /// Payload size in bytes
        size: usize,
    },

    /// Entry data does not match its recorded digest
    #[error("Checksum mismatch for entry '{path}': expected {expected}, got {actual}")]
    ChecksumMismatch {
        /// Path of the corrupted entry
        path: String,
        /// Digest recorded in the container, hex-encoded
        expected: String,
        /// Digest computed from the entry data, hex-encoded
        actual: String,
    },

    /// Container ended before the declared entries were read
    #[error("Container truncated while reading entry {index} of {count}")]
    Truncated {
        /// Zero-based index of the entry being read
        index: u32,
        /// Declared entry count from the header
        count: u32,
    },

    /// Trailing bytes after the last declared entry
    #[error("Trailing data after last entry: {0} bytes")]
    TrailingData(usize),

    /// Binary read/write error
    #[error("Binary format error: {0}")]
    BinRead(#[from] binrw::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
