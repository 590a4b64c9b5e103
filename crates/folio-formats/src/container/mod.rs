//! Named-entry binary container for folio archives
//!
//! The container is the transport layer of a folio archive: an ordered list
//! of named entries, each an opaque byte blob addressed by a UTF-8 path.
//! What the entries mean (descriptor vs. resource) is decided one layer up,
//! in [`crate::archive`].
//!
//! # Binary Format
//!
//! All multi-byte fields are big-endian:
//!
//! ```text
//! header (8 bytes):
//!   magic        "FC" (2 bytes)
//!   version      u8, currently 1
//!   reserved     u8, must be 0
//!   entry_count  u32
//!
//! entry (entry_count times):
//!   path_len     u16
//!   path         path_len bytes, UTF-8
//!   digest       16 bytes, MD5 of data
//!   data_len     u32
//!   data         data_len bytes
//! ```
//!
//! Entry paths are unique within one container; the parser rejects
//! duplicates. Every entry digest is verified during parsing.
//!
//! # Usage
//!
//! ```rust
//! use folio_formats::container::{Container, ContainerBuilder};
//!
//! let mut builder = ContainerBuilder::new();
//! builder.add_entry("scene.json", b"{\"blocks\":[]}".to_vec());
//! builder.add_entry("resources/img.png", vec![0xAA, 0xBB]);
//! let bytes = builder.build()?;
//!
//! let container = Container::parse(&bytes)?;
//! assert_eq!(container.entries().len(), 2);
//! # Ok::<(), folio_formats::container::ContainerError>(())
//! ```

mod builder;
mod entry;
mod error;
mod file;
mod header;

pub use builder::ContainerBuilder;
pub use entry::ContainerEntry;
pub use error::{ContainerError, ContainerResult};
pub use file::Container;
pub use header::ContainerHeader;

/// Container format constants
pub mod constants {
    /// Magic signature at the start of every container
    pub const MAGIC: [u8; 2] = *b"FC";

    /// Current container format version
    pub const FORMAT_VERSION: u8 = 1;

    /// Fixed header size in bytes
    pub const HEADER_SIZE: usize = 8;

    /// Size of the per-entry MD5 digest in bytes
    pub const DIGEST_SIZE: usize = 16;
}
