//! Container header parsing and building

use binrw::{BinRead, BinWrite};

use crate::container::constants::{FORMAT_VERSION, MAGIC};
use crate::container::error::{ContainerError, ContainerResult};

/// Fixed-size container header
///
/// The header carries:
/// - Magic signature "FC" (2 bytes)
/// - Version number (1 byte, currently 1)
/// - Reserved byte (1 byte, must be 0)
/// - Entry count (4 bytes, big-endian)
#[derive(Debug, Clone, PartialEq, Eq, BinRead, BinWrite)]
#[br(big)] // All multi-byte fields are big-endian
#[bw(big)]
pub struct ContainerHeader {
    /// Magic signature, always "FC"
    pub magic: [u8; 2],

    /// Format version, currently 1
    pub version: u8,

    /// Reserved for future use, must be 0
    pub reserved: u8,

    /// Number of entries in the container
    pub entry_count: u32,
}

impl ContainerHeader {
    /// Create a new header for the given entry count
    pub fn new(entry_count: u32) -> Self {
        Self {
            magic: MAGIC,
            version: FORMAT_VERSION,
            reserved: 0,
            entry_count,
        }
    }

    /// Validate the header fields
    pub fn validate(&self) -> ContainerResult<()> {
        if self.magic != MAGIC {
            return Err(ContainerError::InvalidMagic(self.magic));
        }

        if self.version != FORMAT_VERSION {
            return Err(ContainerError::UnsupportedVersion(self.version));
        }

        if self.reserved != 0 {
            return Err(ContainerError::InvalidReserved(self.reserved));
        }

        Ok(())
    }
}
