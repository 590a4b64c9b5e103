//! Container parsing

use std::collections::HashSet;

use binrw::{BinRead, io::Cursor};

use crate::container::entry::ContainerEntry;
use crate::container::error::{ContainerError, ContainerResult};
use crate::container::header::ContainerHeader;

/// A parsed named-entry container
///
/// Entries keep the order they were stored in. Paths are guaranteed unique;
/// the parser rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container {
    entries: Vec<ContainerEntry>,
}

impl Container {
    /// Parse a container from bytes
    ///
    /// Validates the header, reads exactly the declared number of entries,
    /// verifies every entry digest, and rejects duplicate paths as well as
    /// trailing bytes after the last entry.
    pub fn parse(data: &[u8]) -> ContainerResult<Self> {
        let mut cursor = Cursor::new(data);

        let header = ContainerHeader::read(&mut cursor)?;
        header.validate()?;

        let mut entries = Vec::with_capacity(header.entry_count as usize);
        let mut seen = HashSet::with_capacity(header.entry_count as usize);

        for index in 0..header.entry_count {
            let entry = ContainerEntry::read_from(&mut cursor).map_err(|e| match e {
                ContainerError::Io(io)
                    if io.kind() == std::io::ErrorKind::UnexpectedEof =>
                {
                    ContainerError::Truncated {
                        index,
                        count: header.entry_count,
                    }
                }
                other => other,
            })?;

            if !seen.insert(entry.path.clone()) {
                return Err(ContainerError::DuplicateEntry(entry.path));
            }
            entries.push(entry);
        }

        let remaining = data.len() as u64 - cursor.position();
        if remaining > 0 {
            return Err(ContainerError::TrailingData(remaining as usize));
        }

        Ok(Self { entries })
    }

    /// All entries in stored order
    pub fn entries(&self) -> &[ContainerEntry] {
        &self.entries
    }

    /// Consume the container, yielding its entries
    pub fn into_entries(self) -> Vec<ContainerEntry> {
        self.entries
    }

    /// Find an entry by exact path
    pub fn find_entry(&self, path: &str) -> Option<&ContainerEntry> {
        self.entries.iter().find(|entry| entry.path == path)
    }
}
