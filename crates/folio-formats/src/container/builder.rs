//! Container building

use std::collections::HashSet;
use std::io::Write;

use binrw::{BinWrite, io::Cursor};

use crate::container::entry::ContainerEntry;
use crate::container::error::{ContainerError, ContainerResult};
use crate::container::header::ContainerHeader;

/// Builder for creating containers
///
/// Entries are written in insertion order; digests are computed during
/// serialization. Duplicate paths are rejected at build time.
#[derive(Debug, Default)]
pub struct ContainerBuilder {
    entries: Vec<ContainerEntry>,
}

impl ContainerBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add an entry
    pub fn add_entry(&mut self, path: impl Into<String>, data: Vec<u8>) -> &mut Self {
        self.entries.push(ContainerEntry::new(path, data));
        self
    }

    /// Number of entries added so far
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entries have been added
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the container to bytes
    pub fn build(&self) -> ContainerResult<Vec<u8>> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        for entry in &self.entries {
            if !seen.insert(entry.path.as_str()) {
                return Err(ContainerError::DuplicateEntry(entry.path.clone()));
            }
        }

        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        let header = ContainerHeader::new(self.entries.len() as u32);
        header.write(&mut cursor)?;

        for entry in &self.entries {
            entry.write_to(&mut cursor)?;
        }

        Ok(buffer)
    }

    /// Serialize the container into a writer
    pub fn write_to<W: Write>(&self, writer: &mut W) -> ContainerResult<()> {
        let bytes = self.build()?;
        writer.write_all(&bytes)?;
        Ok(())
    }
}
