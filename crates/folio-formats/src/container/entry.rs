//! Container entry model and binary I/O

use std::io::{Read, Write};

use crate::container::constants::DIGEST_SIZE;
use crate::container::error::{ContainerError, ContainerResult};

/// One named entry in a container: a UTF-8 path and an opaque byte blob
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerEntry {
    /// Entry path, unique within its container
    pub path: String,
    /// Entry payload
    pub data: Vec<u8>,
}

impl ContainerEntry {
    /// Create a new entry
    pub fn new(path: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// MD5 digest of the entry payload
    pub fn digest(&self) -> [u8; DIGEST_SIZE] {
        md5::compute(&self.data).0
    }

    /// Read one entry from a reader, verifying its recorded digest
    pub(crate) fn read_from<R: Read>(reader: &mut R) -> ContainerResult<Self> {
        let mut len_buf = [0u8; 2];
        reader.read_exact(&mut len_buf)?;
        let path_len = u16::from_be_bytes(len_buf) as usize;

        let mut path_buf = vec![0u8; path_len];
        reader.read_exact(&mut path_buf)?;
        let path = String::from_utf8(path_buf)?;

        let mut recorded = [0u8; DIGEST_SIZE];
        reader.read_exact(&mut recorded)?;

        let mut size_buf = [0u8; 4];
        reader.read_exact(&mut size_buf)?;
        let data_len = u32::from_be_bytes(size_buf) as usize;

        let mut data = vec![0u8; data_len];
        reader.read_exact(&mut data)?;

        let entry = Self { path, data };
        let actual = entry.digest();
        if actual != recorded {
            return Err(ContainerError::ChecksumMismatch {
                path: entry.path,
                expected: hex::encode(recorded),
                actual: hex::encode(actual),
            });
        }

        Ok(entry)
    }

    /// Write one entry to a writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut W) -> ContainerResult<()> {
        if self.path.len() > usize::from(u16::MAX) {
            return Err(ContainerError::PathTooLong(self.path.len()));
        }
        if self.data.len() > u32::MAX as usize {
            return Err(ContainerError::EntryTooLarge {
                path: self.path.clone(),
                size: self.data.len(),
            });
        }

        writer.write_all(&(self.path.len() as u16).to_be_bytes())?;
        writer.write_all(self.path.as_bytes())?;
        writer.write_all(&self.digest())?;
        writer.write_all(&(self.data.len() as u32).to_be_bytes())?;
        writer.write_all(&self.data)?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_round_trip() {
        let original = ContainerEntry::new("resources/img.png", vec![0xAA, 0xBB, 0xCC]);

        let mut buffer = Vec::new();
        original
            .write_to(&mut buffer)
            .expect("Operation should succeed");

        let parsed = ContainerEntry::read_from(&mut buffer.as_slice())
            .expect("Operation should succeed");
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_entry_layout() {
        let entry = ContainerEntry::new("a", vec![0x01]);

        let mut buffer = Vec::new();
        entry.write_to(&mut buffer).expect("Operation should succeed");

        // path_len(2) + path(1) + digest(16) + data_len(4) + data(1)
        assert_eq!(buffer.len(), 24);
        assert_eq!(&buffer[0..2], &[0x00, 0x01]);
        assert_eq!(buffer[2], b'a');
        assert_eq!(&buffer[19..23], &[0x00, 0x00, 0x00, 0x01]);
        assert_eq!(buffer[23], 0x01);
    }

    #[test]
    fn test_entry_checksum_detection() {
        let entry = ContainerEntry::new("resources/img.png", vec![1, 2, 3, 4]);

        let mut buffer = Vec::new();
        entry.write_to(&mut buffer).expect("Operation should succeed");

        // Flip one payload byte; the recorded digest no longer matches
        let last = buffer.len() - 1;
        buffer[last] ^= 0xFF;

        let result = ContainerEntry::read_from(&mut buffer.as_slice());
        assert!(matches!(
            result,
            Err(ContainerError::ChecksumMismatch { .. })
        ));
    }

    #[test]
    fn test_entry_truncated_payload() {
        let entry = ContainerEntry::new("resources/img.png", vec![1, 2, 3, 4]);

        let mut buffer = Vec::new();
        entry.write_to(&mut buffer).expect("Operation should succeed");
        buffer.truncate(buffer.len() - 2);

        let result = ContainerEntry::read_from(&mut buffer.as_slice());
        assert!(matches!(result, Err(ContainerError::Io(_))));
    }

    #[test]
    fn test_entry_invalid_utf8_path() {
        // path_len = 2, path bytes are invalid UTF-8
        let buffer = [0x00, 0x02, 0xFF, 0xFE];

        let result = ContainerEntry::read_from(&mut buffer.as_slice());
        assert!(matches!(result, Err(ContainerError::InvalidPath(_))));
    }
}
