//! Archive parsing and building

use std::collections::BTreeMap;

use crate::archive::{ArchiveError, ArchiveResult, DESCRIPTOR_ENTRY, RESOURCE_PREFIX};
use crate::container::{Container, ContainerBuilder};
use crate::scene::{Block, SceneDescriptor, validate_blocks};

/// One design graph plus its binary resources
///
/// Ephemeral by design: an archive is created by [`parse`](Self::parse) and
/// consumed exactly once by whichever component processes it next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Archive {
    /// All blocks, in descriptor order
    pub blocks: Vec<Block>,
    /// Resource path to payload, paths unique within the archive
    pub resources: BTreeMap<String, Vec<u8>>,
}

impl Archive {
    /// Parse an archive from container bytes
    ///
    /// Requires exactly one `scene.json` entry; every other entry must sit
    /// under the `resources/` prefix. The descriptor must be well-formed
    /// JSON with `id` and `kind` on every block. Graph consistency is not
    /// checked here; call [`validate`](Self::validate) for that.
    pub fn parse(data: &[u8]) -> ArchiveResult<Self> {
        let container = Container::parse(data)?;

        let mut descriptor = None;
        let mut resources = BTreeMap::new();

        for entry in container.into_entries() {
            if entry.path == DESCRIPTOR_ENTRY {
                descriptor = Some(SceneDescriptor::parse(&entry.data)?);
            } else if entry.path.starts_with(RESOURCE_PREFIX) {
                // Container parsing already rejected duplicate paths
                resources.insert(entry.path, entry.data);
            } else {
                return Err(ArchiveError::UnexpectedEntry(entry.path));
            }
        }

        let descriptor = descriptor.ok_or(ArchiveError::MissingDescriptor)?;

        Ok(Self {
            blocks: descriptor.blocks,
            resources,
        })
    }

    /// Check the per-archive graph invariants
    ///
    /// See [`validate_blocks`].
    pub fn validate(&self) -> ArchiveResult<()> {
        validate_blocks(&self.blocks)?;
        Ok(())
    }

    /// Serialize the archive to container bytes
    ///
    /// The descriptor entry comes first, resources follow in sorted path
    /// order; output is deterministic and loadable by [`parse`](Self::parse).
    pub fn build(&self) -> ArchiveResult<Vec<u8>> {
        let descriptor = SceneDescriptor {
            blocks: self.blocks.clone(),
        };

        let mut builder = ContainerBuilder::new();
        builder.add_entry(DESCRIPTOR_ENTRY, descriptor.build()?);
        for (path, data) in &self.resources {
            builder.add_entry(path.clone(), data.clone());
        }

        Ok(builder.build()?)
    }
}
