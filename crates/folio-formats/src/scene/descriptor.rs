//! Scene descriptor parsing, building, and graph validation

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::scene::{Block, SceneError, SceneResult};

/// The serialized design graph of one archive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SceneDescriptor {
    /// All blocks, in descriptor order
    pub blocks: Vec<Block>,
}

impl SceneDescriptor {
    /// Parse a descriptor from its JSON bytes
    ///
    /// Fails if the data is not well-formed JSON or any block lacks a
    /// required `id`/`kind` field. Graph consistency is checked separately
    /// by [`validate`](Self::validate).
    pub fn parse(data: &[u8]) -> SceneResult<Self> {
        Ok(serde_json::from_slice(data)?)
    }

    /// Serialize the descriptor to JSON bytes
    pub fn build(&self) -> SceneResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Check the per-archive graph invariants
    ///
    /// See [`validate_blocks`].
    pub fn validate(&self) -> SceneResult<()> {
        validate_blocks(&self.blocks)
    }
}

/// Check the per-archive graph invariants over a block list
///
/// - ids are unique and non-zero
/// - exactly one block has the scene-root kind
/// - every non-null `parent` and every `children` entry resolves to an id
///   present in the list
pub fn validate_blocks(blocks: &[Block]) -> SceneResult<()> {
    let mut ids = HashSet::with_capacity(blocks.len());
    for block in blocks {
        if block.id == 0 {
            return Err(SceneError::ReservedId);
        }
        if !ids.insert(block.id) {
            return Err(SceneError::DuplicateId(block.id));
        }
    }

    let root_count = blocks.iter().filter(|block| block.is_root()).count();
    match root_count {
        1 => {}
        0 => return Err(SceneError::MissingRoot),
        count => return Err(SceneError::MultipleRoots { count }),
    }

    for block in blocks {
        if let Some(parent) = block.parent {
            if !ids.contains(&parent) {
                return Err(SceneError::DanglingParent {
                    block: block.id,
                    parent,
                });
            }
        }
        for &child in &block.children {
            if !ids.contains(&child) {
                return Err(SceneError::DanglingChild {
                    block: block.id,
                    child,
                });
            }
        }
    }

    Ok(())
}
