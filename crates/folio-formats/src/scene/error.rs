//! Error types for scene descriptor operations

use thiserror::Error;

use crate::scene::BlockId;

/// Scene descriptor result type
pub type SceneResult<T> = Result<T, SceneError>;

/// Error types for descriptor parsing and graph validation
#[derive(Debug, Error)]
pub enum SceneError {
    /// Descriptor is not well-formed JSON or a block lacks a required field
    #[error("Invalid scene descriptor: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),

    /// Block id 0 is reserved and may not appear in a descriptor
    #[error("Block id 0 is reserved")]
    ReservedId,

    /// Two blocks share the same id
    #[error("Duplicate block id: {0}")]
    DuplicateId(BlockId),

    /// No block has the scene-root kind
    #[error("Descriptor has no scene root block")]
    MissingRoot,

    /// More than one block has the scene-root kind
    #[error("Descriptor has {count} scene root blocks, expected exactly 1")]
    MultipleRoots {
        /// Number of scene-root blocks found
        count: usize,
    },

    /// A block's parent refers to an id absent from the descriptor
    #[error("Block {block} has dangling parent reference {parent}")]
    DanglingParent {
        /// Id of the referencing block
        block: BlockId,
        /// The unresolved parent id
        parent: BlockId,
    },

    /// A block's children list refers to an id absent from the descriptor
    #[error("Block {block} has dangling child reference {child}")]
    DanglingChild {
        /// Id of the referencing block
        block: BlockId,
        /// The unresolved child id
        child: BlockId,
    },
}
