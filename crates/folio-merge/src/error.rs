//! Error types for the merge engine

use thiserror::Error;

use folio_formats::scene::BlockId;

use crate::orchestrate::SkippedInput;

/// Remap operation result type
pub type RemapResult<T> = Result<T, RemapError>;

/// Merge operation result type
pub type MergeResult<T> = Result<T, MergeError>;

/// Error types for remapping one archive's graph
///
/// All of these mean the source graph is internally inconsistent; the
/// archive cannot be merged.
#[derive(Debug, Error)]
pub enum RemapError {
    /// No block has the scene-root kind
    #[error("Archive has no scene root block")]
    MissingRoot,

    /// More than one block has the scene-root kind
    #[error("Archive has {count} scene root blocks, expected exactly 1")]
    MultipleRoots {
        /// Number of scene-root blocks found
        count: usize,
    },

    /// Block id 0 is reserved and may not appear in an archive
    #[error("Block id 0 is reserved")]
    ReservedId,

    /// Two blocks share the same local id
    #[error("Duplicate block id: {0}")]
    DuplicateId(BlockId),

    /// A block's parent refers to a local id absent from the archive
    #[error("Block {block} has dangling parent reference {parent}")]
    DanglingParent {
        /// Local id of the referencing block
        block: BlockId,
        /// The unresolved parent id
        parent: BlockId,
    },

    /// A block's children list refers to a local id absent from the archive
    #[error("Block {block} has dangling child reference {child}")]
    DanglingChild {
        /// Local id of the referencing block
        block: BlockId,
        /// The unresolved child id
        child: BlockId,
    },
}

/// Error types for assembling the composite archive
///
/// Any of these aborts the whole merge; no partial composite is ever
/// returned. Post-merge invariant violations indicate an algorithmic bug
/// rather than bad input.
#[derive(Debug, Error)]
pub enum MergeError {
    /// Remapping one input archive failed
    #[error("Failed to remap archive {archive_index}: {source}")]
    Remap {
        /// Zero-based index of the failing archive in input order
        archive_index: usize,
        /// The underlying remap failure
        #[source]
        source: RemapError,
    },

    /// Two namespaced resources mapped to the same path
    #[error("Resource path collision: {0}")]
    ResourceCollision(String),

    /// Two blocks in the composite share an id
    #[error("Composite has duplicate block id: {0}")]
    DuplicateId(BlockId),

    /// A scene root other than the synthesized one survived the merge
    #[error("Composite has stray scene root block: {0}")]
    StrayRoot(BlockId),

    /// A composite block's parent does not resolve
    #[error("Composite block {block} has dangling parent reference {parent}")]
    DanglingParent {
        /// Id of the referencing block
        block: BlockId,
        /// The unresolved parent id
        parent: BlockId,
    },

    /// A composite block's children entry does not resolve
    #[error("Composite block {block} has dangling child reference {child}")]
    DanglingChild {
        /// Id of the referencing block
        block: BlockId,
        /// The unresolved child id
        child: BlockId,
    },

    /// A resource-reference string points at a path absent from the
    /// composite resource map
    #[error("Composite block {block} references missing resource '{path}'")]
    DanglingResource {
        /// Id of the referencing block
        block: BlockId,
        /// The unresolved resource path
        path: String,
    },
}

/// Error types for the caller-facing orchestration layer
#[derive(Debug, Error)]
pub enum OrchestrateError {
    /// Every input failed to parse (or no inputs were given)
    #[error("No input archive could be used ({} skipped)", .skipped.len())]
    NoUsableInputs {
        /// Per-input failure records
        skipped: Vec<SkippedInput>,
    },

    /// Merging the parsed archives failed
    #[error("Merge failed: {0}")]
    Merge(#[from] MergeError),
}
