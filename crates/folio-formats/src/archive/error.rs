//! Error types for archive operations

use thiserror::Error;

use crate::container::ContainerError;
use crate::scene::SceneError;

/// Archive operation result type
pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// Error types for archive parsing and building
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// Container holds no `scene.json` descriptor entry
    #[error("Archive has no scene descriptor entry")]
    MissingDescriptor,

    /// Container holds an entry that is neither the descriptor nor a resource
    #[error("Unexpected archive entry: {0}")]
    UnexpectedEntry(String),

    /// Container-level error
    #[error("Container error: {0}")]
    Container(#[from] ContainerError),

    /// Descriptor-level error
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),
}
