//! Folio archive: one design graph plus its binary resources
//!
//! An archive is a container with a fixed entry convention:
//!
//! - exactly one descriptor entry named `scene.json` holding the
//!   [`SceneDescriptor`](crate::scene::SceneDescriptor) JSON
//! - zero or more resource entries under the `resources/` prefix, each an
//!   opaque byte blob addressed by its entry path
//!
//! [`Archive::parse`] enforces the entry convention and descriptor shape;
//! [`Archive::validate`] separately checks the graph invariants, so callers
//! that ingest many archives can treat graph errors as per-file failures.
//! [`Archive::build`] emits a container the same parser loads back, with
//! the descriptor first and resources in sorted path order.

mod error;
mod file;

pub use error::{ArchiveError, ArchiveResult};
pub use file::Archive;

/// Entry path of the graph descriptor
pub const DESCRIPTOR_ENTRY: &str = "scene.json";

/// Path prefix of resource entries
pub const RESOURCE_PREFIX: &str = "resources/";
