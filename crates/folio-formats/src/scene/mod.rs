//! Scene descriptor model for folio archives
//!
//! The scene descriptor is the JSON graph stored in an archive's
//! `scene.json` entry: a flat list of design blocks referencing each other
//! only through integer ids, never through owning pointers. Cross-references
//! (`parent`, `children`) are local to one archive; resource references are
//! plain strings inside the recursive property map.
//!
//! ```json
//! {
//!   "blocks": [
//!     { "id": 1, "kind": "scene-root", "children": [2] },
//!     { "id": 2, "kind": "page", "parent": 1,
//!       "properties": { "image": "resources/img.png" } }
//!   ]
//! }
//! ```
//!
//! [`SceneDescriptor::validate`] checks the per-archive graph invariants:
//! unique non-zero ids, exactly one scene root, and referential closure of
//! every `parent`/`children` entry.

mod block;
mod descriptor;
mod error;
mod property;

pub use block::{Block, BlockId, BlockKind};
pub use descriptor::{SceneDescriptor, validate_blocks};
pub use error::{SceneError, SceneResult};
pub use property::PropertyValue;
