//! Merge engine combining folio document archives into one composite
//! multi-page archive
//!
//! Several independently produced archives, each a self-contained design
//! graph plus a directory of binary resources with block ids local to that
//! archive, are combined into a single composite a rendering engine loads
//! as one document. The merge renumbers every block id into a collision-free
//! global space, rewrites every internal cross-reference (parent/child links
//! and resource URIs embedded in nested property maps), renames resources
//! into per-archive namespaces, and synthesizes a new composite root owning
//! every page in input order.
//!
//! # Pipeline
//!
//! Data flows strictly one direction:
//!
//! ```text
//! Archive::parse → namespace_resources → remap → merge → serialize
//! ```
//!
//! Per-archive steps ([`namespace_resources`], [`remap`]) are pure functions
//! of their inputs. The only sequential dependency is numeric: archive
//! *k*'s starting id offset is the previous archive's `next_offset`, so
//! [`merge`] runs as an ordered fold threading that counter. No shared
//! mutable state, no locks, no partial output on failure.
//!
//! # Usage
//!
//! ```rust
//! use folio_merge::{MergeInput, NativeParser, Orchestrator};
//! # use folio_formats::archive::Archive;
//! # use folio_formats::scene::{Block, BlockKind};
//! # fn archive_bytes() -> Vec<u8> {
//! #     Archive {
//! #         blocks: vec![
//! #             Block::new(1, BlockKind::SceneRoot).with_children(vec![2]),
//! #             Block::new(2, BlockKind::Page).with_parent(1),
//! #         ],
//! #         resources: Default::default(),
//! #     }
//! #     .build()
//! #     .unwrap()
//! # }
//!
//! let orchestrator = Orchestrator::new(NativeParser);
//! let inputs = vec![
//!     MergeInput::new(archive_bytes(), "cover.folio"),
//!     MergeInput::new(archive_bytes(), "body.folio"),
//! ];
//! let output = orchestrator.process(&inputs)?;
//! let bytes = output.archive.serialize()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

pub mod assemble;
pub mod error;
pub mod namespace;
pub mod orchestrate;
pub mod remap;

pub use assemble::{MergedArchive, merge};
pub use error::{MergeError, MergeResult, OrchestrateError, RemapError, RemapResult};
pub use namespace::namespace_resources;
pub use orchestrate::{
    MergeInput, MergeOutput, NativeParser, Orchestrator, PageRecord, SceneParser, SkippedInput,
};
pub use remap::{RemapOutput, remap};
