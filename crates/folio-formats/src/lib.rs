//! Container and scene descriptor formats for folio document archives
//!
//! A folio archive is a named-entry container holding exactly one scene
//! descriptor (the serialized design-block graph) plus a directory of binary
//! resources addressed by path. This crate provides symmetric (parser and
//! builder) implementations for both layers:
//!
//! - **Container**: the binary named-entry container with per-entry MD5
//!   digests ([`container`])
//! - **Scene**: the JSON descriptor model of blocks, kinds, and recursive
//!   property values ([`scene`])
//! - **Archive**: the combined view a caller works with, one graph plus its
//!   resources ([`archive`])
//!
//! # Design Principles
//!
//! - **Symmetric Operations**: every format supports both parsing and building
//! - **Round-Trip Guarantee**: `parse(build(archive))` reproduces the archive
//! - **Type Safety**: invariants (unique ids, single scene root, referential
//!   closure) are checked by explicit `validate` operations, never assumed

#![warn(missing_docs)]
#![allow(clippy::cast_possible_truncation)] // Intentional for binary format parsing
#![allow(clippy::module_name_repetitions)] // Clear naming is preferred

pub mod archive;
pub mod container;
pub mod scene;
