//! Caller-facing merge orchestration

use std::error::Error;

use tracing::{debug, info, warn};

use folio_formats::archive::Archive;

use crate::assemble::{MergedArchive, merge};
use crate::error::OrchestrateError;

/// Boxed error type external parsers report through
pub type ParseFailure = Box<dyn Error + Send + Sync>;

/// The capability that turns raw design-file bytes into an [`Archive`]
///
/// The orchestrator depends on this abstraction only, so the merge core
/// has no compile-time coupling to any specific parsing implementation;
/// inject whatever converter the surrounding application hosts.
pub trait SceneParser {
    /// Parse one raw input file into a validated archive
    fn parse(&self, bytes: &[u8]) -> Result<Archive, ParseFailure>;
}

/// Parser for folio-native archive bytes
///
/// Parses the container and descriptor, then validates the per-archive
/// graph invariants so inconsistent inputs fail here, per file, rather
/// than aborting the whole merge later.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeParser;

impl SceneParser for NativeParser {
    fn parse(&self, bytes: &[u8]) -> Result<Archive, ParseFailure> {
        let archive = Archive::parse(bytes)?;
        archive.validate()?;
        Ok(archive)
    }
}

/// One raw input file with its user-visible name
#[derive(Debug, Clone)]
pub struct MergeInput {
    /// Raw file bytes
    pub bytes: Vec<u8>,
    /// User-visible file name; page names derive from it
    pub display_name: String,
}

impl MergeInput {
    /// Create an input
    pub fn new(bytes: Vec<u8>, display_name: impl Into<String>) -> Self {
        Self {
            bytes,
            display_name: display_name.into(),
        }
    }
}

/// Metadata for one page of the composite
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRecord {
    /// Display name of the input file the page came from
    pub source_file: String,
    /// Page name, the display name with its file extension stripped
    pub page_name: String,
    /// Zero-based position in the composite page order
    pub page_index: usize,
}

/// Record of an input that failed to parse and was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedInput {
    /// Display name of the skipped input
    pub display_name: String,
    /// Parse failure message
    pub reason: String,
}

/// Result of one orchestrated merge
#[derive(Debug)]
pub struct MergeOutput {
    /// The composite archive
    pub archive: MergedArchive,
    /// Per-page metadata in composite page order
    pub pages: Vec<PageRecord>,
    /// Inputs that failed to parse and were left out
    pub skipped: Vec<SkippedInput>,
}

/// The only caller-facing entry point of the merge engine
#[derive(Debug, Clone, Copy, Default)]
pub struct Orchestrator<P> {
    parser: P,
}

impl<P: SceneParser> Orchestrator<P> {
    /// Create an orchestrator around a parse capability
    pub fn new(parser: P) -> Self {
        Self { parser }
    }

    /// Merge an ordered list of raw input files
    ///
    /// Inputs that fail to parse are recorded and skipped; the surviving
    /// archives merge in original input order (which becomes page order).
    /// Fails with [`OrchestrateError::NoUsableInputs`] when nothing parsed,
    /// and fail-fast on any merge error.
    pub fn process(&self, inputs: &[MergeInput]) -> Result<MergeOutput, OrchestrateError> {
        let mut named_archives = Vec::with_capacity(inputs.len());
        let mut skipped = Vec::new();

        for input in inputs {
            match self.parser.parse(&input.bytes) {
                Ok(archive) => {
                    debug!(
                        "Parsed input '{}': {} blocks, {} resources",
                        input.display_name,
                        archive.blocks.len(),
                        archive.resources.len()
                    );
                    named_archives.push((input.display_name.clone(), archive));
                }
                Err(error) => {
                    warn!("Skipping input '{}': {}", input.display_name, error);
                    skipped.push(SkippedInput {
                        display_name: input.display_name.clone(),
                        reason: error.to_string(),
                    });
                }
            }
        }

        if named_archives.is_empty() {
            return Err(OrchestrateError::NoUsableInputs { skipped });
        }

        let (names, archives): (Vec<String>, Vec<Archive>) = named_archives.into_iter().unzip();
        let merged = merge(archives)?;

        let mut pages = Vec::new();
        for (name, page_ids) in names.iter().zip(merged.pages_by_input()) {
            for _ in page_ids {
                pages.push(PageRecord {
                    source_file: name.clone(),
                    page_name: strip_extension(name),
                    page_index: pages.len(),
                });
            }
        }

        info!(
            "Merged {} of {} inputs into {} pages ({} skipped)",
            names.len(),
            inputs.len(),
            pages.len(),
            skipped.len()
        );

        Ok(MergeOutput {
            archive: merged,
            pages,
            skipped,
        })
    }
}

/// Strip one conventional file extension from a display name
fn strip_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}
