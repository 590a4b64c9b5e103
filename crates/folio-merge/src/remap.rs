//! Per-archive graph remapping

use std::collections::{BTreeMap, HashMap, HashSet};

use folio_formats::archive::Archive;
use folio_formats::scene::{Block, BlockId};

use crate::error::{RemapError, RemapResult};

/// Result of remapping one archive into the global id space
#[derive(Debug, Clone, PartialEq)]
pub struct RemapOutput {
    /// The archive's blocks with globally unique ids, root excluded,
    /// in original scan order
    pub blocks: Vec<Block>,
    /// New ids of the archive's page blocks, in scan order
    pub page_ids: Vec<BlockId>,
    /// First id offset free for the next archive
    pub next_offset: u64,
    /// The archive's resource bytes, untouched, threaded through for the
    /// assembler
    pub resources: BTreeMap<String, Vec<u8>>,
}

/// Remap one archive's graph into the global id space
///
/// Consumes the archive. Every block except the scene root gets
/// `new_id = local_id + id_offset`; the root is dropped. Parent links to
/// the dropped root become `None` (pages are re-parented later by the
/// assembler), all other `parent`/`children` references are rewritten
/// through the id map, and any reference that does not resolve fails the
/// remap. Property strings matching a `resource_map` key verbatim are
/// replaced with the mapped path; all other strings are ordinary data and
/// stay untouched.
///
/// `next_offset` is `id_offset + max_local_id` over all blocks including
/// the dropped root. Local ids are 1-based (id 0 is rejected), so archive
/// ranges `(offset, offset + max]` never overlap and a dropped root's slot
/// is never reassigned.
pub fn remap(
    archive: Archive,
    id_offset: u64,
    resource_map: &BTreeMap<String, String>,
) -> RemapResult<RemapOutput> {
    let Archive { blocks, resources } = archive;

    let root_count = blocks.iter().filter(|block| block.is_root()).count();
    let old_root_id = match root_count {
        1 => blocks
            .iter()
            .find(|block| block.is_root())
            .map(|block| block.id)
            .ok_or(RemapError::MissingRoot)?,
        0 => return Err(RemapError::MissingRoot),
        count => return Err(RemapError::MultipleRoots { count }),
    };

    // First pass: id map for every surviving block, max over all local ids
    let mut id_map = HashMap::with_capacity(blocks.len());
    let mut seen = HashSet::with_capacity(blocks.len());
    let mut max_local_id = 0;
    for block in &blocks {
        if block.id == 0 {
            return Err(RemapError::ReservedId);
        }
        if !seen.insert(block.id) {
            return Err(RemapError::DuplicateId(block.id));
        }
        max_local_id = max_local_id.max(block.id);
        if block.id != old_root_id {
            id_map.insert(block.id, block.id + id_offset);
        }
    }

    // Second pass: rewrite references on the kept blocks
    let mut remapped = Vec::with_capacity(blocks.len().saturating_sub(1));
    let mut page_ids = Vec::new();
    for mut block in blocks {
        if block.id == old_root_id {
            continue;
        }
        let local_id = block.id;
        block.id = id_map[&local_id];

        block.parent = match block.parent {
            Some(parent) if parent == old_root_id => None,
            Some(parent) => Some(*id_map.get(&parent).ok_or(RemapError::DanglingParent {
                block: local_id,
                parent,
            })?),
            None => None,
        };

        let mut children = Vec::with_capacity(block.children.len());
        for child in block.children {
            children.push(*id_map.get(&child).ok_or(RemapError::DanglingChild {
                block: local_id,
                child,
            })?);
        }
        block.children = children;

        for value in block.properties.values_mut() {
            value.rewrite_strings(&|text| resource_map.get(text).cloned());
        }

        if block.is_page() {
            page_ids.push(block.id);
        }
        remapped.push(block);
    }

    Ok(RemapOutput {
        blocks: remapped,
        page_ids,
        next_offset: id_offset + max_local_id,
        resources,
    })
}
