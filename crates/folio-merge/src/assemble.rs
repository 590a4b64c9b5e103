//! Composite scene assembly

use std::collections::{BTreeMap, HashSet};

use tracing::{debug, info};

use folio_formats::archive::{Archive, ArchiveResult, RESOURCE_PREFIX};
use folio_formats::scene::{Block, BlockId, BlockKind, PropertyValue};

use crate::error::{MergeError, MergeResult};
use crate::namespace::namespace_resources;
use crate::remap::remap;

/// Layout property value of the synthesized composite root
pub const COMPOSITE_LAYOUT: &str = "vertical-stack";

/// The merged composite archive
///
/// Built incrementally by [`merge`] and handed out only after the
/// post-merge invariant check passed; never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct MergedArchive {
    /// Every surviving block plus the synthesized root, globally renumbered
    pub blocks: Vec<Block>,
    /// Every input archive's resources under namespaced paths
    pub resources: BTreeMap<String, Vec<u8>>,
    root_id: BlockId,
    pages: Vec<Vec<BlockId>>,
}

impl MergedArchive {
    /// Id of the synthesized composite root
    pub fn root_id(&self) -> BlockId {
        self.root_id
    }

    /// Page ids grouped per input archive, in input order
    pub fn pages_by_input(&self) -> &[Vec<BlockId>] {
        &self.pages
    }

    /// All page ids in composite order
    pub fn page_ids(&self) -> Vec<BlockId> {
        self.pages.iter().flatten().copied().collect()
    }

    /// Serialize the composite to container bytes
    ///
    /// The output is loadable by the same archive parser used for
    /// single-document archives.
    pub fn serialize(&self) -> ArchiveResult<Vec<u8>> {
        let archive = Archive {
            blocks: self.blocks.clone(),
            resources: self.resources.clone(),
        };
        archive.build()
    }
}

/// Merge an ordered list of archives into one composite
///
/// Folds [`remap`] over the archives with an initial id offset of 0,
/// threading each archive's `next_offset` forward and concatenating blocks,
/// page ids, and namespaced resources. A new scene root owning every page
/// (in input order) is synthesized at the final offset plus one, pages are
/// re-homed to it, and the whole composite is checked against the global
/// invariants before anything is returned.
///
/// Fail-fast: any remap failure or invariant violation aborts the merge
/// with no partial composite.
pub fn merge(archives: Vec<Archive>) -> MergeResult<MergedArchive> {
    let input_count = archives.len();

    let mut blocks = Vec::new();
    let mut resources = BTreeMap::new();
    let mut pages = Vec::with_capacity(input_count);
    let mut id_offset = 0;

    for (archive_index, archive) in archives.into_iter().enumerate() {
        let resource_map =
            namespace_resources(archive_index, archive.resources.keys().map(String::as_str));

        let output = remap(archive, id_offset, &resource_map).map_err(|source| {
            MergeError::Remap {
                archive_index,
                source,
            }
        })?;

        debug!(
            "Remapped archive {}: {} blocks, {} pages, offset {} -> {}",
            archive_index,
            output.blocks.len(),
            output.page_ids.len(),
            id_offset,
            output.next_offset
        );

        let mut archive_resources = output.resources;
        for (old_path, new_path) in resource_map {
            let Some(data) = archive_resources.remove(&old_path) else {
                continue;
            };
            if resources.insert(new_path.clone(), data).is_some() {
                return Err(MergeError::ResourceCollision(new_path));
            }
        }

        blocks.extend(output.blocks);
        pages.push(output.page_ids);
        id_offset = output.next_offset;
    }

    let root_id = id_offset + 1;
    let page_ids: Vec<BlockId> = pages.iter().flatten().copied().collect();
    let page_set: HashSet<BlockId> = page_ids.iter().copied().collect();

    // Re-home every page to the new composite root
    for block in &mut blocks {
        if page_set.contains(&block.id) {
            block.parent = Some(root_id);
        }
    }

    let mut root = Block::new(root_id, BlockKind::SceneRoot).with_children(page_ids);
    root.properties
        .insert("layout".to_string(), PropertyValue::from(COMPOSITE_LAYOUT));
    blocks.push(root);

    verify_invariants(&blocks, &resources, root_id)?;

    info!(
        "Assembled composite: {} archives, {} blocks, {} pages, {} resources",
        input_count,
        blocks.len(),
        pages.iter().map(Vec::len).sum::<usize>(),
        resources.len()
    );

    Ok(MergedArchive {
        blocks,
        resources,
        root_id,
        pages,
    })
}

/// Post-merge invariant check
///
/// Global id uniqueness, referential closure of every parent/child link,
/// exactly one scene root (the synthesized one), and no `resources/`
/// reference string pointing outside the composite resource map.
fn verify_invariants(
    blocks: &[Block],
    resources: &BTreeMap<String, Vec<u8>>,
    root_id: BlockId,
) -> MergeResult<()> {
    let mut ids = HashSet::with_capacity(blocks.len());
    for block in blocks {
        if !ids.insert(block.id) {
            return Err(MergeError::DuplicateId(block.id));
        }
    }

    for block in blocks {
        if block.is_root() && block.id != root_id {
            return Err(MergeError::StrayRoot(block.id));
        }

        if let Some(parent) = block.parent {
            if !ids.contains(&parent) {
                return Err(MergeError::DanglingParent {
                    block: block.id,
                    parent,
                });
            }
        }
        for &child in &block.children {
            if !ids.contains(&child) {
                return Err(MergeError::DanglingChild {
                    block: block.id,
                    child,
                });
            }
        }

        for value in block.properties.values() {
            let mut missing = None;
            value.visit_strings(&mut |text| {
                if missing.is_none()
                    && text.starts_with(RESOURCE_PREFIX)
                    && !resources.contains_key(text)
                {
                    missing = Some(text.to_string());
                }
            });
            if let Some(path) = missing {
                return Err(MergeError::DanglingResource {
                    block: block.id,
                    path,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    fn page_archive(page_property: Option<(&str, &str)>) -> Archive {
        let mut page = Block::new(2, BlockKind::Page).with_parent(1);
        if let Some((key, value)) = page_property {
            page = page.with_property(key, value);
        }
        Archive {
            blocks: vec![
                Block::new(1, BlockKind::SceneRoot).with_children(vec![2]),
                page,
            ],
            resources: BTreeMap::new(),
        }
    }

    #[test]
    fn test_merge_empty_input_list() {
        let merged = merge(Vec::new()).expect("Operation should succeed");

        assert_eq!(merged.blocks.len(), 1);
        assert_eq!(merged.root_id(), 1);
        assert!(merged.blocks[0].is_root());
        assert!(merged.blocks[0].children.is_empty());
        assert!(merged.resources.is_empty());
    }

    #[test]
    fn test_root_carries_layout_property() {
        let merged = merge(vec![page_archive(None)]).expect("Operation should succeed");

        let root = merged
            .blocks
            .iter()
            .find(|block| block.is_root())
            .expect("Root should exist");
        assert_eq!(root.properties["layout"], COMPOSITE_LAYOUT.into());
    }

    #[test]
    fn test_pages_re_homed_to_root() {
        let merged =
            merge(vec![page_archive(None), page_archive(None)]).expect("Operation should succeed");

        let root_id = merged.root_id();
        for &page_id in &merged.page_ids() {
            let page = merged
                .blocks
                .iter()
                .find(|block| block.id == page_id)
                .expect("Page should exist");
            assert_eq!(page.parent, Some(root_id));
        }
    }

    #[test]
    fn test_remap_failure_carries_archive_index() {
        let bad = Archive {
            blocks: vec![Block::new(1, BlockKind::Page)],
            resources: BTreeMap::new(),
        };
        let result = merge(vec![page_archive(None), bad]);

        assert!(matches!(
            result,
            Err(MergeError::Remap {
                archive_index: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_dangling_resource_reference_fails_merge() {
        // References a resource the archive never shipped
        let result = merge(vec![page_archive(Some(("image", "resources/ghost.png")))]);

        assert!(matches!(
            result,
            Err(MergeError::DanglingResource { path, .. }) if path == "resources/ghost.png"
        ));
    }

    #[test]
    fn test_plain_strings_do_not_fail_merge() {
        let merged = merge(vec![page_archive(Some(("note", "just text")))])
            .expect("Operation should succeed");
        assert_eq!(merged.page_ids().len(), 1);
    }
}
