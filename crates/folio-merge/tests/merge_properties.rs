#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Property-based tests for the merge invariants
//!
//! Randomized archives (varying block counts, sparse local ids, mixed page
//! and non-page kinds) must always merge into a composite with globally
//! unique ids, full referential closure, and conserved page counts.

use std::collections::{BTreeMap, HashSet};

use proptest::prelude::*;

use folio_formats::archive::Archive;
use folio_formats::scene::{Block, BlockId, BlockKind};
use folio_merge::merge;

/// One archive with a root at id 1 and blocks at sparse, increasing ids.
/// Each generated `(gap, is_page)` pair advances the id by `1 + gap`.
fn archive_strategy() -> impl Strategy<Value = Archive> {
    prop::collection::vec((0u64..3, any::<bool>()), 0..8).prop_map(|layout| {
        let mut blocks = Vec::with_capacity(layout.len() + 1);
        let mut children = Vec::new();
        let mut id = 1;

        for (gap, is_page) in layout {
            id += 1 + gap;
            let kind = if is_page {
                BlockKind::Page
            } else {
                BlockKind::Other("shape".to_string())
            };
            blocks.push(Block::new(id, kind).with_parent(1));
            children.push(id);
        }

        let mut all = vec![Block::new(1, BlockKind::SceneRoot).with_children(children)];
        all.append(&mut blocks);

        Archive {
            blocks: all,
            resources: BTreeMap::new(),
        }
    })
}

proptest! {
    #[test]
    fn merged_ids_are_globally_unique(archives in prop::collection::vec(archive_strategy(), 0..6)) {
        let merged = merge(archives).expect("Merge should succeed");

        let mut seen = HashSet::new();
        for block in &merged.blocks {
            prop_assert!(seen.insert(block.id), "Id {} appears twice", block.id);
        }
    }

    #[test]
    fn merged_references_resolve(archives in prop::collection::vec(archive_strategy(), 0..6)) {
        let merged = merge(archives).expect("Merge should succeed");

        let ids: HashSet<BlockId> = merged.blocks.iter().map(|block| block.id).collect();
        for block in &merged.blocks {
            if let Some(parent) = block.parent {
                prop_assert!(ids.contains(&parent));
            }
            for child in &block.children {
                prop_assert!(ids.contains(child));
            }
        }
    }

    #[test]
    fn page_count_is_conserved(archives in prop::collection::vec(archive_strategy(), 0..6)) {
        let expected: usize = archives
            .iter()
            .map(|archive| archive.blocks.iter().filter(|block| block.is_page()).count())
            .sum();

        let merged = merge(archives).expect("Merge should succeed");
        let actual = merged.blocks.iter().filter(|block| block.is_page()).count();

        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn root_children_match_page_order(archives in prop::collection::vec(archive_strategy(), 1..6)) {
        let merged = merge(archives).expect("Merge should succeed");

        let root = merged
            .blocks
            .iter()
            .find(|block| block.is_root())
            .expect("Root should exist");
        prop_assert_eq!(&root.children, &merged.page_ids());
    }

    #[test]
    fn exactly_one_root_survives(archives in prop::collection::vec(archive_strategy(), 0..6)) {
        let merged = merge(archives).expect("Merge should succeed");

        let roots = merged.blocks.iter().filter(|block| block.is_root()).count();
        prop_assert_eq!(roots, 1);
    }
}
