//! Design block model

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::scene::PropertyValue;

/// Block identifier, unique within one archive's descriptor
///
/// Id 0 is reserved; descriptor validation rejects it.
pub type BlockId = u64;

/// Block kind tag
///
/// Serialized as a plain string: `"scene-root"`, `"page"`, or any other
/// renderer-specific type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BlockKind {
    /// The distinguished block owning all top-level content
    SceneRoot,
    /// One renderable page
    Page,
    /// Any other renderer-specific block type
    Other(String),
}

impl BlockKind {
    const SCENE_ROOT: &'static str = "scene-root";
    const PAGE: &'static str = "page";
}

impl From<String> for BlockKind {
    fn from(value: String) -> Self {
        match value.as_str() {
            Self::SCENE_ROOT => Self::SceneRoot,
            Self::PAGE => Self::Page,
            _ => Self::Other(value),
        }
    }
}

impl From<BlockKind> for String {
    fn from(kind: BlockKind) -> Self {
        match kind {
            BlockKind::SceneRoot => BlockKind::SCENE_ROOT.to_string(),
            BlockKind::Page => BlockKind::PAGE.to_string(),
            BlockKind::Other(name) => name,
        }
    }
}

/// A node in the design graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Block id, local to the originating archive
    pub id: BlockId,

    /// Block kind tag
    pub kind: BlockKind,

    /// Owning block id, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<BlockId>,

    /// Owned block ids, in render order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockId>,

    /// Renderer-specific attributes, including resource references
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Block {
    /// Create a block with no parent, children, or properties
    pub fn new(id: BlockId, kind: BlockKind) -> Self {
        Self {
            id,
            kind,
            parent: None,
            children: Vec::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Set the parent id
    #[must_use]
    pub fn with_parent(mut self, parent: BlockId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Set the children list
    #[must_use]
    pub fn with_children(mut self, children: Vec<BlockId>) -> Self {
        self.children = children;
        self
    }

    /// Insert one property
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Whether this block is a scene root
    pub fn is_root(&self) -> bool {
        self.kind == BlockKind::SceneRoot
    }

    /// Whether this block is a page
    pub fn is_page(&self) -> bool {
        self.kind == BlockKind::Page
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_string_mapping() {
        assert_eq!(BlockKind::from("scene-root".to_string()), BlockKind::SceneRoot);
        assert_eq!(BlockKind::from("page".to_string()), BlockKind::Page);
        assert_eq!(
            BlockKind::from("text".to_string()),
            BlockKind::Other("text".to_string())
        );

        assert_eq!(String::from(BlockKind::SceneRoot), "scene-root");
        assert_eq!(String::from(BlockKind::Page), "page");
        assert_eq!(String::from(BlockKind::Other("vector".to_string())), "vector");
    }

    #[test]
    fn test_block_json_round_trip() {
        let block = Block::new(2, BlockKind::Page)
            .with_parent(1)
            .with_children(vec![3, 4])
            .with_property("image", "resources/img.png");

        let json = serde_json::to_string(&block).expect("Operation should succeed");
        let parsed: Block = serde_json::from_str(&json).expect("Operation should succeed");
        assert_eq!(block, parsed);
    }

    #[test]
    fn test_block_optional_fields_omitted() {
        let block = Block::new(7, BlockKind::Other("text".to_string()));
        let json = serde_json::to_string(&block).expect("Operation should succeed");

        assert_eq!(json, r#"{"id":7,"kind":"text"}"#);
    }

    #[test]
    fn test_block_missing_kind_rejected() {
        let result: Result<Block, _> = serde_json::from_str(r#"{"id":1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_block_missing_id_rejected() {
        let result: Result<Block, _> = serde_json::from_str(r#"{"kind":"page"}"#);
        assert!(result.is_err());
    }
}
