/*!
 * # Blocks
 *
 * A block is a self-contained form element type. Every block type provides:
 *
 * - a **definition** (`BlockDefinition`): type tag, category, picker button and a
 *   factory producing a default instance
 * - an **instance** shape (`BlockAttributes` variant) carried by `BlockInstance`
 * - views (canvas, live form, properties) supplied by the UI crate and selected by
 *   the same type tag
 *
 * Instances are handed around as the generic `BlockInstance`. Code that needs a
 * specific attribute shape narrows it first (see `ParagraphInstance::narrow`)
 * instead of assuming the shape.
 */

pub mod paragraph;
pub mod registry;
pub mod row_layout;

pub use paragraph::{FontSize, FontWeight, ParagraphAttributes, ParagraphBlock, ParagraphInstance};
pub use registry::BlockRegistry;
pub use row_layout::{RowLayoutAttributes, RowLayoutBlock};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque identifier of a block instance. Uniqueness is the tree owner's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockId(pub String);

impl BlockId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Fresh random id for newly added blocks
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BlockId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Type tag selecting a block definition and its views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BlockType {
    RowLayout,
    Paragraph,
}

impl BlockType {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockType::RowLayout => "RowLayout",
            BlockType::Paragraph => "Paragraph",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BlockType {
    type Err = BlockError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "RowLayout" => Ok(BlockType::RowLayout),
            "Paragraph" => Ok(BlockType::Paragraph),
            other => Err(BlockError::UnknownBlockType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BlockCategory {
    Layout,
    Field,
}

/// Button shown in the block picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockButton {
    /// Icon name understood by the UI's icon set
    pub icon: &'static str,
    pub label: &'static str,
}

/// Attribute payload of an instance, one variant per block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BlockAttributes {
    Paragraph(ParagraphAttributes),
    RowLayout(RowLayoutAttributes),
}

impl BlockAttributes {
    pub fn block_type(&self) -> BlockType {
        match self {
            BlockAttributes::Paragraph(_) => BlockType::Paragraph,
            BlockAttributes::RowLayout(_) => BlockType::RowLayout,
        }
    }

    /// Human-readable label every block type carries
    pub fn label(&self) -> &str {
        match self {
            BlockAttributes::Paragraph(attrs) => &attrs.label,
            BlockAttributes::RowLayout(attrs) => &attrs.label,
        }
    }
}

/// One placed occurrence of a block type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInstance {
    pub id: BlockId,
    pub block_type: BlockType,
    pub attributes: BlockAttributes,
    /// Child blocks, only populated for container types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<BlockInstance>,
}

impl BlockInstance {
    /// True when the type tag agrees with the attribute payload
    pub fn is_well_formed(&self) -> bool {
        self.block_type == self.attributes.block_type()
    }

    pub fn is_container(&self) -> bool {
        self.block_type == BlockType::RowLayout
    }

    pub fn find_child(&self, id: &BlockId) -> Option<&BlockInstance> {
        self.children.iter().find(|child| &child.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BlockError {
    #[error("Unknown block type: {0}")]
    UnknownBlockType(String),
    #[error("Block {id} is a {found} block, expected {expected}")]
    WrongBlockType {
        id: BlockId,
        expected: BlockType,
        found: BlockType,
    },
    #[error("Block {id} is tagged {tagged} but carries {carried} attributes")]
    AttributeMismatch {
        id: BlockId,
        tagged: BlockType,
        carried: BlockType,
    },
}

/// Registration contract every block type implements
pub trait BlockDefinition: Send + Sync {
    fn block_type(&self) -> BlockType;

    fn category(&self) -> BlockCategory;

    fn button(&self) -> BlockButton;

    /// Build a new instance with this type's default attributes.
    /// The id is taken as given; callers guarantee uniqueness.
    fn create_instance(&self, id: BlockId) -> BlockInstance;
}
