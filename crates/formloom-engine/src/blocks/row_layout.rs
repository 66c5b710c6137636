use serde::{Deserialize, Serialize};

use super::{
    BlockAttributes, BlockButton, BlockCategory, BlockDefinition, BlockId, BlockInstance,
    BlockType,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RowLayoutAttributes {
    pub label: String,
}

impl Default for RowLayoutAttributes {
    fn default() -> Self {
        Self {
            label: "Row".to_string(),
        }
    }
}

/// Container block holding field blocks in a row
#[derive(Debug, Clone, Copy, Default)]
pub struct RowLayoutBlock;

impl BlockDefinition for RowLayoutBlock {
    fn block_type(&self) -> BlockType {
        BlockType::RowLayout
    }

    fn category(&self) -> BlockCategory {
        BlockCategory::Layout
    }

    fn button(&self) -> BlockButton {
        BlockButton {
            icon: "rows",
            label: "Row",
        }
    }

    fn create_instance(&self, id: BlockId) -> BlockInstance {
        BlockInstance {
            id,
            block_type: BlockType::RowLayout,
            attributes: BlockAttributes::RowLayout(RowLayoutAttributes::default()),
            children: Vec::new(),
        }
    }
}
