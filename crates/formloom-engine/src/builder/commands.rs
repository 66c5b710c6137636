use crate::blocks::{BlockId, BlockInstance};

/// Commands accepted by the builder tree owner
#[derive(Debug, Clone, PartialEq)]
pub enum BuilderCmd {
    /// Insert a top-level container, appended when `position` is None
    AddBlock {
        instance: BlockInstance,
        position: Option<usize>,
    },
    AddChildBlock {
        parent_id: BlockId,
        instance: BlockInstance,
        position: Option<usize>,
    },
    /// Replace a child in place. `instance.id` must equal `block_id`.
    UpdateChildBlock {
        parent_id: BlockId,
        block_id: BlockId,
        instance: BlockInstance,
    },
    RemoveChildBlock {
        parent_id: BlockId,
        block_id: BlockId,
    },
    /// Remove a top-level container together with its children
    RemoveBlock {
        block_id: BlockId,
    },
}

impl BuilderCmd {
    /// Short name used in log lines
    pub fn name(&self) -> &'static str {
        match self {
            BuilderCmd::AddBlock { .. } => "AddBlock",
            BuilderCmd::AddChildBlock { .. } => "AddChildBlock",
            BuilderCmd::UpdateChildBlock { .. } => "UpdateChildBlock",
            BuilderCmd::RemoveChildBlock { .. } => "RemoveChildBlock",
            BuilderCmd::RemoveBlock { .. } => "RemoveBlock",
        }
    }
}
