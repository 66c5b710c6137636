use std::collections::HashSet;

use crate::blocks::{BlockId, BlockInstance};
use crate::builder::{BuilderCmd, Patch};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuilderError {
    #[error("No container block with id {0}")]
    ParentNotFound(BlockId),
    #[error("Block {block_id} is not a child of {parent_id}")]
    BlockNotFound {
        parent_id: BlockId,
        block_id: BlockId,
    },
    #[error("Update for block {block_id} carries an instance with id {instance_id}")]
    IdMismatch {
        block_id: BlockId,
        instance_id: BlockId,
    },
    #[error("A block with id {0} already exists")]
    DuplicateId(BlockId),
    #[error("Position {position} is out of range for {len} blocks")]
    PositionOutOfRange { position: usize, len: usize },
    #[error("Block {0} is not a container")]
    NotAContainer(BlockId),
    #[error("Container {0} cannot be placed inside another container")]
    NestedContainer(BlockId),
    #[error("Block {0} has a type tag that does not match its attributes")]
    MalformedInstance(BlockId),
}

/// Owner of the form's block tree
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BuilderState {
    blocks: Vec<BlockInstance>,
    version: u64,
}

impl BuilderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Top-level containers in display order
    pub fn blocks(&self) -> &[BlockInstance] {
        &self.blocks
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Find a block anywhere in the tree
    pub fn find(&self, id: &BlockId) -> Option<&BlockInstance> {
        self.blocks.iter().find_map(|block| {
            if &block.id == id {
                Some(block)
            } else {
                block.find_child(id)
            }
        })
    }

    /// Id of the container holding `id`, None for top-level or unknown blocks
    pub fn parent_of(&self, id: &BlockId) -> Option<&BlockId> {
        self.blocks
            .iter()
            .find(|block| block.find_child(id).is_some())
            .map(|block| &block.id)
    }

    pub fn contains(&self, id: &BlockId) -> bool {
        self.find(id).is_some()
    }

    /// Apply one command. On error the tree is left unchanged.
    pub fn apply(&mut self, cmd: BuilderCmd) -> Result<Patch, BuilderError> {
        let changed = match cmd {
            BuilderCmd::AddBlock { instance, position } => {
                if !instance.is_container() {
                    return Err(BuilderError::NotAContainer(instance.id));
                }
                self.check_new(&instance)?;
                let mut seen = HashSet::from([&instance.id]);
                for child in &instance.children {
                    self.check_new(child)?;
                    if child.is_container() {
                        return Err(BuilderError::NestedContainer(child.id.clone()));
                    }
                    if !seen.insert(&child.id) {
                        return Err(BuilderError::DuplicateId(child.id.clone()));
                    }
                }
                let id = instance.id.clone();
                insert_at(&mut self.blocks, instance, position)?;
                id
            }
            BuilderCmd::AddChildBlock {
                parent_id,
                instance,
                position,
            } => {
                if instance.is_container() {
                    return Err(BuilderError::NestedContainer(instance.id));
                }
                self.check_new(&instance)?;
                let parent = self.container_mut(&parent_id)?;
                let id = instance.id.clone();
                insert_at(&mut parent.children, instance, position)?;
                id
            }
            BuilderCmd::UpdateChildBlock {
                parent_id,
                block_id,
                instance,
            } => {
                if instance.id != block_id {
                    return Err(BuilderError::IdMismatch {
                        block_id,
                        instance_id: instance.id,
                    });
                }
                if !instance.is_well_formed() {
                    return Err(BuilderError::MalformedInstance(block_id));
                }
                if instance.is_container() {
                    return Err(BuilderError::NestedContainer(block_id));
                }
                let parent = self.container_mut(&parent_id)?;
                let slot = parent
                    .children
                    .iter_mut()
                    .find(|child| child.id == block_id)
                    .ok_or_else(|| BuilderError::BlockNotFound {
                        parent_id: parent_id.clone(),
                        block_id: block_id.clone(),
                    })?;
                *slot = instance;
                block_id
            }
            BuilderCmd::RemoveChildBlock {
                parent_id,
                block_id,
            } => {
                let parent = self.container_mut(&parent_id)?;
                let index = parent
                    .children
                    .iter()
                    .position(|child| child.id == block_id)
                    .ok_or_else(|| BuilderError::BlockNotFound {
                        parent_id: parent_id.clone(),
                        block_id: block_id.clone(),
                    })?;
                parent.children.remove(index);
                block_id
            }
            BuilderCmd::RemoveBlock { block_id } => {
                let index = self
                    .blocks
                    .iter()
                    .position(|block| block.id == block_id)
                    .ok_or_else(|| BuilderError::ParentNotFound(block_id.clone()))?;
                self.blocks.remove(index);
                block_id
            }
        };

        self.version += 1;
        Ok(Patch {
            changed,
            version: self.version,
        })
    }

    fn check_new(&self, instance: &BlockInstance) -> Result<(), BuilderError> {
        if !instance.is_well_formed() {
            return Err(BuilderError::MalformedInstance(instance.id.clone()));
        }
        if self.contains(&instance.id) {
            return Err(BuilderError::DuplicateId(instance.id.clone()));
        }
        Ok(())
    }

    fn container_mut(&mut self, id: &BlockId) -> Result<&mut BlockInstance, BuilderError> {
        let block = self
            .blocks
            .iter_mut()
            .find(|block| &block.id == id)
            .ok_or_else(|| BuilderError::ParentNotFound(id.clone()))?;
        if !block.is_container() {
            return Err(BuilderError::NotAContainer(id.clone()));
        }
        Ok(block)
    }
}

fn insert_at(
    blocks: &mut Vec<BlockInstance>,
    instance: BlockInstance,
    position: Option<usize>,
) -> Result<(), BuilderError> {
    match position {
        None => blocks.push(instance),
        Some(position) if position <= blocks.len() => blocks.insert(position, instance),
        Some(position) => {
            return Err(BuilderError::PositionOutOfRange {
                position,
                len: blocks.len(),
            });
        }
    }
    Ok(())
}
