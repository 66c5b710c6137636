use crate::blocks::BlockId;

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Patch {
    /// Block that was added, replaced or removed
    pub changed: BlockId,
    pub version: u64,
}
