use super::{
    BlockCategory, BlockDefinition, BlockId, BlockInstance, BlockType, ParagraphBlock,
    RowLayoutBlock,
};

static ROW_LAYOUT: RowLayoutBlock = RowLayoutBlock;
static PARAGRAPH: ParagraphBlock = ParagraphBlock;

/// Lookup of block definitions by type tag, in picker order.
#[derive(Clone)]
pub struct BlockRegistry {
    definitions: Vec<&'static dyn BlockDefinition>,
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl BlockRegistry {
    /// Registry of every block type shipped with the builder
    pub fn builtin() -> Self {
        Self {
            definitions: vec![&ROW_LAYOUT as &'static dyn BlockDefinition, &PARAGRAPH],
        }
    }

    pub fn definitions(&self) -> impl Iterator<Item = &'static dyn BlockDefinition> + '_ {
        self.definitions.iter().copied()
    }

    pub fn in_category(
        &self,
        category: BlockCategory,
    ) -> impl Iterator<Item = &'static dyn BlockDefinition> + '_ {
        self.definitions()
            .filter(move |definition| definition.category() == category)
    }

    pub fn get(&self, block_type: BlockType) -> Option<&'static dyn BlockDefinition> {
        self.definitions()
            .find(|definition| definition.block_type() == block_type)
    }

    /// Create a default instance of `block_type`, None if it is not registered
    pub fn create_instance(&self, block_type: BlockType, id: BlockId) -> Option<BlockInstance> {
        self.get(block_type)
            .map(|definition| definition.create_instance(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde::Serialize;

    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct PickerEntry {
        block_type: BlockType,
        block_category: BlockCategory,
        icon: &'static str,
        label: &'static str,
    }

    #[test]
    fn test_builtin_picker_entries() {
        let entries: Vec<_> = BlockRegistry::builtin()
            .definitions()
            .map(|definition| {
                let button = definition.button();
                PickerEntry {
                    block_type: definition.block_type(),
                    block_category: definition.category(),
                    icon: button.icon,
                    label: button.label,
                }
            })
            .collect();

        insta::assert_yaml_snapshot!(entries, @r"
        - blockType: RowLayout
          blockCategory: Layout
          icon: rows
          label: Row
        - blockType: Paragraph
          blockCategory: Field
          icon: text
          label: Paragraph
        ");
    }

    #[test]
    fn test_lookup_by_type_tag() {
        let registry = BlockRegistry::builtin();
        let definition = registry.get("Paragraph".parse().unwrap()).unwrap();

        assert_eq!(definition.block_type(), BlockType::Paragraph);
    }

    #[test]
    fn test_create_instance_by_type_tag() {
        let registry = BlockRegistry::builtin();
        let instance = registry
            .create_instance(BlockType::Paragraph, BlockId::from("p-9"))
            .unwrap();

        assert_eq!(instance.id, BlockId::from("p-9"));
        assert_eq!(instance.block_type, BlockType::Paragraph);
        assert!(instance.is_well_formed());
    }

    #[test]
    fn test_field_category_lists_paragraph_only() {
        let registry = BlockRegistry::builtin();
        let fields: Vec<_> = registry
            .in_category(BlockCategory::Field)
            .map(|definition| definition.block_type())
            .collect();

        assert_eq!(fields, vec![BlockType::Paragraph]);
    }
}
