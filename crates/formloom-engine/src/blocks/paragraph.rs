use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{
    BlockAttributes, BlockButton, BlockCategory, BlockDefinition, BlockError, BlockId,
    BlockInstance, BlockType,
};

pub const DEFAULT_LABEL: &str = "Paragraph";
pub const DEFAULT_TEXT: &str = "Lorem ipsum dolor sit amet,consectetur adipiscing elit. Curabitur quis sem odio. Sed commodo vestibulum leo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl FontSize {
    pub const ALL: [FontSize; 3] = [FontSize::Small, FontSize::Medium, FontSize::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Medium => "medium",
            FontSize::Large => "large",
        }
    }

    /// Text shown for this value in a selector
    pub fn label(self) -> &'static str {
        match self {
            FontSize::Small => "Small",
            FontSize::Medium => "Medium",
            FontSize::Large => "Large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Normal,
    Lighter,
}

impl FontWeight {
    /// Selector order: lighter first, as the weight picker lists it
    pub const ALL: [FontWeight; 2] = [FontWeight::Lighter, FontWeight::Normal];

    pub fn as_str(self) -> &'static str {
        match self {
            FontWeight::Normal => "normal",
            FontWeight::Lighter => "lighter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FontWeight::Normal => "Normal",
            FontWeight::Lighter => "Lighter",
        }
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontWeight {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FontWeight::ALL
            .into_iter()
            .find(|weight| weight.as_str() == s)
            .ok_or_else(|| s.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParagraphAttributes {
    pub label: String,
    pub text: String,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
}

impl Default for ParagraphAttributes {
    fn default() -> Self {
        Self {
            label: DEFAULT_LABEL.to_string(),
            text: DEFAULT_TEXT.to_string(),
            font_size: FontSize::Small,
            font_weight: FontWeight::Normal,
        }
    }
}

/// Definition of the static text block
#[derive(Debug, Clone, Copy, Default)]
pub struct ParagraphBlock;

impl BlockDefinition for ParagraphBlock {
    fn block_type(&self) -> BlockType {
        BlockType::Paragraph
    }

    fn category(&self) -> BlockCategory {
        BlockCategory::Field
    }

    fn button(&self) -> BlockButton {
        BlockButton {
            icon: "text",
            label: "Paragraph",
        }
    }

    fn create_instance(&self, id: BlockId) -> BlockInstance {
        BlockInstance {
            id,
            block_type: BlockType::Paragraph,
            attributes: BlockAttributes::Paragraph(ParagraphAttributes::default()),
            children: Vec::new(),
        }
    }
}

/// A `BlockInstance` checked to be a Paragraph, with its attributes unpacked.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphInstance {
    pub id: BlockId,
    pub attributes: ParagraphAttributes,
}

impl ParagraphInstance {
    /// Narrow a generic instance. Fails on a foreign type tag or when the tag and
    /// the attribute payload disagree.
    pub fn narrow(instance: &BlockInstance) -> Result<Self, BlockError> {
        if instance.block_type != BlockType::Paragraph {
            return Err(BlockError::WrongBlockType {
                id: instance.id.clone(),
                expected: BlockType::Paragraph,
                found: instance.block_type,
            });
        }

        match &instance.attributes {
            BlockAttributes::Paragraph(attributes) => Ok(Self {
                id: instance.id.clone(),
                attributes: attributes.clone(),
            }),
            other => Err(BlockError::AttributeMismatch {
                id: instance.id.clone(),
                tagged: instance.block_type,
                carried: other.block_type(),
            }),
        }
    }

    /// Rebuild the generic instance with replaced attributes
    pub fn with_attributes(&self, attributes: ParagraphAttributes) -> BlockInstance {
        BlockInstance {
            id: self.id.clone(),
            block_type: BlockType::Paragraph,
            attributes: BlockAttributes::Paragraph(attributes),
            children: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::RowLayoutAttributes;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_create_instance_defaults() {
        let instance = ParagraphBlock.create_instance(BlockId::from("p-1"));

        insta::assert_debug_snapshot!(instance, @r#"
        BlockInstance {
            id: BlockId(
                "p-1",
            ),
            block_type: Paragraph,
            attributes: Paragraph(
                ParagraphAttributes {
                    label: "Paragraph",
                    text: "Lorem ipsum dolor sit amet,consectetur adipiscing elit. Curabitur quis sem odio. Sed commodo vestibulum leo.",
                    font_size: Small,
                    font_weight: Normal,
                },
            ),
            children: [],
        }
        "#);
    }

    #[test]
    fn test_instances_share_defaults_but_not_ownership() {
        let first = ParagraphBlock.create_instance(BlockId::from("a"));
        let mut second = ParagraphBlock.create_instance(BlockId::from("b"));

        assert_ne!(first.id, second.id);
        assert_eq!(first.attributes, second.attributes);

        if let BlockAttributes::Paragraph(attrs) = &mut second.attributes {
            attrs.text = "changed".to_string();
            attrs.font_size = FontSize::Large;
        }

        assert_eq!(
            first.attributes,
            BlockAttributes::Paragraph(ParagraphAttributes::default())
        );
        assert_ne!(first.attributes, second.attributes);
    }

    #[test]
    fn test_definition_metadata() {
        assert_eq!(ParagraphBlock.block_type(), BlockType::Paragraph);
        assert_eq!(ParagraphBlock.category(), BlockCategory::Field);
        assert_eq!(ParagraphBlock.button().label, "Paragraph");
    }

    #[rstest]
    #[case("small", Ok(FontSize::Small))]
    #[case("medium", Ok(FontSize::Medium))]
    #[case("large", Ok(FontSize::Large))]
    #[case("huge", Err("huge".to_string()))]
    fn test_font_size_parse(#[case] input: &str, #[case] expected: Result<FontSize, String>) {
        assert_eq!(input.parse::<FontSize>(), expected);
    }

    #[rstest]
    #[case("normal", Ok(FontWeight::Normal))]
    #[case("lighter", Ok(FontWeight::Lighter))]
    #[case("light", Err("light".to_string()))]
    fn test_font_weight_parse(#[case] input: &str, #[case] expected: Result<FontWeight, String>) {
        assert_eq!(input.parse::<FontWeight>(), expected);
    }

    #[test]
    fn test_lighter_option_carries_lighter_value() {
        let lighter = FontWeight::ALL
            .into_iter()
            .find(|weight| weight.label() == "Lighter")
            .unwrap();
        assert_eq!(lighter.as_str(), "lighter");
    }

    #[test]
    fn test_narrow_paragraph() {
        let instance = ParagraphBlock.create_instance(BlockId::from("p-1"));
        let narrowed = ParagraphInstance::narrow(&instance).unwrap();

        assert_eq!(narrowed.id, BlockId::from("p-1"));
        assert_eq!(narrowed.attributes, ParagraphAttributes::default());
        assert_eq!(narrowed.with_attributes(narrowed.attributes.clone()), instance);
    }

    #[test]
    fn test_narrow_rejects_other_block_types() {
        let instance = crate::blocks::RowLayoutBlock.create_instance(BlockId::from("row"));
        let err = ParagraphInstance::narrow(&instance).unwrap_err();

        assert_eq!(
            err,
            BlockError::WrongBlockType {
                id: BlockId::from("row"),
                expected: BlockType::Paragraph,
                found: BlockType::RowLayout,
            }
        );
    }

    #[test]
    fn test_narrow_rejects_mismatched_attributes() {
        let instance = BlockInstance {
            id: BlockId::from("bad"),
            block_type: BlockType::Paragraph,
            attributes: BlockAttributes::RowLayout(RowLayoutAttributes::default()),
            children: Vec::new(),
        };

        assert!(matches!(
            ParagraphInstance::narrow(&instance),
            Err(BlockError::AttributeMismatch { .. })
        ));
    }
}
