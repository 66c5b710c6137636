use crate::blocks::{BlockId, FontSize, FontWeight, ParagraphAttributes, ParagraphInstance};
use crate::builder::BuilderCmd;
use crate::form::{
    FieldError, FieldStatus, Form, PropagationPolicy, Schema, ValidationMode, validate_option,
    validate_trimmed_length,
};

pub const TEXT_MIN_CHARS: usize = 1;
pub const TEXT_MAX_CHARS: usize = 1000;

const FONT_SIZE_OPTIONS: [&str; 3] = ["small", "medium", "large"];
const FONT_WEIGHT_OPTIONS: [&str; 2] = ["lighter", "normal"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ParagraphField {
    Text,
    FontSize,
    FontWeight,
}

impl ParagraphField {
    /// Attribute key the field edits
    pub fn name(self) -> &'static str {
        match self {
            ParagraphField::Text => "text",
            ParagraphField::FontSize => "fontSize",
            ParagraphField::FontWeight => "fontWeight",
        }
    }
}

/// The editable subset of `ParagraphAttributes`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphFormValues {
    pub text: String,
    pub font_size: FontSize,
    pub font_weight: FontWeight,
}

impl From<&ParagraphAttributes> for ParagraphFormValues {
    fn from(attributes: &ParagraphAttributes) -> Self {
        Self {
            text: attributes.text.clone(),
            font_size: attributes.font_size,
            font_weight: attributes.font_weight,
        }
    }
}

impl ParagraphFormValues {
    /// Overlay the form values on `attributes`; attributes the form does not edit
    /// (the label) are kept from `attributes`.
    pub fn merge_into(&self, attributes: &ParagraphAttributes) -> ParagraphAttributes {
        ParagraphAttributes {
            text: self.text.clone(),
            font_size: self.font_size,
            font_weight: self.font_weight,
            ..attributes.clone()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParagraphSchema;

impl Schema for ParagraphSchema {
    type Field = ParagraphField;
    type Values = ParagraphFormValues;

    fn fields() -> &'static [ParagraphField] {
        &[
            ParagraphField::Text,
            ParagraphField::FontSize,
            ParagraphField::FontWeight,
        ]
    }

    fn validate_field(
        values: &ParagraphFormValues,
        field: ParagraphField,
    ) -> Result<(), FieldError> {
        match field {
            ParagraphField::Text => {
                validate_trimmed_length(&values.text, TEXT_MIN_CHARS, TEXT_MAX_CHARS)
            }
            ParagraphField::FontSize => {
                validate_option(values.font_size.as_str(), &FONT_SIZE_OPTIONS)
            }
            ParagraphField::FontWeight => {
                validate_option(values.font_weight.as_str(), &FONT_WEIGHT_OPTIONS)
            }
        }
    }
}

/// Editing state of the Paragraph properties panel.
///
/// Validates on blur and writes optimistically: every accepted change yields an
/// `UpdateChildBlock` command carrying the whole form merged over the block's
/// current attributes, whether or not the text currently validates. Without a
/// parent id the editor is detached and never yields commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ParagraphEditor {
    form: Form<ParagraphSchema>,
    block_id: BlockId,
    parent_id: Option<BlockId>,
}

impl ParagraphEditor {
    pub const VALIDATION_MODE: ValidationMode = ValidationMode::OnBlur;
    pub const PROPAGATION_POLICY: PropagationPolicy = PropagationPolicy::OptimisticWrite;

    pub fn open(block: &ParagraphInstance, parent_id: Option<BlockId>) -> Self {
        Self {
            form: Form::new(
                ParagraphFormValues::from(&block.attributes),
                Self::VALIDATION_MODE,
                Self::PROPAGATION_POLICY,
            ),
            block_id: block.id.clone(),
            parent_id,
        }
    }

    /// Block the editing state was opened for
    pub fn block_id(&self) -> &BlockId {
        &self.block_id
    }

    pub fn is_attached(&self) -> bool {
        self.parent_id.is_some()
    }

    pub fn values(&self) -> &ParagraphFormValues {
        self.form.values()
    }

    pub fn status(&self, field: ParagraphField) -> FieldStatus {
        self.form.status(field)
    }

    pub fn error(&self, field: ParagraphField) -> Option<&FieldError> {
        self.form.error(field)
    }

    pub fn blur(&mut self, field: ParagraphField) {
        self.form.blur(field);
    }

    pub fn validate(&mut self) -> Result<(), Vec<(ParagraphField, FieldError)>> {
        self.form.validate()
    }

    pub fn change_text(
        &mut self,
        block: &ParagraphInstance,
        text: impl Into<String>,
    ) -> Option<BuilderCmd> {
        let text = text.into();
        let propagate = self
            .form
            .change(ParagraphField::Text, move |values| values.text = text);
        self.update_for(block, propagate)
    }

    /// Apply a font size chosen by option value
    pub fn select_font_size(&mut self, block: &ParagraphInstance, value: &str) -> Option<BuilderCmd> {
        match value.parse::<FontSize>() {
            Ok(size) => {
                let propagate = self
                    .form
                    .change(ParagraphField::FontSize, |values| values.font_size = size);
                self.update_for(block, propagate)
            }
            Err(_) => {
                self.reject_option(ParagraphField::FontSize, value, &FONT_SIZE_OPTIONS);
                None
            }
        }
    }

    /// Apply a font weight chosen by option value
    pub fn select_font_weight(
        &mut self,
        block: &ParagraphInstance,
        value: &str,
    ) -> Option<BuilderCmd> {
        match value.parse::<FontWeight>() {
            Ok(weight) => {
                let propagate = self
                    .form
                    .change(ParagraphField::FontWeight, |values| values.font_weight = weight);
                self.update_for(block, propagate)
            }
            Err(_) => {
                self.reject_option(ParagraphField::FontWeight, value, &FONT_WEIGHT_OPTIONS);
                None
            }
        }
    }

    fn reject_option(&mut self, field: ParagraphField, value: &str, options: &[&'static str]) {
        if let Err(error) = validate_option(value, options) {
            self.form.reject(field, error);
        }
    }

    /// Update command for `block`, None when the policy holds the change back or
    /// `block` is not the block this editor was opened for
    fn update_for(&self, block: &ParagraphInstance, propagate: bool) -> Option<BuilderCmd> {
        if !propagate || block.id != self.block_id {
            return None;
        }
        let parent_id = self.parent_id.clone()?;
        let attributes = self.form.values().merge_into(&block.attributes);

        Some(BuilderCmd::UpdateChildBlock {
            parent_id,
            block_id: self.block_id.clone(),
            instance: block.with_attributes(attributes),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::{BlockAttributes, BlockDefinition, ParagraphBlock};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn paragraph(id: &str) -> ParagraphInstance {
        let instance = ParagraphBlock.create_instance(BlockId::from(id));
        ParagraphInstance::narrow(&instance).unwrap()
    }

    fn attached(block: &ParagraphInstance) -> ParagraphEditor {
        ParagraphEditor::open(block, Some(BlockId::from("row-1")))
    }

    fn written_attributes(cmd: Option<BuilderCmd>) -> ParagraphAttributes {
        match cmd {
            Some(BuilderCmd::UpdateChildBlock { instance, .. }) => match instance.attributes {
                BlockAttributes::Paragraph(attributes) => attributes,
                other => panic!("expected paragraph attributes, got {other:?}"),
            },
            other => panic!("expected an update command, got {other:?}"),
        }
    }

    #[test]
    fn test_open_mirrors_block_attributes() {
        let block = paragraph("p-1");
        let editor = attached(&block);

        assert_eq!(editor.values().text, block.attributes.text);
        assert_eq!(editor.values().font_size, block.attributes.font_size);
        assert_eq!(editor.values().font_weight, block.attributes.font_weight);
        assert_eq!(editor.block_id(), &block.id);
        assert_eq!(editor.status(ParagraphField::Text), FieldStatus::Pristine);
    }

    #[test]
    fn test_text_change_emits_update_for_parent_and_block() {
        let block = paragraph("p-1");
        let mut editor = attached(&block);

        let cmd = editor.change_text(&block, "Hello");

        match cmd {
            Some(BuilderCmd::UpdateChildBlock {
                parent_id,
                block_id,
                instance,
            }) => {
                assert_eq!(parent_id, BlockId::from("row-1"));
                assert_eq!(block_id, BlockId::from("p-1"));
                assert_eq!(instance.id, BlockId::from("p-1"));
            }
            other => panic!("expected an update command, got {other:?}"),
        }
    }

    #[test]
    fn test_update_preserves_label() {
        let mut block = paragraph("p-1");
        block.attributes.label = "Intro".to_string();
        let mut editor = attached(&block);

        let attributes = written_attributes(editor.change_text(&block, "Hello"));

        assert_eq!(
            attributes,
            ParagraphAttributes {
                label: "Intro".to_string(),
                text: "Hello".to_string(),
                font_size: FontSize::Small,
                font_weight: FontWeight::Normal,
            }
        );
    }

    #[test]
    fn test_update_carries_all_current_form_values() {
        let block = paragraph("p-1");
        let mut editor = attached(&block);

        editor.select_font_size(&block, "large");
        editor.select_font_weight(&block, "lighter");
        let attributes = written_attributes(editor.change_text(&block, "Hello"));

        assert_eq!(attributes.font_size, FontSize::Large);
        assert_eq!(attributes.font_weight, FontWeight::Lighter);
    }

    #[rstest]
    #[case::single_char("x".to_string(), None)]
    #[case::max_length("a".repeat(1000), None)]
    #[case::padded_max("a".repeat(1000) + "   ", None)]
    #[case::empty(String::new(), Some(FieldError::TooShort { min: 1 }))]
    #[case::blank("   ".to_string(), Some(FieldError::TooShort { min: 1 }))]
    #[case::too_long("a".repeat(1001), Some(FieldError::TooLong { max: 1000 }))]
    fn test_text_is_validated_on_blur_and_always_propagated(
        #[case] text: String,
        #[case] expected_error: Option<FieldError>,
    ) {
        let block = paragraph("p-1");
        let mut editor = attached(&block);

        let attributes = written_attributes(editor.change_text(&block, text.clone()));
        assert_eq!(attributes.text, text);
        assert_eq!(editor.error(ParagraphField::Text), None);

        editor.blur(ParagraphField::Text);
        assert_eq!(editor.error(ParagraphField::Text), expected_error.as_ref());
    }

    #[rstest]
    #[case("small", FontSize::Small)]
    #[case("medium", FontSize::Medium)]
    #[case("large", FontSize::Large)]
    fn test_font_size_selection(#[case] value: &str, #[case] expected: FontSize) {
        let block = paragraph("p-1");
        let mut editor = attached(&block);

        let attributes = written_attributes(editor.select_font_size(&block, value));

        assert_eq!(attributes.font_size, expected);
        assert_eq!(editor.values().font_size, expected);
    }

    #[test]
    fn test_lighter_weight_is_stored_as_lighter() {
        let block = paragraph("p-1");
        let mut editor = attached(&block);
        let lighter = FontWeight::ALL
            .into_iter()
            .find(|weight| weight.label() == "Lighter")
            .unwrap();

        let attributes = written_attributes(editor.select_font_weight(&block, lighter.as_str()));

        assert_eq!(attributes.font_weight, FontWeight::Lighter);
        assert_eq!(attributes.font_weight.as_str(), "lighter");
    }

    #[test]
    fn test_unknown_weight_value_is_rejected_locally() {
        let block = paragraph("p-1");
        let mut editor = attached(&block);

        let cmd = editor.select_font_weight(&block, "light");

        assert_eq!(cmd, None);
        assert_eq!(editor.values().font_weight, FontWeight::Normal);
        assert_eq!(
            editor.error(ParagraphField::FontWeight),
            Some(&FieldError::InvalidOption {
                value: "light".to_string(),
                expected: vec!["lighter", "normal"],
            })
        );
    }

    #[test]
    fn test_detached_editor_edits_locally_only() {
        let block = paragraph("p-1");
        let mut editor = ParagraphEditor::open(&block, None);
        assert!(!editor.is_attached());

        assert_eq!(editor.change_text(&block, ""), None);
        assert_eq!(editor.select_font_size(&block, "medium"), None);
        assert_eq!(editor.select_font_weight(&block, "lighter"), None);
        editor.blur(ParagraphField::Text);

        assert_eq!(editor.values().text, "");
        assert_eq!(editor.values().font_size, FontSize::Medium);
        assert_eq!(editor.values().font_weight, FontWeight::Lighter);
        assert!(editor.error(ParagraphField::Text).is_some());
    }

    #[test]
    fn test_edits_against_another_block_are_not_written() {
        let opened = paragraph("p-1");
        let other = paragraph("p-2");
        let mut editor = attached(&opened);

        assert_eq!(editor.change_text(&other, "Hello"), None);
        assert_eq!(editor.select_font_size(&other, "large"), None);

        // Local state still follows the edit
        assert_eq!(editor.values().text, "Hello");
        let attributes = written_attributes(editor.change_text(&opened, "Hello again"));
        assert_eq!(attributes.font_size, FontSize::Large);
    }

    #[test]
    fn test_validate_checks_every_field() {
        let block = paragraph("p-1");
        let mut editor = attached(&block);
        assert_eq!(editor.validate(), Ok(()));

        editor.change_text(&block, "");
        assert_eq!(
            editor.validate(),
            Err(vec![(ParagraphField::Text, FieldError::TooShort { min: 1 })])
        );
        assert_eq!(editor.status(ParagraphField::FontSize), FieldStatus::Valid);
    }
}
