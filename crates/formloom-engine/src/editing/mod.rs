//! Properties editors: the editing state behind each block type's properties
//! panel. Editors never touch the builder tree; they return `BuilderCmd`s for the
//! tree owner to apply.

pub mod paragraph;

pub use paragraph::{
    ParagraphEditor, ParagraphField, ParagraphFormValues, ParagraphSchema, TEXT_MAX_CHARS,
    TEXT_MIN_CHARS,
};
