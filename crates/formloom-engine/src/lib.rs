pub mod blocks;
pub mod builder;
pub mod editing;
pub mod form;
pub mod style;

// Re-export key types for easier usage
pub use blocks::*;
pub use builder::*;
pub use editing::{ParagraphEditor, ParagraphField, ParagraphFormValues, ParagraphSchema};
pub use form::{FieldError, FieldStatus, Form, PropagationPolicy, Schema, ValidationMode};
pub use style::StyleClasses;
