pub mod block_picker;
pub mod block_view;
pub mod canvas;
pub mod form_item;
pub mod paragraph;
pub mod properties_panel;
pub mod row_layout;

pub use block_picker::BlockPicker;
pub use block_view::{BlockView, ViewMode};
pub use canvas::Canvas;
pub use form_item::FormItem;
pub use paragraph::{ParagraphCanvas, ParagraphProperties};
pub use properties_panel::PropertiesPanel;
pub use row_layout::RowLayoutCanvas;
