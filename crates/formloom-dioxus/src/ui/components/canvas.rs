use crate::ui::components::block_view::{BlockView, ViewMode};
use dioxus::prelude::*;
use formloom_engine::{BlockId, BlockInstance};

/// Builder canvas (or live preview) of every top-level block
#[component]
pub fn Canvas(
    blocks: Vec<BlockInstance>,
    mode: ViewMode,
    selected: Option<BlockId>,
    on_select: Option<Callback<BlockId>>,
    on_remove: Option<Callback<(BlockId, BlockId)>>,
) -> Element {
    let class_name = match mode {
        ViewMode::Canvas => "canvas",
        ViewMode::Form => "canvas form-preview",
    };

    rsx! {
        div {
            class: "{class_name}",
            if blocks.is_empty() {
                div {
                    class: "empty-canvas",
                    p { "Add a row from the sidebar to start building your form" }
                }
            }
            for block in blocks.iter() {
                BlockView {
                    key: "{block.id}",
                    block: block.clone(),
                    mode,
                    selected: selected.clone(),
                    on_select,
                    on_remove
                }
            }
        }
    }
}
