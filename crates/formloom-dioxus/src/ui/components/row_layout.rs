use crate::ui::components::block_view::{BlockView, ViewMode};
use dioxus::prelude::*;
use formloom_engine::{BlockId, BlockInstance};

#[component]
pub fn RowLayoutCanvas(
    block: BlockInstance,
    mode: ViewMode,
    selected: Option<BlockId>,
    on_select: Option<Callback<BlockId>>,
    on_remove: Option<Callback<(BlockId, BlockId)>>,
) -> Element {
    let editable = mode == ViewMode::Canvas;
    let row_class = if selected.as_ref() == Some(&block.id) {
        "row-layout selected"
    } else {
        "row-layout"
    };

    rsx! {
        div {
            class: "{row_class}",
            if editable {
                div {
                    class: "row-header clickable-block",
                    onclick: {
                        let row_id = block.id.clone();
                        move |_| {
                            if let Some(on_select) = on_select {
                                on_select.call(row_id.clone());
                            }
                        }
                    },
                    "{block.attributes.label()}"
                }
            }
            if block.children.is_empty() && editable {
                div { class: "row-empty", "Add a field from the sidebar" }
            }
            for child in block.children.iter() {
                div {
                    key: "{child.id}",
                    class: cell_class(editable && selected.as_ref() == Some(&child.id)),
                    onclick: {
                        let child_id = child.id.clone();
                        move |event: Event<MouseData>| {
                            if let Some(on_select) = on_select {
                                event.stop_propagation();
                                on_select.call(child_id.clone());
                            }
                        }
                    },
                    BlockView {
                        block: child.clone(),
                        mode,
                    }
                    if editable {
                        if let Some(on_remove) = on_remove {
                            button {
                                class: "remove-button",
                                title: "Remove block",
                                onclick: {
                                    let ids = (block.id.clone(), child.id.clone());
                                    move |event: Event<MouseData>| {
                                        event.stop_propagation();
                                        on_remove.call(ids.clone());
                                    }
                                },
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

fn cell_class(selected: bool) -> &'static str {
    if selected {
        "row-cell selected"
    } else {
        "row-cell"
    }
}
