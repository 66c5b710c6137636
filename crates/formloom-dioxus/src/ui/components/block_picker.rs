use dioxus::prelude::*;
use formloom_engine::{BlockCategory, BlockRegistry, BlockType};

/// Sidebar listing one button per registered block type
#[component]
pub fn BlockPicker(on_add: Callback<BlockType>) -> Element {
    let registry = BlockRegistry::builtin();
    let sections = [
        ("Layouts", BlockCategory::Layout),
        ("Fields", BlockCategory::Field),
    ];

    rsx! {
        div {
            class: "block-picker",
            for (title, category) in sections {
                div {
                    key: "{title}",
                    class: "block-picker-section",
                    h3 { "{title}" }
                    for definition in registry.in_category(category) {
                        button {
                            key: "{definition.block_type()}",
                            class: "block-button",
                            onclick: {
                                let block_type = definition.block_type();
                                move |_| on_add.call(block_type)
                            },
                            span { class: "icon icon-{definition.button().icon}" }
                            span { "{definition.button().label}" }
                        }
                    }
                }
            }
        }
    }
}
