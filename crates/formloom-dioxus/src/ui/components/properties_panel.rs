use crate::ui::components::paragraph::ParagraphProperties;
use dioxus::prelude::*;
use formloom_engine::{BlockId, BlockInstance, BlockType, BuilderCmd, ParagraphInstance};

/// Side panel showing the properties editor of the selected block
#[component]
pub fn PropertiesPanel(
    block: Option<BlockInstance>,
    parent_id: Option<BlockId>,
    position_index: Option<usize>,
    on_command: Callback<BuilderCmd>,
) -> Element {
    let Some(block) = block else {
        return rsx! {
            div {
                class: "properties-empty",
                p { "Select a block to edit its properties" }
            }
        };
    };

    match block.block_type {
        BlockType::Paragraph => match ParagraphInstance::narrow(&block) {
            // Keyed by block id: selecting another block remounts the editor and
            // drops its editing state
            Ok(paragraph) => rsx! {
                for paragraph in [paragraph] {
                    ParagraphProperties {
                        key: "{paragraph.id}",
                        block: paragraph.clone(),
                        parent_id: parent_id.clone(),
                        position_index,
                        on_command
                    }
                }
            },
            Err(e) => {
                log::warn!("No properties editor for block {}: {e}", block.id);
                rsx! {}
            }
        },
        BlockType::RowLayout => rsx! {
            div {
                class: "properties-empty",
                p { "{block.attributes.label()} has no editable properties" }
            }
        },
    }
}
