use crate::ui::components::{BlockPicker, Canvas, PropertiesPanel, ViewMode};
use dioxus::prelude::*;
use formloom_engine::{BlockId, BlockRegistry, BlockType, BuilderCmd, BuilderState};

const BUILDER_CSS: &str = include_str!("../assets/builder.css");

/// Extra CSS appended after the built-in stylesheet, provided as root context
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtraStylesheet(pub String);

#[component]
pub fn App() -> Element {
    let extra_css = try_use_context::<ExtraStylesheet>().unwrap_or_default();

    let mut builder = use_signal(BuilderState::new);
    let mut selected = use_signal(|| None::<BlockId>);
    let mut mode = use_signal(ViewMode::default);

    let mut on_command = move |cmd: BuilderCmd| {
        apply_command(&mut builder, cmd);
        // Drop the selection if its block is gone
        let still_there = selected
            .read()
            .as_ref()
            .is_none_or(|id| builder.read().contains(id));
        if !still_there {
            selected.set(None);
        }
    };

    let on_add = move |block_type: BlockType| {
        let registry = BlockRegistry::builtin();
        let Some(instance) = registry.create_instance(block_type, BlockId::generate()) else {
            log::error!("No definition registered for {block_type}");
            return;
        };
        let new_id = instance.id.clone();

        if instance.is_container() {
            on_command(BuilderCmd::AddBlock {
                instance,
                position: None,
            });
        } else {
            let placement = placement_parent(&builder.read(), selected.read().as_ref());
            let parent_id = match placement {
                Some(parent_id) => parent_id,
                None => {
                    // Fields need a container; start one
                    let Some(row) =
                        registry.create_instance(BlockType::RowLayout, BlockId::generate())
                    else {
                        return;
                    };
                    let row_id = row.id.clone();
                    on_command(BuilderCmd::AddBlock {
                        instance: row,
                        position: None,
                    });
                    row_id
                }
            };
            on_command(BuilderCmd::AddChildBlock {
                parent_id,
                instance,
                position: None,
            });
        }

        if builder.read().contains(&new_id) {
            selected.set(Some(new_id));
        }
    };

    let state = builder.read();
    let current_mode = *mode.read();
    let selected_id = selected.read().clone();
    let selected_block = selected_id.as_ref().and_then(|id| state.find(id).cloned());
    let parent_id = selected_id
        .as_ref()
        .and_then(|id| state.parent_of(id).cloned());
    let position_index = selected_id
        .as_ref()
        .and_then(|id| position_in_parent(&state, id));

    rsx! {
        style { {BUILDER_CSS} }
        style { {extra_css.0} }
        div {
            class: "app-container",
            div {
                class: "sidebar",
                h2 { "Blocks" }
                BlockPicker { on_add }
            }
            div {
                class: "main-content",
                div {
                    class: "toolbar",
                    button {
                        class: mode_button_class(current_mode == ViewMode::Canvas),
                        onclick: move |_| mode.set(ViewMode::Canvas),
                        "Edit"
                    }
                    button {
                        class: mode_button_class(current_mode == ViewMode::Form),
                        onclick: move |_| mode.set(ViewMode::Form),
                        "Preview"
                    }
                }
                Canvas {
                    blocks: state.blocks().to_vec(),
                    mode: current_mode,
                    selected: selected_id.clone(),
                    on_select: move |id: BlockId| selected.set(Some(id)),
                    on_remove: move |(parent_id, block_id): (BlockId, BlockId)| {
                        on_command(BuilderCmd::RemoveChildBlock { parent_id, block_id });
                    }
                }
            }
            if current_mode == ViewMode::Canvas {
                div {
                    class: "properties-sidebar",
                    h2 { "Properties" }
                    PropertiesPanel {
                        block: selected_block,
                        parent_id,
                        position_index,
                        on_command
                    }
                }
            }
        }
    }
}

fn mode_button_class(active: bool) -> &'static str {
    if active {
        "mode-button active"
    } else {
        "mode-button"
    }
}

/// Apply a command to the tree, logging rejections
pub fn apply_command(builder: &mut Signal<BuilderState>, cmd: BuilderCmd) {
    let name = cmd.name();
    let result = builder.write().apply(cmd);
    match result {
        Ok(patch) => log::debug!("{name} changed {} (version {})", patch.changed, patch.version),
        Err(e) => log::error!("{name} rejected: {e}"),
    }
}

/// Container a newly added field goes into: the selected row, the row holding
/// the selected field, or else the last row.
pub fn placement_parent(state: &BuilderState, selected: Option<&BlockId>) -> Option<BlockId> {
    let from_selection = selected.and_then(|id| {
        let block = state.find(id)?;
        if block.is_container() {
            Some(block.id.clone())
        } else {
            state.parent_of(id).cloned()
        }
    });

    from_selection.or_else(|| state.blocks().last().map(|row| row.id.clone()))
}

/// 1-based position of a field within its container
pub fn position_in_parent(state: &BuilderState, id: &BlockId) -> Option<usize> {
    let parent = state.find(state.parent_of(id)?)?;
    parent
        .children
        .iter()
        .position(|child| &child.id == id)
        .map(|index| index + 1)
}
