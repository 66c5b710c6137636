use crate::ui::components::{paragraph::ParagraphCanvas, row_layout::RowLayoutCanvas};
use dioxus::prelude::*;
use formloom_engine::{BlockId, BlockInstance, BlockType, ParagraphInstance};

/// Which of a block's read-only views to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Builder canvas, blocks are selectable
    #[default]
    Canvas,
    /// Live form as the end user sees it
    Form,
}

/// Renders any block by its type tag. Blocks whose attributes do not match their
/// tag render nothing.
#[component]
pub fn BlockView(
    block: BlockInstance,
    mode: ViewMode,
    selected: Option<BlockId>,
    on_select: Option<Callback<BlockId>>,
    on_remove: Option<Callback<(BlockId, BlockId)>>,
) -> Element {
    match block.block_type {
        BlockType::Paragraph => match ParagraphInstance::narrow(&block) {
            // Static text: canvas and form views are the same component
            Ok(paragraph) => rsx! {
                ParagraphCanvas { block: paragraph }
            },
            Err(e) => {
                log::warn!("Not rendering block {}: {e}", block.id);
                rsx! {}
            }
        },
        BlockType::RowLayout => {
            if !block.is_well_formed() {
                log::warn!(
                    "Not rendering block {}: tagged {} but carries {} attributes",
                    block.id,
                    block.block_type,
                    block.attributes.block_type()
                );
                return rsx! {};
            }
            rsx! {
                RowLayoutCanvas {
                    block: block.clone(),
                    mode,
                    selected,
                    on_select,
                    on_remove
                }
            }
        }
    }
}
