use crate::ui::components::form_item::FormItem;
use dioxus::prelude::*;
use formloom_engine::{
    BuilderCmd, FontSize, FontWeight, ParagraphAttributes, ParagraphEditor, ParagraphField,
    ParagraphInstance, StyleClasses,
};

/// Canvas and live-form view of a Paragraph; static text looks the same in both.
#[component]
pub fn ParagraphCanvas(block: ParagraphInstance) -> Element {
    let styles = try_use_context::<StyleClasses>().unwrap_or_default();
    let class_name = canvas_class(&block.attributes, &styles);

    rsx! {
        div {
            class: "{class_name}",
            p { "{block.attributes.text}" }
        }
    }
}

/// Properties panel for one Paragraph.
///
/// Editing state lives here and is rebuilt whenever the panel is remounted for a
/// different block (the panel is keyed by block id).
#[component]
pub fn ParagraphProperties(
    block: ParagraphInstance,
    parent_id: Option<formloom_engine::BlockId>,
    position_index: Option<usize>,
    on_command: Callback<BuilderCmd>,
) -> Element {
    let editor = use_signal({
        let block = block.clone();
        let parent_id = parent_id.clone();
        move || ParagraphEditor::open(&block, parent_id)
    });

    let values = editor.read().values().clone();
    let error_of = |field: ParagraphField| editor.read().error(field).map(ToString::to_string);
    let text_error = error_of(ParagraphField::Text);
    let size_error = error_of(ParagraphField::FontSize);
    let weight_error = error_of(ParagraphField::FontWeight);

    let heading = match position_index {
        Some(index) => format!("Paragraph {index}"),
        None => "Paragraph".to_string(),
    };

    rsx! {
        div {
            class: "properties paragraph-properties",
            div {
                class: "properties-header",
                span { class: "properties-title", "{heading}" }
                span { class: "icon icon-chevron-down" }
            }
            form {
                class: "properties-form",
                onsubmit: move |event: Event<FormData>| event.prevent_default(),

                FormItem {
                    label: "Content",
                    error: text_error,
                    textarea {
                        class: "form-textarea",
                        rows: "4",
                        placeholder: "Enter your paragraph text here",
                        value: "{values.text}",
                        oninput: {
                            let mut editor = editor;
                            let block = block.clone();
                            move |event: Event<FormData>| {
                                let cmd = editor.write().change_text(&block, event.value());
                                if let Some(cmd) = cmd {
                                    on_command.call(cmd);
                                }
                            }
                        },
                        onblur: {
                            let mut editor = editor;
                            move |_| editor.write().blur(ParagraphField::Text)
                        },
                    }
                }

                FormItem {
                    label: "Font Size",
                    error: size_error,
                    select {
                        class: "form-select",
                        value: "{values.font_size}",
                        onchange: {
                            let mut editor = editor;
                            let block = block.clone();
                            move |event: Event<FormData>| {
                                let cmd = editor.write().select_font_size(&block, &event.value());
                                if let Some(cmd) = cmd {
                                    on_command.call(cmd);
                                }
                            }
                        },
                        onblur: {
                            let mut editor = editor;
                            move |_| editor.write().blur(ParagraphField::FontSize)
                        },
                        for size in FontSize::ALL {
                            option {
                                key: "{size}",
                                value: "{size}",
                                selected: values.font_size == size,
                                "{size.label()}"
                            }
                        }
                    }
                }

                FormItem {
                    label: "Weight",
                    error: weight_error,
                    select {
                        class: "form-select",
                        value: "{values.font_weight}",
                        onchange: {
                            let mut editor = editor;
                            let block = block.clone();
                            move |event: Event<FormData>| {
                                let cmd = editor.write().select_font_weight(&block, &event.value());
                                if let Some(cmd) = cmd {
                                    on_command.call(cmd);
                                }
                            }
                        },
                        onblur: {
                            let mut editor = editor;
                            move |_| editor.write().blur(ParagraphField::FontWeight)
                        },
                        for weight in FontWeight::ALL {
                            option {
                                key: "{weight}",
                                value: "{weight}",
                                selected: values.font_weight == weight,
                                "{weight.label()}"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Class list of the paragraph container. Unmapped size or weight adds nothing.
pub fn canvas_class(attributes: &ParagraphAttributes, styles: &StyleClasses) -> String {
    ["w-full", "text-left"]
        .into_iter()
        .chain(styles.font_size_class(attributes.font_size))
        .chain(styles.font_weight_class(attributes.font_weight))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canvas_class_uses_both_tables() {
        let attributes = ParagraphAttributes {
            font_size: FontSize::Large,
            font_weight: FontWeight::Lighter,
            ..ParagraphAttributes::default()
        };

        assert_eq!(
            canvas_class(&attributes, &StyleClasses::default()),
            "w-full text-left text-lg font-light"
        );
    }

    #[test]
    fn test_canvas_class_skips_unmapped_values() {
        let mut styles = StyleClasses::default();
        styles.set_font_size_class(FontSize::Small, "");

        assert_eq!(
            canvas_class(&ParagraphAttributes::default(), &styles),
            "w-full text-left font-normal"
        );
        assert_eq!(
            canvas_class(&ParagraphAttributes::default(), &StyleClasses::empty()),
            "w-full text-left"
        );
    }
}
