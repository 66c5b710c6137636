use dioxus::prelude::*;

/// Labelled form row with an inline validation message underneath
#[component]
pub fn FormItem(label: String, error: Option<String>, children: Element) -> Element {
    rsx! {
        div {
            class: "form-item",
            div {
                class: "form-row",
                label { class: "form-label", "{label}" }
                div { class: "form-control", {children} }
            }
            if let Some(error) = error {
                p { class: "form-message", role: "alert", "{error}" }
            }
        }
    }
}
