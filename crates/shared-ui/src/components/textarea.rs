use dioxus::prelude::*;

/// Labeled multi-line text input with an optional inline validation error.
#[component]
pub fn Textarea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = 4_i64)] rows: i64,
    #[props(default)] error: String,
) -> Element {
    rsx! {
        div { class: "textarea-wrapper",
            if !label.is_empty() {
                label { class: "textarea-label", "{label}" }
            }
            textarea {
                class: if error.is_empty() { "textarea" } else { "textarea invalid" },
                value: value,
                placeholder: placeholder,
                rows: rows,
                oninput: move |evt| on_input.call(evt),
            }
            if !error.is_empty() {
                p { class: "textarea-error", "{error}" }
            }
        }
    }
}
