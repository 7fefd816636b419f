use dioxus::prelude::*;

/// Placeholder shown when a filtered list has no rows.
#[component]
pub fn EmptyState(
    message: String,
    #[props(default)] hint: String,
    children: Element,
) -> Element {
    rsx! {
        div { class: "empty-state",
            p { class: "empty-state-message", "{message}" }
            if !hint.is_empty() {
                p { class: "empty-state-hint", "{hint}" }
            }
            {children}
        }
    }
}
