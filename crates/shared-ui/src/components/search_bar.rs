use dioxus::prelude::*;

/// Search/filter bar — wraps inputs, selects, and action buttons in a flex row.
#[component]
pub fn SearchBar(children: Element) -> Element {
    rsx! {
        div { class: "search-bar",
            {children}
        }
    }
}
