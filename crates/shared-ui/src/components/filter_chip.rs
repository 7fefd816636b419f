use dioxus::prelude::*;

/// One removable chip naming an active filter.
#[component]
pub fn FilterChip(label: String, on_clear: EventHandler<()>) -> Element {
    rsx! {
        span { class: "filter-chip",
            "{label}"
            button {
                class: "filter-chip-clear",
                r#type: "button",
                "aria-label": "Remove {label}",
                onclick: move |_| on_clear.call(()),
                "\u{2715}"
            }
        }
    }
}

/// Row of active-filter chips with a trailing "clear all" action. Renders
/// nothing when no chip labels are given.
#[component]
pub fn FilterChipList(
    labels: Vec<String>,
    on_clear: EventHandler<usize>,
    on_clear_all: EventHandler<()>,
) -> Element {
    if labels.is_empty() {
        return rsx! {};
    }

    rsx! {
        div { class: "filter-chip-list",
            for (index, label) in labels.into_iter().enumerate() {
                FilterChip {
                    key: "{index}",
                    label,
                    on_clear: move |_| on_clear.call(index),
                }
            }
            button {
                class: "filter-chip-clear-all",
                r#type: "button",
                onclick: move |_| on_clear_all.call(()),
                "Clear all"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_app(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn empty_label_list_renders_nothing() {
        fn app() -> Element {
            rsx! {
                FilterChipList {
                    labels: Vec::<String>::new(),
                    on_clear: move |_| {},
                    on_clear_all: move |_| {},
                }
            }
        }
        let html = render_app(app);
        assert!(html.is_empty());
    }

    #[test]
    fn chips_render_labels_and_clear_all() {
        fn app() -> Element {
            rsx! {
                FilterChipList {
                    labels: vec!["Status: Todo".to_string(), "Date: 2024-12-19".to_string()],
                    on_clear: move |_| {},
                    on_clear_all: move |_| {},
                }
            }
        }
        let html = render_app(app);
        assert!(html.contains("Status: Todo"));
        assert!(html.contains("Date: 2024-12-19"));
        assert!(html.contains("Clear all"));
    }
}
