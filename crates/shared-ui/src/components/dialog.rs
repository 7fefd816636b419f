use dioxus::prelude::*;

/// Centered modal overlay for create/review forms.
///
/// Clicking the backdrop closes the dialog; clicks inside the panel do not
/// propagate out.
#[component]
pub fn Dialog(open: bool, on_close: EventHandler<()>, children: Element) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "dialog-overlay",
            "data-open": "true",
            onclick: move |_| on_close.call(()),
            div {
                class: "dialog-panel",
                onclick: move |evt| evt.stop_propagation(),
                {children}
            }
        }
    }
}

/// Header section of a Dialog.
#[component]
pub fn DialogHeader(children: Element) -> Element {
    rsx! {
        div { class: "dialog-header", {children} }
    }
}

/// Title element within a DialogHeader.
#[component]
pub fn DialogTitle(children: Element) -> Element {
    rsx! {
        h2 { class: "dialog-title", {children} }
    }
}

/// Description text within a DialogHeader.
#[component]
pub fn DialogDescription(children: Element) -> Element {
    rsx! {
        p { class: "dialog-description", {children} }
    }
}

/// Main content section of a Dialog.
#[component]
pub fn DialogContent(children: Element) -> Element {
    rsx! {
        div { class: "dialog-content", {children} }
    }
}

/// Footer section of a Dialog, typically for the submit/cancel row.
#[component]
pub fn DialogFooter(children: Element) -> Element {
    rsx! {
        div { class: "dialog-footer", {children} }
    }
}

/// Close button for a Dialog.
#[component]
pub fn DialogClose(on_close: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: "dialog-close",
            r#type: "button",
            "aria-label": "Close",
            onclick: move |_| on_close.call(()),
            "\u{2715}"
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
    fn closed_dialog_renders_nothing() {
        fn app() -> Element {
            rsx! {
                Dialog { open: false, on_close: move |_| {}, "hidden" }
            }
        }
        let html = render_app(app);
        assert!(html.is_empty());
    }

    #[test]
    fn open_dialog_renders_panel_and_children() {
        fn app() -> Element {
            rsx! {
                Dialog { open: true, on_close: move |_| {},
                    DialogTitle { "Apply for Leave" }
                }
            }
        }
        let html = render_app(app);
        assert!(html.contains("dialog-panel"));
        assert!(html.contains("Apply for Leave"));
    }
}
