use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

impl ToastKind {
    fn class(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
            ToastKind::Info => "info",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ToastMessage {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

/// Handle for pushing transient notifications. Cheap to copy; obtained via
/// [`use_toast`] anywhere under a [`ToastProvider`].
#[derive(Clone, Copy)]
pub struct Toasts {
    items: Signal<Vec<ToastMessage>>,
    next_id: Signal<u64>,
}

impl Toasts {
    pub fn success(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Success, message.into());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Error, message.into());
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(ToastKind::Info, message.into());
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.write().retain(|t| t.id != id);
    }

    fn push(&mut self, kind: ToastKind, message: String) {
        let id = *self.next_id.peek();
        self.next_id += 1;
        self.items.write().push(ToastMessage { id, kind, message });
    }
}

pub fn use_toast() -> Toasts {
    use_context()
}

/// Provides the [`Toasts`] context and renders the notification stack.
#[component]
pub fn ToastProvider(children: Element) -> Element {
    let items = use_signal(Vec::new);
    let next_id = use_signal(|| 0u64);
    let mut toasts = use_context_provider(|| Toasts { items, next_id });

    rsx! {
        {children}
        div { class: "toast-stack",
            for toast in items.read().iter().cloned() {
                div {
                    key: "{toast.id}",
                    class: "toast",
                    "data-style": toast.kind.class(),
                    span { class: "toast-message", "{toast.message}" }
                    button {
                        class: "toast-dismiss",
                        r#type: "button",
                        "aria-label": "Dismiss",
                        onclick: move |_| toasts.dismiss(toast.id),
                        "\u{2715}"
                    }
                }
            }
        }
    }
}
