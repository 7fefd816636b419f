use dioxus::prelude::*;

/// Basic card container used across the dashboard views.
#[component]
pub fn Card(#[props(default)] class: String, children: Element) -> Element {
    let class = if class.is_empty() {
        "card".to_string()
    } else {
        format!("card {class}")
    };
    rsx! {
        div { class: "{class}", {children} }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Action area within a CardHeader, typically for buttons or icons.
#[component]
pub fn CardAction(children: Element) -> Element {
    rsx! {
        div { class: "card-action", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}
