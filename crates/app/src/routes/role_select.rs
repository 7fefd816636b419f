use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdBriefcase, LdShield, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{StaffRole, STAFF_ROLES};
use shared_ui::{Button, ButtonVariant, Card, CardContent};

use crate::routes::Route;
use crate::session::use_session;

fn role_icon(role: StaffRole) -> Element {
    match role {
        StaffRole::Employee => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 32, height: 32 } },
        StaffRole::Hr => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 32, height: 32 } },
        StaffRole::Admin => rsx! { Icon::<LdShield> { icon: LdShield, width: 32, height: 32 } },
    }
}

/// Entry screen. Picking a role signs in that role's demo account and lands
/// on the overview.
#[component]
pub fn RoleSelectPage() -> Element {
    let mut session = use_session();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }
        div { class: "role-select",
            div { class: "role-select-hero",
                div { class: "role-select-mark",
                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 48, height: 48 }
                }
                h1 { "Employee Management System" }
                p { "Select your role to access the dashboard" }
            }
            div { class: "role-select-grid",
                for role in STAFF_ROLES {
                    Card { class: "role-card",
                        CardContent {
                            div { class: "role-card-icon", "data-role": role.as_str(),
                                {role_icon(role)}
                            }
                            h3 { {role.title()} }
                            p { class: "role-card-summary", {role.summary()} }
                            Button {
                                variant: ButtonVariant::Outline,
                                onclick: move |_| {
                                    session.select_role(role);
                                    navigator().push(Route::OverviewPage {});
                                },
                                "Access Dashboard"
                            }
                        }
                    }
                }
            }
            p { class: "role-select-footnote",
                "Demo application with mock data. Pick any role to explore."
            }
        }
    }
}
