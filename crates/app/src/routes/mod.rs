pub mod holidays;
pub mod leaves;
pub mod not_found;
pub mod overview;
pub mod payslips;
pub mod role_select;
pub mod tasks;
pub mod tickets;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdCalendarDays, LdFileText, LdLayoutDashboard, LdLogOut,
    LdMessageSquare, LdMoon, LdSearch, LdSun,
};
use dioxus_free_icons::Icon;
use shared_ui::theme::{ThemeMode, ThemeState};

use crate::session::{use_nav_visibility, use_session, SearchContext};

use holidays::HolidaysPage;
use leaves::LeavesPage;
use not_found::NotFound;
use overview::OverviewPage;
use payslips::PayslipsPage;
use role_select::RoleSelectPage;
use tasks::TasksPage;
use tickets::TicketsPage;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    RoleSelectPage {},
    #[layout(RoleGuard)]
    #[layout(AppLayout)]
    #[route("/overview")]
    OverviewPage {},
    #[route("/tasks")]
    TasksPage {},
    #[route("/leaves")]
    LeavesPage {},
    #[route("/tickets")]
    TicketsPage {},
    #[route("/payslips")]
    PayslipsPage {},
    #[route("/holidays")]
    HolidaysPage {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Redirects to the role selector when no role is signed in.
#[component]
fn RoleGuard() -> Element {
    let session = use_session();

    if session.is_signed_in() {
        rsx! { Outlet::<Route> {} }
    } else {
        navigator().push(Route::RoleSelectPage {});
        rsx! {
            div { class: "guard-redirect",
                p { "Redirecting to role selection..." }
            }
        }
    }
}

/// Main app layout: top navbar with role-dependent section links, the global
/// search box, a theme toggle, and the sign-out control.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut session = use_session();
    let vis = use_nav_visibility();

    let mut search = use_context_provider(|| SearchContext {
        query: Signal::new(String::new()),
    });
    let mut theme_state = use_context_provider(|| ThemeState {
        mode: Signal::new(ThemeMode::Light),
    });

    let user = session.current_user.read().clone();
    let (initials, name, role_title) = match &user {
        Some(u) => (u.initials(), u.name.clone(), u.role.title()),
        None => (String::new(), String::new(), ""),
    };

    let theme_mode = *theme_state.mode.read();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        header { class: "topbar",
            div { class: "topbar-brand", "WorkDesk" }

            nav { class: "topbar-nav",
                NavLink {
                    to: Route::OverviewPage {},
                    active: matches!(route, Route::OverviewPage {}),
                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 16, height: 16 }
                    "Overview"
                }
                if vis.tasks {
                    NavLink {
                        to: Route::TasksPage {},
                        active: matches!(route, Route::TasksPage {}),
                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 16, height: 16 }
                        "My Tasks"
                    }
                }
                if vis.leaves {
                    NavLink {
                        to: Route::LeavesPage {},
                        active: matches!(route, Route::LeavesPage {}),
                        Icon::<LdCalendar> { icon: LdCalendar, width: 16, height: 16 }
                        "Leaves"
                    }
                }
                if vis.tickets {
                    NavLink {
                        to: Route::TicketsPage {},
                        active: matches!(route, Route::TicketsPage {}),
                        Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 16, height: 16 }
                        "Tickets"
                    }
                }
                if vis.payslips {
                    NavLink {
                        to: Route::PayslipsPage {},
                        active: matches!(route, Route::PayslipsPage {}),
                        Icon::<LdFileText> { icon: LdFileText, width: 16, height: 16 }
                        "Payslips"
                    }
                }
                if vis.holidays {
                    NavLink {
                        to: Route::HolidaysPage {},
                        active: matches!(route, Route::HolidaysPage {}),
                        Icon::<LdCalendarDays> { icon: LdCalendarDays, width: 16, height: 16 }
                        "Holidays"
                    }
                }
            }

            div { class: "topbar-tools",
                div { class: "topbar-search",
                    Icon::<LdSearch> { icon: LdSearch, width: 16, height: 16 }
                    input {
                        class: "topbar-search-input",
                        r#type: "search",
                        placeholder: "Search...",
                        value: "{search.query}",
                        oninput: move |evt| search.query.set(evt.value()),
                    }
                }
                button {
                    class: "topbar-icon-button",
                    r#type: "button",
                    "aria-label": "Toggle theme",
                    onclick: move |_| {
                        let next = theme_state.mode.read().toggled();
                        theme_state.mode.set(next);
                        theme_state.apply();
                    },
                    if theme_mode == ThemeMode::Dark {
                        Icon::<LdSun> { icon: LdSun, width: 16, height: 16 }
                    } else {
                        Icon::<LdMoon> { icon: LdMoon, width: 16, height: 16 }
                    }
                }
                div { class: "topbar-user",
                    span { class: "topbar-user-initials", "{initials}" }
                    div { class: "topbar-user-meta",
                        span { class: "topbar-user-name", "{name}" }
                        span { class: "topbar-user-role", "{role_title}" }
                    }
                }
                button {
                    class: "topbar-icon-button",
                    r#type: "button",
                    "aria-label": "Sign out",
                    onclick: move |_| {
                        session.sign_out();
                        navigator().push(Route::RoleSelectPage {});
                    },
                    Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                }
            }
        }

        main { class: "page-body",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn NavLink(to: Route, active: bool, children: Element) -> Element {
    rsx! {
        Link { to: to,
            span {
                class: if active { "topbar-link active" } else { "topbar-link" },
                {children}
            }
        }
    }
}
