use chrono::{DateTime, Utc};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdClock, LdPlay, LdSquare};
use dioxus_free_icons::Icon;
use dioxus_sdk_time::use_interval;
use shared_types::AttendanceSession;
use shared_ui::{use_toast, Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

use crate::format_helpers::format_clock;

fn format_check_time(time: Option<DateTime<Utc>>) -> String {
    match time {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// Attendance card on the employee overview. The wall clock ticks once per
/// second; worked time is derived from the session, never accumulated.
#[component]
pub fn CheckInOutCard() -> Element {
    let mut session = use_signal(AttendanceSession::default);
    let mut now = use_signal(Utc::now);
    let mut toasts = use_toast();

    use_interval(std::time::Duration::from_secs(1), move |()| {
        now.set(Utc::now());
    });

    let current = *now.read();
    let worked = session.read().format_worked(current);
    let checked_in = session.read().is_checked_in();
    let check_in_display = format_check_time(session.read().checked_in_at());
    let check_out_display = format_check_time(session.read().checked_out_at());

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdClock> { icon: LdClock, width: 20, height: 20 }
                    "Check In/Out"
                }
                span { class: "check-clock", {format_clock(current)} }
            }
            CardContent {
                div { class: "check-grid",
                    div { class: "check-cell",
                        p { class: "check-cell-label", "Check In" }
                        p { class: "check-cell-value", "{check_in_display}" }
                    }
                    div { class: "check-cell",
                        p { class: "check-cell-label", "Check Out" }
                        p { class: "check-cell-value", "{check_out_display}" }
                    }
                    div { class: "check-cell",
                        p { class: "check-cell-label", "Hours Today" }
                        p { class: "check-cell-value", "{worked}" }
                    }
                }
                div { class: "check-actions",
                    if !checked_in {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| {
                                let at = Utc::now();
                                session.write().check_in(at);
                                tracing::info!(at = %at, "checked in");
                                toasts.success("Checked in");
                            },
                            Icon::<LdPlay> { icon: LdPlay, width: 16, height: 16 }
                            "Check In"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| {
                                let at = Utc::now();
                                session.write().check_out(at);
                                tracing::info!(at = %at, "checked out");
                                toasts.info("Checked out");
                            },
                            Icon::<LdSquare> { icon: LdSquare, width: 16, height: 16 }
                            "Check Out"
                        }
                    }
                }
            }
        }
    }
}
