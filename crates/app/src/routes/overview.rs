use chrono::Utc;
use dioxus::prelude::*;
use shared_types::mock::{demo_holidays, demo_leaves, demo_payslips, demo_tasks, demo_tickets, demo_users};
use shared_types::{Holiday, LeaveStatus, StaffRole, TaskStatus, TicketStatus};
use shared_ui::{Badge, BadgeVariant, Card, PageHeader, PageTitle};

use crate::check_in_out::CheckInOutCard;
use crate::format_helpers::format_date_human;
use crate::session::{use_session, use_staff_role};

/// Landing page after role selection. Each role gets its own mix of
/// summary cards over the demo data set.
#[component]
pub fn OverviewPage() -> Element {
    let session = use_session();
    let role = use_staff_role();

    let name = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Welcome back, {name}" }
            }
            match role {
                Some(StaffRole::Employee) => rsx! { EmployeeOverview {} },
                Some(StaffRole::Hr) => rsx! { HrOverview {} },
                Some(StaffRole::Admin) => rsx! { AdminOverview {} },
                None => rsx! {},
            }
        }
    }
}

#[component]
fn EmployeeOverview() -> Element {
    let tasks = demo_tasks();
    let todo = count_i64(tasks.iter().filter(|t| t.status == TaskStatus::Todo));
    let in_progress = count_i64(tasks.iter().filter(|t| t.status == TaskStatus::InProgress));
    let completed = count_i64(tasks.iter().filter(|t| t.status == TaskStatus::Completed));
    let pending_leaves = count_i64(
        demo_leaves()
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending),
    );

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Tasks To Do".to_string(), value: todo, variant: BadgeVariant::Warning }
            StatCard { label: "In Progress".to_string(), value: in_progress, variant: BadgeVariant::Info }
            StatCard { label: "Completed".to_string(), value: completed, variant: BadgeVariant::Success }
            StatCard { label: "Pending Leaves".to_string(), value: pending_leaves, variant: BadgeVariant::Neutral }
        }
        div { class: "overview-grid",
            CheckInOutCard {}
            UpcomingHolidaysCard {}
        }
    }
}

#[component]
fn HrOverview() -> Element {
    let pending_leaves = count_i64(
        demo_leaves()
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending),
    );
    let open_tickets = count_i64(
        demo_tickets()
            .iter()
            .filter(|t| t.status == TicketStatus::Pending),
    );
    let employees = demo_users().len() as i64;

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Pending Leave Requests".to_string(), value: pending_leaves, variant: BadgeVariant::Warning }
            StatCard { label: "Open Tickets".to_string(), value: open_tickets, variant: BadgeVariant::Info }
            StatCard { label: "Employees".to_string(), value: employees, variant: BadgeVariant::Neutral }
        }
        div { class: "overview-grid",
            UpcomingHolidaysCard {}
        }
    }
}

#[component]
fn AdminOverview() -> Element {
    let employees = demo_users().len() as i64;
    let pending_leaves = count_i64(
        demo_leaves()
            .iter()
            .filter(|l| l.status == LeaveStatus::Pending),
    );
    let open_tickets = count_i64(
        demo_tickets()
            .iter()
            .filter(|t| t.status == TicketStatus::Pending),
    );
    let payslips = demo_payslips().len() as i64;

    rsx! {
        div { class: "stat-grid",
            StatCard { label: "Employees".to_string(), value: employees, variant: BadgeVariant::Neutral }
            StatCard { label: "Pending Leaves".to_string(), value: pending_leaves, variant: BadgeVariant::Warning }
            StatCard { label: "Open Tickets".to_string(), value: open_tickets, variant: BadgeVariant::Info }
            StatCard { label: "Payslips On File".to_string(), value: payslips, variant: BadgeVariant::Success }
        }
        div { class: "overview-grid",
            UpcomingHolidaysCard {}
        }
    }
}

#[component]
fn StatCard(label: String, value: i64, variant: BadgeVariant) -> Element {
    rsx! {
        Card {
            div { class: "stat-card",
                span { class: "stat-value", "{value}" }
                Badge { variant: variant, "{label}" }
            }
        }
    }
}

#[component]
fn UpcomingHolidaysCard() -> Element {
    let today = Utc::now().format("%Y-%m-%d").to_string();
    // ISO dates compare correctly as strings.
    let mut upcoming: Vec<Holiday> = demo_holidays()
        .into_iter()
        .filter(|h| h.date >= today)
        .collect();
    upcoming.sort_by(|a, b| a.date.cmp(&b.date));
    upcoming.truncate(4);

    rsx! {
        Card {
            div { class: "overview-card",
                h3 { "Upcoming Holidays" }
                if upcoming.is_empty() {
                    p { class: "cell-secondary", "No upcoming holidays." }
                } else {
                    ul { class: "holiday-list",
                        for holiday in upcoming {
                            li { key: "{holiday.id}",
                                span { class: "cell-primary", "{holiday.name}" }
                                span { class: "cell-secondary", {format_date_human(&holiday.date)} }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn count_i64<I: Iterator>(iter: I) -> i64 {
    iter.count() as i64
}
