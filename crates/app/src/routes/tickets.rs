use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use shared_types::filter::{apply_filters, FilterCriteria, FilterKey, FILTER_ALL};
use shared_types::mock::demo_tickets;
use shared_types::{
    Ticket, TicketDraft, TicketStatus, TicketUrgency, TICKET_STATUSES, TICKET_URGENCIES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Dialog, DialogContent,
    DialogFooter, DialogHeader, DialogTitle, EmptyState, FilterChipList, FormSelect, Input,
    PageActions, PageHeader, PageTitle, SearchBar, Textarea,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_session, use_staff_role, SearchContext};

pub fn urgency_badge_variant(urgency: TicketUrgency) -> BadgeVariant {
    match urgency {
        TicketUrgency::Low => BadgeVariant::Neutral,
        TicketUrgency::Medium => BadgeVariant::Info,
        TicketUrgency::High => BadgeVariant::Warning,
        TicketUrgency::Critical => BadgeVariant::Destructive,
    }
}

pub fn ticket_status_badge_variant(status: TicketStatus) -> BadgeVariant {
    match status {
        TicketStatus::Pending => BadgeVariant::Warning,
        TicketStatus::Resolved => BadgeVariant::Success,
    }
}

/// Support tickets. Employees raise tickets; HR and admin work the
/// complaint box and close tickets with a resolution note.
#[component]
pub fn TicketsPage() -> Element {
    let mut search: SearchContext = use_context();
    let session = use_session();
    let mut toasts = use_toast();
    let resolves = use_staff_role().map(|r| r.resolves_tickets()).unwrap_or(false);

    let mut tickets = use_signal(demo_tickets);
    let mut filter_status = use_signal(|| FILTER_ALL.to_string());
    let mut filter_urgency = use_signal(|| FILTER_ALL.to_string());
    let mut filter_date = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut resolving = use_signal(|| None::<Ticket>);

    let criteria = FilterCriteria {
        search: search.query.read().clone(),
        status: filter_status.read().clone(),
        category: filter_urgency.read().clone(),
        date: NaiveDate::parse_from_str(filter_date.read().trim(), "%Y-%m-%d").ok(),
    };
    let result = apply_filters(&tickets.read(), &criteria);
    let chips = criteria.active_filters("Status", "Urgency");
    let chip_keys: Vec<FilterKey> = chips.iter().map(|c| c.key).collect();
    let chip_labels: Vec<String> = chips.iter().map(|c| c.label.clone()).collect();
    let total = tickets.read().len();
    let shown = result.records.len();

    let mut clear_key = move |key: FilterKey| match key {
        FilterKey::Search => search.query.set(String::new()),
        FilterKey::Status => filter_status.set(FILTER_ALL.to_string()),
        FilterKey::Category => filter_urgency.set(FILTER_ALL.to_string()),
        FilterKey::Date => filter_date.set(String::new()),
    };

    let user_id = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| "1".to_string());

    let page_title = if resolves { "Complaint Box" } else { "Tickets" };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{page_title}" }
                if !resolves {
                    PageActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_form.set(true),
                            "Raise Ticket"
                        }
                    }
                }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_status}",
                    onchange: move |evt: Event<FormData>| filter_status.set(evt.value()),
                    option { value: FILTER_ALL, "All Statuses" }
                    for status in TICKET_STATUSES {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
                FormSelect {
                    value: "{filter_urgency}",
                    onchange: move |evt: Event<FormData>| filter_urgency.set(evt.value()),
                    option { value: FILTER_ALL, "All Urgencies" }
                    for urgency in TICKET_URGENCIES {
                        option { value: urgency.as_str(), {urgency.label()} }
                    }
                }
                Input {
                    value: filter_date.read().clone(),
                    input_type: "date".to_string(),
                    on_input: move |evt: FormEvent| filter_date.set(evt.value()),
                }
            }

            FilterChipList {
                labels: chip_labels,
                on_clear: move |index: usize| {
                    if let Some(key) = chip_keys.get(index) {
                        clear_key(*key);
                    }
                },
                on_clear_all: move |_| {
                    for key in [FilterKey::Search, FilterKey::Status, FilterKey::Category, FilterKey::Date] {
                        clear_key(key);
                    }
                },
            }

            p { class: "result-count", "Showing {shown} of {total} tickets" }

            if result.records.is_empty() {
                EmptyState {
                    message: "No tickets match the current filters.",
                    hint: "Adjust or clear the filters above.",
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Ticket" }
                        DataTableColumn { "Urgency" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Raised" }
                        DataTableColumn { if resolves { "Actions" } else { "Assigned To" } }
                    }
                    DataTableBody {
                        for ticket in result.records {
                            TicketRow {
                                key: "{ticket.id}",
                                ticket: ticket.clone(),
                                resolves: resolves,
                                on_resolve: move |ticket: Ticket| resolving.set(Some(ticket)),
                            }
                        }
                    }
                }
            }

            TicketFormDialog {
                open: show_form(),
                on_close: move |_| show_form.set(false),
                on_save: move |draft: TicketDraft| {
                    let id = uuid::Uuid::new_v4().to_string();
                    let today = Utc::now().format("%Y-%m-%d").to_string();
                    let ticket = draft.build(id.clone(), user_id.clone(), today);
                    tickets.write().insert(0, ticket);
                    tracing::info!(%id, "ticket raised");
                    toasts.success("Ticket raised");
                    show_form.set(false);
                },
            }

            ResolveTicketDialog {
                pending: resolving.read().clone(),
                on_cancel: move |_| resolving.set(None),
                on_confirm: move |(ticket, resolution): (Ticket, String)| {
                    let today = Utc::now().format("%Y-%m-%d").to_string();
                    let mut list = tickets.write();
                    if let Some(entry) = list.iter_mut().find(|t| t.id == ticket.id) {
                        match entry.resolve(&resolution, &today) {
                            Ok(()) => {
                                tracing::info!(id = %ticket.id, "ticket resolved");
                                toasts.success("Ticket resolved");
                            }
                            Err(err) => toasts.error(err.message),
                        }
                    }
                    drop(list);
                    resolving.set(None);
                },
            }
        }
    }
}

#[component]
fn TicketRow(ticket: Ticket, resolves: bool, on_resolve: EventHandler<Ticket>) -> Element {
    let raised = format_date_human(&ticket.created_at);
    let resolve_ticket = ticket.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-primary", "{ticket.title}" }
                div { class: "cell-secondary", "{ticket.description}" }
                if let Some(category) = &ticket.category {
                    Badge { variant: BadgeVariant::Outline, "{category}" }
                }
                if let Some(resolution) = &ticket.resolution {
                    div { class: "cell-secondary", "Resolution: {resolution}" }
                }
            }
            DataTableCell {
                Badge { variant: urgency_badge_variant(ticket.urgency), {ticket.urgency.label()} }
            }
            DataTableCell {
                Badge { variant: ticket_status_badge_variant(ticket.status), {ticket.status.label()} }
            }
            DataTableCell { "{raised}" }
            DataTableCell {
                if resolves && ticket.status == TicketStatus::Pending {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| on_resolve.call(resolve_ticket.clone()),
                        "Resolve"
                    }
                } else if let Some(assigned) = &ticket.assigned_to {
                    span { "{assigned}" }
                } else {
                    span { class: "cell-secondary", "Unassigned" }
                }
            }
        }
    }
}

#[component]
fn TicketFormDialog(
    open: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<TicketDraft>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut urgency = use_signal(|| TicketUrgency::Medium.as_str().to_string());
    let mut category = use_signal(String::new);
    let mut errors = use_signal(|| None::<shared_types::AppError>);

    let field_error = move |name: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field(name))
            .unwrap_or_default()
            .to_string()
    };

    rsx! {
        Dialog { open: open, on_close: move |_| on_close.call(()),
            DialogHeader {
                DialogTitle { "Raise Ticket" }
            }
            DialogContent {
                Input {
                    label: "Title".to_string(),
                    value: title.read().clone(),
                    placeholder: "Short summary of the problem".to_string(),
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                    error: field_error("title"),
                }
                Textarea {
                    label: "Description".to_string(),
                    value: description.read().clone(),
                    on_input: move |evt: FormEvent| description.set(evt.value()),
                    error: field_error("description"),
                }
                FormSelect {
                    label: "Urgency".to_string(),
                    value: "{urgency}",
                    onchange: move |evt: Event<FormData>| urgency.set(evt.value()),
                    for u in TICKET_URGENCIES {
                        option { value: u.as_str(), {u.label()} }
                    }
                }
                Input {
                    label: "Category (optional)".to_string(),
                    value: category.read().clone(),
                    placeholder: "Technical, Facilities, Payroll...".to_string(),
                    on_input: move |evt: FormEvent| category.set(evt.value()),
                }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_close.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let draft = TicketDraft {
                            title: title.read().clone(),
                            description: description.read().clone(),
                            urgency: TicketUrgency::from_str_or_default(&urgency.read()),
                            category: category.read().clone(),
                        };
                        match draft.validate() {
                            Ok(()) => {
                                errors.set(None);
                                title.set(String::new());
                                description.set(String::new());
                                category.set(String::new());
                                on_save.call(draft);
                            }
                            Err(err) => errors.set(Some(err)),
                        }
                    },
                    "Submit"
                }
            }
        }
    }
}

#[component]
fn ResolveTicketDialog(
    pending: Option<Ticket>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<(Ticket, String)>,
) -> Element {
    let mut resolution = use_signal(String::new);

    let Some(ticket) = pending else {
        return rsx! {};
    };
    let confirm_ticket = ticket.clone();

    rsx! {
        Dialog { open: true, on_close: move |_| on_cancel.call(()),
            DialogHeader {
                DialogTitle { "Resolve Ticket" }
            }
            DialogContent {
                p { "Resolving \"{ticket.title}\"." }
                Textarea {
                    label: "Resolution".to_string(),
                    value: resolution.read().clone(),
                    placeholder: "What was done to fix it?".to_string(),
                    on_input: move |evt: FormEvent| resolution.set(evt.value()),
                }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Primary,
                    onclick: move |_| {
                        let text = resolution.read().clone();
                        resolution.set(String::new());
                        on_confirm.call((confirm_ticket.clone(), text));
                    },
                    "Mark Resolved"
                }
            }
        }
    }
}
