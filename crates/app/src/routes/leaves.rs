use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use shared_types::filter::{apply_filters, FilterCriteria, FilterKey, FILTER_ALL};
use shared_types::mock::demo_leaves;
use shared_types::{
    LeaveDraft, LeaveRequest, LeaveStatus, LeaveType, LEAVE_STATUSES, LEAVE_TYPES,
};
use shared_ui::{
    use_toast, Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody,
    DataTableCell, DataTableColumn, DataTableHeader, DataTableRow, Dialog, DialogContent,
    DialogFooter, DialogHeader, DialogTitle, EmptyState, FilterChipList, FormSelect, Input,
    PageActions, PageHeader, PageTitle, SearchBar, Textarea,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_session, use_staff_role, SearchContext};

pub fn leave_status_badge_variant(status: LeaveStatus) -> BadgeVariant {
    match status {
        LeaveStatus::Pending => BadgeVariant::Warning,
        LeaveStatus::Approved => BadgeVariant::Success,
        LeaveStatus::Rejected => BadgeVariant::Destructive,
    }
}

pub fn leave_type_badge_variant(leave_type: LeaveType) -> BadgeVariant {
    match leave_type {
        LeaveType::Sick => BadgeVariant::Destructive,
        LeaveType::Casual => BadgeVariant::Neutral,
        LeaveType::Vacation => BadgeVariant::Info,
        LeaveType::Personal => BadgeVariant::Outline,
    }
}

/// Leave requests. Employees apply for leave; HR and admin review pending
/// requests (approve, or reject with a note).
#[component]
pub fn LeavesPage() -> Element {
    let mut search: SearchContext = use_context();
    let session = use_session();
    let mut toasts = use_toast();
    let reviews = use_staff_role().map(|r| r.reviews_leaves()).unwrap_or(false);

    let mut leaves = use_signal(demo_leaves);
    let mut filter_status = use_signal(|| FILTER_ALL.to_string());
    let mut filter_type = use_signal(|| FILTER_ALL.to_string());
    let mut filter_date = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut rejecting = use_signal(|| None::<LeaveRequest>);

    let criteria = FilterCriteria {
        search: search.query.read().clone(),
        status: filter_status.read().clone(),
        category: filter_type.read().clone(),
        date: NaiveDate::parse_from_str(filter_date.read().trim(), "%Y-%m-%d").ok(),
    };
    let result = apply_filters(&leaves.read(), &criteria);
    let chips = criteria.active_filters("Status", "Type");
    let chip_keys: Vec<FilterKey> = chips.iter().map(|c| c.key).collect();
    let chip_labels: Vec<String> = chips.iter().map(|c| c.label.clone()).collect();
    let total = leaves.read().len();
    let shown = result.records.len();

    let mut clear_key = move |key: FilterKey| match key {
        FilterKey::Search => search.query.set(String::new()),
        FilterKey::Status => filter_status.set(FILTER_ALL.to_string()),
        FilterKey::Category => filter_type.set(FILTER_ALL.to_string()),
        FilterKey::Date => filter_date.set(String::new()),
    };

    let reviewer = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_default();
    let user_id = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| "1".to_string());

    let page_title = if reviews { "Leave Management" } else { "Leaves" };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "{page_title}" }
                if !reviews {
                    PageActions {
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| show_form.set(true),
                            "Apply for Leave"
                        }
                    }
                }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_status}",
                    onchange: move |evt: Event<FormData>| filter_status.set(evt.value()),
                    option { value: FILTER_ALL, "All Statuses" }
                    for status in LEAVE_STATUSES {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
                FormSelect {
                    value: "{filter_type}",
                    onchange: move |evt: Event<FormData>| filter_type.set(evt.value()),
                    option { value: FILTER_ALL, "All Types" }
                    for leave_type in LEAVE_TYPES {
                        option { value: leave_type.as_str(), {leave_type.label()} }
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

            p { class: "result-count", "Showing {shown} of {total} leave requests" }

            if result.records.is_empty() {
                EmptyState {
                    message: "No leave requests match the current filters.",
                    hint: "Adjust or clear the filters above.",
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Type" }
                        DataTableColumn { "Dates" }
                        DataTableColumn { "Reason" }
                        DataTableColumn { "Status" }
                        DataTableColumn { if reviews { "Actions" } else { "Reviewed By" } }
                    }
                    DataTableBody {
                        for leave in result.records {
                            LeaveRow {
                                key: "{leave.id}",
                                leave: leave.clone(),
                                reviews: reviews,
                                on_approve: {
                                    let reviewer = reviewer.clone();
                                    move |leave: LeaveRequest| {
                                        let today = Utc::now().format("%Y-%m-%d").to_string();
                                        let mut list = leaves.write();
                                        if let Some(entry) = list.iter_mut().find(|l| l.id == leave.id) {
                                            match entry.approve(&reviewer, &today) {
                                                Ok(()) => {
                                                    tracing::info!(id = %leave.id, "leave approved");
                                                    toasts.success("Leave request approved");
                                                }
                                                Err(err) => toasts.error(err.message),
                                            }
                                        }
                                    }
                                },
                                on_reject: move |leave: LeaveRequest| rejecting.set(Some(leave)),
                            }
                        }
                    }
                }
            }

            LeaveFormDialog {
                open: show_form(),
                on_close: move |_| show_form.set(false),
                on_save: move |draft: LeaveDraft| {
                    let id = uuid::Uuid::new_v4().to_string();
                    let today = Utc::now().format("%Y-%m-%d").to_string();
                    let leave = draft.build(id.clone(), user_id.clone(), today);
                    leaves.write().insert(0, leave);
                    tracing::info!(%id, "leave request submitted");
                    toasts.success("Leave request submitted");
                    show_form.set(false);
                },
            }

            RejectLeaveDialog {
                pending: rejecting.read().clone(),
                on_cancel: move |_| rejecting.set(None),
                on_confirm: {
                    let reviewer = reviewer.clone();
                    move |(leave, note): (LeaveRequest, String)| {
                        let today = Utc::now().format("%Y-%m-%d").to_string();
                        let mut list = leaves.write();
                        if let Some(entry) = list.iter_mut().find(|l| l.id == leave.id) {
                            match entry.reject(&reviewer, &today, &note) {
                                Ok(()) => {
                                    tracing::info!(id = %leave.id, "leave rejected");
                                    toasts.info("Leave request rejected");
                                }
                                Err(err) => toasts.error(err.message),
                            }
                        }
                        drop(list);
                        rejecting.set(None);
                    }
                },
            }
        }
    }
}

#[component]
fn LeaveRow(
    leave: LeaveRequest,
    reviews: bool,
    on_approve: EventHandler<LeaveRequest>,
    on_reject: EventHandler<LeaveRequest>,
) -> Element {
    let range = if leave.start_date == leave.end_date {
        format_date_human(&leave.start_date)
    } else {
        format!(
            "{} – {}",
            format_date_human(&leave.start_date),
            format_date_human(&leave.end_date)
        )
    };
    let approve_leave = leave.clone();
    let reject_leave = leave.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                Badge { variant: leave_type_badge_variant(leave.leave_type), {leave.leave_type.label()} }
            }
            DataTableCell { "{range}" }
            DataTableCell {
                div { class: "cell-primary", "{leave.reason}" }
                if let Some(note) = &leave.review_note {
                    div { class: "cell-secondary", "Note: {note}" }
                }
            }
            DataTableCell {
                Badge { variant: leave_status_badge_variant(leave.status), {leave.status.label()} }
            }
            DataTableCell {
                if reviews && leave.status == LeaveStatus::Pending {
                    div { class: "row-actions",
                        Button {
                            variant: ButtonVariant::Primary,
                            onclick: move |_| on_approve.call(approve_leave.clone()),
                            "Approve"
                        }
                        Button {
                            variant: ButtonVariant::Destructive,
                            onclick: move |_| on_reject.call(reject_leave.clone()),
                            "Reject"
                        }
                    }
                } else if let Some(reviewed_by) = &leave.reviewed_by {
                    span { "{reviewed_by}" }
                } else {
                    span { class: "cell-secondary", "—" }
                }
            }
        }
    }
}

#[component]
fn LeaveFormDialog(
    open: bool,
    on_close: EventHandler<()>,
    on_save: EventHandler<LeaveDraft>,
) -> Element {
    let mut leave_type = use_signal(|| LeaveType::Casual.as_str().to_string());
    let mut start_date = use_signal(String::new);
    let mut end_date = use_signal(String::new);
    let mut reason = use_signal(String::new);
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
                DialogTitle { "Apply for Leave" }
            }
            DialogContent {
                FormSelect {
                    label: "Leave type".to_string(),
                    value: "{leave_type}",
                    onchange: move |evt: Event<FormData>| leave_type.set(evt.value()),
                    for t in LEAVE_TYPES {
                        option { value: t.as_str(), {t.label()} }
                    }
                }
                Input {
                    label: "Start date".to_string(),
                    input_type: "date".to_string(),
                    value: start_date.read().clone(),
                    on_input: move |evt: FormEvent| start_date.set(evt.value()),
                    error: field_error("start_date"),
                }
                Input {
                    label: "End date".to_string(),
                    input_type: "date".to_string(),
                    value: end_date.read().clone(),
                    on_input: move |evt: FormEvent| end_date.set(evt.value()),
                    error: field_error("end_date"),
                }
                Textarea {
                    label: "Reason".to_string(),
                    value: reason.read().clone(),
                    on_input: move |evt: FormEvent| reason.set(evt.value()),
                    error: field_error("reason"),
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
                        let draft = LeaveDraft {
                            leave_type: LeaveType::from_str_or_default(&leave_type.read()),
                            start_date: start_date.read().clone(),
                            end_date: end_date.read().clone(),
                            reason: reason.read().clone(),
                        };
                        match draft.validate() {
                            Ok(()) => {
                                errors.set(None);
                                start_date.set(String::new());
                                end_date.set(String::new());
                                reason.set(String::new());
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
fn RejectLeaveDialog(
    pending: Option<LeaveRequest>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<(LeaveRequest, String)>,
) -> Element {
    let mut note = use_signal(String::new);

    let Some(leave) = pending else {
        return rsx! {};
    };
    let confirm_leave = leave.clone();

    rsx! {
        Dialog { open: true, on_close: move |_| on_cancel.call(()),
            DialogHeader {
                DialogTitle { "Reject Leave Request" }
            }
            DialogContent {
                p { "Rejecting \"{leave.reason}\"." }
                Textarea {
                    label: "Rejection reason".to_string(),
                    value: note.read().clone(),
                    placeholder: "Why is this request rejected?".to_string(),
                    on_input: move |evt: FormEvent| note.set(evt.value()),
                }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| {
                        let text = note.read().clone();
                        note.set(String::new());
                        on_confirm.call((confirm_leave.clone(), text));
                    },
                    "Reject"
                }
            }
        }
    }
}
