use chrono::{NaiveDate, Utc};
use dioxus::prelude::*;
use shared_types::filter::{apply_filters, FilterCriteria, FilterKey, FILTER_ALL};
use shared_types::mock::demo_tasks;
use shared_types::{Task, TaskDraft, TaskPriority, TaskStatus, TASK_PRIORITIES, TASK_STATUSES};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, DataTable, DataTableBody, DataTableCell,
    DataTableColumn, DataTableHeader, DataTableRow, Dialog, DialogContent, DialogFooter,
    DialogHeader, DialogTitle, EmptyState, FilterChipList, FormSelect, Input, PageActions,
    PageHeader, PageTitle, SearchBar, Textarea, use_toast,
};

use crate::format_helpers::format_date_human;
use crate::session::{use_session, SearchContext};

pub fn status_badge_variant(status: TaskStatus) -> BadgeVariant {
    match status {
        TaskStatus::Todo => BadgeVariant::Neutral,
        TaskStatus::InProgress => BadgeVariant::Info,
        TaskStatus::Completed => BadgeVariant::Success,
    }
}

pub fn priority_badge_variant(priority: TaskPriority) -> BadgeVariant {
    match priority {
        TaskPriority::Low => BadgeVariant::Neutral,
        TaskPriority::Medium => BadgeVariant::Warning,
        TaskPriority::High => BadgeVariant::Destructive,
    }
}

/// Personal task board: filterable list plus add/edit/delete dialogs.
#[component]
pub fn TasksPage() -> Element {
    let mut search: SearchContext = use_context();
    let session = use_session();
    let mut toasts = use_toast();

    let mut tasks = use_signal(demo_tasks);
    let mut filter_status = use_signal(|| FILTER_ALL.to_string());
    let mut filter_priority = use_signal(|| FILTER_ALL.to_string());
    let mut filter_date = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut editing = use_signal(|| None::<Task>);
    let mut pending_delete = use_signal(|| None::<Task>);

    let criteria = FilterCriteria {
        search: search.query.read().clone(),
        status: filter_status.read().clone(),
        category: filter_priority.read().clone(),
        date: NaiveDate::parse_from_str(filter_date.read().trim(), "%Y-%m-%d").ok(),
    };
    let result = apply_filters(&tasks.read(), &criteria);
    let chips = criteria.active_filters("Status", "Priority");
    let chip_keys: Vec<FilterKey> = chips.iter().map(|c| c.key).collect();
    let chip_labels: Vec<String> = chips.iter().map(|c| c.label.clone()).collect();
    let total = tasks.read().len();
    let shown = result.records.len();

    let mut clear_key = move |key: FilterKey| match key {
        FilterKey::Search => search.query.set(String::new()),
        FilterKey::Status => filter_status.set(FILTER_ALL.to_string()),
        FilterKey::Category => filter_priority.set(FILTER_ALL.to_string()),
        FilterKey::Date => filter_date.set(String::new()),
    };

    let user_id = session
        .current_user
        .read()
        .as_ref()
        .map(|u| u.id.clone())
        .unwrap_or_else(|| "1".to_string());

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "My Tasks" }
                PageActions {
                    Button {
                        variant: ButtonVariant::Primary,
                        onclick: move |_| {
                            editing.set(None);
                            show_form.set(true);
                        },
                        "Add Task"
                    }
                }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_status}",
                    onchange: move |evt: Event<FormData>| filter_status.set(evt.value()),
                    option { value: FILTER_ALL, "All Statuses" }
                    for status in TASK_STATUSES {
                        option { value: status.as_str(), {status.label()} }
                    }
                }
                FormSelect {
                    value: "{filter_priority}",
                    onchange: move |evt: Event<FormData>| filter_priority.set(evt.value()),
                    option { value: FILTER_ALL, "All Priorities" }
                    for priority in TASK_PRIORITIES {
                        option { value: priority.as_str(), {priority.label()} }
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

            p { class: "result-count", "Showing {shown} of {total} tasks" }

            if result.records.is_empty() {
                if total == 0 {
                    EmptyState { message: "No tasks yet.", hint: "Add your first task to get started." }
                } else {
                    EmptyState {
                        message: "No tasks match the current filters.",
                        hint: "Adjust or clear the filters above.",
                    }
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Title" }
                        DataTableColumn { "Priority" }
                        DataTableColumn { "Status" }
                        DataTableColumn { "Due" }
                        DataTableColumn { "" }
                    }
                    DataTableBody {
                        for task in result.records {
                            TaskRow {
                                key: "{task.id}",
                                task: task.clone(),
                                on_edit: move |task: Task| {
                                    editing.set(Some(task));
                                    show_form.set(true);
                                },
                                on_delete: move |task: Task| pending_delete.set(Some(task)),
                            }
                        }
                    }
                }
            }

            TaskFormDialog {
                open: show_form(),
                initial: editing.read().clone(),
                on_close: move |_| show_form.set(false),
                on_save: move |draft: TaskDraft| {
                    let editing_task = editing.read().clone();
                    match editing_task {
                        Some(original) => {
                            let mut list = tasks.write();
                            if let Some(task) = list.iter_mut().find(|t| t.id == original.id) {
                                draft.apply_to(task);
                                tracing::info!(id = %original.id, "task updated");
                            }
                            toasts.success("Task updated");
                        }
                        None => {
                            let id = uuid::Uuid::new_v4().to_string();
                            let today = Utc::now().format("%Y-%m-%d").to_string();
                            let task = draft.build(id.clone(), user_id.clone(), today);
                            tasks.write().insert(0, task);
                            tracing::info!(%id, "task created");
                            toasts.success("Task added");
                        }
                    }
                    editing.set(None);
                    show_form.set(false);
                },
            }

            DeleteTaskDialog {
                pending: pending_delete.read().clone(),
                on_cancel: move |_| pending_delete.set(None),
                on_confirm: move |task: Task| {
                    tasks.write().retain(|t| t.id != task.id);
                    tracing::info!(id = %task.id, "task deleted");
                    toasts.info("Task deleted");
                    pending_delete.set(None);
                },
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, on_edit: EventHandler<Task>, on_delete: EventHandler<Task>) -> Element {
    let due = format_date_human(&task.due_date);
    let edit_task = task.clone();
    let delete_task = task.clone();

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-primary", "{task.title}" }
                div { class: "cell-secondary", "{task.description}" }
            }
            DataTableCell {
                Badge { variant: priority_badge_variant(task.priority), {task.priority.label()} }
            }
            DataTableCell {
                Badge { variant: status_badge_variant(task.status), {task.status.label()} }
            }
            DataTableCell { "{due}" }
            DataTableCell {
                div { class: "row-actions",
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_edit.call(edit_task.clone()),
                        "Edit"
                    }
                    Button {
                        variant: ButtonVariant::Ghost,
                        onclick: move |_| on_delete.call(delete_task.clone()),
                        "Delete"
                    }
                }
            }
        }
    }
}

/// Add/edit dialog. Field state re-hydrates whenever a different task is
/// opened for editing.
#[component]
fn TaskFormDialog(
    open: bool,
    initial: Option<Task>,
    on_close: EventHandler<()>,
    on_save: EventHandler<TaskDraft>,
) -> Element {
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut priority = use_signal(|| TaskPriority::Medium.as_str().to_string());
    let mut status = use_signal(|| TaskStatus::Todo.as_str().to_string());
    let mut due_date = use_signal(String::new);
    let mut errors = use_signal(|| None::<shared_types::AppError>);

    let mut hydrated_id = use_signal(String::new);
    let initial_for_hydration = initial.clone();

    use_effect(move || {
        if !open {
            return;
        }
        match &initial_for_hydration {
            Some(task) if *hydrated_id.read() != task.id => {
                hydrated_id.set(task.id.clone());
                title.set(task.title.clone());
                description.set(task.description.clone());
                priority.set(task.priority.as_str().to_string());
                status.set(task.status.as_str().to_string());
                due_date.set(task.due_date.clone());
                errors.set(None);
            }
            None if !hydrated_id.read().is_empty() => {
                hydrated_id.set(String::new());
                title.set(String::new());
                description.set(String::new());
                priority.set(TaskPriority::Medium.as_str().to_string());
                status.set(TaskStatus::Todo.as_str().to_string());
                due_date.set(String::new());
                errors.set(None);
            }
            _ => {}
        }
    });

    let field_error = move |name: &str| {
        errors
            .read()
            .as_ref()
            .and_then(|e| e.field(name))
            .unwrap_or_default()
            .to_string()
    };

    let heading = if initial.is_some() { "Edit Task" } else { "Add Task" };

    rsx! {
        Dialog { open: open, on_close: move |_| on_close.call(()),
            DialogHeader {
                DialogTitle { "{heading}" }
            }
            DialogContent {
                Input {
                    label: "Title".to_string(),
                    value: title.read().clone(),
                    placeholder: "What needs doing?".to_string(),
                    on_input: move |evt: FormEvent| title.set(evt.value()),
                    error: field_error("title"),
                }
                Textarea {
                    label: "Description".to_string(),
                    value: description.read().clone(),
                    on_input: move |evt: FormEvent| description.set(evt.value()),
                }
                FormSelect {
                    label: "Priority".to_string(),
                    value: "{priority}",
                    onchange: move |evt: Event<FormData>| priority.set(evt.value()),
                    for p in TASK_PRIORITIES {
                        option { value: p.as_str(), {p.label()} }
                    }
                }
                FormSelect {
                    label: "Status".to_string(),
                    value: "{status}",
                    onchange: move |evt: Event<FormData>| status.set(evt.value()),
                    for s in TASK_STATUSES {
                        option { value: s.as_str(), {s.label()} }
                    }
                }
                Input {
                    label: "Due date".to_string(),
                    input_type: "date".to_string(),
                    value: due_date.read().clone(),
                    on_input: move |evt: FormEvent| due_date.set(evt.value()),
                    error: field_error("due_date"),
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
                        let draft = TaskDraft {
                            title: title.read().clone(),
                            description: description.read().clone(),
                            priority: TaskPriority::from_str_or_default(&priority.read()),
                            status: TaskStatus::from_str_or_default(&status.read()),
                            due_date: due_date.read().clone(),
                        };
                        match draft.validate() {
                            Ok(()) => {
                                errors.set(None);
                                on_save.call(draft);
                            }
                            Err(err) => errors.set(Some(err)),
                        }
                    },
                    "Save"
                }
            }
        }
    }
}

#[component]
fn DeleteTaskDialog(
    pending: Option<Task>,
    on_cancel: EventHandler<()>,
    on_confirm: EventHandler<Task>,
) -> Element {
    let Some(task) = pending else {
        return rsx! {};
    };
    let confirm_task = task.clone();

    rsx! {
        Dialog { open: true, on_close: move |_| on_cancel.call(()),
            DialogHeader {
                DialogTitle { "Delete Task" }
            }
            DialogContent {
                p { "Delete \"{task.title}\"? This cannot be undone." }
            }
            DialogFooter {
                Button {
                    variant: ButtonVariant::Secondary,
                    onclick: move |_| on_cancel.call(()),
                    "Cancel"
                }
                Button {
                    variant: ButtonVariant::Destructive,
                    onclick: move |_| on_confirm.call(confirm_task.clone()),
                    "Delete"
                }
            }
        }
    }
}
