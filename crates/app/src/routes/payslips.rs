use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::filter::{apply_filters, FilterCriteria, FilterKey, FILTER_ALL};
use shared_types::mock::demo_payslips;
use shared_types::{Payslip, PAYSLIP_MONTHS};
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    EmptyState, FilterChipList, FormSelect, Input, PageHeader, PageTitle, SearchBar,
};

use crate::format_helpers::{format_amount, format_date_human};
use crate::session::SearchContext;

/// Payslip archive. Read-only; payslips have no secondary category, so only
/// the month select, search, and upload-date filter apply.
#[component]
pub fn PayslipsPage() -> Element {
    let mut search: SearchContext = use_context();

    let payslips = use_signal(demo_payslips);
    let mut filter_month = use_signal(|| FILTER_ALL.to_string());
    let mut filter_date = use_signal(String::new);

    let criteria = FilterCriteria {
        search: search.query.read().clone(),
        status: filter_month.read().clone(),
        category: FILTER_ALL.to_string(),
        date: NaiveDate::parse_from_str(filter_date.read().trim(), "%Y-%m-%d").ok(),
    };
    let result = apply_filters(&payslips.read(), &criteria);
    let chips = criteria.active_filters("Month", "Category");
    let chip_keys: Vec<FilterKey> = chips.iter().map(|c| c.key).collect();
    let chip_labels: Vec<String> = chips.iter().map(|c| c.label.clone()).collect();
    let total = payslips.read().len();
    let shown = result.records.len();

    let mut clear_key = move |key: FilterKey| match key {
        FilterKey::Search => search.query.set(String::new()),
        FilterKey::Status => filter_month.set(FILTER_ALL.to_string()),
        FilterKey::Category => {}
        FilterKey::Date => filter_date.set(String::new()),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Payslips" }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_month}",
                    onchange: move |evt: Event<FormData>| filter_month.set(evt.value()),
                    option { value: FILTER_ALL, "All Months" }
                    for month in PAYSLIP_MONTHS {
                        option { value: month, "{month}" }
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
                    for key in [FilterKey::Search, FilterKey::Status, FilterKey::Date] {
                        clear_key(key);
                    }
                },
            }

            p { class: "result-count", "Showing {shown} of {total} payslips" }

            if result.records.is_empty() {
                EmptyState {
                    message: "No payslips match the current filters.",
                    hint: "Adjust or clear the filters above.",
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Period" }
                        DataTableColumn { "File" }
                        DataTableColumn { "Gross" }
                        DataTableColumn { "Deductions" }
                        DataTableColumn { "Net" }
                        DataTableColumn { "Uploaded" }
                    }
                    DataTableBody {
                        for slip in result.records {
                            PayslipRow { key: "{slip.id}", slip: slip.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn PayslipRow(slip: Payslip) -> Element {
    let uploaded = format!(
        "{} by {}",
        format_date_human(&slip.uploaded_at),
        slip.uploaded_by
    );

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-primary", "{slip.month} {slip.year}" }
            }
            DataTableCell { "{slip.file_name}" }
            DataTableCell { {format_amount(slip.gross_salary)} }
            DataTableCell { {format_amount(slip.deductions)} }
            DataTableCell {
                span { class: "cell-primary", {format_amount(slip.net_salary)} }
            }
            DataTableCell { "{uploaded}" }
        }
    }
}
