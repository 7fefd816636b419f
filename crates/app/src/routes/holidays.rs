use chrono::NaiveDate;
use dioxus::prelude::*;
use shared_types::filter::{apply_filters, FilterCriteria, FilterKey, FILTER_ALL};
use shared_types::mock::demo_holidays;
use shared_types::{Holiday, HolidayType, HOLIDAY_TYPES};
use shared_ui::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, EmptyState, FilterChipList, FormSelect, Input, PageHeader,
    PageTitle, SearchBar,
};

use crate::format_helpers::format_date_human;
use crate::session::SearchContext;

pub fn holiday_badge_variant(kind: HolidayType) -> BadgeVariant {
    match kind {
        HolidayType::Mandatory => BadgeVariant::Info,
        HolidayType::Optional => BadgeVariant::Outline,
    }
}

/// Company holiday calendar, visible to every role. Holidays carry no
/// secondary category; the type select fills the first categorical slot.
#[component]
pub fn HolidaysPage() -> Element {
    let mut search: SearchContext = use_context();

    let holidays = use_signal(demo_holidays);
    let mut filter_type = use_signal(|| FILTER_ALL.to_string());
    let mut filter_date = use_signal(String::new);

    let criteria = FilterCriteria {
        search: search.query.read().clone(),
        status: filter_type.read().clone(),
        category: FILTER_ALL.to_string(),
        date: NaiveDate::parse_from_str(filter_date.read().trim(), "%Y-%m-%d").ok(),
    };
    let result = apply_filters(&holidays.read(), &criteria);
    let chips = criteria.active_filters("Type", "Category");
    let chip_keys: Vec<FilterKey> = chips.iter().map(|c| c.key).collect();
    let chip_labels: Vec<String> = chips.iter().map(|c| c.label.clone()).collect();
    let total = holidays.read().len();
    let shown = result.records.len();

    let mut clear_key = move |key: FilterKey| match key {
        FilterKey::Search => search.query.set(String::new()),
        FilterKey::Status => filter_type.set(FILTER_ALL.to_string()),
        FilterKey::Category => {}
        FilterKey::Date => filter_date.set(String::new()),
    };

    rsx! {
        div { class: "container",
            PageHeader {
                PageTitle { "Holidays" }
            }

            SearchBar {
                FormSelect {
                    value: "{filter_type}",
                    onchange: move |evt: Event<FormData>| filter_type.set(evt.value()),
                    option { value: FILTER_ALL, "All Types" }
                    for kind in HOLIDAY_TYPES {
                        option { value: kind.as_str(), {kind.label()} }
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

            p { class: "result-count", "Showing {shown} of {total} holidays" }

            if result.records.is_empty() {
                EmptyState {
                    message: "No holidays match the current filters.",
                    hint: "Adjust or clear the filters above.",
                }
            } else {
                DataTable {
                    DataTableHeader {
                        DataTableColumn { "Holiday" }
                        DataTableColumn { "Date" }
                        DataTableColumn { "Type" }
                    }
                    DataTableBody {
                        for holiday in result.records {
                            HolidayRow { key: "{holiday.id}", holiday: holiday.clone() }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn HolidayRow(holiday: Holiday) -> Element {
    let date = format_date_human(&holiday.date);

    rsx! {
        DataTableRow {
            DataTableCell {
                div { class: "cell-primary", "{holiday.name}" }
                div { class: "cell-secondary", "{holiday.description}" }
            }
            DataTableCell { "{date}" }
            DataTableCell {
                Badge { variant: holiday_badge_variant(holiday.kind), {holiday.kind.label()} }
            }
        }
    }
}
