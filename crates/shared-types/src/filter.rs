//! Generic multi-field record filtering shared by every list view.
//!
//! A view assembles one [`FilterCriteria`] value from its search box and
//! select controls, runs [`apply_filters`] over its record collection, and
//! renders [`FilterCriteria::active_filters`] as removable chips. Filtering
//! is a pure function: records are retained iff they satisfy *all* active
//! criteria, and the output preserves the input order.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel select value meaning "do not constrain on this field".
pub const FILTER_ALL: &str = "all";

/// The recognized criterion keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKey {
    Search,
    Status,
    Category,
    Date,
}

impl FilterKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterKey::Search => "search",
            FilterKey::Status => "status",
            FilterKey::Category => "category",
            FilterKey::Date => "date",
        }
    }
}

/// One active criterion, ready for chip rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    pub key: FilterKey,
    pub label: String,
}

/// The full criteria set for one view session.
///
/// `status` and `category` hold the record's key strings with [`FILTER_ALL`]
/// (or empty) as the inactive sentinel; which record field each slot maps to
/// depends on the entity kind (see [`FilterRecord`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[serde(default = "all_sentinel")]
    pub status: String,
    #[serde(default = "all_sentinel")]
    pub category: String,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

fn all_sentinel() -> String {
    FILTER_ALL.to_string()
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            search: String::new(),
            status: all_sentinel(),
            category: all_sentinel(),
            date: None,
        }
    }
}

impl FilterCriteria {
    pub fn search_active(&self) -> bool {
        !self.search.trim().is_empty()
    }

    pub fn status_active(&self) -> bool {
        !self.status.is_empty() && self.status != FILTER_ALL
    }

    pub fn category_active(&self) -> bool {
        !self.category.is_empty() && self.category != FILTER_ALL
    }

    pub fn date_active(&self) -> bool {
        self.date.is_some()
    }

    /// Number of active criterion keys; shown on the filter trigger control.
    pub fn active_count(&self) -> usize {
        usize::from(self.search_active())
            + usize::from(self.status_active())
            + usize::from(self.category_active())
            + usize::from(self.date_active())
    }

    /// True when no criterion constrains the result (identity filter).
    pub fn is_identity(&self) -> bool {
        self.active_count() == 0
    }

    /// The criteria with one key reset to its inactive sentinel: the
    /// proposed next state for a chip's clear action. No mutation happens
    /// here; the caller decides whether to adopt the returned value.
    pub fn without(&self, key: FilterKey) -> Self {
        let mut next = self.clone();
        match key {
            FilterKey::Search => next.search = String::new(),
            FilterKey::Status => next.status = all_sentinel(),
            FilterKey::Category => next.category = all_sentinel(),
            FilterKey::Date => next.date = None,
        }
        next
    }

    /// One descriptor per active key, for chip rendering. The nouns name
    /// the two select slots for this entity kind ("Status"/"Priority",
    /// "Type"/"Urgency", ...).
    pub fn active_filters(&self, status_noun: &str, category_noun: &str) -> Vec<ActiveFilter> {
        let mut chips = Vec::new();
        if self.search_active() {
            chips.push(ActiveFilter {
                key: FilterKey::Search,
                label: format!("Search: \"{}\"", self.search.trim()),
            });
        }
        if self.status_active() {
            chips.push(ActiveFilter {
                key: FilterKey::Status,
                label: format!("{}: {}", status_noun, title_case(&self.status)),
            });
        }
        if self.category_active() {
            chips.push(ActiveFilter {
                key: FilterKey::Category,
                label: format!("{}: {}", category_noun, title_case(&self.category)),
            });
        }
        if let Some(date) = self.date {
            chips.push(ActiveFilter {
                key: FilterKey::Date,
                label: format!("Date: {}", date.format("%Y-%m-%d")),
            });
        }
        chips
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_uppercase().to_string() + chars.as_str(),
    }
}

/// Per-entity accessors the filter engine matches against.
///
/// Each record kind maps its own fields into the four slots: the haystack
/// concatenates the free-text fields, `status_key`/`category_key` expose the
/// two categorical fields, `date_key` the filterable `YYYY-MM-DD` date.
/// An entity without a secondary categorical field returns `None`, which
/// never matches an active category criterion.
pub trait FilterRecord {
    fn search_haystack(&self) -> String;
    fn status_key(&self) -> &str;
    fn category_key(&self) -> Option<&str>;
    fn date_key(&self) -> Option<&str>;
}

/// Whether one record satisfies every active criterion.
pub fn record_matches<R: FilterRecord>(record: &R, criteria: &FilterCriteria) -> bool {
    if criteria.search_active() {
        let needle = criteria.search.trim().to_lowercase();
        if !record.search_haystack().to_lowercase().contains(&needle) {
            return false;
        }
    }
    if criteria.status_active() && record.status_key() != criteria.status {
        return false;
    }
    if criteria.category_active() {
        match record.category_key() {
            Some(key) if key == criteria.category => {}
            _ => return false,
        }
    }
    if let Some(date) = criteria.date {
        let wanted = date.format("%Y-%m-%d").to_string();
        match record.date_key() {
            Some(d) if d == wanted => {}
            _ => return false,
        }
    }
    true
}

/// The filtered subsequence plus the active-filter count.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterResult<R> {
    pub records: Vec<R>,
    pub active_count: usize,
}

/// Apply the criteria to a record collection. Stable: the output is a
/// subsequence of the input in the original relative order.
pub fn apply_filters<R: FilterRecord + Clone>(
    records: &[R],
    criteria: &FilterCriteria,
) -> FilterResult<R> {
    let records = records
        .iter()
        .filter(|r| record_matches(*r, criteria))
        .cloned()
        .collect();
    FilterResult {
        records,
        active_count: criteria.active_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday::{Holiday, HolidayType};
    use crate::task::{Task, TaskPriority, TaskStatus};
    use pretty_assertions::assert_eq;

    fn task(id: &str, title: &str, priority: TaskPriority, status: TaskStatus, due: &str) -> Task {
        Task {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            priority,
            status,
            due_date: due.into(),
            created_at: "2024-12-15".into(),
            user_id: "1".into(),
        }
    }

    fn three_tasks() -> Vec<Task> {
        vec![
            task(
                "1",
                "Complete project documentation",
                TaskPriority::High,
                TaskStatus::InProgress,
                "2024-12-18",
            ),
            task(
                "2",
                "Review code changes",
                TaskPriority::Medium,
                TaskStatus::Todo,
                "2024-12-19",
            ),
            task(
                "3",
                "Team meeting preparation",
                TaskPriority::Low,
                TaskStatus::Completed,
                "2024-12-20",
            ),
        ]
    }

    fn titles(result: &FilterResult<Task>) -> Vec<&str> {
        result.records.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn inactive_criteria_is_identity() {
        let tasks = three_tasks();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_identity());
        let result = apply_filters(&tasks, &criteria);
        assert_eq!(result.records, tasks);
        assert_eq!(result.active_count, 0);
    }

    #[test]
    fn all_sentinel_and_empty_string_are_both_inactive() {
        let tasks = three_tasks();
        let criteria = FilterCriteria {
            search: "   ".into(),
            status: String::new(),
            category: FILTER_ALL.into(),
            date: None,
        };
        assert_eq!(apply_filters(&tasks, &criteria).records, tasks);
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let criteria = FilterCriteria {
            status: "todo".into(),
            ..Default::default()
        };
        let result = apply_filters::<Task>(&[], &criteria);
        assert!(result.records.is_empty());
        assert_eq!(result.active_count, 1);
    }

    #[test]
    fn status_todo_scenario() {
        let criteria = FilterCriteria {
            status: "todo".into(),
            ..Default::default()
        };
        let result = apply_filters(&three_tasks(), &criteria);
        assert_eq!(titles(&result), vec!["Review code changes"]);
    }

    #[test]
    fn search_team_with_all_sentinels_scenario() {
        let criteria = FilterCriteria {
            search: "team".into(),
            status: FILTER_ALL.into(),
            category: FILTER_ALL.into(),
            date: None,
        };
        let result = apply_filters(&three_tasks(), &criteria);
        assert_eq!(titles(&result), vec!["Team meeting preparation"]);
    }

    #[test]
    fn date_scenario_matches_due_date_exactly() {
        let criteria = FilterCriteria {
            date: NaiveDate::from_ymd_opt(2024, 12, 19),
            ..Default::default()
        };
        let result = apply_filters(&three_tasks(), &criteria);
        assert_eq!(titles(&result), vec!["Review code changes"]);
    }

    #[test]
    fn search_is_case_insensitive() {
        let upper = FilterCriteria {
            search: "TEAM".into(),
            ..Default::default()
        };
        let lower = FilterCriteria {
            search: "team".into(),
            ..Default::default()
        };
        let tasks = three_tasks();
        assert_eq!(
            apply_filters(&tasks, &upper).records,
            apply_filters(&tasks, &lower).records
        );
    }

    #[test]
    fn output_preserves_input_order() {
        // "e" appears in every title, so all three survive unchanged.
        let criteria = FilterCriteria {
            search: "e".into(),
            ..Default::default()
        };
        let tasks = three_tasks();
        let result = apply_filters(&tasks, &criteria);
        assert_eq!(result.records, tasks);
    }

    #[test]
    fn filtering_is_idempotent() {
        let criteria = FilterCriteria {
            search: "e".into(),
            status: "todo".into(),
            ..Default::default()
        };
        let once = apply_filters(&three_tasks(), &criteria);
        let twice = apply_filters(&once.records, &criteria);
        assert_eq!(twice.records, once.records);
    }

    #[test]
    fn adding_a_criterion_never_grows_the_result() {
        let tasks = three_tasks();
        let base = FilterCriteria {
            status: "todo".into(),
            ..Default::default()
        };
        let narrowed = FilterCriteria {
            status: "todo".into(),
            category: "high".into(),
            ..Default::default()
        };
        let wide = apply_filters(&tasks, &base);
        let narrow = apply_filters(&tasks, &narrowed);
        assert!(narrow.records.len() <= wide.records.len());
        for record in &narrow.records {
            assert!(wide.records.contains(record));
        }
    }

    #[test]
    fn conjunction_requires_every_active_criterion() {
        // search matches task 3, status matches task 2: AND yields nothing.
        let criteria = FilterCriteria {
            search: "team".into(),
            status: "todo".into(),
            ..Default::default()
        };
        let result = apply_filters(&three_tasks(), &criteria);
        assert!(result.records.is_empty());
    }

    #[test]
    fn absent_category_field_never_matches_active_criterion() {
        let holidays = vec![Holiday {
            id: "1".into(),
            name: "Christmas Day".into(),
            date: "2024-12-25".into(),
            kind: HolidayType::Mandatory,
            description: "Public holiday".into(),
        }];
        let criteria = FilterCriteria {
            category: "mandatory".into(),
            ..Default::default()
        };
        // Holiday::category_key is None, so the active category excludes it
        // even though the value matches its type key.
        assert!(apply_filters(&holidays, &criteria).records.is_empty());
    }

    #[test]
    fn active_count_counts_each_key_once() {
        let criteria = FilterCriteria {
            search: "team".into(),
            status: "todo".into(),
            category: FILTER_ALL.into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 19),
        };
        assert_eq!(criteria.active_count(), 3);
        assert_eq!(apply_filters(&three_tasks(), &criteria).active_count, 3);
    }

    #[test]
    fn active_filters_yields_one_chip_per_active_key() {
        let criteria = FilterCriteria {
            search: "team".into(),
            status: "todo".into(),
            category: "high".into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 19),
        };
        let chips = criteria.active_filters("Status", "Priority");
        let labels: Vec<&str> = chips.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            vec![
                "Search: \"team\"",
                "Status: Todo",
                "Priority: High",
                "Date: 2024-12-19",
            ]
        );
    }

    #[test]
    fn without_resets_exactly_one_key() {
        let criteria = FilterCriteria {
            search: "team".into(),
            status: "todo".into(),
            category: "high".into(),
            date: NaiveDate::from_ymd_opt(2024, 12, 19),
        };

        let cleared = criteria.without(FilterKey::Status);
        assert_eq!(cleared.status, FILTER_ALL);
        assert_eq!(cleared.search, criteria.search);
        assert_eq!(cleared.category, criteria.category);
        assert_eq!(cleared.date, criteria.date);

        let mut all_cleared = criteria;
        for key in [
            FilterKey::Search,
            FilterKey::Status,
            FilterKey::Category,
            FilterKey::Date,
        ] {
            all_cleared = all_cleared.without(key);
        }
        assert!(all_cleared.is_identity());
    }
}
