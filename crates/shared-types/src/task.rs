use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filter::FilterRecord;

/// Task priority level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskPriority {
    Low,
    #[default]
    Medium,
    High,
}

pub const TASK_PRIORITIES: [TaskPriority; 3] =
    [TaskPriority::Low, TaskPriority::Medium, TaskPriority::High];

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => TaskPriority::Low,
            "high" => TaskPriority::High,
            _ => TaskPriority::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

pub const TASK_STATUSES: [TaskStatus; 3] =
    [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "inprogress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Todo,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Completed => "Completed",
        }
    }
}

/// A personal task on the employee task board.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    /// Due date, `YYYY-MM-DD`.
    pub due_date: String,
    pub created_at: String,
    pub user_id: String,
}

impl FilterRecord for Task {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.title, self.description)
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.priority.as_str())
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.due_date)
    }
}

/// Editable fields of a task, as collected by the add/edit dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: String,
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority,
            status: task.status,
            due_date: task.due_date.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        if self.title.trim().is_empty() {
            fields.insert("title".to_string(), "Title is required".to_string());
        }
        if self.due_date.trim().is_empty() {
            fields.insert("due_date".to_string(), "Due date is required".to_string());
        } else if NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").is_err() {
            fields.insert(
                "due_date".to_string(),
                "Due date must be YYYY-MM-DD".to_string(),
            );
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Task is incomplete", fields))
        }
    }

    /// Build a new task from this draft. Caller supplies identity and timestamps.
    pub fn build(self, id: String, user_id: String, created_at: String) -> Task {
        Task {
            id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            priority: self.priority,
            status: self.status,
            due_date: self.due_date.trim().to_string(),
            created_at,
            user_id,
        }
    }

    /// Overwrite an existing task's editable fields.
    pub fn apply_to(&self, task: &mut Task) {
        task.title = self.title.trim().to_string();
        task.description = self.description.trim().to_string();
        task.priority = self.priority;
        task.status = self.status;
        task.due_date = self.due_date.trim().to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> TaskDraft {
        TaskDraft {
            title: "Review code changes".into(),
            description: "Review pull requests from team members".into(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: "2024-12-19".into(),
        }
    }

    #[test]
    fn status_serializes_to_lowercase_keys() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"inprogress\""
        );
        let parsed: TaskStatus = serde_json::from_str("\"todo\"").unwrap();
        assert_eq!(parsed, TaskStatus::Todo);
    }

    #[test]
    fn status_and_priority_key_roundtrip() {
        for status in TASK_STATUSES {
            assert_eq!(TaskStatus::from_str_or_default(status.as_str()), status);
        }
        for priority in TASK_PRIORITIES {
            assert_eq!(
                TaskPriority::from_str_or_default(priority.as_str()),
                priority
            );
        }
    }

    #[test]
    fn valid_draft_builds_task() {
        let task = draft().build("42".into(), "1".into(), "2024-12-16".into());
        assert_eq!(task.id, "42");
        assert_eq!(task.title, "Review code changes");
        assert_eq!(task.status, TaskStatus::Todo);
    }

    #[test]
    fn draft_requires_title_and_due_date() {
        let mut d = draft();
        d.title = "   ".into();
        d.due_date = String::new();
        let err = d.validate().unwrap_err();
        assert!(err.field("title").is_some());
        assert!(err.field("due_date").is_some());
    }

    #[test]
    fn draft_rejects_malformed_due_date() {
        let mut d = draft();
        d.due_date = "19/12/2024".into();
        let err = d.validate().unwrap_err();
        assert_eq!(err.field("due_date"), Some("Due date must be YYYY-MM-DD"));
    }

    #[test]
    fn apply_to_keeps_identity_fields() {
        let mut task = draft().build("42".into(), "1".into(), "2024-12-16".into());
        let mut edited = draft();
        edited.title = "Review code changes (round 2)".into();
        edited.status = TaskStatus::InProgress;
        edited.apply_to(&mut task);

        assert_eq!(task.id, "42");
        assert_eq!(task.user_id, "1");
        assert_eq!(task.created_at, "2024-12-16");
        assert_eq!(task.title, "Review code changes (round 2)");
        assert_eq!(task.status, TaskStatus::InProgress);
    }
}
