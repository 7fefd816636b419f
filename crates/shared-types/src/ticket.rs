use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filter::FilterRecord;

/// How urgent a support ticket is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketUrgency {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

pub const TICKET_URGENCIES: [TicketUrgency; 4] = [
    TicketUrgency::Low,
    TicketUrgency::Medium,
    TicketUrgency::High,
    TicketUrgency::Critical,
];

impl TicketUrgency {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketUrgency::Low => "low",
            TicketUrgency::Medium => "medium",
            TicketUrgency::High => "high",
            TicketUrgency::Critical => "critical",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => TicketUrgency::Low,
            "high" => TicketUrgency::High,
            "critical" => TicketUrgency::Critical,
            _ => TicketUrgency::Medium,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketUrgency::Low => "Low",
            TicketUrgency::Medium => "Medium",
            TicketUrgency::High => "High",
            TicketUrgency::Critical => "Critical",
        }
    }
}

/// Lifecycle of a support ticket.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    Pending,
    Resolved,
}

pub const TICKET_STATUSES: [TicketStatus; 2] = [TicketStatus::Pending, TicketStatus::Resolved];

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "resolved" => TicketStatus::Resolved,
            _ => TicketStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "Pending",
            TicketStatus::Resolved => "Resolved",
        }
    }
}

/// A support/complaint ticket raised by an employee.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ticket {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub urgency: TicketUrgency,
    pub status: TicketStatus,
    /// Free-form routing category (Technical, Facilities, Payroll...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolution: Option<String>,
}

impl Ticket {
    /// Close the ticket with a resolution note. Resolving twice is rejected.
    pub fn resolve(&mut self, resolution: &str, today: &str) -> Result<(), AppError> {
        if self.status == TicketStatus::Resolved {
            return Err(AppError::validation(
                "Ticket is already resolved",
                HashMap::new(),
            ));
        }
        self.status = TicketStatus::Resolved;
        self.resolved_at = Some(today.to_string());
        self.resolution = Some(resolution.to_string());
        Ok(())
    }
}

impl FilterRecord for Ticket {
    fn search_haystack(&self) -> String {
        match &self.category {
            Some(category) => format!("{} {} {}", self.title, self.description, category),
            None => format!("{} {}", self.title, self.description),
        }
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.urgency.as_str())
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.created_at)
    }
}

/// Fields collected by the "raise ticket" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketDraft {
    pub title: String,
    pub description: String,
    pub urgency: TicketUrgency,
    pub category: String,
}

impl TicketDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        if self.title.trim().is_empty() {
            fields.insert("title".to_string(), "Title is required".to_string());
        }
        if self.description.trim().is_empty() {
            fields.insert(
                "description".to_string(),
                "Description is required".to_string(),
            );
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Ticket is incomplete", fields))
        }
    }

    pub fn build(self, id: String, user_id: String, created_at: String) -> Ticket {
        let category = self.category.trim();
        Ticket {
            id,
            user_id,
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            urgency: self.urgency,
            status: TicketStatus::Pending,
            category: if category.is_empty() {
                None
            } else {
                Some(category.to_string())
            },
            assigned_to: None,
            created_at,
            resolved_at: None,
            resolution: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> TicketDraft {
        TicketDraft {
            title: "Computer running slow".into(),
            description: "Laptop is slow when opening multiple applications".into(),
            urgency: TicketUrgency::Medium,
            category: "Technical".into(),
        }
    }

    #[test]
    fn blank_category_becomes_none() {
        let mut d = draft();
        d.category = "   ".into();
        let ticket = d.build("1".into(), "1".into(), "2024-12-17".into());
        assert_eq!(ticket.category, None);
    }

    #[test]
    fn resolve_closes_ticket_once() {
        let mut ticket = draft().build("1".into(), "1".into(), "2024-12-15".into());
        ticket.resolve("Replaced access card", "2024-12-16").unwrap();
        assert_eq!(ticket.status, TicketStatus::Resolved);
        assert_eq!(ticket.resolved_at.as_deref(), Some("2024-12-16"));

        let err = ticket.resolve("again", "2024-12-17").unwrap_err();
        assert_eq!(err.kind, crate::error::AppErrorKind::ValidationError);
    }

    #[test]
    fn search_haystack_includes_category_when_present() {
        let ticket = draft().build("1".into(), "1".into(), "2024-12-17".into());
        assert!(ticket.search_haystack().contains("Technical"));

        let mut bare = draft();
        bare.category = String::new();
        let bare = bare.build("2".into(), "1".into(), "2024-12-17".into());
        assert!(!bare.search_haystack().contains("Technical"));
    }

    #[test]
    fn urgency_key_roundtrip() {
        for urgency in TICKET_URGENCIES {
            assert_eq!(TicketUrgency::from_str_or_default(urgency.as_str()), urgency);
        }
    }
}
