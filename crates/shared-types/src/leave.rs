use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::filter::FilterRecord;

/// Category of leave being requested.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveType {
    Sick,
    #[default]
    Casual,
    Vacation,
    Personal,
}

pub const LEAVE_TYPES: [LeaveType; 4] = [
    LeaveType::Sick,
    LeaveType::Casual,
    LeaveType::Vacation,
    LeaveType::Personal,
];

impl LeaveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveType::Sick => "sick",
            LeaveType::Casual => "casual",
            LeaveType::Vacation => "vacation",
            LeaveType::Personal => "personal",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sick" => LeaveType::Sick,
            "vacation" => LeaveType::Vacation,
            "personal" => LeaveType::Personal,
            _ => LeaveType::Casual,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveType::Sick => "Sick",
            LeaveType::Casual => "Casual",
            LeaveType::Vacation => "Vacation",
            LeaveType::Personal => "Personal",
        }
    }
}

/// Review status of a leave request.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

pub const LEAVE_STATUSES: [LeaveStatus; 3] = [
    LeaveStatus::Pending,
    LeaveStatus::Approved,
    LeaveStatus::Rejected,
];

impl LeaveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Rejected => "rejected",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "approved" => LeaveStatus::Approved,
            "rejected" => LeaveStatus::Rejected,
            _ => LeaveStatus::Pending,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Rejected => "Rejected",
        }
    }
}

/// A leave request with its review trail.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LeaveRequest {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub leave_type: LeaveType,
    /// First day of leave, `YYYY-MM-DD`.
    pub start_date: String,
    /// Last day of leave, inclusive.
    pub end_date: String,
    pub reason: String,
    pub status: LeaveStatus,
    pub applied_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<String>,
    /// Rejection reason or approval note.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_note: Option<String>,
}

impl LeaveRequest {
    /// Mark approved. Only pending requests can be reviewed.
    pub fn approve(&mut self, reviewer: &str, today: &str) -> Result<(), AppError> {
        self.review(LeaveStatus::Approved, reviewer, today, None)
    }

    /// Mark rejected with a reason.
    pub fn reject(&mut self, reviewer: &str, today: &str, note: &str) -> Result<(), AppError> {
        self.review(LeaveStatus::Rejected, reviewer, today, Some(note.to_string()))
    }

    fn review(
        &mut self,
        status: LeaveStatus,
        reviewer: &str,
        today: &str,
        note: Option<String>,
    ) -> Result<(), AppError> {
        if self.status != LeaveStatus::Pending {
            return Err(AppError::validation(
                "Only pending leave requests can be reviewed",
                HashMap::new(),
            ));
        }
        self.status = status;
        self.reviewed_by = Some(reviewer.to_string());
        self.reviewed_at = Some(today.to_string());
        self.review_note = note;
        Ok(())
    }
}

impl FilterRecord for LeaveRequest {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.reason, self.leave_type.as_str())
    }

    fn status_key(&self) -> &str {
        self.status.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        Some(self.leave_type.as_str())
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.start_date)
    }
}

/// Fields collected by the "apply for leave" dialog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeaveDraft {
    pub leave_type: LeaveType,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
}

impl LeaveDraft {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut fields = HashMap::new();
        if self.reason.trim().is_empty() {
            fields.insert("reason".to_string(), "Reason is required".to_string());
        }
        let start = parse_date(&self.start_date);
        let end = parse_date(&self.end_date);
        if start.is_none() {
            fields.insert(
                "start_date".to_string(),
                "Start date must be YYYY-MM-DD".to_string(),
            );
        }
        if end.is_none() {
            fields.insert(
                "end_date".to_string(),
                "End date must be YYYY-MM-DD".to_string(),
            );
        }
        if let (Some(s), Some(e)) = (start, end) {
            if e < s {
                fields.insert(
                    "end_date".to_string(),
                    "End date must not be before start date".to_string(),
                );
            }
        }
        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Leave request is incomplete", fields))
        }
    }

    pub fn build(self, id: String, user_id: String, applied_at: String) -> LeaveRequest {
        LeaveRequest {
            id,
            user_id,
            leave_type: self.leave_type,
            start_date: self.start_date.trim().to_string(),
            end_date: self.end_date.trim().to_string(),
            reason: self.reason.trim().to_string(),
            status: LeaveStatus::Pending,
            applied_at,
            reviewed_by: None,
            reviewed_at: None,
            review_note: None,
        }
    }
}

fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft() -> LeaveDraft {
        LeaveDraft {
            leave_type: LeaveType::Vacation,
            start_date: "2024-12-25".into(),
            end_date: "2024-12-30".into(),
            reason: "Christmas holidays with family".into(),
        }
    }

    #[test]
    fn leave_type_serializes_with_type_field_name() {
        let leave = draft().build("1".into(), "1".into(), "2024-12-10".into());
        let json = serde_json::to_string(&leave).unwrap();
        assert!(json.contains("\"type\":\"vacation\""));
        let back: LeaveRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, leave);
    }

    #[test]
    fn draft_rejects_inverted_date_range() {
        let mut d = draft();
        d.start_date = "2024-12-30".into();
        d.end_date = "2024-12-25".into();
        let err = d.validate().unwrap_err();
        assert_eq!(
            err.field("end_date"),
            Some("End date must not be before start date")
        );
    }

    #[test]
    fn single_day_leave_is_valid() {
        let mut d = draft();
        d.start_date = "2025-01-05".into();
        d.end_date = "2025-01-05".into();
        assert!(d.validate().is_ok());
    }

    #[test]
    fn approve_sets_review_trail() {
        let mut leave = draft().build("1".into(), "1".into(), "2024-12-10".into());
        leave.approve("Sarah Johnson", "2024-12-11").unwrap();
        assert_eq!(leave.status, LeaveStatus::Approved);
        assert_eq!(leave.reviewed_by.as_deref(), Some("Sarah Johnson"));
        assert_eq!(leave.reviewed_at.as_deref(), Some("2024-12-11"));
    }

    #[test]
    fn reject_requires_pending_status() {
        let mut leave = draft().build("1".into(), "1".into(), "2024-12-10".into());
        leave.approve("Sarah Johnson", "2024-12-11").unwrap();
        let err = leave
            .reject("Sarah Johnson", "2024-12-12", "too late")
            .unwrap_err();
        assert_eq!(err.kind, crate::error::AppErrorKind::ValidationError);
        assert_eq!(leave.status, LeaveStatus::Approved);
    }
}
