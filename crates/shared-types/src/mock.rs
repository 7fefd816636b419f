//! Built-in demo data. The dashboard runs without a backend; each view
//! seeds its state from these collections and mutates it locally.

use crate::holiday::{Holiday, HolidayType};
use crate::leave::{LeaveRequest, LeaveStatus, LeaveType};
use crate::models::{StaffRole, User};
use crate::payslip::Payslip;
use crate::task::{Task, TaskPriority, TaskStatus};
use crate::ticket::{Ticket, TicketStatus, TicketUrgency};

/// One demo account per role.
pub fn demo_users() -> Vec<User> {
    vec![
        User {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith@company.com".into(),
            role: StaffRole::Employee,
            department: "Engineering".into(),
            team_lead: Some("Sarah Johnson".into()),
            join_date: "2023-01-15".into(),
        },
        User {
            id: "2".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.johnson@company.com".into(),
            role: StaffRole::Hr,
            department: "Human Resources".into(),
            team_lead: None,
            join_date: "2022-03-10".into(),
        },
        User {
            id: "3".into(),
            name: "Mike Wilson".into(),
            email: "mike.wilson@company.com".into(),
            role: StaffRole::Admin,
            department: "Administration".into(),
            team_lead: None,
            join_date: "2021-06-01".into(),
        },
    ]
}

pub fn demo_user_for_role(role: StaffRole) -> User {
    demo_users()
        .into_iter()
        .find(|u| u.role == role)
        .unwrap_or_else(|| demo_users().remove(0))
}

pub fn demo_tasks() -> Vec<Task> {
    vec![
        Task {
            id: "1".into(),
            title: "Complete project documentation".into(),
            description: "Write comprehensive documentation for the new project".into(),
            priority: TaskPriority::High,
            status: TaskStatus::InProgress,
            due_date: "2024-12-18".into(),
            created_at: "2024-12-15".into(),
            user_id: "1".into(),
        },
        Task {
            id: "2".into(),
            title: "Review code changes".into(),
            description: "Review pull requests from team members".into(),
            priority: TaskPriority::Medium,
            status: TaskStatus::Todo,
            due_date: "2024-12-19".into(),
            created_at: "2024-12-16".into(),
            user_id: "1".into(),
        },
        Task {
            id: "3".into(),
            title: "Team meeting preparation".into(),
            description: "Prepare agenda and materials for weekly team meeting".into(),
            priority: TaskPriority::Low,
            status: TaskStatus::Completed,
            due_date: "2024-12-20".into(),
            created_at: "2024-12-17".into(),
            user_id: "1".into(),
        },
        Task {
            id: "4".into(),
            title: "Update database schema".into(),
            description: "Implement new database schema changes".into(),
            priority: TaskPriority::High,
            status: TaskStatus::Todo,
            due_date: "2024-12-21".into(),
            created_at: "2024-12-18".into(),
            user_id: "1".into(),
        },
        Task {
            id: "5".into(),
            title: "Client presentation slides".into(),
            description: "Create presentation slides for client meeting".into(),
            priority: TaskPriority::Medium,
            status: TaskStatus::InProgress,
            due_date: "2024-12-22".into(),
            created_at: "2024-12-18".into(),
            user_id: "1".into(),
        },
    ]
}

pub fn demo_leaves() -> Vec<LeaveRequest> {
    vec![
        LeaveRequest {
            id: "1".into(),
            user_id: "1".into(),
            leave_type: LeaveType::Vacation,
            start_date: "2024-12-25".into(),
            end_date: "2024-12-30".into(),
            reason: "Christmas holidays with family".into(),
            status: LeaveStatus::Approved,
            applied_at: "2024-12-10".into(),
            reviewed_by: Some("Sarah Johnson".into()),
            reviewed_at: Some("2024-12-11".into()),
            review_note: None,
        },
        LeaveRequest {
            id: "2".into(),
            user_id: "1".into(),
            leave_type: LeaveType::Sick,
            start_date: "2025-01-05".into(),
            end_date: "2025-01-05".into(),
            reason: "Medical appointment and check-up".into(),
            status: LeaveStatus::Pending,
            applied_at: "2024-12-15".into(),
            reviewed_by: None,
            reviewed_at: None,
            review_note: None,
        },
        LeaveRequest {
            id: "3".into(),
            user_id: "1".into(),
            leave_type: LeaveType::Personal,
            start_date: "2024-11-15".into(),
            end_date: "2024-11-16".into(),
            reason: "Personal family matter".into(),
            status: LeaveStatus::Rejected,
            applied_at: "2024-11-10".into(),
            reviewed_by: Some("Sarah Johnson".into()),
            reviewed_at: Some("2024-11-12".into()),
            review_note: Some("Insufficient notice period".into()),
        },
        LeaveRequest {
            id: "4".into(),
            user_id: "1".into(),
            leave_type: LeaveType::Casual,
            start_date: "2025-02-14".into(),
            end_date: "2025-02-14".into(),
            reason: "Personal work".into(),
            status: LeaveStatus::Approved,
            applied_at: "2024-12-01".into(),
            reviewed_by: Some("Sarah Johnson".into()),
            reviewed_at: Some("2024-12-02".into()),
            review_note: None,
        },
    ]
}

pub fn demo_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "1".into(),
            user_id: "1".into(),
            title: "Computer running slow".into(),
            description: "My laptop has been running very slowly for the past few days, \
                          especially when opening multiple applications."
                .into(),
            urgency: TicketUrgency::Medium,
            status: TicketStatus::Pending,
            category: Some("Technical".into()),
            assigned_to: Some("IT Support Team".into()),
            created_at: "2024-12-17".into(),
            resolved_at: None,
            resolution: None,
        },
        Ticket {
            id: "2".into(),
            user_id: "1".into(),
            title: "Access card not working".into(),
            description: "My office access card stopped working since yesterday morning. \
                          Cannot enter the building."
                .into(),
            urgency: TicketUrgency::High,
            status: TicketStatus::Resolved,
            category: Some("Facilities".into()),
            assigned_to: Some("Security Team".into()),
            created_at: "2024-12-15".into(),
            resolved_at: Some("2024-12-16".into()),
            resolution: Some("Replaced access card with new one. Issue resolved.".into()),
        },
        Ticket {
            id: "3".into(),
            user_id: "1".into(),
            title: "Payroll inquiry".into(),
            description: "I have questions about my recent payslip and deductions. \
                          Need clarification on tax calculations."
                .into(),
            urgency: TicketUrgency::Low,
            status: TicketStatus::Pending,
            category: Some("Payroll".into()),
            assigned_to: Some("HR Team".into()),
            created_at: "2024-12-10".into(),
            resolved_at: None,
            resolution: None,
        },
        Ticket {
            id: "4".into(),
            user_id: "1".into(),
            title: "Office chair broken".into(),
            description: "My office chair has a broken wheel and is uncomfortable to use. \
                          Need replacement."
                .into(),
            urgency: TicketUrgency::Medium,
            status: TicketStatus::Resolved,
            category: Some("Facilities".into()),
            assigned_to: Some("Facilities Team".into()),
            created_at: "2024-12-05".into(),
            resolved_at: Some("2024-12-08".into()),
            resolution: Some("Chair has been replaced with a new ergonomic office chair.".into()),
        },
    ]
}

pub fn demo_holidays() -> Vec<Holiday> {
    fn holiday(id: &str, name: &str, date: &str, kind: HolidayType, description: &str) -> Holiday {
        Holiday {
            id: id.into(),
            name: name.into(),
            date: date.into(),
            kind,
            description: description.into(),
        }
    }
    vec![
        holiday(
            "1",
            "Christmas Day",
            "2024-12-25",
            HolidayType::Mandatory,
            "Public holiday - Christmas celebration",
        ),
        holiday(
            "2",
            "New Year's Day",
            "2025-01-01",
            HolidayType::Mandatory,
            "Public holiday - New Year celebration",
        ),
        holiday(
            "3",
            "Republic Day",
            "2025-01-26",
            HolidayType::Mandatory,
            "National holiday - Republic Day of India",
        ),
        holiday(
            "4",
            "Holi (Optional)",
            "2025-03-14",
            HolidayType::Optional,
            "Festival of colors - Optional holiday",
        ),
        holiday(
            "5",
            "Good Friday",
            "2025-04-18",
            HolidayType::Mandatory,
            "Christian holiday",
        ),
        holiday(
            "6",
            "Independence Day",
            "2025-08-15",
            HolidayType::Mandatory,
            "National holiday - Independence Day of India",
        ),
        holiday(
            "7",
            "Gandhi Jayanti",
            "2025-10-02",
            HolidayType::Mandatory,
            "National holiday - Birth anniversary of Mahatma Gandhi",
        ),
        holiday(
            "8",
            "Diwali (Optional)",
            "2025-10-20",
            HolidayType::Optional,
            "Festival of lights - Optional holiday",
        ),
        holiday(
            "9",
            "Diwali",
            "2024-11-01",
            HolidayType::Mandatory,
            "Festival of lights",
        ),
        holiday(
            "10",
            "Dussehra",
            "2024-10-12",
            HolidayType::Optional,
            "Victory of good over evil",
        ),
    ]
}

pub fn demo_payslips() -> Vec<Payslip> {
    let months = [
        ("1", "December", "payslip_dec_2024.pdf", "2024-12-01"),
        ("2", "November", "payslip_nov_2024.pdf", "2024-11-01"),
        ("3", "October", "payslip_oct_2024.pdf", "2024-10-01"),
        ("4", "September", "payslip_sep_2024.pdf", "2024-09-01"),
        ("5", "August", "payslip_aug_2024.pdf", "2024-08-01"),
        ("6", "July", "payslip_jul_2024.pdf", "2024-07-01"),
    ];
    months
        .into_iter()
        .map(|(id, month, file, uploaded)| Payslip {
            id: id.into(),
            user_id: "1".into(),
            month: month.into(),
            year: 2024,
            file_name: file.into(),
            uploaded_at: uploaded.into(),
            uploaded_by: "HR Team".into(),
            gross_salary: 75_000,
            net_salary: 58_500,
            deductions: 16_500,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn one_demo_account_per_role() {
        let users = demo_users();
        assert_eq!(users.len(), 3);
        for role in crate::models::STAFF_ROLES {
            assert_eq!(demo_user_for_role(role).role, role);
        }
    }

    #[test]
    fn demo_ids_are_unique_per_collection() {
        fn assert_unique(ids: Vec<&str>) {
            let mut sorted = ids.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), ids.len());
        }
        assert_unique(demo_tasks().iter().map(|t| t.id.as_str()).collect::<Vec<_>>());
        assert_unique(demo_leaves().iter().map(|l| l.id.as_str()).collect::<Vec<_>>());
        assert_unique(demo_tickets().iter().map(|t| t.id.as_str()).collect::<Vec<_>>());
        assert_unique(demo_holidays().iter().map(|h| h.id.as_str()).collect::<Vec<_>>());
        assert_unique(demo_payslips().iter().map(|p| p.id.as_str()).collect::<Vec<_>>());
    }

    #[test]
    fn resolved_demo_tickets_carry_resolutions() {
        for ticket in demo_tickets() {
            if ticket.status == crate::ticket::TicketStatus::Resolved {
                assert!(ticket.resolution.is_some());
                assert!(ticket.resolved_at.is_some());
            }
        }
    }
}
