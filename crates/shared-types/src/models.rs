use serde::{Deserialize, Serialize};

/// Dashboard role selected at the role-picker screen.
///
/// - `Employee` — personal tasks, leaves, tickets, payslips, holidays.
/// - `Hr` — leave management, complaint box, payslip upload, holidays.
/// - `Admin` — full oversight of leaves, tickets, and holidays.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    #[default]
    Employee,
    Hr,
    Admin,
}

/// All selectable roles, in the order the role picker shows them.
pub const STAFF_ROLES: [StaffRole; 3] = [StaffRole::Employee, StaffRole::Hr, StaffRole::Admin];

impl StaffRole {
    /// Lowercase key used in serialized state.
    pub fn as_str(&self) -> &'static str {
        match self {
            StaffRole::Employee => "employee",
            StaffRole::Hr => "hr",
            StaffRole::Admin => "admin",
        }
    }

    /// Parse a role key. Unknown values default to Employee.
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "hr" => StaffRole::Hr,
            "admin" => StaffRole::Admin,
            _ => StaffRole::Employee,
        }
    }

    /// Display title shown on the role card and in the navbar.
    pub fn title(&self) -> &'static str {
        match self {
            StaffRole::Employee => "Employee",
            StaffRole::Hr => "HR Manager",
            StaffRole::Admin => "Administrator",
        }
    }

    /// One-line summary shown on the role card.
    pub fn summary(&self) -> &'static str {
        match self {
            StaffRole::Employee => "Manage tasks, leaves, and view payslips",
            StaffRole::Hr => "Manage employees, leaves, and payslips",
            StaffRole::Admin => "Full system access and management",
        }
    }

    /// Whether this role reviews (approves/rejects) leave requests.
    pub fn reviews_leaves(&self) -> bool {
        matches!(self, StaffRole::Hr | StaffRole::Admin)
    }

    /// Whether this role works the complaint box (resolves tickets).
    pub fn resolves_tickets(&self) -> bool {
        matches!(self, StaffRole::Hr | StaffRole::Admin)
    }

    /// Personal task board is an employee-only section.
    pub fn has_task_board(&self) -> bool {
        matches!(self, StaffRole::Employee)
    }
}

/// A staff member in the system.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: StaffRole,
    pub department: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_lead: Option<String>,
    pub join_date: String,
}

impl User {
    /// Uppercase initials for the navbar avatar (at most two characters).
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn role_as_str_roundtrip() {
        for role in STAFF_ROLES {
            assert_eq!(StaffRole::from_str_or_default(role.as_str()), role);
        }
    }

    #[test]
    fn role_from_str_unknown_falls_back_to_employee() {
        assert_eq!(StaffRole::from_str_or_default(""), StaffRole::Employee);
        assert_eq!(StaffRole::from_str_or_default("manager"), StaffRole::Employee);
        assert_eq!(StaffRole::from_str_or_default("ADMIN"), StaffRole::Admin);
    }

    #[test]
    fn role_abilities() {
        assert!(StaffRole::Employee.has_task_board());
        assert!(!StaffRole::Hr.has_task_board());
        assert!(StaffRole::Hr.reviews_leaves());
        assert!(StaffRole::Admin.reviews_leaves());
        assert!(!StaffRole::Employee.reviews_leaves());
        assert!(StaffRole::Admin.resolves_tickets());
    }

    #[test]
    fn user_serialization_roundtrip() {
        let user = User {
            id: "1".into(),
            name: "John Smith".into(),
            email: "john.smith@company.com".into(),
            role: StaffRole::Employee,
            department: "Engineering".into(),
            team_lead: Some("Sarah Johnson".into()),
            join_date: "2023-01-15".into(),
        };

        let json = serde_json::to_string(&user).unwrap();
        let deserialized: User = serde_json::from_str(&json).unwrap();
        assert_eq!(user, deserialized);
    }

    #[test]
    fn user_initials_take_first_two_words() {
        let mut user = User {
            id: "1".into(),
            name: "John Smith".into(),
            email: String::new(),
            role: StaffRole::Employee,
            department: String::new(),
            team_lead: None,
            join_date: String::new(),
        };
        assert_eq!(user.initials(), "JS");

        user.name = "Sarah Anne Johnson".into();
        assert_eq!(user.initials(), "SA");

        user.name = "Cher".into();
        assert_eq!(user.initials(), "C");
    }
}
