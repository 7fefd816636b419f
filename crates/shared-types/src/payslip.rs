use serde::{Deserialize, Serialize};

use crate::filter::FilterRecord;

/// Month names as they appear on payslips and in the month filter.
pub const PAYSLIP_MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A monthly payslip record uploaded by HR.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Payslip {
    pub id: String,
    pub user_id: String,
    /// Month name, e.g. "December".
    pub month: String,
    pub year: i32,
    pub file_name: String,
    pub uploaded_at: String,
    pub uploaded_by: String,
    pub gross_salary: i64,
    pub net_salary: i64,
    pub deductions: i64,
}

impl FilterRecord for Payslip {
    fn search_haystack(&self) -> String {
        format!("{} {} {}", self.month, self.year, self.file_name)
    }

    // The month select occupies the status slot on the payslip view.
    fn status_key(&self) -> &str {
        &self.month
    }

    fn category_key(&self) -> Option<&str> {
        None
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.uploaded_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn payslip_serialization_roundtrip() {
        let slip = Payslip {
            id: "1".into(),
            user_id: "1".into(),
            month: "December".into(),
            year: 2024,
            file_name: "payslip_dec_2024.pdf".into(),
            uploaded_at: "2024-12-01".into(),
            uploaded_by: "HR Team".into(),
            gross_salary: 75_000,
            net_salary: 58_500,
            deductions: 16_500,
        };
        let json = serde_json::to_string(&slip).unwrap();
        let back: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(back, slip);
    }

    #[test]
    fn haystack_covers_month_year_and_file() {
        let slip = Payslip {
            id: "1".into(),
            user_id: "1".into(),
            month: "November".into(),
            year: 2024,
            file_name: "payslip_nov_2024.pdf".into(),
            uploaded_at: "2024-11-01".into(),
            uploaded_by: "HR Team".into(),
            gross_salary: 0,
            net_salary: 0,
            deductions: 0,
        };
        let hay = slip.search_haystack();
        assert!(hay.contains("November"));
        assert!(hay.contains("2024"));
        assert!(hay.contains("payslip_nov_2024.pdf"));
    }
}
