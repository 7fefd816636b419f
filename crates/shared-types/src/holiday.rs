use serde::{Deserialize, Serialize};

use crate::filter::FilterRecord;

/// Whether a holiday is company-mandated or opt-in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum HolidayType {
    #[default]
    Mandatory,
    Optional,
}

pub const HOLIDAY_TYPES: [HolidayType; 2] = [HolidayType::Mandatory, HolidayType::Optional];

impl HolidayType {
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::Mandatory => "mandatory",
            HolidayType::Optional => "optional",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "optional" => HolidayType::Optional,
            _ => HolidayType::Mandatory,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::Mandatory => "Mandatory",
            HolidayType::Optional => "Optional",
        }
    }
}

/// A calendar holiday visible to all roles.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Holiday {
    pub id: String,
    pub name: String,
    /// Holiday date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(rename = "type")]
    pub kind: HolidayType,
    pub description: String,
}

// Holidays have no secondary categorical field; the type select occupies the
// status slot and the category criterion can never match.
impl FilterRecord for Holiday {
    fn search_haystack(&self) -> String {
        format!("{} {}", self.name, self.description)
    }

    fn status_key(&self) -> &str {
        self.kind.as_str()
    }

    fn category_key(&self) -> Option<&str> {
        None
    }

    fn date_key(&self) -> Option<&str> {
        Some(&self.date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn kind_serializes_with_type_field_name() {
        let holiday = Holiday {
            id: "1".into(),
            name: "Christmas Day".into(),
            date: "2024-12-25".into(),
            kind: HolidayType::Mandatory,
            description: "Public holiday - Christmas celebration".into(),
        };
        let json = serde_json::to_string(&holiday).unwrap();
        assert!(json.contains("\"type\":\"mandatory\""));
        let back: Holiday = serde_json::from_str(&json).unwrap();
        assert_eq!(back, holiday);
    }

    #[test]
    fn type_key_roundtrip() {
        for kind in HOLIDAY_TYPES {
            assert_eq!(HolidayType::from_str_or_default(kind.as_str()), kind);
        }
        assert_eq!(
            HolidayType::from_str_or_default("unknown"),
            HolidayType::Mandatory
        );
    }
}
