//! Shared formatting utilities for the UI layer.
//!
//! Record dates are `YYYY-MM-DD` strings; these helpers turn them into
//! human-readable output without parsing through a date type.

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun",
    "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse month number (1-12) from a two-digit string.
fn parse_month(s: &str) -> Option<usize> {
    s.parse::<usize>().ok().filter(|m| (1..=12).contains(m))
}

/// Format a `YYYY-MM-DD` string as "Dec 19, 2024".
///
/// Falls back to the first 10 characters if parsing fails.
pub fn format_date_human(date_str: &str) -> String {
    if date_str.len() < 10 {
        return date_str.to_string();
    }
    let year = &date_str[..4];
    let month = &date_str[5..7];
    let day = &date_str[8..10];

    if let Some(m) = parse_month(month) {
        let day_num: u32 = day.parse().unwrap_or(0);
        format!("{} {}, {}", MONTH_NAMES[m - 1], day_num, year)
    } else {
        date_str[..10].to_string()
    }
}

/// Format a whole-currency amount with thousands separators, e.g. "$58,500".
pub fn format_amount(amount: i64) -> String {
    let negative = amount < 0;
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        let remaining = digits.len() - i;
        if i > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if negative {
        format!("-${grouped}")
    } else {
        format!("${grouped}")
    }
}

/// Format a timestamp as a 12-hour wall clock, e.g. "9:35:07 AM".
pub fn format_clock(time: chrono::DateTime<chrono::Utc>) -> String {
    use chrono::Timelike;
    let hour = time.hour();
    let (display_hour, ampm) = match hour {
        0 => (12, "AM"),
        1..=11 => (hour, "AM"),
        12 => (12, "PM"),
        _ => (hour - 12, "PM"),
    };
    format!(
        "{}:{:02}:{:02} {}",
        display_hour,
        time.minute(),
        time.second(),
        ampm
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_record_dates() {
        assert_eq!(format_date_human("2024-12-19"), "Dec 19, 2024");
        assert_eq!(format_date_human("2025-01-05"), "Jan 5, 2025");
        assert_eq!(format_date_human("bad"), "bad");
    }

    #[test]
    fn formats_amounts_with_separators() {
        assert_eq!(format_amount(0), "$0");
        assert_eq!(format_amount(900), "$900");
        assert_eq!(format_amount(58_500), "$58,500");
        assert_eq!(format_amount(1_234_567), "$1,234,567");
        assert_eq!(format_amount(-16_500), "-$16,500");
    }

    #[test]
    fn formats_twelve_hour_clock() {
        use chrono::TimeZone;
        let midnight = chrono::Utc.with_ymd_and_hms(2024, 12, 17, 0, 5, 9).unwrap();
        assert_eq!(format_clock(midnight), "12:05:09 AM");
        let afternoon = chrono::Utc.with_ymd_and_hms(2024, 12, 17, 15, 30, 0).unwrap();
        assert_eq!(format_clock(afternoon), "3:30:00 PM");
    }
}
