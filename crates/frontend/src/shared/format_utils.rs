//! Number and date formatting helpers for tables and stat cards.

use chrono::{DateTime, NaiveDate, Utc};

/// Format a number with a thousands separator (space) and the given
/// number of decimal places.
pub fn format_number_with_decimals(value: f64, decimals: u8) -> String {
    let formatted = match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        _ => format!("{:.2}", value),
    };

    let mut parts = formatted.splitn(2, '.');
    let integer_part = parts.next().unwrap_or("");
    let decimal_part = parts.next();

    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(' ');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

pub fn format_money(value: f64) -> String {
    format_number_with_decimals(value, 2)
}

/// Whole kilograms with a unit suffix.
pub fn format_kg(value: i64) -> String {
    format!("{} kg", format_number_with_decimals(value as f64, 0))
}

/// DD.MM.YYYY for table cells.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_datetime(ts: DateTime<Utc>) -> String {
    ts.format("%d.%m.%Y %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_spaces() {
        assert_eq!(format_money(1234.56), "1 234.56");
        assert_eq!(format_money(1234567.89), "1 234 567.89");
        assert_eq!(format_money(0.0), "0.00");
        assert_eq!(format_money(-1234.56), "-1 234.56");
    }

    #[test]
    fn formats_kilograms() {
        assert_eq!(format_kg(500), "500 kg");
        assert_eq!(format_kg(42_000), "42 000 kg");
    }

    #[test]
    fn formats_dates() {
        let d = NaiveDate::from_ymd_opt(2026, 8, 27).unwrap();
        assert_eq!(format_date(d), "27.08.2026");
    }
}
