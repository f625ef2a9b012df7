//! Field-level validation rules.
//!
//! A rule is a plain `fn(&str) -> Option<String>`: `None` means valid,
//! `Some(message)` is the inline error shown under the field. Keeping
//! rules as function pointers keeps [`FormField`](super::FormField) `Copy`.

use contracts::domain::inventory::MAX_QUANTITY_KG;

pub type Rule = fn(&str) -> Option<String>;

/// Accepts anything; for free-text fields like notes.
pub fn optional(_value: &str) -> Option<String> {
    None
}

pub fn required(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        Some("This field is required".to_string())
    } else {
        None
    }
}

/// Whole-number quantity in kilograms, `1 ..= 999999`.
/// Low and high violations produce distinct messages.
pub fn quantity_kg(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Quantity is required".to_string());
    }
    let quantity: i64 = match trimmed.parse() {
        Ok(q) => q,
        Err(_) => return Some("Quantity must be a whole number".to_string()),
    };
    if quantity <= 0 {
        return Some("Quantity must be a positive number".to_string());
    }
    if quantity > MAX_QUANTITY_KG {
        return Some(format!("Quantity cannot exceed {}", MAX_QUANTITY_KG));
    }
    None
}

/// Price per kilogram: a positive decimal.
pub fn unit_price(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Price is required".to_string());
    }
    match trimmed.parse::<f64>() {
        Ok(p) if p > 0.0 => None,
        Ok(_) => Some("Price must be greater than zero".to_string()),
        Err(_) => Some("Price must be a number".to_string()),
    }
}

pub fn email(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Email is required".to_string());
    }
    let at = trimmed.find('@');
    let valid = match at {
        Some(pos) if pos > 0 && pos + 1 < trimmed.len() => {
            let domain = &trimmed[pos + 1..];
            domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
        }
        _ => false,
    };
    if valid {
        None
    } else {
        Some("Email address is not valid".to_string())
    }
}

pub fn phone(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Phone number is required".to_string());
    }
    let digits = trimmed.chars().filter(|c| c.is_ascii_digit()).count();
    if digits < 7 {
        return Some("Phone number must contain at least 7 digits".to_string());
    }
    None
}

/// Six-digit one-time password.
pub fn otp_code(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.len() != 6 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
        Some("OTP must be a 6-digit code".to_string())
    } else {
        None
    }
}

pub fn password(value: &str) -> Option<String> {
    if value.is_empty() {
        return Some("Password is required".to_string());
    }
    if value.len() < 6 {
        return Some("Password must be at least 6 characters".to_string());
    }
    None
}

/// Date in YYYY-MM-DD, as entered by `<input type="date">`.
pub fn iso_date(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some("Date is required".to_string());
    }
    match chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(_) => None,
        Err(_) => Some("Date must be YYYY-MM-DD".to_string()),
    }
}

/// Cross-field check for the password pair; runs at submit time, not
/// per keystroke.
pub fn passwords_match(new_password: &str, confirm_password: &str) -> Option<String> {
    if new_password != confirm_password {
        Some("New passwords do not match".to_string())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_zero_is_rejected_as_non_positive() {
        assert_eq!(
            quantity_kg("0").as_deref(),
            Some("Quantity must be a positive number")
        );
        assert_eq!(
            quantity_kg("-5").as_deref(),
            Some("Quantity must be a positive number")
        );
    }

    #[test]
    fn quantity_above_cap_gets_distinct_message() {
        assert_eq!(
            quantity_kg("1000000").as_deref(),
            Some("Quantity cannot exceed 999999")
        );
    }

    #[test]
    fn quantity_in_range_passes() {
        assert_eq!(quantity_kg("500"), None);
        assert_eq!(quantity_kg("1"), None);
        assert_eq!(quantity_kg("999999"), None);
    }

    #[test]
    fn quantity_rejects_empty_and_non_numeric() {
        assert!(quantity_kg("").is_some());
        assert!(quantity_kg("  ").is_some());
        assert_eq!(
            quantity_kg("12.5").as_deref(),
            Some("Quantity must be a whole number")
        );
    }

    #[test]
    fn quantity_messages_match_payload_validation() {
        // The inline rule and the payload check on the outgoing DTO must
        // report out-of-range quantities with the same words.
        use contracts::domain::inventory::InventoryUpdate;

        let mut update = InventoryUpdate {
            name: "Assam BOP".into(),
            grade: "BOP".into(),
            quantity_kg: 0,
            unit_price: 12.0,
            warehouse: "Siliguri".into(),
        };
        assert_eq!(quantity_kg("0"), update.validate().err());

        update.quantity_kg = 1_000_000;
        assert_eq!(quantity_kg("1000000"), update.validate().err());
    }

    #[test]
    fn required_rejects_whitespace_only() {
        assert!(required("   ").is_some());
        assert_eq!(required("Assam"), None);
    }

    #[test]
    fn email_needs_user_and_dotted_domain() {
        assert_eq!(email("staff@chai.example"), None);
        assert!(email("@chai.example").is_some());
        assert!(email("staff@chai").is_some());
        assert!(email("staff@chai.").is_some());
        assert!(email("").is_some());
    }

    #[test]
    fn mismatched_passwords_are_reported() {
        assert_eq!(
            passwords_match("abcdef", "abcxyz").as_deref(),
            Some("New passwords do not match")
        );
        assert_eq!(passwords_match("abcdef", "abcdef"), None);
    }

    #[test]
    fn otp_must_be_six_digits() {
        assert_eq!(otp_code("123456"), None);
        assert!(otp_code("12345").is_some());
        assert!(otp_code("12345a").is_some());
    }

    #[test]
    fn iso_date_accepts_calendar_dates_only() {
        assert_eq!(iso_date("2026-08-27"), None);
        assert!(iso_date("2026-13-01").is_some());
        assert!(iso_date("27.08.2026").is_some());
    }
}
