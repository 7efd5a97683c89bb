//! Local form validation
//!
//! All errors here are `CoreError::Validation`, surfaced as toasts at the
//! call site and fixed by the user re-submitting corrected input.

use crate::error::CoreError;
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

/// Non-empty check after trimming
pub fn require(label: &str, value: &str) -> Result<String, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation(format!("{label} is required")));
    }
    Ok(trimmed.to_string())
}

pub fn email(value: &str) -> Result<String, CoreError> {
    let value = require("Email", value)?;
    if !EMAIL_RE.is_match(&value) {
        return Err(CoreError::validation(format!(
            "\"{value}\" is not a valid email address"
        )));
    }
    Ok(value)
}

/// `YYYY-MM-DD`
pub fn date(label: &str, value: &str) -> Result<NaiveDate, CoreError> {
    let value = require(label, value)?;
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .map_err(|_| CoreError::validation(format!("{label} must be YYYY-MM-DD")))
}

pub fn number(label: &str, value: &str) -> Result<f64, CoreError> {
    let value = require(label, value)?;
    value
        .parse::<f64>()
        .map_err(|_| CoreError::validation(format!("{label} must be a number")))
}

/// Settings password change: all fields present, new matches confirmation
pub fn password_change(current: &str, new: &str, confirm: &str) -> Result<(), CoreError> {
    if current.trim().is_empty() || new.trim().is_empty() || confirm.trim().is_empty() {
        return Err(CoreError::validation("All password fields are required"));
    }
    if new != confirm {
        return Err(CoreError::validation(
            "New password and confirmation don't match",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn require_trims_and_rejects_blank() {
        assert_eq!(require("Name", "  Alice  ").unwrap(), "Alice");
        assert!(require("Name", "   ").is_err());
    }

    #[test]
    fn email_accepts_plain_addresses() {
        assert!(email("alice@example.com").is_ok());
        assert!(email("a.b+c@sub.domain.org").is_ok());
    }

    #[test]
    fn email_rejects_malformed_addresses() {
        for bad in ["alice", "alice@", "@example.com", "a b@example.com", "a@b"] {
            assert!(email(bad).is_err(), "{bad} should be rejected");
        }
    }

    #[test]
    fn date_parses_iso_format_only() {
        assert_eq!(
            date("Due date", "2024-01-15").unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
        );
        assert!(date("Due date", "15/01/2024").is_err());
        assert!(date("Due date", "").is_err());
    }

    #[test]
    fn password_change_requires_matching_confirmation() {
        assert!(password_change("old", "new123", "new123").is_ok());
        assert!(password_change("old", "new123", "different").is_err());
        assert!(password_change("", "new123", "new123").is_err());
    }

    #[test]
    fn number_rejects_garbage() {
        assert_eq!(number("Amount", "1250.50").unwrap(), 1250.50);
        assert!(number("Amount", "$1,250").is_err());
    }
}
