//! Pure validators for incoming entity data.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SubsecRound};
use regex::Regex;

use crate::error::ValidationError;
use crate::time::Timestamp;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9_.+-]+@[a-zA-Z0-9-]+\.[a-zA-Z0-9-.]+$").expect("email regex is valid")
});

const OFFSET_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f%:z",
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%d %H:%M%:z",
];

const NAIVE_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Whether `text` looks like `local-part@domain.tld`.
///
/// Syntax only; nothing is resolved or delivered.
#[must_use]
pub fn is_valid_email(text: &str) -> bool {
    EMAIL.is_match(text)
}

/// Parse an ISO 8601 date-time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.f]]` (or a space instead of `T`) and a
/// bare `YYYY-MM-DD` (midnight). Any date-time shape may carry a `Z` or
/// `±HH:MM` offset, in which case it is converted to UTC. Fractions beyond
/// microseconds are truncated.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidFormat`] naming `field` when `text`
/// matches none of those shapes.
pub fn parse_timestamp(field: &'static str, text: &str) -> Result<Timestamp, ValidationError> {
    parse_any(text)
        .map(|ts| ts.trunc_subsecs(6))
        .ok_or_else(|| ValidationError::InvalidFormat {
            field,
            value: text.to_string(),
        })
}

fn parse_any(text: &str) -> Option<Timestamp> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(text) {
        return Some(with_offset.naive_utc());
    }

    let zulu = text
        .strip_suffix(['Z', 'z'])
        .map(|rest| format!("{rest}+00:00"));
    let offset_text = zulu.as_deref().unwrap_or(text);
    if let Some(with_offset) = OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(offset_text, format).ok())
    {
        return Some(with_offset.naive_utc());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
}

/// Require non-blank text of at most `max` characters.
///
/// # Errors
///
/// Returns [`ValidationError::Blank`] for empty or whitespace-only text and
/// [`ValidationError::TooLong`] when the limit is exceeded.
pub fn require_text(field: &'static str, value: &str, max: usize) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Blank { field });
    }
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Treat `None` and blank strings alike as "not supplied".
#[must_use]
pub fn supplied(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_accept_simple_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@sub-domain.co.uk"));
    }

    #[test]
    fn should_reject_malformed_email() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b.com "));
    }

    #[test]
    fn should_parse_iso_date_time() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:00:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00");
    }

    #[test]
    fn should_parse_space_separated_and_fractional_date_time() {
        let ts = parse_timestamp("schedule", "2024-01-01 10:00:00.5").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00.500");
    }

    #[test]
    fn should_parse_date_time_without_seconds() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:30").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:30:00");
    }

    #[test]
    fn should_parse_bare_date_as_midnight() {
        let ts = parse_timestamp("schedule", "2024-06-15").unwrap();
        assert_eq!(ts.to_string(), "2024-06-15 00:00:00");
    }

    #[test]
    fn should_convert_offset_to_utc() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:00:00+02:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 08:00:00");
    }

    #[test]
    fn should_convert_offset_without_seconds_to_utc() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:00+02:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 08:00:00");

        let ts = parse_timestamp("schedule", "2024-01-01 10:00+02:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 08:00:00");

        let ts = parse_timestamp("schedule", "2024-01-01T10:00-01:30").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 11:30:00");
    }

    #[test]
    fn should_treat_z_suffix_as_utc() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:00Z").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00");

        let ts = parse_timestamp("schedule", "2024-01-01 10:00:00.25Z").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00.250");
    }

    #[test]
    fn should_truncate_fraction_to_microseconds() {
        let ts = parse_timestamp("schedule", "2024-01-01T10:00:00.123456789").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 10:00:00.123456");

        let ts = parse_timestamp("schedule", "2024-01-01T10:00:00.999999999+01:00").unwrap();
        assert_eq!(ts.to_string(), "2024-01-01 09:00:00.999999");
    }

    #[test]
    fn should_reject_unparsable_timestamp() {
        let err = parse_timestamp("schedule", "next tuesday").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "schedule",
                value: "next tuesday".to_string(),
            }
        );
        assert!(parse_timestamp("schedule", "2024-13-01T10:00:00").is_err());
        assert!(parse_timestamp("schedule", "Z").is_err());
    }

    #[test]
    fn should_reject_blank_and_overlong_text() {
        assert_eq!(
            require_text("name", "   ", 10),
            Err(ValidationError::Blank { field: "name" })
        );
        assert_eq!(
            require_text("name", "abcdefghijk", 10),
            Err(ValidationError::TooLong {
                field: "name",
                max: 10
            })
        );
        assert!(require_text("name", "Yoga", 10).is_ok());
    }

    #[test]
    fn should_treat_blank_as_not_supplied() {
        assert_eq!(supplied(Some("  ".to_string())), None);
        assert_eq!(supplied(None), None);
        assert_eq!(supplied(Some("x".to_string())), Some("x".to_string()));
    }
}
