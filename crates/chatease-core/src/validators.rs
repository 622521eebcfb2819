//! Pure validators for board-creation inputs.
//!
//! All functions here are side-effect free and safe to call from any number
//! of concurrent callers.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::error::ValidationError;
use crate::types::InitialStatus;

static ISO_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid regex"));

// Deliberately permissive: something non-whitespace around an `@`, with a
// dotted domain. Rigorous validation is the server's job.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// Returns true iff `date` is a real calendar date in `YYYY-MM-DD` form.
///
/// The components are checked against the proleptic Gregorian calendar, so
/// out-of-range days and months are rejected rather than clamped into a
/// neighboring valid date.
pub fn is_valid_iso_date(date: &str) -> bool {
    if !ISO_DATE_RE.is_match(date) {
        return false;
    }

    let mut parts = date.split('-');
    let (Some(year), Some(month), Some(day)) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    let (Ok(year), Ok(month), Ok(day)) = (
        year.parse::<i32>(),
        month.parse::<u32>(),
        day.parse::<u32>(),
    ) else {
        return false;
    };

    NaiveDate::from_ymd_opt(year, month, day).is_some()
}

/// Best-effort syntactic email check, not RFC-compliant validation.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Returns true iff `key` is a usable board unique key: non-empty, free of
/// whitespace anywhere (tabs and newlines included), and at most 255
/// characters.
pub fn is_valid_board_unique_key(key: &str) -> bool {
    if key.is_empty() {
        return false;
    }
    if key.chars().any(char::is_whitespace) {
        return false;
    }
    key.chars().count() <= 255
}

/// Enforce the conditional `timeLimit` rule at runtime.
///
/// Scheduled statuses must carry a non-empty, real calendar date. The
/// `waiting_for_reply` status is accepted as-is, whatever `time_limit`
/// happens to hold.
pub fn validate_initial_status(status: &InitialStatus) -> Result<(), ValidationError> {
    if !status.status_key.is_scheduled() {
        return Ok(());
    }

    match status.time_limit.as_deref() {
        None | Some("") => Err(ValidationError::MissingTimeLimit),
        Some(limit) if !is_valid_iso_date(limit) => {
            Err(ValidationError::InvalidTimeLimit(limit.to_string()))
        }
        Some(_) => Ok(()),
    }
}
