//! Time and timestamp helpers.

use chrono::{NaiveDateTime, SubsecRound, Timelike, Utc};

/// Naive UTC timestamp used for class schedules and booking creation times.
pub type Timestamp = NaiveDateTime;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const ISO_MICROS_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const READABLE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Return the current UTC time, truncated to microseconds.
#[must_use]
pub fn now() -> Timestamp {
    Utc::now().naive_utc().trunc_subsecs(6)
}

/// Format as ISO 8601, e.g. `2024-01-01T10:00:00` or `2024-01-01T10:00:00.250000`.
///
/// A non-zero fraction is always written with six digits.
#[must_use]
pub fn to_iso(ts: &Timestamp) -> String {
    let format = if ts.nanosecond() == 0 {
        ISO_FORMAT
    } else {
        ISO_MICROS_FORMAT
    };
    ts.format(format).to_string()
}

/// Format for humans, e.g. `2024-01-01 10:00:00`.
#[must_use]
pub fn to_readable(ts: &Timestamp) -> String {
    ts.format(READABLE_FORMAT).to_string()
}
