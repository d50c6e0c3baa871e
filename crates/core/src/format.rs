//! Display formatting helpers.

use chrono::{DateTime, Local, TimeZone, Utc};
use std::fmt::Display;

/// Label shown in place of an empty sender or recipient.
pub const SYSTEM_LABEL: &str = "System";

/// Layout used for block timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Shown when a timestamp cannot be represented as a date.
pub const INVALID_DATE: &str = "Invalid Date";

/// Returns the party itself, or [`SYSTEM_LABEL`] when it is empty.
pub fn party_label(party: &str) -> &str {
    if party.is_empty() {
        SYSTEM_LABEL
    } else {
        party
    }
}

/// Format a block timestamp in the local time zone.
pub fn format_timestamp(timestamp: f64) -> String {
    format_timestamp_in(timestamp, &Local)
}

/// Format a block timestamp in the given time zone.
pub fn format_timestamp_in<Tz>(timestamp: f64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match datetime_from_secs(timestamp) {
        Some(dt) => dt.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Millisecond precision, rounded.
fn datetime_from_secs(timestamp: f64) -> Option<DateTime<Utc>> {
    if !timestamp.is_finite() {
        return None;
    }
    let millis = (timestamp * 1000.0).round();
    if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}
