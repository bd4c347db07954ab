//! Time utilities for the cf client
//!
//! The cloud controller reports instance state changes as fractional Unix
//! seconds and package uploads as RFC 3339 strings. Both are displayed as
//! ISO-8601 UTC with second precision.

use chrono::{DateTime, Utc};

/// Display format for every timestamp the CLI prints
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Convert fractional Unix seconds to a UTC timestamp.
///
/// The fractional part is truncated. Returns `None` for values chrono
/// cannot represent (NaN, infinities, out-of-range).
///
/// # Examples
/// ```
/// use cf_core::time::from_unix_seconds;
///
/// let ts = from_unix_seconds(1403140717.984577).unwrap();
/// assert_eq!(ts.timestamp(), 1403140717);
/// ```
pub fn from_unix_seconds(secs: f64) -> Option<DateTime<Utc>> {
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs.trunc() as i64, 0)
}

/// Format a timestamp as ISO-8601 UTC with second precision.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Format fractional Unix seconds, or an empty string when out of range.
pub fn format_unix_seconds(secs: f64) -> String {
    from_unix_seconds(secs)
        .map(|ts| format_timestamp(&ts))
        .unwrap_or_default()
}
