//! Purchase timestamp helpers.
//!
//! Purchase timestamps are stored as plain strings. The presentation layer
//! stamps them with local wall-clock time in [`TIMESTAMP_FORMAT`].

use chrono::{DateTime, Local, TimeZone};

/// `YYYY-MM-DD HH:MM:SS`, local time.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time formatted with [`TIMESTAMP_FORMAT`].
pub fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format any zoned instant with [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: core::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Date portion of a timestamp: everything before the first whitespace.
///
/// Timestamps that carry no time-of-day are returned unchanged; an empty or
/// all-whitespace timestamp yields an empty string.
pub fn date_part(timestamp: &str) -> &str {
    timestamp.split_whitespace().next().unwrap_or("")
}
