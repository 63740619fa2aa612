//! # Date & Time Helpers
//!
//! Formatting and combination helpers for the `DD.MM.YYYY` / `HH:MM`
//! strings the reservation flow passes around. Everything is naive local
//! time: the bot serves a single parking lot in one timezone, so carrying
//! offsets around would only add noise.

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};

/// How many days the inline day picker offers by default.
pub const DAY_PICKER_DAYS: usize = 7;

// =============================================================================
// Formatting
// =============================================================================

/// Renders a timestamp as `DD.MM.YYYY HH:MM`.
pub fn format_datetime(value: NaiveDateTime) -> String {
    value.format("%d.%m.%Y %H:%M").to_string()
}

/// Re-renders a stored timestamp (`2025-06-10T14:30:00`, the space
/// separated variant, seconds optional) as `DD.MM.YYYY HH:MM`.
///
/// Timestamps come back in this shape from the reservation store. `None`
/// means the stored value is malformed and the caller should fall back
/// to showing it raw.
pub fn format_datetime_iso(value: &str) -> Option<String> {
    parse_iso_datetime(value).map(format_datetime)
}

/// Renders a date as `DD.MM.YYYY`.
pub fn format_date(value: NaiveDate) -> String {
    value.format("%d.%m.%Y").to_string()
}

/// Re-renders a stored ISO date or timestamp as `DD.MM.YYYY`.
pub fn format_date_iso(value: &str) -> Option<String> {
    if let Ok(date) = value.parse::<NaiveDate>() {
        return Some(format_date(date));
    }
    parse_iso_datetime(value).map(|dt| format_date(dt.date()))
}

fn parse_iso_datetime(value: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
}

// =============================================================================
// Combination & Picker
// =============================================================================

/// Combines a `DD.MM.YYYY` date and a `HH:MM` time into one timestamp.
///
/// Inputs normally went through `validate_date`/`validate_time` first;
/// anything malformed comes back as `None` rather than a panic.
pub fn parse_datetime(date_str: &str, time_str: &str) -> Option<NaiveDateTime> {
    let combined = format!("{} {}", date_str.trim(), time_str.trim());
    NaiveDateTime::parse_from_str(&combined, "%d.%m.%Y %H:%M").ok()
}

/// Dates for the inline day picker: `count` days starting today, each
/// rendered as `DD.MM.YYYY`.
pub fn next_days(count: usize) -> Vec<String> {
    next_days_from(Local::now().date_naive(), count)
}

/// Clock-free core of [`next_days`].
fn next_days_from(start: NaiveDate, count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format_date(start + Duration::days(i as i64)))
        .collect()
}
