//! Date Parsing and Formatting
//!
//! Row dates stay as raw text; they are only parsed when displayed,
//! compared by a filter, or sorted.

use std::fmt::Write;

use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Text shown for dates that cannot be parsed
pub const INVALID_DATE: &str = "Invalid Date";

/// Default calendar date pattern (US short date, e.g. `3/1/2024`)
pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Parse ISO-style date text to its calendar day
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and naive
/// `YYYY-MM-DDTHH:MM[:SS[.f]]` timestamps.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

/// Whether chrono understands every specifier in `pattern`
pub fn is_valid_pattern(pattern: &str) -> bool {
    !StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error))
}

/// Format date text for display, falling back to [`INVALID_DATE`]
pub fn format_date(text: &str, pattern: &str) -> String {
    let Some(date) = parse_date(text) else {
        return INVALID_DATE.to_string();
    };
    let mut out = String::new();
    match write!(out, "{}", date.format(pattern)) {
        Ok(()) => out,
        Err(_) => {
            log::warn!("[DATES] unusable date pattern {:?}", pattern);
            INVALID_DATE.to_string()
        }
    }
}

/// Calendar-day equality after formatting both sides
pub fn same_day(row_value: &str, criterion: &str, pattern: &str) -> bool {
    format_date(row_value, pattern) == format_date(criterion, pattern)
}
