//! Date parsing, ordering and display for frontmatter dates.
//!
//! Frontmatter dates are free-form strings. Anything that does not parse is
//! treated as "no date": such pages sort after every dated page.

use crate::models::Page;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;
use std::fmt::Write;

/// Format used by [`display_date`] ("March 1, 2019")
pub const DISPLAY_FORMAT: &str = "%B %-d, %Y";

const DATETIME_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"];

/// Parse a frontmatter date
///
/// Accepts RFC 3339 (normalized to UTC), `YYYY-MM-DD HH:MM[:SS]`,
/// `YYYY-MM-DDTHH:MM:SS` and plain `YYYY-MM-DD` (midnight).
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Parsed date of a page, if it has a valid one
pub fn page_date(page: &Page) -> Option<NaiveDateTime> {
    page.iso_date.as_deref().and_then(parse_date)
}

/// Newest first; undated pages after dated ones, equal otherwise
pub fn compare_dates_desc(a: Option<NaiveDateTime>, b: Option<NaiveDateTime>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Format a raw date with a strftime pattern
///
/// Returns `None` when the date does not parse, the pattern is invalid, or
/// the pattern asks for a field a naive date cannot supply (`%z`, `%Z`).
pub fn format_date(raw: &str, pattern: &str) -> Option<String> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return None;
    }
    let date = parse_date(raw)?;
    let mut out = String::new();
    write!(out, "{}", date.format_with_items(StrftimeItems::new(pattern))).ok()?;
    Some(out)
}

/// Human-readable date of a page ("March 1, 2019")
pub fn display_date(page: &Page) -> Option<String> {
    page.iso_date
        .as_deref()
        .and_then(|raw| format_date(raw, DISPLAY_FORMAT))
}
