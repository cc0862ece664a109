//! Post date parsing and display formatting.
//!
//! Manifest dates are ISO 8601: a bare `YYYY-MM-DD`, a naive
//! `YYYY-MM-DDTHH:MM[:SS]`, or a full RFC 3339 timestamp. Display uses the
//! en-US long style (`January 5, 2024`) on the calendar date as written.

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

/// Rendered for dates that do not parse.
pub const INVALID_DATE: &str = "Invalid Date";

/// Format an ISO date string for display, e.g. `"January 5, 2024"`.
pub fn format_date(raw: &str) -> String {
    let display = format_description!("[month repr:long] [day padding:none], [year padding:none]");
    parse_iso(raw)
        .and_then(|dt| dt.date().format(display).ok())
        .unwrap_or_else(|| INVALID_DATE.to_owned())
}

/// Ordering key for a manifest date. Naive values are taken as UTC.
pub fn date_sort_key(raw: &str) -> Option<OffsetDateTime> {
    parse_iso(raw)
}

fn parse_iso(raw: &str) -> Option<OffsetDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
        return Some(dt);
    }
    if let Ok(dt) =
        PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
    {
        return Some(dt.assume_utc());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")) {
        return Some(dt.assume_utc());
    }
    if let Ok(dt) = PrimitiveDateTime::parse(raw, format_description!("[year]-[month]-[day]T[hour]:[minute]")) {
        return Some(dt.assume_utc());
    }
    Date::parse(raw, format_description!("[year]-[month]-[day]"))
        .ok()
        .map(|d| d.midnight().assume_utc())
}
