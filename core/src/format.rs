//! Timestamp rendering for item listings.
//!
//! The year is elided for timestamps in the current year. The clock read is
//! kept at the edge so the actual formatting stays deterministic.

use chrono::{Datelike, Local, NaiveDateTime};

/// Render `ts` as `DD/MM HH:MM` when it falls in the current local year,
/// else `DD/MM/YYYY HH:MM`.
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    format_timestamp_in(ts, Local::now().year())
}

/// Deterministic core of [`format_timestamp`].
pub fn format_timestamp_in(ts: NaiveDateTime, current_year: i32) -> String {
    if ts.year() == current_year {
        ts.format("%d/%m %H:%M").to_string()
    } else {
        ts.format("%d/%m/%Y %H:%M").to_string()
    }
}
