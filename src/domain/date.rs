//! Calendar date helpers
//!
//! All dates are local calendar days (`NaiveDate`); ISO strings
//! (`YYYY-MM-DD`) are only the textual boundary.

use crate::domain::WeekRange;
use crate::error::{DaymarkError, Result};
use chrono::{Datelike, Duration, Local, NaiveDate};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`
pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Parse a strict `YYYY-MM-DD` string into a calendar date
pub fn from_iso(iso: &str) -> Result<NaiveDate> {
    let bytes = iso.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(DaymarkError::InvalidDateFormat(iso.to_string()));
    }

    NaiveDate::parse_from_str(iso, ISO_FORMAT)
        .map_err(|_| DaymarkError::InvalidDateFormat(iso.to_string()))
}

/// Current local calendar date
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Monday of the week containing `date`
pub fn start_of_week_monday(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date + Duration::days(days)
}

/// Monday-to-Sunday span containing `date`
pub fn week_range_for(date: NaiveDate) -> WeekRange {
    let start = start_of_week_monday(date);
    WeekRange::new(start, add_days(start, 6))
}

/// Every day from `start` to `end` inclusive; empty when `start > end`
pub fn days_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|d| *d <= end).collect()
}

/// Every ISO date from `start_iso` to `end_iso` inclusive, ascending.
///
/// Both bounds must be well-formed ISO dates. An inverted range yields an
/// empty list.
pub fn list_days(start_iso: &str, end_iso: &str) -> Result<Vec<String>> {
    let start = from_iso(start_iso)?;
    let end = from_iso(end_iso)?;

    Ok(days_in_range(start, end).into_iter().map(to_iso).collect())
}
