//! Day references accepted on the command line

use crate::domain::date::{add_days, from_iso};
use crate::error::{DaymarkError, Result};
use chrono::{Datelike, NaiveDate, Weekday};

/// A human reference to a calendar day, resolved against a base date
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Most recent occurrence of a weekday, today included
    Weekday(Weekday),
    /// Occurrence of a weekday strictly before today
    LastWeekday(Weekday),
    /// Explicit `YYYY-MM-DD` date
    Date(NaiveDate),
}

impl DayReference {
    /// Parse a day reference string
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "now" => return Ok(DayReference::Today),
            "yesterday" => return Ok(DayReference::Yesterday),
            "tomorrow" => return Ok(DayReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return parse_weekday(rest.trim())
                .map(DayReference::LastWeekday)
                .ok_or_else(|| DaymarkError::InvalidTimeReference(input.to_string()));
        }

        if let Some(weekday) = parse_weekday(&normalized) {
            return Ok(DayReference::Weekday(weekday));
        }

        from_iso(&normalized)
            .map(DayReference::Date)
            .map_err(|_| DaymarkError::InvalidTimeReference(input.to_string()))
    }

    /// Resolve this reference to a date relative to `base_date`
    pub fn resolve(&self, base_date: NaiveDate) -> NaiveDate {
        match self {
            DayReference::Today => base_date,
            DayReference::Yesterday => add_days(base_date, -1),
            DayReference::Tomorrow => add_days(base_date, 1),
            DayReference::Weekday(target) => {
                add_days(base_date, -(days_back(base_date.weekday(), *target) as i64))
            }
            DayReference::LastWeekday(target) => {
                let back = match days_back(base_date.weekday(), *target) {
                    0 => 7,
                    n => n,
                };
                add_days(base_date, -(back as i64))
            }
            DayReference::Date(date) => *date,
        }
    }
}

/// Days from the most recent `target` up to `current` (0 when equal)
fn days_back(current: Weekday, target: Weekday) -> u32 {
    (current.num_days_from_monday() + 7 - target.num_days_from_monday()) % 7
}

/// Parse a full, lowercase weekday name
fn parse_weekday(name: &str) -> Option<Weekday> {
    match name {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}
