//! Monday-aligned week ranges and week blocks

use crate::domain::date::{add_days, days_in_range, start_of_week_monday, to_iso, week_range_for};
use crate::domain::DayState;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// A Monday-to-Sunday span
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        WeekRange { start, end }
    }

    pub fn start_iso(&self) -> String {
        to_iso(self.start)
    }

    pub fn end_iso(&self) -> String {
        to_iso(self.end)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> Vec<NaiveDate> {
        days_in_range(self.start, self.end)
    }
}

/// One displayed week: its range, its days and the marker counts within it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBlock {
    pub range: WeekRange,
    pub days: Vec<NaiveDate>,
    pub marked: usize,
    pub unmarked: usize,
}

impl WeekBlock {
    fn collect(range: WeekRange, entries: &BTreeMap<NaiveDate, DayState>) -> Self {
        let days = range.days();
        let mut marked = 0;
        let mut unmarked = 0;

        for (_, state) in entries.range(range.start..=range.end) {
            match state {
                DayState::Marked => marked += 1,
                DayState::Unmarked => unmarked += 1,
                DayState::Empty => {}
            }
        }

        WeekBlock {
            range,
            days,
            marked,
            unmarked,
        }
    }
}

/// Build week blocks newest first, from the week containing `today` back to
/// the week containing `earliest`.
///
/// The current week is always present, even with no entries or when the
/// earliest entry lies in the future.
pub fn build_weeks(
    entries: &BTreeMap<NaiveDate, DayState>,
    earliest: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<WeekBlock> {
    let current_week_start = start_of_week_monday(today);
    let earliest_week_start = earliest
        .map(start_of_week_monday)
        .filter(|start| *start < current_week_start)
        .unwrap_or(current_week_start);

    let mut blocks = Vec::new();
    let mut cursor = current_week_start;

    while cursor >= earliest_week_start {
        blocks.push(WeekBlock::collect(week_range_for(cursor), entries));
        cursor = add_days(cursor, -7);
    }

    blocks
}
