//! Output formatting utilities

use crate::domain::date::to_iso;
use crate::domain::{DayState, WeekBlock, WeekRange};
use crate::infrastructure::{Config, Language};
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

const EMPTY_SYMBOL: &str = "·";

/// Short weekday name, capitalized
pub fn weekday_label(date: NaiveDate, language: Language) -> &'static str {
    match (language, date.weekday()) {
        (Language::En, Weekday::Mon) => "Mon",
        (Language::En, Weekday::Tue) => "Tue",
        (Language::En, Weekday::Wed) => "Wed",
        (Language::En, Weekday::Thu) => "Thu",
        (Language::En, Weekday::Fri) => "Fri",
        (Language::En, Weekday::Sat) => "Sat",
        (Language::En, Weekday::Sun) => "Sun",
        (Language::Sv, Weekday::Mon) => "Mån",
        (Language::Sv, Weekday::Tue) => "Tis",
        (Language::Sv, Weekday::Wed) => "Ons",
        (Language::Sv, Weekday::Thu) => "Tors",
        (Language::Sv, Weekday::Fri) => "Fre",
        (Language::Sv, Weekday::Sat) => "Lör",
        (Language::Sv, Weekday::Sun) => "Sön",
    }
}

/// Day and month as `DD/MM`
pub fn format_day_month(date: NaiveDate) -> String {
    date.format("%d/%m").to_string()
}

/// Week range as `DD/MM – DD/MM`
pub fn format_week_range(range: &WeekRange) -> String {
    format!(
        "{} – {}",
        format_day_month(range.start),
        format_day_month(range.end)
    )
}

/// Symbol configured for a state
pub fn state_symbol(state: DayState, config: &Config) -> &str {
    match state {
        DayState::Empty => EMPTY_SYMBOL,
        DayState::Marked => &config.marked_symbol,
        DayState::Unmarked => &config.unmarked_symbol,
    }
}

/// One-line description of a single day
pub fn format_day(date: NaiveDate, state: DayState, config: &Config) -> String {
    format!(
        "{} {}  {} {}",
        weekday_label(date, config.language),
        to_iso(date),
        state_symbol(state, config),
        state
    )
}

/// Week blocks with one line per day, newest week first
pub fn format_weeks(
    weeks: &[WeekBlock],
    entries: &BTreeMap<NaiveDate, DayState>,
    today: NaiveDate,
    config: &Config,
) -> String {
    let mut output = String::new();

    for (i, week) in weeks.iter().enumerate() {
        if i > 0 {
            output.push('\n');
        }
        output.push_str(&format!(
            "{}   {} {}  {} {}\n",
            format_week_range(&week.range),
            config.marked_symbol,
            week.marked,
            config.unmarked_symbol,
            week.unmarked
        ));

        for day in &week.days {
            let state = entries.get(day).copied().unwrap_or_default();
            let marker = if *day == today { "  <" } else { "" };
            output.push_str(&format!(
                "  {:<4} {}  {}{}\n",
                weekday_label(*day, config.language),
                format_day_month(*day),
                state_symbol(state, config),
                marker
            ));
        }
    }

    output
}

/// Recorded entries, one per line
pub fn format_entries(entries: &BTreeMap<NaiveDate, DayState>) -> String {
    if entries.is_empty() {
        return "No entries recorded".to_string();
    }

    let mut output = String::new();
    for (date, state) in entries {
        output.push_str(&format!("{}  {}\n", to_iso(*date), state.code()));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build_weeks;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekday_labels() {
        // Monday, Jan 13, 2025
        let monday = date(2025, 1, 13);
        assert_eq!(weekday_label(monday, Language::En), "Mon");
        assert_eq!(weekday_label(monday, Language::Sv), "Mån");
        assert_eq!(weekday_label(date(2025, 1, 16), Language::Sv), "Tors");
    }

    #[test]
    fn test_format_week_range() {
        let range = WeekRange::new(date(2024, 12, 30), date(2025, 1, 5));
        assert_eq!(format_week_range(&range), "30/12 – 05/01");
    }

    #[test]
    fn test_format_day() {
        let config = Config::default();
        assert_eq!(
            format_day(date(2025, 1, 17), DayState::Marked, &config),
            "Fri 2025-01-17  ● marked"
        );
        assert_eq!(
            format_day(date(2025, 1, 17), DayState::Empty, &config),
            "Fri 2025-01-17  · empty"
        );
    }

    #[test]
    fn test_format_weeks() {
        let config = Config::default();
        let today = date(2025, 1, 17);
        let mut entries = BTreeMap::new();
        entries.insert(date(2025, 1, 14), DayState::Marked);
        entries.insert(date(2025, 1, 15), DayState::Unmarked);

        let weeks = build_weeks(&entries, Some(date(2025, 1, 14)), today);
        let output = format_weeks(&weeks, &entries, today, &config);

        assert!(output.starts_with("13/01 – 19/01   ● 1  ✕ 1\n"));
        assert!(output.contains("  Tue  14/01  ●\n"));
        assert!(output.contains("  Wed  15/01  ✕\n"));
        assert!(output.contains("  Fri  17/01  ·  <\n"));
        assert_eq!(output.lines().count(), 8);
    }

    #[test]
    fn test_format_weeks_separates_blocks() {
        let config = Config::default();
        let today = date(2025, 1, 17);
        let mut entries = BTreeMap::new();
        entries.insert(date(2025, 1, 6), DayState::Marked);

        let weeks = build_weeks(&entries, Some(date(2025, 1, 6)), today);
        let output = format_weeks(&weeks, &entries, today, &config);

        assert!(output.contains("\n\n06/01 – 12/01   ● 1  ✕ 0\n"));
    }

    #[test]
    fn test_format_empty_entries() {
        assert_eq!(format_entries(&BTreeMap::new()), "No entries recorded");
    }

    #[test]
    fn test_format_entries() {
        let mut entries = BTreeMap::new();
        entries.insert(date(2025, 1, 17), DayState::Marked);
        entries.insert(date(2024, 3, 1), DayState::Unmarked);

        assert_eq!(
            format_entries(&entries),
            "2024-03-01  N\n2025-01-17  P\n"
        );
    }
}
