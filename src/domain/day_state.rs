//! Tri-state day marker

use crate::error::DaymarkError;
use std::fmt;
use std::str::FromStr;

/// State of a single calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DayState {
    /// No record for the day
    #[default]
    Empty,
    /// The day is flagged as "occurred"
    Marked,
    /// The day is flagged as "explicitly did not occur"
    Unmarked,
}

impl DayState {
    /// Next state in the cycle `Empty -> Marked -> Unmarked -> Empty`
    pub fn next(self) -> Self {
        match self {
            DayState::Empty => DayState::Marked,
            DayState::Marked => DayState::Unmarked,
            DayState::Unmarked => DayState::Empty,
        }
    }

    /// Single-letter code used in the persisted document
    pub fn code(self) -> char {
        match self {
            DayState::Empty => 'E',
            DayState::Marked => 'P',
            DayState::Unmarked => 'N',
        }
    }

    pub fn is_empty(self) -> bool {
        self == DayState::Empty
    }

    /// Parse a persisted value; only `P` and `N` are ever stored.
    pub fn from_persisted(value: &str) -> Option<Self> {
        match value {
            "P" => Some(DayState::Marked),
            "N" => Some(DayState::Unmarked),
            _ => None,
        }
    }
}

impl fmt::Display for DayState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DayState::Empty => "empty",
            DayState::Marked => "marked",
            DayState::Unmarked => "unmarked",
        };
        f.write_str(name)
    }
}

impl FromStr for DayState {
    type Err = DaymarkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "empty" | "e" | "none" | "clear" => Ok(DayState::Empty),
            "marked" | "p" | "yes" => Ok(DayState::Marked),
            "unmarked" | "n" | "no" => Ok(DayState::Unmarked),
            _ => Err(DaymarkError::InvalidDayState(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        assert_eq!(DayState::Empty.next(), DayState::Marked);
        assert_eq!(DayState::Marked.next(), DayState::Unmarked);
        assert_eq!(DayState::Unmarked.next(), DayState::Empty);
    }

    #[test]
    fn test_cycle_returns_after_three_steps() {
        for start in [DayState::Empty, DayState::Marked, DayState::Unmarked] {
            assert_eq!(start.next().next().next(), start);
        }
    }

    #[test]
    fn test_codes() {
        assert_eq!(DayState::Empty.code(), 'E');
        assert_eq!(DayState::Marked.code(), 'P');
        assert_eq!(DayState::Unmarked.code(), 'N');
    }

    #[test]
    fn test_from_persisted_only_accepts_stored_codes() {
        assert_eq!(DayState::from_persisted("P"), Some(DayState::Marked));
        assert_eq!(DayState::from_persisted("N"), Some(DayState::Unmarked));
        assert_eq!(DayState::from_persisted("E"), None);
        assert_eq!(DayState::from_persisted("p"), None);
        assert_eq!(DayState::from_persisted(""), None);
    }

    #[test]
    fn test_from_str_names_and_codes() {
        assert_eq!("marked".parse::<DayState>().unwrap(), DayState::Marked);
        assert_eq!("P".parse::<DayState>().unwrap(), DayState::Marked);
        assert_eq!("Unmarked".parse::<DayState>().unwrap(), DayState::Unmarked);
        assert_eq!("n".parse::<DayState>().unwrap(), DayState::Unmarked);
        assert_eq!("EMPTY".parse::<DayState>().unwrap(), DayState::Empty);
        assert!(matches!(
            "maybe".parse::<DayState>(),
            Err(DaymarkError::InvalidDayState(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(DayState::Marked.to_string(), "marked");
        assert_eq!(DayState::Empty.to_string(), "empty");
    }
}
