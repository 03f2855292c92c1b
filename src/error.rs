//! Error types for daymark

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for daymark
#[derive(Debug, Error)]
pub enum DaymarkError {
    #[error("Not a daymark directory: {0}")]
    NotDaymarkDirectory(PathBuf),

    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid time reference: {0}")]
    InvalidTimeReference(String),

    #[error("Invalid day state: {0}")]
    InvalidDayState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DaymarkError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DaymarkError::NotDaymarkDirectory(_) => 2,
            DaymarkError::InvalidDateFormat(_) | DaymarkError::InvalidTimeReference(_) => 3,
            DaymarkError::InvalidDayState(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DaymarkError::NotDaymarkDirectory(path) => {
                format!(
                    "Not a daymark directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'daymark init' in this directory to start tracking\n\
                    • Navigate to an existing daymark directory\n\
                    • Set DAYMARK_ROOT environment variable to your tracker path",
                    path.display()
                )
            }
            DaymarkError::InvalidDateFormat(input) => {
                format!(
                    "Invalid date format: '{}'\n\n\
                    Expected format: YYYY-MM-DD\n\
                    Example: daymark days 2025-01-13 2025-01-19",
                    input
                )
            }
            DaymarkError::InvalidTimeReference(input) => {
                format!(
                    "Invalid day: '{}'\n\n\
                    Valid days:\n\
                    • today, yesterday, tomorrow\n\
                    • monday, tuesday, ..., sunday (most recent)\n\
                    • last monday, last friday, etc.\n\
                    • Specific dates: YYYY-MM-DD (e.g., 2025-01-17)\n\n\
                    Examples:\n\
                    daymark toggle\n\
                    daymark toggle yesterday\n\
                    daymark set 2025-01-15 marked",
                    input
                )
            }
            DaymarkError::InvalidDayState(input) => {
                format!(
                    "Invalid day state: '{}'\n\n\
                    Valid states: marked (P), unmarked (N), empty (E)\n\
                    Example: daymark set today unmarked",
                    input
                )
            }
            DaymarkError::Config(msg) => {
                if msg.contains("Invalid language") {
                    format!(
                        "{}\n\n\
                        Valid languages: en, sv\n\
                        Example: daymark config language sv",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DaymarkError
pub type Result<T> = std::result::Result<T, DaymarkError>;
