//! Configuration management

use crate::error::{DaymarkError, Result};
use crate::infrastructure::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Language used for weekday labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Sv,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => f.write_str("en"),
            Language::Sv => f.write_str("sv"),
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "sv" | "swedish" | "svenska" => Ok(Language::Sv),
            _ => Err(format!(
                "Invalid language: '{}'. Valid languages are: en, sv",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
    #[serde(default)]
    pub language: Language,
    #[serde(default = "default_marked_symbol")]
    pub marked_symbol: String,
    #[serde(default = "default_unmarked_symbol")]
    pub unmarked_symbol: String,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

fn default_marked_symbol() -> String {
    "●".to_string()
}

fn default_unmarked_symbol() -> String {
    "✕".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            storage_key: default_storage_key(),
            language: Language::default(),
            marked_symbol: default_marked_symbol(),
            unmarked_symbol: default_unmarked_symbol(),
        }
    }
}

impl Config {
    /// Load config from .daymark/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".daymark").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DaymarkError::NotDaymarkDirectory(path.to_path_buf())
            } else {
                DaymarkError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DaymarkError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .daymark/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let daymark_dir = path.join(".daymark");

        if !daymark_dir.exists() {
            fs::create_dir(&daymark_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(daymark_dir.join("config.toml"), contents)?;

        Ok(())
    }
}
