//! Config management use case

use crate::error::{DaymarkError, Result};
use crate::infrastructure::{Config, FileSystemRepository, Language, TrackerRepository};
use std::str::FromStr;

const VALID_KEYS: &str = "storage_key, language, marked_symbol, unmarked_symbol";

/// Service for managing tracker configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "storage_key" => Ok(config.storage_key),
            "language" => Ok(config.language.to_string()),
            "marked_symbol" => Ok(config.marked_symbol),
            "unmarked_symbol" => Ok(config.unmarked_symbol),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "storage_key" => {
                if value.trim().is_empty() {
                    return Err(DaymarkError::Config(
                        "storage_key cannot be empty".to_string(),
                    ));
                }
                config.storage_key = value.to_string();
            }
            "language" => {
                config.language = Language::from_str(value).map_err(DaymarkError::Config)?;
            }
            "marked_symbol" => config.marked_symbol = value.to_string(),
            "unmarked_symbol" => config.unmarked_symbol = value.to_string(),
            _ => return Err(unknown_key(key)),
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}

fn unknown_key(key: &str) -> DaymarkError {
    DaymarkError::Config(format!(
        "Unknown config key: '{}'. Valid keys are: {}",
        key, VALID_KEYS
    ))
}
