//! Tracker directory discovery and layout

use crate::error::{DaymarkError, Result};
use crate::infrastructure::kv::FileBackend;
use crate::infrastructure::store::EntryStore;
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Abstract repository for tracker operations
pub trait TrackerRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .daymark/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .daymark/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .daymark directory exists
    fn is_initialized(&self) -> bool;

    /// Create .daymark directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of TrackerRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover the tracker root.
    /// Checks DAYMARK_ROOT first, then walks up from the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("DAYMARK_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_daymark_dir(&path) {
                return Ok(FileSystemRepository::new(path));
            }
            return Err(DaymarkError::Config(format!(
                "DAYMARK_ROOT is set to '{}' but no .daymark directory found. \
                Run 'daymark init' in that directory or unset DAYMARK_ROOT.",
                path.display()
            )));
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Walk up from `start` until a directory containing .daymark is found
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| Self::has_daymark_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DaymarkError::NotDaymarkDirectory(start.to_path_buf()))
    }

    fn has_daymark_dir(path: &Path) -> bool {
        path.join(".daymark").is_dir()
    }

    /// Directory holding persisted documents
    pub fn data_dir(&self) -> PathBuf {
        self.root.join(".daymark").join("data")
    }

    /// Entry store backed by this tracker's data directory
    pub fn open_store(&self, config: &Config) -> EntryStore<FileBackend> {
        EntryStore::with_key(FileBackend::new(self.data_dir()), config.storage_key.clone())
    }
}

impl TrackerRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        Self::has_daymark_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        if self.is_initialized() {
            return Err(DaymarkError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(self.data_dir())?;
        Ok(())
    }
}
