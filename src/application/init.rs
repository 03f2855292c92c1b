//! Initialize tracker use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, TrackerRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new tracker at the specified path.
pub fn init(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;
    repo.save_config(&Config::default())?;

    info!("initialized tracker at {}", path.display());
    println!("Initialized daymark tracker at {}", path.display());

    Ok(())
}
