//! Read and change the state of a single day

use crate::domain::{DayReference, DayState};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use log::debug;

/// Service for reading and marking days
pub struct MarkDayService {
    repository: FileSystemRepository,
}

impl MarkDayService {
    pub fn new(repository: FileSystemRepository) -> Self {
        MarkDayService { repository }
    }

    fn resolve(day_ref: &str, today: NaiveDate) -> Result<NaiveDate> {
        Ok(DayReference::parse(day_ref)?.resolve(today))
    }

    /// Current state of the referenced day
    pub fn get(&self, day_ref: &str, today: NaiveDate) -> Result<(NaiveDate, DayState)> {
        let date = Self::resolve(day_ref, today)?;
        let config = self.repository.load_config()?;
        let state = self.repository.open_store(&config).state(date);
        Ok((date, state))
    }

    /// Advance the referenced day through the cycle
    pub fn toggle(&self, day_ref: &str, today: NaiveDate) -> Result<(NaiveDate, DayState)> {
        let date = Self::resolve(day_ref, today)?;
        let config = self.repository.load_config()?;
        let state = self.repository.open_store(&config).toggle_state(date)?;
        debug!("toggled {} to {}", date, state);
        Ok((date, state))
    }

    /// Record an explicit state for the referenced day
    pub fn set(&self, day_ref: &str, state: DayState, today: NaiveDate) -> Result<NaiveDate> {
        let date = Self::resolve(day_ref, today)?;
        let config = self.repository.load_config()?;
        self.repository.open_store(&config).set_state(date, state)?;
        debug!("set {} to {}", date, state);
        Ok(date)
    }
}
