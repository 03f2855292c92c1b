//! Week overview and entry listing use cases

use crate::domain::{build_weeks, DayState, WeekBlock};
use crate::error::Result;
use crate::infrastructure::{FileSystemRepository, TrackerRepository};
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Service for read-only views over recorded days
pub struct OverviewService {
    repository: FileSystemRepository,
}

impl OverviewService {
    pub fn new(repository: FileSystemRepository) -> Self {
        OverviewService { repository }
    }

    /// Week blocks from the current week back to the earliest entry,
    /// newest first, optionally truncated to `limit` weeks
    pub fn weeks(&self, today: NaiveDate, limit: Option<usize>) -> Result<Vec<WeekBlock>> {
        let config = self.repository.load_config()?;
        let entries = self.repository.open_store(&config).all_entries();
        let earliest = entries.keys().next().copied();

        let mut weeks = build_weeks(&entries, earliest, today);
        if let Some(n) = limit {
            weeks.truncate(n);
        }
        Ok(weeks)
    }

    /// Recorded entries within an optional inclusive date range
    pub fn entries(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<BTreeMap<NaiveDate, DayState>> {
        let config = self.repository.load_config()?;
        let mut entries = self.repository.open_store(&config).all_entries();

        if let Some(from_date) = from {
            entries.retain(|d, _| *d >= from_date);
        }
        if let Some(to_date) = to {
            entries.retain(|d, _| *d <= to_date);
        }

        Ok(entries)
    }

    pub fn earliest(&self) -> Result<Option<NaiveDate>> {
        let config = self.repository.load_config()?;
        Ok(self.repository.open_store(&config).earliest_date())
    }
}
