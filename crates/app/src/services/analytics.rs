use chrono::Local;

use crate::error::Result;
use crate::services::{SharedConfig, open_db};
use water_core::{UsageSummary, calculate_summary};

#[derive(Clone)]
pub struct AnalyticsService {
    config: SharedConfig,
}

impl AnalyticsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    /// The summary is rebuilt from scratch on every call. Records are fed
    /// in descending usage-date order, which fixes the first-encountered
    /// tie-breaks; only this seam reads the clock, the computation itself
    /// takes the reference date as input.
    pub fn summary(&self) -> Result<UsageSummary> {
        let db = open_db(&self.config)?;
        let records = db.list_records_all()?;
        Ok(calculate_summary(&records, Local::now().date_naive()))
    }
}
