use chrono::{Local, NaiveDate, SecondsFormat, Utc};
use rand::RngCore;

use crate::error::{AppError, Result};
use crate::services::{SharedConfig, open_db};
use water_core::{Category, NewRecord, WaterRecord};

#[derive(Clone)]
pub struct RecordsService {
    config: SharedConfig,
}

impl RecordsService {
    pub(super) fn new(config: SharedConfig) -> Self {
        Self { config }
    }

    fn db(&self) -> Result<water_db::Db> {
        open_db(&self.config)
    }

    /// Create-boundary validation lives here; the aggregator downstream is
    /// total over whatever it is handed and never re-checks amounts.
    pub fn add(&self, new_record: NewRecord) -> Result<WaterRecord> {
        if !new_record.amount.is_finite() {
            return Err(AppError::InvalidInput(
                "amount must be a finite number".to_string(),
            ));
        }
        if new_record.amount < 0.0 {
            return Err(AppError::InvalidInput(
                "amount must not be negative".to_string(),
            ));
        }
        let today = Local::now().date_naive();
        if new_record.usage_date > today {
            return Err(AppError::InvalidInput(
                "usage date must not be in the future".to_string(),
            ));
        }

        let now = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        let record = WaterRecord {
            id: generate_record_id(),
            amount: new_record.amount,
            category: new_record.category,
            usage_date: new_record.usage_date,
            notes: new_record.notes,
            created_at: now.clone(),
            updated_at: now,
        };
        self.db()?.insert_record(&record)?;
        Ok(record)
    }

    pub fn delete(&self, id: &str) -> Result<i64> {
        let deleted = self.db()?.delete_record(id)?;
        if deleted == 0 {
            return Err(AppError::NotFound(format!("record not found: {}", id)));
        }
        Ok(deleted as i64)
    }

    pub fn list(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category: Option<Category>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<WaterRecord>> {
        Ok(self.db()?.list_records(start, end, category, limit, offset)?)
    }

    pub fn count(&self) -> Result<i64> {
        Ok(self.db()?.count_records()?)
    }
}

fn generate_record_id() -> String {
    let mut bytes = [0u8; 16];
    rand::rngs::OsRng.fill_bytes(&mut bytes);
    bytes.iter().map(|byte| format!("{:02x}", byte)).collect()
}
