mod analytics;
mod records;

use std::sync::Arc;

use crate::app::AppConfig;
use crate::error::Result;
use water_db::Db;

pub use analytics::AnalyticsService;
pub use records::RecordsService;

type SharedConfig = Arc<AppConfig>;

/// Service registry for app-level operations.
#[derive(Clone)]
pub struct AppServices {
    pub records: RecordsService,
    pub analytics: AnalyticsService,
}

impl AppServices {
    pub fn new(config: &AppConfig) -> Self {
        let shared = Arc::new(config.clone());
        Self {
            records: RecordsService::new(shared.clone()),
            analytics: AnalyticsService::new(shared),
        }
    }
}

fn open_db(config: &SharedConfig) -> Result<Db> {
    Ok(Db::open(&config.db_path)?)
}
