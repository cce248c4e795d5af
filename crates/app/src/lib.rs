pub mod app;
pub mod error;
pub mod services;
pub mod startup;
pub mod util;

pub use app::{AppConfig, AppState, setup_db};
pub use error::{ApiError, AppError, Result};
pub use services::{AnalyticsService, AppServices, RecordsService};
pub use startup::{AppPaths, ensure_app_data_dir};
pub use util::date::{parse_date, parse_date_opt};
