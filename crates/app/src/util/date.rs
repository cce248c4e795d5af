use chrono::NaiveDate;

use crate::error::{AppError, Result};

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|err| AppError::InvalidInput(format!("invalid date {}: {}", value, err)))
}

pub fn parse_date_opt(value: Option<&str>) -> Result<Option<NaiveDate>> {
    value.map(parse_date).transpose()
}
