use chrono::NaiveDate;
use rusqlite::Row;
use rusqlite::types::Type;
use water_core::{Category, WaterRecord};

// Column order matches the SELECT lists in records.rs.
pub(crate) fn row_to_record(row: &Row<'_>) -> std::result::Result<WaterRecord, rusqlite::Error> {
    let category_text: String = row.get(2)?;
    let category = Category::parse(&category_text).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unknown category: {}", category_text).into(),
        )
    })?;
    let date_text: String = row.get(3)?;
    let usage_date = NaiveDate::parse_from_str(&date_text, "%Y-%m-%d")
        .map_err(|err| rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(err)))?;
    Ok(WaterRecord {
        id: row.get(0)?,
        amount: row.get(1)?,
        category,
        usage_date,
        notes: row.get(4)?,
        created_at: row.get(5)?,
        updated_at: row.get(6)?,
    })
}
