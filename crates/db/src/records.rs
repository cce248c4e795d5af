use chrono::NaiveDate;
use rusqlite::types::Value;
use rusqlite::{OptionalExtension, params, params_from_iter};
use water_core::{Category, WaterRecord};

use crate::Db;
use crate::error::Result;
use crate::helpers::row_to_record;

impl Db {
    pub fn insert_record(&self, record: &WaterRecord) -> Result<()> {
        self.conn.execute(
            r#"
            INSERT INTO water_usage (id, amount, category, usage_date, notes, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
            "#,
            params![
                record.id,
                record.amount,
                record.category.as_str(),
                record.usage_date.to_string(),
                record.notes,
                record.created_at,
                record.updated_at,
            ],
        )?;
        Ok(())
    }

    pub fn get_record(&self, id: &str) -> Result<Option<WaterRecord>> {
        self.conn
            .query_row(
                r#"
                SELECT id, amount, category, usage_date, notes, created_at, updated_at
                FROM water_usage
                WHERE id = ?1
                "#,
                params![id],
                row_to_record,
            )
            .optional()
            .map_err(crate::error::DbError::from)
    }

    /// Deletes by id and reports how many rows went away (0 or 1).
    pub fn delete_record(&self, id: &str) -> Result<usize> {
        let deleted = self
            .conn
            .execute("DELETE FROM water_usage WHERE id = ?1", params![id])?;
        Ok(deleted)
    }

    /// All records, newest usage date first. This ordering fixes the
    /// first-encountered tie-breaks in the summary computation.
    pub fn list_records_all(&self) -> Result<Vec<WaterRecord>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, amount, category, usage_date, notes, created_at, updated_at
            FROM water_usage
            ORDER BY usage_date DESC, created_at DESC
            "#,
        )?;
        let rows = stmt.query_map([], row_to_record)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn list_records(
        &self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        category: Option<Category>,
        limit: u32,
        offset: u32,
    ) -> Result<Vec<WaterRecord>> {
        let mut sql = String::from(
            r#"
            SELECT id, amount, category, usage_date, notes, created_at, updated_at
            FROM water_usage
            "#,
        );
        let mut clauses: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();
        if let Some(start) = start {
            clauses.push("usage_date >= ?");
            values.push(Value::Text(start.to_string()));
        }
        if let Some(end) = end {
            clauses.push("usage_date <= ?");
            values.push(Value::Text(end.to_string()));
        }
        if let Some(category) = category {
            clauses.push("category = ?");
            values.push(Value::Text(category.as_str().to_string()));
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY usage_date DESC, created_at DESC LIMIT ? OFFSET ?");
        values.push(Value::Integer(limit as i64));
        values.push(Value::Integer(offset as i64));

        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params_from_iter(values), row_to_record)?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }

    pub fn count_records(&self) -> Result<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM water_usage", [], |row| row.get(0))
            .map_err(crate::error::DbError::from)
    }
}
