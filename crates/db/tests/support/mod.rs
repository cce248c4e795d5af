#![allow(dead_code)]

use std::path::PathBuf;

use chrono::NaiveDate;
use tempfile::TempDir;
use water_core::{Category, WaterRecord};
use water_db::Db;

pub struct TestDb {
    pub _dir: TempDir,
    pub db: Db,
    pub path: PathBuf,
}

pub fn setup_db() -> TestDb {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("test.sqlite");
    let mut db = Db::open(&path).expect("open db");
    db.migrate().expect("migrate db");
    TestDb {
        _dir: dir,
        db,
        path,
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

pub fn make_record(id: &str, amount: f64, category: Category, usage_date: NaiveDate) -> WaterRecord {
    make_record_at(id, amount, category, usage_date, "2025-03-19T10:00:00.000Z")
}

pub fn make_record_at(
    id: &str,
    amount: f64,
    category: Category,
    usage_date: NaiveDate,
    created_at: &str,
) -> WaterRecord {
    WaterRecord {
        id: id.to_string(),
        amount,
        category,
        usage_date,
        notes: None,
        created_at: created_at.to_string(),
        updated_at: created_at.to_string(),
    }
}

pub fn insert_records(db: &Db, records: Vec<WaterRecord>) {
    for record in records {
        db.insert_record(&record).expect("insert record");
    }
}
