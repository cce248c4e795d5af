mod support;

use support::{date, make_record, setup_db};
use water_core::Category;
use water_db::Db;

#[test]
fn migrate_is_idempotent_across_reopens() {
    let test_db = setup_db();
    drop(test_db.db);

    let mut db = Db::open(&test_db.path).expect("reopen");
    db.migrate().expect("second migrate");

    let mut record = make_record("r1", 3.0, Category::Drinking, date(2025, 3, 18));
    record.notes = Some("after remigration".to_string());
    db.insert_record(&record).expect("insert");
    let loaded = db.get_record("r1").expect("get").expect("found");
    assert_eq!(loaded.notes.as_deref(), Some("after remigration"));
}

#[test]
fn fresh_database_accepts_records_with_and_without_notes() {
    let test_db = setup_db();
    let db = &test_db.db;

    let with_notes = {
        let mut record = make_record("with", 1.0, Category::Shower, date(2025, 3, 18));
        record.notes = Some("quick rinse".to_string());
        record
    };
    let without_notes = make_record("without", 2.0, Category::Shower, date(2025, 3, 18));

    db.insert_record(&with_notes).expect("insert with notes");
    db.insert_record(&without_notes).expect("insert without");

    assert_eq!(
        db.get_record("with")
            .expect("get")
            .expect("found")
            .notes
            .as_deref(),
        Some("quick rinse")
    );
    assert_eq!(
        db.get_record("without").expect("get").expect("found").notes,
        None
    );
}
