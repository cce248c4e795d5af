use serde::Serialize;
use water_core::WaterRecord;

#[derive(Serialize)]
pub struct RecordsResponse {
    pub records: Vec<WaterRecord>,
    pub total: i64,
}

#[derive(Serialize)]
pub struct DeletedResponse {
    pub deleted: i64,
}
