use serde::Deserialize;

#[derive(Debug, Deserialize, Default)]
pub struct EmptyRequest {}

#[derive(Debug, Deserialize, Default)]
pub struct RecordsRequest {
    pub start: Option<String>,
    pub end: Option<String>,
    pub category: Option<String>,
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct RecordCreateRequest {
    pub amount: f64,
    pub category: String,
    pub usage_date: String,
    pub notes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct RecordDeleteRequest {
    pub id: String,
}
