use water_app::{AppError, Result, parse_date_opt};
use water_core::{Category, NewRecord, UsageSummary, WaterRecord};

use crate::{
    AppContext, DeletedResponse, EmptyRequest, RecordCreateRequest, RecordDeleteRequest,
    RecordsRequest, RecordsResponse,
};

fn parse_category(value: &str) -> Result<Category> {
    Category::parse(value)
        .ok_or_else(|| AppError::InvalidInput(format!("unsupported category {}", value)))
}

pub fn summary(ctx: &AppContext, _req: EmptyRequest) -> Result<UsageSummary> {
    ctx.app_state.services.analytics.summary()
}

pub fn records_list(ctx: &AppContext, req: RecordsRequest) -> Result<RecordsResponse> {
    let start = parse_date_opt(req.start.as_deref())?;
    let end = parse_date_opt(req.end.as_deref())?;
    let category = req
        .category
        .as_deref()
        .map(parse_category)
        .transpose()?;
    let limit = req.limit.unwrap_or(200).min(1000);
    let offset = req.offset.unwrap_or(0);
    let records = ctx
        .app_state
        .services
        .records
        .list(start, end, category, limit, offset)?;
    let total = ctx.app_state.services.records.count()?;
    Ok(RecordsResponse { records, total })
}

pub fn records_create(ctx: &AppContext, req: RecordCreateRequest) -> Result<WaterRecord> {
    let category = parse_category(&req.category)?;
    let usage_date = water_app::parse_date(&req.usage_date)?;
    ctx.app_state.services.records.add(NewRecord {
        amount: req.amount,
        category,
        usage_date,
        notes: req.notes,
    })
}

pub fn records_delete(ctx: &AppContext, req: RecordDeleteRequest) -> Result<DeletedResponse> {
    let deleted = ctx.app_state.services.records.delete(&req.id)?;
    Ok(DeletedResponse { deleted })
}
