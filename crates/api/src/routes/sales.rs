//! Aggregate query endpoints over the sales records.

use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use chrono::NaiveDate;
use common::{DateRange, Metric};
use query::{DepartmentBreakdown, MonthlySales, QueryEngine};
use record_store::RecordLoader;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<L: RecordLoader> {
    pub engine: QueryEngine<L>,
}

// -- Request types --

#[derive(Debug, Deserialize)]
pub struct TotalItemsParams {
    pub start_date: String,
    pub end_date: String,
    pub department: String,
}

#[derive(Debug, Deserialize)]
pub struct NthMostTotalItemParams {
    pub start_date: String,
    pub end_date: String,
    pub item_by: Metric,
    pub n: i64,
}

#[derive(Debug, Deserialize)]
pub struct DateRangeParams {
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Deserialize)]
pub struct MonthlySalesParams {
    pub software_name: String,
    pub year: i32,
}

// -- Response types --

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PercentageResponse {
    pub percentage_of_department_wise_sold_items: DepartmentBreakdown,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySalesResponse {
    pub monthly_sales: MonthlySales,
}

// -- Handlers --

/// GET /total_items — count of a department's sales inside a date range.
#[tracing::instrument(skip(state))]
pub async fn total_items<L: RecordLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    params: Result<Query<TotalItemsParams>, QueryRejection>,
) -> Result<Json<usize>, ApiError> {
    let Query(params) = params?;
    let range = parse_range(&params.start_date, &params.end_date)?;

    let total = state
        .engine
        .count_by_date_range_and_department(range, &params.department)
        .await?;

    Ok(Json(total))
}

/// GET /nth_most_total_item — software at rank `n` by quantity or price.
#[tracing::instrument(skip(state))]
pub async fn nth_most_total_item<L: RecordLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    params: Result<Query<NthMostTotalItemParams>, QueryRejection>,
) -> Result<Json<String>, ApiError> {
    let Query(params) = params?;
    let range = parse_range(&params.start_date, &params.end_date)?;

    let software = state
        .engine
        .rank_by_metric(range, params.item_by, params.n)
        .await?;

    Ok(Json(software))
}

/// GET /percentage_of_department_wise_sold_items — seat shares per department.
#[tracing::instrument(skip(state))]
pub async fn percentage_of_department_wise_sold_items<L: RecordLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    params: Result<Query<DateRangeParams>, QueryRejection>,
) -> Result<Json<PercentageResponse>, ApiError> {
    let Query(params) = params?;
    let range = parse_range(&params.start_date, &params.end_date)?;

    let breakdown = state.engine.percentage_by_department(range).await?;

    Ok(Json(PercentageResponse {
        percentage_of_department_wise_sold_items: breakdown,
    }))
}

/// GET /monthly_sales — seats of one software per month of a year.
#[tracing::instrument(skip(state))]
pub async fn monthly_sales<L: RecordLoader + 'static>(
    State(state): State<Arc<AppState<L>>>,
    params: Result<Query<MonthlySalesParams>, QueryRejection>,
) -> Result<Json<MonthlySalesResponse>, ApiError> {
    let Query(params) = params?;

    let sales = state
        .engine
        .monthly_sales(&params.software_name, params.year)
        .await?;

    Ok(Json(MonthlySalesResponse {
        monthly_sales: sales,
    }))
}

fn parse_range(start: &str, end: &str) -> Result<DateRange, ApiError> {
    Ok(DateRange::new(parse_date(start)?, parse_date(end)?))
}

/// Parses a `YYYY-MM-DD` parameter. A trailing time of day is rejected.
fn parse_date(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|e| ApiError::BadRequest(format!("Invalid date {raw:?}: {e}")))
}
