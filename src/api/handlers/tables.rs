//! Table REST API handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::api::dto::{ApiResponse, AvailabilityResponse, SlotQuery, TableResponse};
use crate::api::handlers::{domain_error, ApiError, AppState};
use crate::domain::schedule;

/// List all tables
#[utoipa::path(
    get,
    path = "/api/v1/tables",
    tag = "Tables",
    responses(
        (status = 200, description = "All dining-room tables", body = ApiResponse<Vec<TableResponse>>)
    )
)]
pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TableResponse>>>, ApiError> {
    let tables = state.service.list_tables().await.map_err(domain_error)?;
    let responses: Vec<TableResponse> = tables.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Get one table by ID
#[utoipa::path(
    get,
    path = "/api/v1/tables/{id}",
    tag = "Tables",
    params(
        ("id" = i32, Path, description = "Table ID")
    ),
    responses(
        (status = 200, description = "Table details", body = ApiResponse<TableResponse>),
        (status = 404, description = "Table not found")
    )
)]
pub async fn get_table(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<TableResponse>>, ApiError> {
    let table = state.service.get_table(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(table.into())))
}

/// Tables free for a slot
///
/// Filters the full table list by availability. The answer is advisory:
/// creation re-checks availability at write time.
#[utoipa::path(
    get,
    path = "/api/v1/tables/available",
    tag = "Tables",
    params(SlotQuery),
    responses(
        (status = 200, description = "Tables with no overlapping confirmed reservation", body = ApiResponse<Vec<TableResponse>>),
        (status = 400, description = "Malformed or inverted time range")
    )
)]
pub async fn list_available_tables(
    State(state): State<AppState>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<ApiResponse<Vec<TableResponse>>>, ApiError> {
    let tables = state
        .service
        .list_available_tables(query.date, &query.start_time, &query.end_time)
        .await
        .map_err(domain_error)?;
    let responses: Vec<TableResponse> = tables.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Availability of one table for a slot
#[utoipa::path(
    get,
    path = "/api/v1/tables/{id}/availability",
    tag = "Tables",
    params(
        ("id" = i32, Path, description = "Table ID"),
        SlotQuery
    ),
    responses(
        (status = 200, description = "Whether the slot is free", body = ApiResponse<AvailabilityResponse>),
        (status = 400, description = "Malformed or inverted time range"),
        (status = 404, description = "Table not found")
    )
)]
pub async fn check_availability(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<SlotQuery>,
) -> Result<Json<ApiResponse<AvailabilityResponse>>, ApiError> {
    let available = state
        .service
        .is_available(id, query.date, &query.start_time, &query.end_time, query.exclude)
        .await
        .map_err(domain_error)?;

    // echo back the normalized bounds
    let start = schedule::parse_time("start_time", &query.start_time).map_err(domain_error)?;
    let end = schedule::parse_time("end_time", &query.end_time).map_err(domain_error)?;

    Ok(Json(ApiResponse::success(AvailabilityResponse {
        table_id: id,
        date: query.date,
        start_time: schedule::canonical(start),
        end_time: schedule::canonical(end),
        available,
    })))
}
