//! Reservation REST API handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use validator::Validate;

use crate::api::dto::{ApiResponse, EmptyData, ReservationRequest, ReservationResponse};
use crate::api::handlers::{domain_error, validation_error, ApiError, AppState};

/// List all reservations
///
/// Ordered by (date, start_time) ascending; includes cancelled rows.
#[utoipa::path(
    get,
    path = "/api/v1/reservations",
    tag = "Reservations",
    responses(
        (status = 200, description = "All reservations", body = ApiResponse<Vec<ReservationResponse>>)
    )
)]
pub async fn list_reservations(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<ReservationResponse>>>, ApiError> {
    let reservations = state.service.list_reservations().await.map_err(domain_error)?;
    let responses: Vec<ReservationResponse> = reservations.into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(responses)))
}

/// Get one reservation by ID
#[utoipa::path(
    get,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation details", body = ApiResponse<ReservationResponse>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn get_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    let reservation = state.service.get_reservation(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(reservation.into())))
}

/// Create a reservation
///
/// Runs the full admission chain: time normalization, ordering,
/// operating hours, capacity, then availability. The availability check
/// repeats atomically inside the write, so a slot taken between read and
/// write still fails with 409.
#[utoipa::path(
    post,
    path = "/api/v1/reservations",
    tag = "Reservations",
    request_body = ReservationRequest,
    responses(
        (status = 201, description = "Reservation confirmed", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Malformed time, inverted range, outside opening hours, or party too large"),
        (status = 404, description = "Table not found"),
        (status = 409, description = "Slot already taken")
    )
)]
pub async fn create_reservation(
    State(state): State<AppState>,
    Json(req): Json<ReservationRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ReservationResponse>>), ApiError> {
    req.validate().map_err(validation_error)?;
    let draft = req.into_draft().map_err(domain_error)?;
    let stored = state.service.create_reservation(draft).await.map_err(domain_error)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success(stored.into()))))
}

/// Update a reservation
///
/// Re-validates as if newly created, excluding the reservation itself
/// from the overlap check; the stored record is overwritten in place.
#[utoipa::path(
    put,
    path = "/api/v1/reservations/{id}",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    request_body = ReservationRequest,
    responses(
        (status = 200, description = "Reservation updated", body = ApiResponse<ReservationResponse>),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Reservation or table not found"),
        (status = 409, description = "Slot already taken by another reservation")
    )
)]
pub async fn update_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(req): Json<ReservationRequest>,
) -> Result<Json<ApiResponse<ReservationResponse>>, ApiError> {
    req.validate().map_err(validation_error)?;
    let draft = req.into_draft().map_err(domain_error)?;
    let stored = state
        .service
        .update_reservation(id, draft)
        .await
        .map_err(domain_error)?;
    Ok(Json(ApiResponse::success(stored.into())))
}

/// Cancel a reservation
///
/// Idempotent in effect: cancelling an already cancelled reservation
/// leaves it unchanged. Unknown IDs return 404.
#[utoipa::path(
    post,
    path = "/api/v1/reservations/{id}/cancel",
    tag = "Reservations",
    params(
        ("id" = i32, Path, description = "Reservation ID")
    ),
    responses(
        (status = 200, description = "Reservation cancelled", body = ApiResponse<EmptyData>),
        (status = 404, description = "Reservation not found")
    )
)]
pub async fn cancel_reservation(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse<EmptyData>>, ApiError> {
    state.service.cancel_reservation(id).await.map_err(domain_error)?;
    Ok(Json(ApiResponse::success(EmptyData {})))
}
