//! REST API handlers

pub mod health;
pub mod metrics;
pub mod reservations;
pub mod tables;
pub mod templates;

use std::sync::Arc;

use axum::http::StatusCode;
use axum::Json;

use crate::api::dto::ApiResponse;
use crate::application::ReservationService;
use crate::domain::DomainError;

/// Shared state for all reservation-manager routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ReservationService>,
}

/// Error shape every handler returns
pub type ApiError = (StatusCode, Json<ApiResponse<()>>);

/// Map a domain error to an HTTP status + envelope with the offending
/// field, where one can be named.
pub fn domain_error(e: DomainError) -> ApiError {
    let status = match &e {
        DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
        DomainError::SlotUnavailable { .. } => StatusCode::CONFLICT,
        DomainError::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        _ => StatusCode::BAD_REQUEST,
    };
    let body = match e.offending_field() {
        Some(field) => ApiResponse::error_with_field(e.to_string(), field),
        None => ApiResponse::error(e.to_string()),
    };
    (status, Json(body))
}

/// 400 for payloads rejected by declarative DTO validation.
pub fn validation_error(e: validator::ValidationErrors) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::error(format!("Invalid request: {}", e))),
    )
}
