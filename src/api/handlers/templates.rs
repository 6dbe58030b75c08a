//! Reservation template REST API handlers

use axum::{
    extract::{Path, State},
    Json,
};

use crate::api::dto::{ApiResponse, TemplateResponse};
use crate::api::handlers::{domain_error, ApiError, AppState};

/// List the reservation presets
#[utoipa::path(
    get,
    path = "/api/v1/templates",
    tag = "Templates",
    responses(
        (status = 200, description = "The three canned presets", body = ApiResponse<Vec<TemplateResponse>>)
    )
)]
pub async fn list_templates(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<TemplateResponse>>>, ApiError> {
    let templates: Vec<TemplateResponse> =
        state.service.templates().into_iter().map(Into::into).collect();
    Ok(Json(ApiResponse::success(templates)))
}

/// Get one preset by name
///
/// Every call yields a fresh clone, independent of the preset and of any
/// previously issued clone.
#[utoipa::path(
    get,
    path = "/api/v1/templates/{kind}",
    tag = "Templates",
    params(
        ("kind" = String, Path, description = "Preset name: standard, vip, group")
    ),
    responses(
        (status = 200, description = "Preset fields", body = ApiResponse<TemplateResponse>),
        (status = 400, description = "Unknown preset name")
    )
)]
pub async fn get_template(
    State(state): State<AppState>,
    Path(kind): Path<String>,
) -> Result<Json<ApiResponse<TemplateResponse>>, ApiError> {
    let template = state.service.template(&kind).map_err(domain_error)?;
    Ok(Json(ApiResponse::success(template.into())))
}
