//! API Router with Swagger UI

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::dto::*;
use crate::api::handlers::metrics::{self, MetricsState};
use crate::api::handlers::{health, reservations, tables, templates, AppState};
use crate::application::ReservationService;

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::health_check,
        // Tables
        tables::list_tables,
        tables::get_table,
        tables::list_available_tables,
        tables::check_availability,
        // Reservations
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::create_reservation,
        reservations::update_reservation,
        reservations::cancel_reservation,
        // Templates
        templates::list_templates,
        templates::get_template,
    ),
    components(schemas(
        health::HealthResponse,
        TableResponse,
        AvailabilityResponse,
        ReservationRequest,
        ReservationResponse,
        TemplateResponse,
        EmptyData,
    )),
    tags(
        (name = "Health", description = "Liveness probe"),
        (name = "Tables", description = "Dining-room tables and availability"),
        (name = "Reservations", description = "Reservation lifecycle"),
        (name = "Templates", description = "Canned reservation presets"),
    ),
    info(
        title = "Reserva API",
        description = "Single-restaurant table reservation manager"
    )
)]
struct ApiDoc;

/// Build the REST API router.
pub fn create_api_router(service: Arc<ReservationService>, metrics_handle: PrometheusHandle) -> Router {
    let state = AppState { service };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let table_routes = Router::new()
        .route("/", get(tables::list_tables))
        .route("/available", get(tables::list_available_tables))
        .route("/{id}", get(tables::get_table))
        .route("/{id}/availability", get(tables::check_availability))
        .with_state(state.clone());

    let reservation_routes = Router::new()
        .route(
            "/",
            get(reservations::list_reservations).post(reservations::create_reservation),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation).put(reservations::update_reservation),
        )
        .route("/{id}/cancel", post(reservations::cancel_reservation))
        .with_state(state.clone());

    let template_routes = Router::new()
        .route("/", get(templates::list_templates))
        .route("/{kind}", get(templates::get_template))
        .with_state(state);

    let metrics_routes = Router::new()
        .route("/metrics", get(metrics::prometheus_metrics))
        .with_state(MetricsState {
            handle: metrics_handle,
        });

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .route("/health", get(health::health_check))
        // Prometheus scrape endpoint
        .merge(metrics_routes)
        // Core resources
        .nest("/api/v1/tables", table_routes)
        .nest("/api/v1/reservations", reservation_routes)
        .nest("/api/v1/templates", template_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
