//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness probe
//! - `/exercises`, `/week` → exercise catalog for the configured week
//! - `/tables` → data dictionary and table samples
//! - `/execute`, `/validate`, `/score` → running and scoring student queries
//! - `/database` → live dataset introspection

use crate::middleware::log_request;
use crate::response::ApiResponse;
use crate::routes::{
    database::database_routes, exercises::exercises_routes, health::health_routes,
    queries::query_routes, tables::tables_routes,
};
use axum::{
    Json, Router,
    http::StatusCode,
    middleware::from_fn,
    response::IntoResponse,
    routing::get,
};
use tower_http::cors::CorsLayer;
use util::state::AppState;

pub mod common;
pub mod database;
pub mod exercises;
pub mod health;
pub mod queries;
pub mod tables;

/// Builds every route under `/api`, still awaiting its `AppState`.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/health", health_routes())
        .nest("/exercises", exercises_routes())
        .route("/week", get(exercises::get::get_week))
        .nest("/tables", tables_routes())
        .nest("/database", database_routes())
        .merge(query_routes())
}

/// The complete application: `/api` routes, the JSON 404 fallback, request logging and
/// permissive CORS.
pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", routes())
        .fallback(not_found)
        .layer(from_fn(log_request))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(ApiResponse::<()>::error("Endpoint not found")),
    )
}
