use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

/// Builds the `/database` route group.
pub fn database_routes() -> Router<AppState> {
    Router::new().route("/info", get(get::database_info))
}
