use axum::{Router, routing::post};
use util::state::AppState;

pub mod post;

/// Builds the query routes: `/execute`, `/validate` and `/score`.
pub fn query_routes() -> Router<AppState> {
    Router::new()
        .route("/execute", post(post::execute))
        .route("/validate", post(post::validate))
        .route("/score", post(post::score))
}
