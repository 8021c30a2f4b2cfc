use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

/// Builds the `/exercises` route group.
pub fn exercises_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_exercises))
        .route("/{exercise_id}", get(get::get_exercise))
}
