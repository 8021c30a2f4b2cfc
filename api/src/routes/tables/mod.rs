use axum::{Router, routing::get};
use util::state::AppState;

pub mod get;

/// Builds the `/tables` route group.
pub fn tables_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get::list_tables))
        .route("/{table_name}/sample", get(get::get_sample))
}
