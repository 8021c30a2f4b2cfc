use crate::response::ApiResponse;
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use db::LiveTable;
use tracing::error;
use util::state::AppState;

/// GET /api/database/info
///
/// Tables actually present in the dataset, with column definitions and row counts.
///
/// ```json
/// {
///   "success": true,
///   "data": [{
///     "name": "companies",
///     "row_count": 3,
///     "columns": [{ "name": "company_id", "type": "INTEGER", "nullable": true, "primary_key": true }]
///   }],
///   "message": "Database info retrieved"
/// }
/// ```
pub async fn database_info(State(state): State<AppState>) -> impl IntoResponse {
    match db::database_info(state.pool()).await {
        Ok(tables) => (
            StatusCode::OK,
            Json(ApiResponse::success(tables, "Database info retrieved")),
        ),
        Err(e) => {
            error!("Database introspection failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<LiveTable>>::error(e.to_string())),
            )
        }
    }
}
