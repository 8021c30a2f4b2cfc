use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::DbError;
use tracing::error;
use util::config;
use util::exercises::exercise_key::TableInfo;
use util::state::AppState;

/// GET /api/tables
///
/// Data dictionary: the schema tables listed in the exercise key's `schema_tables`.
///
/// - `500 Internal Server Error` when the schema file is missing or the key does not list
///   `schema_tables`.
pub async fn list_tables(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog().table_info() {
        Ok(tables) => (
            StatusCode::OK,
            Json(ApiResponse::success(tables, "Tables retrieved")),
        ),
        Err(e) => {
            error!("Failed to build table info: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<Vec<TableInfo>>::error(e.to_string())),
            )
        }
    }
}

/// GET /api/tables/{table_name}/sample
///
/// First `SAMPLE_ROW_LIMIT` rows of a table as a query-result payload. Engine errors such as
/// an unknown table are reported in-band.
///
/// - `400 Bad Request` when the name is not a plain identifier.
pub async fn get_sample(
    State(state): State<AppState>,
    Path(table_name): Path<String>,
) -> Response {
    match db::sample_data(state.pool(), &table_name, config::sample_row_limit()).await {
        Ok(result) => Json(result).into_response(),
        Err(e @ DbError::InvalidIdentifier(_)) => (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::error(e.to_string())),
        )
            .into_response(),
        Err(e) => {
            error!("Sample query failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::<()>::error(e.to_string())),
            )
                .into_response()
        }
    }
}
