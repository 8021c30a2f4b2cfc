use crate::response::ApiResponse;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use util::exercises::exercise_key::{ExerciseSummary, WeekMetadata};
use util::state::AppState;

/// GET /api/exercises
///
/// Lists the week's exercises without statements or solutions.
///
/// ```json
/// {
///   "success": true,
///   "data": [{ "id": 1, "title": "Company Job Postings", "difficulty": "Easy", "topics": ["INNER JOIN"] }],
///   "message": "Exercises retrieved"
/// }
/// ```
pub async fn list_exercises(State(state): State<AppState>) -> impl IntoResponse {
    let exercises: Vec<ExerciseSummary> = state.catalog().exercise_list();
    Json(ApiResponse::success(exercises, "Exercises retrieved"))
}

/// GET /api/exercises/{exercise_id}
///
/// Full exercise including the reference solution and the recorded expected result.
///
/// - `404 Not Found` when no exercise has this id.
pub async fn get_exercise(
    State(state): State<AppState>,
    Path(exercise_id): Path<String>,
) -> Response {
    let details = exercise_id
        .parse::<i64>()
        .ok()
        .and_then(|id| state.catalog().exercise_details(id));

    match details {
        Some(exercise) => {
            Json(ApiResponse::success(exercise, "Exercise retrieved")).into_response()
        }
        None => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::error("Exercise not found")),
        )
            .into_response(),
    }
}

/// GET /api/week
///
/// Metadata of the configured practice week, with defaults for anything the key omits.
pub async fn get_week(State(state): State<AppState>) -> impl IntoResponse {
    let meta: WeekMetadata = state.catalog().week_metadata();
    Json(ApiResponse::success(meta, "Week metadata retrieved"))
}
