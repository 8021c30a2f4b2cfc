use crate::response::ApiResponse;
use crate::routes::common::{self, QueryRequest, ScoreRequest};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::QueryResult;
use marker::{Percentage, ScoreReport};
use serde::Serialize;
use tracing::info;
use util::config;
use util::state::AppState;
use validator::Validate;

const EXECUTION_FAILED: &str = "Query execution failed";

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    pub success: bool,
    pub user_result: QueryResult,
    pub solution_result: QueryResult,
    pub score: ScoreOutcome,
}

/// Either a full comparator report or the short form used when a query did not run.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScoreOutcome {
    Report(ScoreReport),
    NotScored {
        percentage: Percentage,
        details: &'static str,
    },
}

fn bad_request(errors: &validator::ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::<()>::error(common::format_validation_errors(
            errors,
        ))),
    )
        .into_response()
}

/// POST /api/execute
///
/// Runs the query and returns the query-result payload. Statement errors come back with
/// `"success": false` and status `200`.
///
/// ### Request Body
/// ```json
/// { "query": "SELECT * FROM companies" }
/// ```
///
/// - `400 Bad Request` with message `No query provided` when the query is blank.
pub async fn execute(State(state): State<AppState>, Json(req): Json<QueryRequest>) -> Response {
    if let Err(errors) = req.validate() {
        return bad_request(&errors);
    }

    let result = db::execute_query(state.pool(), &req.query, config::query_row_limit()).await;
    Json(result).into_response()
}

/// POST /api/validate
///
/// Checks the query with `EXPLAIN`:
/// ```json
/// { "valid": false, "error": "no such table: job_posting" }
/// ```
pub async fn validate(State(state): State<AppState>, Json(req): Json<QueryRequest>) -> Response {
    if let Err(errors) = req.validate() {
        return bad_request(&errors);
    }

    Json(db::validate_query(state.pool(), &req.query).await).into_response()
}

/// POST /api/score
///
/// Runs the student's query and the reference solution, then compares their result sets.
///
/// ### Request Body
/// ```json
/// { "user_query": "SELECT ...", "solution_query": "SELECT ..." }
/// ```
///
/// ### Responses
/// - `200 OK` with `user_result`, `solution_result` and `score`. When either query fails,
///   `success` is `false` and the score is `{ "percentage": 0, "details": "Query execution failed" }`.
/// - `400 Bad Request` when either query is blank.
pub async fn score(State(state): State<AppState>, Json(req): Json<ScoreRequest>) -> Response {
    if let Err(errors) = req.validate() {
        return bad_request(&errors);
    }

    let limit = config::query_row_limit();
    let user_result = db::execute_query(state.pool(), &req.user_query, limit).await;
    let solution_result = db::execute_query(state.pool(), &req.solution_query, limit).await;

    if !user_result.success || !solution_result.success {
        return Json(ScoreResponse {
            success: false,
            user_result,
            solution_result,
            score: ScoreOutcome::NotScored {
                percentage: Percentage::ZERO,
                details: EXECUTION_FAILED,
            },
        })
        .into_response();
    }

    let report = marker::compare(&user_result.tabular(), &solution_result.tabular());
    info!(
        percentage = report.percentage.value(),
        matching = report.matching_rows,
        expected = report.total_expected_rows,
        "Scored submission"
    );

    Json(ScoreResponse {
        success: true,
        user_result,
        solution_result,
        score: ScoreOutcome::Report(report),
    })
    .into_response()
}
