use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;
use util::exercises::ExerciseCatalog;
use util::paths;
use util::state::AppState;
use util::test_helpers::{write_exercise_key, write_schema};

pub const WEEK: u32 = 4;

fn exercise_key() -> Value {
    json!({
        "metadata": {
            "title": "Week 4 Practice - Data Jobs Dataset",
            "description": "Joins over the job market dataset",
            "week": WEEK,
            "database": "data_jobs.db",
            "focus_topics": ["INNER JOIN", "LEFT JOIN"],
            "schema_tables": ["companies", "job_postings"]
        },
        "exercises": [
            {
                "id": 1,
                "title": "Company Names",
                "statement": "List every company name alphabetically.",
                "difficulty": "Easy",
                "topics": ["SELECT", "ORDER BY"],
                "educational_focus": "Sorting",
                "solution": "SELECT name FROM companies ORDER BY name;",
                "result": {"working": true, "row_count": 3}
            },
            {
                "id": 2,
                "title": "Postings Per Company",
                "statement": "Count postings per company.",
                "difficulty": "Medium",
                "topics": ["INNER JOIN", "GROUP BY"]
            }
        ]
    })
}

fn schema() -> Value {
    json!({
        "tables": [
            {
                "name": "companies",
                "description": "Hiring companies",
                "row_count": 3,
                "columns": [
                    {"name": "company_id", "type": "INTEGER", "primary_key": true},
                    {"name": "name", "type": "TEXT", "nullable": false}
                ]
            },
            {
                "name": "raw_import",
                "description": "Unnormalized staging table",
                "columns": []
            },
            {
                "name": "job_postings",
                "description": "Job postings",
                "row_count": 4,
                "columns": [
                    {"name": "company_id", "type": "INTEGER",
                     "foreign_key": "companies.company_id"}
                ]
            }
        ]
    })
}

/// Router over a fresh data root holding a week 4 key, a schema file and the fixture dataset.
///
/// Keep the returned `TempDir` alive for the duration of the test.
pub async fn make_test_app() -> (Router, TempDir) {
    let root = TempDir::new().expect("failed to create tempdir");
    write_exercise_key(root.path(), WEEK, Some(2), &exercise_key());
    write_schema(root.path(), "data_jobs", &schema());

    let db_path = paths::dataset_db_path(root.path(), "data_jobs");
    std::fs::create_dir_all(db_path.parent().unwrap()).unwrap();
    db::test_utils::create_fixture_db(&db_path).await;

    let catalog = ExerciseCatalog::load(root.path(), WEEK).expect("catalog loads");
    let pool = db::connect_dataset(&catalog).await.expect("dataset opens");

    (api::app(AppState::new(pool, catalog)), root)
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Sends `req` and decodes the JSON body.
pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body).unwrap();
    (status, json)
}
