#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn list_exercises_returns_summaries() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/exercises")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        let list = json["data"].as_array().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[0],
            json!({
                "id": 1,
                "title": "Company Names",
                "difficulty": "Easy",
                "topics": ["SELECT", "ORDER BY"]
            })
        );
        assert!(list[0].get("solution").is_none());
    }

    #[tokio::test]
    async fn get_exercise_includes_solution_and_expected_result() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app.clone(), get("/api/exercises/1")).await;
        assert_eq!(status, StatusCode::OK);
        let data = &json["data"];
        assert_eq!(data["statement"], "List every company name alphabetically.");
        assert_eq!(data["educational_focus"], "Sorting");
        assert_eq!(data["solution"], "SELECT name FROM companies ORDER BY name;");
        assert_eq!(data["expected_result"]["row_count"], 3);

        let (_, second) = send(app, get("/api/exercises/2")).await;
        assert_eq!(second["data"]["educational_focus"], "");
        assert_eq!(second["data"]["solution"], "");
        assert_eq!(second["data"]["expected_result"], json!({}));
    }

    #[tokio::test]
    async fn get_exercise_not_found() {
        let (app, _root) = make_test_app().await;

        for uri in ["/api/exercises/99", "/api/exercises/abc"] {
            let (status, json) = send(app.clone(), get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "Exercise not found");
        }
    }

    #[tokio::test]
    async fn week_metadata() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/week")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            json!({
                "week": 4,
                "title": "Week 4 Practice - Data Jobs Dataset",
                "description": "Joins over the job market dataset",
                "focus_topics": ["INNER JOIN", "LEFT JOIN"],
                "database": "data_jobs.db"
            })
        );
    }
}
