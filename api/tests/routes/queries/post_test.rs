#[cfg(test)]
mod tests {
    use crate::helpers::{make_test_app, post_json, send};
    use axum::http::StatusCode;
    use serde_json::json;
    use serial_test::serial;
    use util::config::AppConfig;

    #[tokio::test]
    #[serial]
    async fn execute_returns_query_payload() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(
            app,
            post_json(
                "/api/execute",
                json!({"query": "SELECT company_id, name FROM companies ORDER BY company_id"}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["error"], serde_json::Value::Null);
        assert_eq!(json["columns"], json!(["company_id", "name"]));
        assert_eq!(json["row_count"], 3);
        assert_eq!(json["data"][0], json!({"company_id": 1, "name": "Acme Analytics"}));
        assert!(json["execution_time"].as_f64().unwrap() >= 0.0);
    }

    #[tokio::test]
    #[serial]
    async fn execute_caps_select_without_limit() {
        AppConfig::set_query_row_limit(2);
        let (app, _root) = make_test_app().await;

        let (_, capped) = send(
            app.clone(),
            post_json("/api/execute", json!({"query": "SELECT * FROM job_postings;"})),
        )
        .await;
        let (_, explicit) = send(
            app,
            post_json("/api/execute", json!({"query": "SELECT * FROM job_postings LIMIT 3"})),
        )
        .await;
        AppConfig::reset();

        assert_eq!(capped["row_count"], 2);
        assert_eq!(explicit["row_count"], 3);
    }

    #[tokio::test]
    #[serial]
    async fn execute_reports_engine_errors_in_band() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(
            app.clone(),
            post_json("/api/execute", json!({"query": "SELECT * FROM nowhere"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("nowhere"));
        assert_eq!(json["data"], json!([]));
        assert_eq!(json["columns"], json!([]));

        let (_, write) = send(
            app,
            post_json("/api/execute", json!({"query": "DROP TABLE companies"})),
        )
        .await;
        assert_eq!(write["success"], false);
    }

    #[tokio::test]
    #[serial]
    async fn execute_and_validate_require_a_query() {
        let (app, _root) = make_test_app().await;

        for uri in ["/api/execute", "/api/validate"] {
            for body in [json!({}), json!({"query": ""})] {
                let (status, json) = send(app.clone(), post_json(uri, body)).await;
                assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
                assert_eq!(json["success"], false);
                assert_eq!(json["message"], "No query provided");
            }
        }
    }

    #[tokio::test]
    #[serial]
    async fn whitespace_query_reaches_the_engine() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(
            app.clone(),
            post_json("/api/execute", json!({"query": "   "})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"], "Query is empty");

        let (status, json) = send(
            app,
            post_json(
                "/api/score",
                json!({"user_query": "  ", "solution_query": "SELECT name FROM companies"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["user_result"]["error"], "Query is empty");
        assert_eq!(
            json["score"],
            json!({"percentage": 0, "details": "Query execution failed"})
        );
    }

    #[tokio::test]
    #[serial]
    async fn validate_uses_explain() {
        let (app, _root) = make_test_app().await;

        let (status, ok) = send(
            app.clone(),
            post_json("/api/validate", json!({"query": "SELECT name FROM companies"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(ok, json!({"valid": true, "error": null}));

        let (_, bad) = send(
            app,
            post_json("/api/validate", json!({"query": "SELECT name FROM companys"})),
        )
        .await;
        assert_eq!(bad["valid"], false);
        assert!(bad["error"].as_str().unwrap().contains("companys"));
    }

    #[tokio::test]
    #[serial]
    async fn score_perfect_match() {
        let (app, _root) = make_test_app().await;
        let query = "SELECT name FROM companies ORDER BY name";

        let (status, json) = send(
            app,
            post_json(
                "/api/score",
                json!({"user_query": query, "solution_query": query}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["user_result"]["row_count"], 3);
        assert_eq!(json["solution_result"]["row_count"], 3);
        assert_eq!(
            json["score"],
            json!({
                "percentage": 100,
                "details": "Perfect match!",
                "matching_rows": 3,
                "total_expected_rows": 3,
                "user_row_count": 3,
                "order_correct": true,
                "has_perfect_content": true
            })
        );
    }

    #[tokio::test]
    #[serial]
    async fn score_wrong_order_is_almost() {
        let (app, _root) = make_test_app().await;

        let (_, json) = send(
            app,
            post_json(
                "/api/score",
                json!({
                    "user_query": "SELECT name FROM companies ORDER BY name DESC",
                    "solution_query": "SELECT name FROM companies ORDER BY name"
                }),
            ),
        )
        .await;

        assert_eq!(json["score"]["percentage"], 99);
        assert_eq!(
            json["score"]["details"],
            "Almost! But you need to get your results in the correct order!"
        );
        assert_eq!(json["score"]["order_correct"], false);
    }

    #[tokio::test]
    #[serial]
    async fn score_partial_credit_and_column_mismatch() {
        let (app, _root) = make_test_app().await;

        let (_, partial) = send(
            app.clone(),
            post_json(
                "/api/score",
                json!({
                    "user_query": "SELECT job_title FROM job_postings WHERE job_id <= 2 ORDER BY job_id",
                    "solution_query": "SELECT job_title FROM job_postings ORDER BY job_id"
                }),
            ),
        )
        .await;
        // Solution rows collapse to three distinct titles; the user found two of them.
        assert_eq!(partial["score"]["matching_rows"], 2);
        assert_eq!(partial["score"]["total_expected_rows"], 4);
        assert_eq!(partial["score"]["percentage"], 50);
        assert_eq!(
            partial["score"]["details"],
            "Found 2 correct rows, but you're missing 2 rows"
        );

        let (_, mismatch) = send(
            app,
            post_json(
                "/api/score",
                json!({
                    "user_query": "SELECT name FROM companies",
                    "solution_query": "SELECT company_id, name FROM companies"
                }),
            ),
        )
        .await;
        assert_eq!(mismatch["success"], true);
        assert_eq!(mismatch["score"]["percentage"], 0);
        assert_eq!(
            mismatch["score"]["details"],
            "Column mismatch. Expected: ['company_id', 'name'], Got: ['name']"
        );
        assert!(mismatch["score"].get("has_perfect_content").is_none());
    }

    #[tokio::test]
    #[serial]
    async fn score_with_failed_query_is_not_scored() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(
            app,
            post_json(
                "/api/score",
                json!({
                    "user_query": "SELECT nme FROM companies",
                    "solution_query": "SELECT name FROM companies"
                }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert_eq!(json["user_result"]["success"], false);
        assert_eq!(json["solution_result"]["success"], true);
        assert_eq!(
            json["score"],
            json!({"percentage": 0, "details": "Query execution failed"})
        );
    }

    #[tokio::test]
    #[serial]
    async fn score_requires_both_queries() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(
            app,
            post_json("/api/score", json!({"user_query": "SELECT 1"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Both user_query and solution_query required");
    }
}
