#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn database_info_lists_live_tables() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/database/info")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);

        let tables = json["data"].as_array().unwrap();
        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0]["name"], "companies");
        assert_eq!(tables[0]["row_count"], 3);
        assert_eq!(
            tables[0]["columns"][1],
            json!({"name": "name", "type": "TEXT", "nullable": false, "primary_key": false})
        );
        assert_eq!(tables[1]["name"], "job_postings");
        assert_eq!(tables[1]["row_count"], 4);
    }
}
