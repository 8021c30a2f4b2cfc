#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send};
    use axum::http::StatusCode;
    use serial_test::serial;
    use util::config::AppConfig;

    #[tokio::test]
    #[serial]
    async fn list_tables_filters_to_schema_tables() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/tables")).await;
        assert_eq!(status, StatusCode::OK);

        let tables = json["data"].as_array().unwrap();
        let names: Vec<_> = tables.iter().map(|t| t["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["companies", "job_postings"]);

        let pk = &tables[0]["columns"][0];
        assert_eq!(pk["type"], "INTEGER");
        assert_eq!(pk["primary_key"], true);
        assert_eq!(pk["nullable"], true);
        assert_eq!(pk["foreign_key"], "");
        assert_eq!(pk["description"], "");

        assert_eq!(
            tables[1]["columns"][0]["foreign_key"],
            "companies.company_id"
        );
    }

    #[tokio::test]
    #[serial]
    async fn sample_returns_limited_rows() {
        AppConfig::set_sample_row_limit(2);
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/tables/job_postings/sample")).await;
        AppConfig::reset();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], true);
        assert_eq!(json["row_count"], 2);
        assert_eq!(json["data"][0]["job_title"], "Data Scientist");
        assert_eq!(json["data"][0]["job_work_from_home"], true);
        assert_eq!(json["data"][0]["job_posted_date"], "2024-01-15");
        assert!(json["columns"].as_array().unwrap().len() >= 5);
    }

    #[tokio::test]
    #[serial]
    async fn sample_rejects_non_identifiers() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/tables/companies%3BDROP/sample")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Invalid table name: companies;DROP");
    }

    #[tokio::test]
    #[serial]
    async fn sample_of_unknown_table_reports_in_band() {
        let (app, _root) = make_test_app().await;

        let (status, json) = send(app, get("/api/tables/ghosts/sample")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["success"], false);
        assert!(json["error"].as_str().unwrap().contains("ghosts"));
    }
}
