#[cfg(test)]
mod tests {
    use crate::helpers::{get, make_test_app, send};
    use axum::http::StatusCode;

    #[tokio::test]
    async fn unknown_paths_get_json_404() {
        let (app, _root) = make_test_app().await;

        for uri in ["/api/nope", "/", "/api/exercises/1/extra"] {
            let (status, json) = send(app.clone(), get(uri)).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(json["success"], false);
            assert_eq!(json["message"], "Endpoint not found");
        }
    }
}
