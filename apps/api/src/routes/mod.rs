pub mod health;

use axum::{
    routing::{get, post},
    Router,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

use crate::learning::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_dir = Path::new(&state.config.static_dir);
    // Every non-API path serves the single-page client; unknown paths get
    // its entry document so client-side routing works on refresh.
    let spa = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .route("/api/health", get(health::health_handler))
        .route("/api/auto", post(handlers::handle_auto))
        .route("/api/learn", post(handlers::handle_learn))
        .fallback_service(spa)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::llm_client::LlmClient;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use serde_json::Value;
    use tower::ServiceExt;

    fn test_router(static_dir: &std::path::Path) -> Router {
        let state = AppState {
            llm: LlmClient::new("test-key".to_string()),
            config: Config {
                anthropic_api_key: "test-key".to_string(),
                port: 0,
                static_dir: static_dir.to_string_lossy().into_owned(),
                rust_log: "info".to_string(),
            },
        };
        build_router(state)
    }

    async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    #[tokio::test]
    async fn health_returns_ok_with_iso8601_timestamp() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_router(dir.path());

        let response = app
            .oneshot(Request::get("/api/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        let timestamp = body["timestamp"].as_str().unwrap();
        chrono::DateTime::parse_from_rfc3339(timestamp).unwrap();
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_spa_entry_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>pathfinder</html>").unwrap();
        let app = test_router(dir.path());

        let response = app
            .oneshot(
                Request::get("/some/client/route")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        assert_eq!(body, b"<html>pathfinder</html>");
    }

    #[tokio::test]
    async fn static_assets_are_served_from_the_static_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<html>pathfinder</html>").unwrap();
        std::fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();
        let app = test_router(dir.path());

        let response = app
            .oneshot(Request::get("/app.js").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = body_bytes(response).await;
        assert_eq!(body, b"console.log(1)");
    }
}
