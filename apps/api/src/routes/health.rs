use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};

/// GET /api/health
/// Returns a liveness object with an ISO-8601 timestamp.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}
