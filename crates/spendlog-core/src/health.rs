use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde_json::{Value, json};

/// Handler for `GET /healthcheck` — liveness check with server time.
pub async fn healthcheck() -> Json<Value> {
    Json(json!({
        "date": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        "status": "ok",
    }))
}
