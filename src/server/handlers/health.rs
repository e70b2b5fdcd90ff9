//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// Handle GET /api/health.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Label service running",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
