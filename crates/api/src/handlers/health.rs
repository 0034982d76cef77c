//! Health check endpoint for load balancer probes.

use axum::Json;
use serde_json::{json, Value};

/// GET /health - Basic liveness probe.
///
/// Returns 200 immediately without touching the store.
#[axum::debug_handler]
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "picus-api"
    }))
}
