//! Health endpoint

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::AppState;

/// GET /health
///
/// Liveness check; no database access
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "module": "encore-web",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Build health routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
