//! encore-web library - router and handlers for the booking board

pub mod api;
pub mod db;
pub mod error;
pub mod forms;
pub mod pages;
pub mod views;

pub use crate::error::{ApiError, ApiResult, PageError, PageResult};

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::home))
        .merge(api::venue_routes())
        .merge(api::artist_routes())
        .merge(api::show_routes())
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
