//! Error types for encore-web
//!
//! Two surfaces, two renderings: page handlers return `PageError`, which
//! renders the styled HTML error pages; the JSON endpoints (delete, health)
//! return `ApiError`, which renders a JSON error body. Both carry honest
//! status codes: 400 for bad input, 404 for a missing record, 500 for
//! infrastructure failures, with the underlying cause logged.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::pages;

/// Error for HTML page handlers
#[derive(Debug, Error)]
pub enum PageError {
    /// Record named in the path does not exist (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed or invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Anything the user can't fix (500)
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::Internal(err.to_string())
    }
}

impl From<encore_common::Error> for PageError {
    fn from(err: encore_common::Error) -> Self {
        match err {
            encore_common::Error::NotFound(what) => PageError::NotFound(what),
            encore_common::Error::InvalidInput(msg) => PageError::BadRequest(msg),
            other => PageError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            PageError::NotFound(what) => {
                tracing::debug!("not found: {}", what);
                (StatusCode::NOT_FOUND, Html(pages::not_found_page())).into_response()
            }
            PageError::BadRequest(reason) => {
                tracing::warn!("bad request: {}", reason);
                (StatusCode::BAD_REQUEST, Html(pages::bad_request_page(&reason))).into_response()
            }
            PageError::Internal(cause) => {
                tracing::error!("request failed: {}", cause);
                (StatusCode::INTERNAL_SERVER_ERROR, Html(pages::server_error_page()))
                    .into_response()
            }
        }
    }
}

/// Error for JSON endpoints
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Invalid request (400)
    #[error("Invalid request: {0}")]
    BadRequest(String),

    /// Internal server error (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Result type for JSON handlers
pub type ApiResult<T> = Result<T, ApiError>;

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(err.to_string())
    }
}

impl From<encore_common::Error> for ApiError {
    fn from(err: encore_common::Error) -> Self {
        match err {
            encore_common::Error::NotFound(what) => ApiError::NotFound(what),
            encore_common::Error::InvalidInput(msg) => ApiError::BadRequest(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}
