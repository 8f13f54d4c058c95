//! HTTP handlers for encore-web

pub mod artists;
pub mod health;
pub mod shows;
pub mod venues;

pub use artists::artist_routes;
pub use health::health_routes;
pub use shows::show_routes;
pub use venues::venue_routes;

use axum::response::{Html, Redirect};
use serde::{Deserialize, Serialize};

use crate::pages;

/// GET /
///
/// Home page with the listing shortcuts
pub async fn home() -> Html<String> {
    Html(pages::home_page(None))
}

/// Flash text carried across a redirect as a query parameter
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub flash: Option<String>,
}

/// Response payload for the JSON delete endpoints
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub message: String,
}

/// 303 redirect carrying a flash message in the query string
pub(crate) fn redirect_with_flash(path: &str, message: &str) -> Redirect {
    let query = serde_html_form::to_string([("flash", message)]).unwrap_or_default();
    Redirect::to(&format!("{}?{}", path, query))
}
