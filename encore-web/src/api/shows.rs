//! Show handlers: listing and create

use axum::extract::{RawForm, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing::{error, info, warn};

use crate::db::{artists, shows as db, venues};
use crate::error::PageResult;
use crate::forms::{parse_form, NewShow, ShowForm};
use crate::views::ShowListItem;
use crate::{pages, AppState};

/// Build show routes
pub fn show_routes() -> Router<AppState> {
    Router::new()
        .route("/shows", get(shows_index))
        .route("/shows/create", get(new_show_form).post(create_show))
}

/// GET /shows
///
/// Every show, venue and artist denormalized, ordered by start time
async fn shows_index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let rows = db::all_shows(&state.db).await?;
    let items: Vec<ShowListItem> = rows.into_iter().map(ShowListItem::from).collect();

    Ok(Html(pages::shows::index_page(&items)))
}

/// GET /shows/create
async fn new_show_form() -> Html<String> {
    Html(pages::shows::new_page())
}

/// POST /shows/create
///
/// Both referenced ids must exist; a missing one maps to 400.
async fn create_show(State(state): State<AppState>, RawForm(body): RawForm) -> Response {
    let form: ShowForm = match parse_form(&body) {
        Ok(form) => form,
        Err(reason) => return listing_failure(StatusCode::BAD_REQUEST, &reason),
    };

    let show: NewShow = match form.validate() {
        Ok(show) => show,
        Err(problems) => return listing_failure(StatusCode::BAD_REQUEST, &problems.join(", ")),
    };

    match referenced_ids_exist(&state, &show).await {
        Ok(Some(reason)) => return listing_failure(StatusCode::BAD_REQUEST, &reason),
        Ok(None) => {}
        Err(err) => {
            error!("show reference check failed: {}", err);
            return listing_failure(StatusCode::INTERNAL_SERVER_ERROR, "database error");
        }
    }

    match db::insert_show(&state.db, show.venue_id, show.artist_id, &show.start_time).await {
        Ok(id) => {
            info!(
                "created show {} (venue {}, artist {})",
                id, show.venue_id, show.artist_id
            );
            Html(pages::home_page(Some("Show was successfully listed!"))).into_response()
        }
        // The existence checks above race against concurrent deletes; the
        // foreign keys are the authority.
        Err(ref err) if db::is_foreign_key_violation(err) => {
            listing_failure(StatusCode::BAD_REQUEST, "venue or artist does not exist")
        }
        Err(err) => {
            error!("show insert failed: {}", err);
            listing_failure(StatusCode::INTERNAL_SERVER_ERROR, "database error")
        }
    }
}

/// Some(reason) when either referenced record is missing
async fn referenced_ids_exist(
    state: &AppState,
    show: &NewShow,
) -> encore_common::Result<Option<String>> {
    if !venues::venue_exists(&state.db, show.venue_id).await? {
        return Ok(Some(format!("venue {} does not exist", show.venue_id)));
    }
    if !artists::artist_exists(&state.db, show.artist_id).await? {
        return Ok(Some(format!("artist {} does not exist", show.artist_id)));
    }
    Ok(None)
}

fn listing_failure(status: StatusCode, reason: &str) -> Response {
    warn!("show not listed: {}", reason);
    let flash = format!("Show could not be listed: {}.", reason);
    (status, Html(pages::home_page(Some(&flash)))).into_response()
}
