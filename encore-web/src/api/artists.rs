//! Artist handlers: listing, search, detail, create/edit, delete

use axum::extract::{Path, Query, RawForm, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tracing::{error, info, warn};

use super::{redirect_with_flash, DeleteResponse, FlashQuery};
use crate::db::artists as db;
use crate::db::shows;
use crate::error::{ApiResult, PageError, PageResult};
use crate::forms::{parse_form, ArtistForm, SearchForm};
use crate::views::{split_past_upcoming, ArtistDetail, ArtistShow};
use crate::{pages, ApiError, AppState};

/// Build artist routes
pub fn artist_routes() -> Router<AppState> {
    Router::new()
        .route("/artists", get(artists_index))
        .route("/artists/search", post(search_artists))
        .route("/artists/create", get(new_artist_form).post(create_artist))
        .route("/artists/:id", get(artist_detail).delete(delete_artist))
        .route("/artists/:id/edit", get(edit_artist_form).post(update_artist))
}

/// GET /artists
///
/// Flat listing, id and name only
async fn artists_index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let artists = db::list_artists(&state.db).await?;
    Ok(Html(pages::artists::index_page(&artists)))
}

/// POST /artists/search
async fn search_artists(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> PageResult<Html<String>> {
    let form: SearchForm = parse_form(&body).map_err(PageError::BadRequest)?;
    let now = Utc::now().naive_utc();

    let results = db::search_artists(&state.db, &form.search_term, &now).await?;

    Ok(Html(pages::artists::search_results_page(
        &form.search_term,
        &results,
    )))
}

/// GET /artists/:id
async fn artist_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<FlashQuery>,
) -> PageResult<Html<String>> {
    let now = Utc::now().naive_utc();

    let artist = db::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", id)))?;

    let booked = shows::shows_for_artist(&state.db, id).await?;
    let (past, upcoming) = split_past_upcoming(booked, now, |show| show.start_time);

    let detail = ArtistDetail {
        artist,
        past_shows: past.into_iter().map(ArtistShow::from).collect(),
        upcoming_shows: upcoming.into_iter().map(ArtistShow::from).collect(),
    };

    Ok(Html(pages::artists::detail_page(
        &detail,
        query.flash.as_deref(),
    )))
}

/// GET /artists/create
async fn new_artist_form() -> Html<String> {
    Html(pages::artists::new_page())
}

/// POST /artists/create
async fn create_artist(State(state): State<AppState>, RawForm(body): RawForm) -> Response {
    let form: ArtistForm = match parse_form(&body) {
        Ok(form) => form,
        Err(reason) => return save_failure(StatusCode::BAD_REQUEST, &reason),
    };

    let artist = match form.validate() {
        Ok(artist) => artist,
        Err(problems) => return save_failure(StatusCode::BAD_REQUEST, &problems.join(", ")),
    };

    match db::insert_artist(&state.db, &artist).await {
        Ok(id) => {
            info!("created artist {} ({})", id, artist.name);
            let flash = format!("Artist {} was successfully listed!", artist.name);
            Html(pages::home_page(Some(&flash))).into_response()
        }
        Err(err) => {
            error!("artist insert failed: {}", err);
            save_failure(StatusCode::INTERNAL_SERVER_ERROR, "database error")
        }
    }
}

fn save_failure(status: StatusCode, reason: &str) -> Response {
    warn!("artist not saved: {}", reason);
    let flash = format!("Artist could not be saved: {}.", reason);
    (status, Html(pages::home_page(Some(&flash)))).into_response()
}

/// GET /artists/:id/edit
async fn edit_artist_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> PageResult<Html<String>> {
    let artist = db::get_artist(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", id)))?;

    Ok(Html(pages::artists::edit_page(&artist)))
}

/// POST /artists/:id/edit
async fn update_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RawForm(body): RawForm,
) -> PageResult<Redirect> {
    let form: ArtistForm = parse_form(&body).map_err(PageError::BadRequest)?;
    let artist = form
        .validate()
        .map_err(|problems| PageError::BadRequest(problems.join(", ")))?;

    let updated = db::update_artist(&state.db, id, &artist).await?;
    if !updated {
        return Err(PageError::NotFound(format!("artist {}", id)));
    }

    info!("updated artist {}", id);
    let flash = format!("Artist {} was successfully updated!", artist.name);
    Ok(redirect_with_flash(&format!("/artists/{}", id), &flash))
}

/// DELETE /artists/:id
///
/// Dependent shows cascade with the artist
async fn delete_artist(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = db::delete_artist(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("artist {} does not exist", id)));
    }

    info!("deleted artist {}", id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Artist successfully deleted.".to_string(),
    }))
}
