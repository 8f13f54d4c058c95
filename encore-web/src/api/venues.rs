//! Venue handlers: grouped listing, search, detail, create/edit, delete

use axum::extract::{Path, Query, RawForm, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tracing::{error, info, warn};

use super::{redirect_with_flash, DeleteResponse, FlashQuery};
use crate::db::venues as db;
use crate::db::shows;
use crate::error::{ApiResult, PageError, PageResult};
use crate::forms::{parse_form, SearchForm, VenueForm};
use crate::views::{split_past_upcoming, CityGroup, VenueDetail, VenueShow};
use crate::{pages, ApiError, AppState};

/// Build venue routes
pub fn venue_routes() -> Router<AppState> {
    Router::new()
        .route("/venues", get(venues_index))
        .route("/venues/search", post(search_venues))
        .route("/venues/create", get(new_venue_form).post(create_venue))
        .route("/venues/:id", get(venue_detail).delete(delete_venue))
        .route("/venues/:id/edit", get(edit_venue_form).post(update_venue))
}

/// GET /venues
///
/// Venues grouped by distinct (city, state), each with its upcoming-show
/// count relative to this request's time.
async fn venues_index(State(state): State<AppState>) -> PageResult<Html<String>> {
    let now = Utc::now().naive_utc();

    let mut groups = Vec::new();
    for (city, state_code) in db::localities(&state.db).await? {
        let venues = db::in_locality(&state.db, &city, &state_code, &now).await?;
        groups.push(CityGroup {
            city,
            state: state_code,
            venues,
        });
    }

    Ok(Html(pages::venues::index_page(&groups)))
}

/// POST /venues/search
///
/// Case-insensitive substring match on the name; empty term matches all
async fn search_venues(
    State(state): State<AppState>,
    RawForm(body): RawForm,
) -> PageResult<Html<String>> {
    let form: SearchForm = parse_form(&body).map_err(PageError::BadRequest)?;
    let now = Utc::now().naive_utc();

    let results = db::search_venues(&state.db, &form.search_term, &now).await?;

    Ok(Html(pages::venues::search_results_page(
        &form.search_term,
        &results,
    )))
}

/// GET /venues/:id
async fn venue_detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Query(query): Query<FlashQuery>,
) -> PageResult<Html<String>> {
    let now = Utc::now().naive_utc();

    let venue = db::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", id)))?;

    let booked = shows::shows_for_venue(&state.db, id).await?;
    let (past, upcoming) = split_past_upcoming(booked, now, |show| show.start_time);

    let detail = VenueDetail {
        venue,
        past_shows: past.into_iter().map(VenueShow::from).collect(),
        upcoming_shows: upcoming.into_iter().map(VenueShow::from).collect(),
    };

    Ok(Html(pages::venues::detail_page(
        &detail,
        query.flash.as_deref(),
    )))
}

/// GET /venues/create
async fn new_venue_form() -> Html<String> {
    Html(pages::venues::new_page())
}

/// POST /venues/create
///
/// On success renders the home page with a success flash; failures keep the
/// flash behavior but carry an honest status code.
async fn create_venue(State(state): State<AppState>, RawForm(body): RawForm) -> Response {
    let form: VenueForm = match parse_form(&body) {
        Ok(form) => form,
        Err(reason) => return save_failure(StatusCode::BAD_REQUEST, &reason),
    };

    let venue = match form.validate() {
        Ok(venue) => venue,
        Err(problems) => return save_failure(StatusCode::BAD_REQUEST, &problems.join(", ")),
    };

    match db::insert_venue(&state.db, &venue).await {
        Ok(id) => {
            info!("created venue {} ({})", id, venue.name);
            let flash = format!("Venue {} was successfully listed!", venue.name);
            Html(pages::home_page(Some(&flash))).into_response()
        }
        Err(err) => {
            error!("venue insert failed: {}", err);
            save_failure(StatusCode::INTERNAL_SERVER_ERROR, "database error")
        }
    }
}

fn save_failure(status: StatusCode, reason: &str) -> Response {
    warn!("venue not saved: {}", reason);
    let flash = format!("Venue could not be saved: {}.", reason);
    (status, Html(pages::home_page(Some(&flash)))).into_response()
}

/// GET /venues/:id/edit
async fn edit_venue_form(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> PageResult<Html<String>> {
    let venue = db::get_venue(&state.db, id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", id)))?;

    Ok(Html(pages::venues::edit_page(&venue)))
}

/// POST /venues/:id/edit
///
/// Success redirects to the detail page with a flash message
async fn update_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    RawForm(body): RawForm,
) -> PageResult<Redirect> {
    let form: VenueForm = parse_form(&body).map_err(PageError::BadRequest)?;
    let venue = form
        .validate()
        .map_err(|problems| PageError::BadRequest(problems.join(", ")))?;

    let updated = db::update_venue(&state.db, id, &venue).await?;
    if !updated {
        return Err(PageError::NotFound(format!("venue {}", id)));
    }

    info!("updated venue {}", id);
    let flash = format!("Venue {} was successfully updated!", venue.name);
    Ok(redirect_with_flash(&format!("/venues/{}", id), &flash))
}

/// DELETE /venues/:id
///
/// Dependent shows cascade with the venue
async fn delete_venue(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<DeleteResponse>> {
    let deleted = db::delete_venue(&state.db, id).await?;
    if !deleted {
        return Err(ApiError::NotFound(format!("venue {} does not exist", id)));
    }

    info!("deleted venue {}", id);
    Ok(Json(DeleteResponse {
        success: true,
        message: "Venue successfully deleted.".to_string(),
    }))
}
