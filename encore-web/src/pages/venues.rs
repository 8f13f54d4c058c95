//! Venue pages: grouped index, search results, detail, create/edit forms

use super::{
    checkbox_row, delete_script, escape_html, genre_select, layout, search_form, text_input,
    textarea_row,
};
use crate::db::venues::{Venue, VenueSummary};
use crate::views::{CityGroup, VenueDetail, VenueShow};

pub fn index_page(groups: &[CityGroup]) -> String {
    let mut body = String::from("<h2>Venues</h2>\n");
    body.push_str(&search_form("/venues/search", "", "Search venues by name"));
    body.push_str(r#"<p><a class="button" href="/venues/create">List a new venue</a></p>"#);

    if groups.is_empty() {
        body.push_str(r#"<p class="muted">No venues listed yet.</p>"#);
    }

    for group in groups {
        body.push_str(&format!(
            "<h3>{}, {}</h3>\n<ul class=\"records\">\n",
            escape_html(&group.city),
            escape_html(&group.state),
        ));
        for venue in &group.venues {
            body.push_str(&summary_row(venue));
        }
        body.push_str("</ul>\n");
    }

    layout("Venues", None, &body)
}

pub fn search_results_page(term: &str, results: &[VenueSummary]) -> String {
    let mut body = String::from("<h2>Venue search</h2>\n");
    body.push_str(&search_form("/venues/search", term, "Search venues by name"));
    body.push_str(&format!(
        "<p>{} result{} for &quot;{}&quot;</p>\n<ul class=\"records\">\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        escape_html(term),
    ));
    for venue in results {
        body.push_str(&summary_row(venue));
    }
    body.push_str("</ul>\n");

    layout("Venue search", None, &body)
}

fn summary_row(venue: &VenueSummary) -> String {
    format!(
        "<li><a href=\"/venues/{id}\">{name}</a><span class=\"count\">{count} upcoming show{plural}</span></li>\n",
        id = venue.id,
        name = escape_html(&venue.name),
        count = venue.num_upcoming_shows,
        plural = if venue.num_upcoming_shows == 1 { "" } else { "s" },
    )
}

pub fn detail_page(detail: &VenueDetail, flash: Option<&str>) -> String {
    let venue = &detail.venue;

    let genres: String = venue
        .genres
        .iter()
        .map(|g| format!("<span>{}</span>", escape_html(g)))
        .collect();

    let mut body = format!(
        r#"<h2>{name}</h2>
<div class="genres">{genres}</div>
<p>{address}<br>{city}, {state}</p>
<p>{phone}</p>
"#,
        name = escape_html(&venue.name),
        genres = genres,
        address = escape_html(&venue.address),
        city = escape_html(&venue.city),
        state = escape_html(&venue.state),
        phone = escape_html(&venue.phone),
    );

    if let Some(website) = &venue.website {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape_html(website)
        ));
    }
    if let Some(facebook) = &venue.facebook_link {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape_html(facebook)
        ));
    }
    if venue.seeking_talent {
        let description = venue.seeking_description.as_deref().unwrap_or("");
        body.push_str(&format!(
            "<div class=\"seeking\">Seeking talent: {}</div>\n",
            escape_html(description)
        ));
    }
    if let Some(image) = &venue.image_link {
        body.push_str(&format!(
            "<p><img src=\"{}\" alt=\"{}\" style=\"max-width: 320px;\"></p>\n",
            escape_html(image),
            escape_html(&venue.name),
        ));
    }

    body.push_str(&format!(
        "<h3>{} upcoming show{}</h3>\n",
        detail.upcoming_shows.len(),
        if detail.upcoming_shows.len() == 1 { "" } else { "s" },
    ));
    body.push_str(&show_rows(&detail.upcoming_shows));

    body.push_str(&format!(
        "<h3>{} past show{}</h3>\n",
        detail.past_shows.len(),
        if detail.past_shows.len() == 1 { "" } else { "s" },
    ));
    body.push_str(&show_rows(&detail.past_shows));

    body.push_str(&format!(
        r#"<div class="actions">
<a class="button" href="/venues/{id}/edit">Edit venue</a>
<button class="danger" onclick="deleteRecord({id})">Delete venue</button>
</div>
"#,
        id = venue.id,
    ));
    body.push_str(&delete_script("/venues", "Venue could not be deleted."));

    layout(&venue.name, flash, &body)
}

fn show_rows(shows: &[VenueShow]) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">Nothing here.</p>"#.to_string();
    }

    let mut html = String::from("<ul class=\"records\">\n");
    for show in shows {
        let image = show
            .artist_image_link
            .as_deref()
            .map(|link| format!("<img src=\"{}\" alt=\"\">", escape_html(link)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<li class=\"show-row\">{image}<a href=\"/artists/{artist_id}\">{artist_name}</a><span class=\"count\">{start_time}</span></li>\n",
            image = image,
            artist_id = show.artist_id,
            artist_name = escape_html(&show.artist_name),
            start_time = escape_html(&show.start_time),
        ));
    }
    html.push_str("</ul>\n");
    html
}

pub fn new_page() -> String {
    let body = format!(
        r#"<h2>List a new venue</h2>
<form method="post" action="/venues/create">
{fields}
<button type="submit">Create venue</button>
</form>"#,
        fields = form_fields(None),
    );

    layout("New venue", None, &body)
}

pub fn edit_page(venue: &Venue) -> String {
    let body = format!(
        r#"<h2>Edit {name}</h2>
<form method="post" action="/venues/{id}/edit">
{fields}
<button type="submit">Save changes</button>
</form>"#,
        name = escape_html(&venue.name),
        id = venue.id,
        fields = form_fields(Some(venue)),
    );

    layout("Edit venue", None, &body)
}

fn form_fields(venue: Option<&Venue>) -> String {
    let name = venue.map(|v| v.name.as_str()).unwrap_or("");
    let city = venue.map(|v| v.city.as_str()).unwrap_or("");
    let state = venue.map(|v| v.state.as_str()).unwrap_or("");
    let address = venue.map(|v| v.address.as_str()).unwrap_or("");
    let phone = venue.map(|v| v.phone.as_str()).unwrap_or("");
    let image_link = venue.and_then(|v| v.image_link.as_deref()).unwrap_or("");
    let facebook_link = venue.and_then(|v| v.facebook_link.as_deref()).unwrap_or("");
    let website = venue.and_then(|v| v.website.as_deref()).unwrap_or("");
    let seeking_talent = venue.map(|v| v.seeking_talent).unwrap_or(false);
    let seeking_description = venue
        .and_then(|v| v.seeking_description.as_deref())
        .unwrap_or("");
    let genres: &[String] = venue.map(|v| v.genres.as_slice()).unwrap_or(&[]);

    [
        text_input("Name", "name", name, true),
        text_input("City", "city", city, true),
        text_input("State", "state", state, true),
        text_input("Address", "address", address, true),
        text_input("Phone", "phone", phone, true),
        genre_select(genres),
        text_input("Image link", "image_link", image_link, false),
        text_input("Facebook link", "facebook_link", facebook_link, false),
        text_input("Website", "website", website, false),
        checkbox_row("Seeking talent", "seeking_talent", seeking_talent),
        textarea_row("Seeking description", "seeking_description", seeking_description),
    ]
    .join("\n")
}
