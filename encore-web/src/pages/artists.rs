//! Artist pages: index, search results, detail, create/edit forms

use super::{
    checkbox_row, delete_script, escape_html, genre_select, layout, search_form, text_input,
    textarea_row,
};
use crate::db::artists::{Artist, ArtistRef, ArtistSummary};
use crate::views::{ArtistDetail, ArtistShow};

pub fn index_page(artists: &[ArtistRef]) -> String {
    let mut body = String::from("<h2>Artists</h2>\n");
    body.push_str(&search_form("/artists/search", "", "Search artists by name"));
    body.push_str(r#"<p><a class="button" href="/artists/create">List a new artist</a></p>"#);

    if artists.is_empty() {
        body.push_str(r#"<p class="muted">No artists listed yet.</p>"#);
    } else {
        body.push_str("<ul class=\"records\">\n");
        for artist in artists {
            body.push_str(&format!(
                "<li><a href=\"/artists/{}\">{}</a></li>\n",
                artist.id,
                escape_html(&artist.name),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Artists", None, &body)
}

pub fn search_results_page(term: &str, results: &[ArtistSummary]) -> String {
    let mut body = String::from("<h2>Artist search</h2>\n");
    body.push_str(&search_form("/artists/search", term, "Search artists by name"));
    body.push_str(&format!(
        "<p>{} result{} for &quot;{}&quot;</p>\n<ul class=\"records\">\n",
        results.len(),
        if results.len() == 1 { "" } else { "s" },
        escape_html(term),
    ));
    for artist in results {
        body.push_str(&format!(
            "<li><a href=\"/artists/{id}\">{name}</a><span class=\"count\">{count} upcoming show{plural}</span></li>\n",
            id = artist.id,
            name = escape_html(&artist.name),
            count = artist.num_upcoming_shows,
            plural = if artist.num_upcoming_shows == 1 { "" } else { "s" },
        ));
    }
    body.push_str("</ul>\n");

    layout("Artist search", None, &body)
}

pub fn detail_page(detail: &ArtistDetail, flash: Option<&str>) -> String {
    let artist = &detail.artist;

    let genres: String = artist
        .genres
        .iter()
        .map(|g| format!("<span>{}</span>", escape_html(g)))
        .collect();

    let mut body = format!(
        r#"<h2>{name}</h2>
<div class="genres">{genres}</div>
<p>{city}, {state}</p>
<p>{phone}</p>
"#,
        name = escape_html(&artist.name),
        genres = genres,
        city = escape_html(&artist.city),
        state = escape_html(&artist.state),
        phone = escape_html(&artist.phone),
    );

    if let Some(website) = &artist.website {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape_html(website)
        ));
    }
    if let Some(facebook) = &artist.facebook_link {
        body.push_str(&format!(
            "<p><a href=\"{0}\">{0}</a></p>\n",
            escape_html(facebook)
        ));
    }
    if artist.seeking_venue {
        let description = artist.seeking_description.as_deref().unwrap_or("");
        body.push_str(&format!(
            "<div class=\"seeking\">Seeking a venue: {}</div>\n",
            escape_html(description)
        ));
    }
    if let Some(image) = &artist.image_link {
        body.push_str(&format!(
            "<p><img src=\"{}\" alt=\"{}\" style=\"max-width: 320px;\"></p>\n",
            escape_html(image),
            escape_html(&artist.name),
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
<a class="button" href="/artists/{id}/edit">Edit artist</a>
<button class="danger" onclick="deleteRecord({id})">Delete artist</button>
</div>
"#,
        id = artist.id,
    ));
    body.push_str(&delete_script("/artists", "Artist could not be deleted."));

    layout(&artist.name, flash, &body)
}

fn show_rows(shows: &[ArtistShow]) -> String {
    if shows.is_empty() {
        return r#"<p class="muted">Nothing here.</p>"#.to_string();
    }

    let mut html = String::from("<ul class=\"records\">\n");
    for show in shows {
        let image = show
            .venue_image_link
            .as_deref()
            .map(|link| format!("<img src=\"{}\" alt=\"\">", escape_html(link)))
            .unwrap_or_default();
        html.push_str(&format!(
            "<li class=\"show-row\">{image}<a href=\"/venues/{venue_id}\">{venue_name}</a><span class=\"count\">{start_time}</span></li>\n",
            image = image,
            venue_id = show.venue_id,
            venue_name = escape_html(&show.venue_name),
            start_time = escape_html(&show.start_time),
        ));
    }
    html.push_str("</ul>\n");
    html
}

pub fn new_page() -> String {
    let body = format!(
        r#"<h2>List a new artist</h2>
<form method="post" action="/artists/create">
{fields}
<button type="submit">Create artist</button>
</form>"#,
        fields = form_fields(None),
    );

    layout("New artist", None, &body)
}

pub fn edit_page(artist: &Artist) -> String {
    let body = format!(
        r#"<h2>Edit {name}</h2>
<form method="post" action="/artists/{id}/edit">
{fields}
<button type="submit">Save changes</button>
</form>"#,
        name = escape_html(&artist.name),
        id = artist.id,
        fields = form_fields(Some(artist)),
    );

    layout("Edit artist", None, &body)
}

fn form_fields(artist: Option<&Artist>) -> String {
    let name = artist.map(|a| a.name.as_str()).unwrap_or("");
    let city = artist.map(|a| a.city.as_str()).unwrap_or("");
    let state = artist.map(|a| a.state.as_str()).unwrap_or("");
    let phone = artist.map(|a| a.phone.as_str()).unwrap_or("");
    let image_link = artist.and_then(|a| a.image_link.as_deref()).unwrap_or("");
    let facebook_link = artist.and_then(|a| a.facebook_link.as_deref()).unwrap_or("");
    let website = artist.and_then(|a| a.website.as_deref()).unwrap_or("");
    let seeking_venue = artist.map(|a| a.seeking_venue).unwrap_or(false);
    let seeking_description = artist
        .and_then(|a| a.seeking_description.as_deref())
        .unwrap_or("");
    let genres: &[String] = artist.map(|a| a.genres.as_slice()).unwrap_or(&[]);

    [
        text_input("Name", "name", name, true),
        text_input("City", "city", city, true),
        text_input("State", "state", state, true),
        text_input("Phone", "phone", phone, true),
        genre_select(genres),
        text_input("Image link", "image_link", image_link, false),
        text_input("Facebook link", "facebook_link", facebook_link, false),
        text_input("Website", "website", website, false),
        checkbox_row("Seeking a venue", "seeking_venue", seeking_venue),
        textarea_row("Seeking description", "seeking_description", seeking_description),
    ]
    .join("\n")
}
