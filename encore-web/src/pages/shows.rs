//! Show pages: listing and the scheduling form

use super::{escape_html, layout, text_input};
use crate::views::ShowListItem;

pub fn index_page(shows: &[ShowListItem]) -> String {
    let mut body = String::from("<h2>Shows</h2>\n");
    body.push_str(r#"<p><a class="button" href="/shows/create">Schedule a show</a></p>"#);

    if shows.is_empty() {
        body.push_str(r#"<p class="muted">No shows scheduled yet.</p>"#);
    } else {
        body.push_str("<ul class=\"records\">\n");
        for show in shows {
            let image = show
                .artist_image_link
                .as_deref()
                .map(|link| format!("<img src=\"{}\" alt=\"\">", escape_html(link)))
                .unwrap_or_default();
            body.push_str(&format!(
                "<li class=\"show-row\">{image}<a href=\"/artists/{artist_id}\">{artist_name}</a> at <a href=\"/venues/{venue_id}\">{venue_name}</a><span class=\"count\">{start_time}</span></li>\n",
                image = image,
                artist_id = show.artist_id,
                artist_name = escape_html(&show.artist_name),
                venue_id = show.venue_id,
                venue_name = escape_html(&show.venue_name),
                start_time = escape_html(&show.start_time),
            ));
        }
        body.push_str("</ul>\n");
    }

    layout("Shows", None, &body)
}

pub fn new_page() -> String {
    let body = format!(
        r#"<h2>Schedule a show</h2>
<form method="post" action="/shows/create">
{venue_id}
{artist_id}
<div class="field"><label for="start_time">Start time</label>
<input type="datetime-local" id="start_time" name="start_time" required></div>
<button type="submit">Create show</button>
</form>"#,
        venue_id = text_input("Venue id", "venue_id", "", true),
        artist_id = text_input("Artist id", "artist_id", "", true),
    );

    layout("New show", None, &body)
}
