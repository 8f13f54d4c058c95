//! Server-rendered HTML pages
//!
//! Pages are assembled with `format!` against a shared layout and
//! stylesheet. Every piece of user-supplied text goes through
//! `escape_html` before it lands in markup.

pub mod artists;
pub mod shows;
pub mod venues;

/// Genre choices offered by the create/edit forms
pub const GENRES: &[&str] = &[
    "Alternative",
    "Blues",
    "Classical",
    "Country",
    "Electronic",
    "Folk",
    "Funk",
    "Hip-Hop",
    "Heavy Metal",
    "Instrumental",
    "Jazz",
    "Musical Theatre",
    "Pop",
    "Punk",
    "R&B",
    "Reggae",
    "Rock n Roll",
    "Soul",
    "Other",
];

const STYLESHEET: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body {
    font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif;
    background-color: #1a1a1a;
    color: #e0e0e0;
    line-height: 1.6;
}
header {
    background-color: #2a2a2a;
    border-bottom: 1px solid #3a3a3a;
    padding: 16px 24px;
    display: flex;
    align-items: baseline;
    gap: 24px;
}
header .brand { font-size: 22px; color: #4a9eff; font-weight: 600; text-decoration: none; }
header nav a { color: #9ab; margin-right: 16px; text-decoration: none; }
header nav a:hover { color: #4a9eff; }
.container { max-width: 860px; margin: 0 auto; padding: 24px; }
h2 { color: #4a9eff; margin-bottom: 12px; }
h3 { margin: 18px 0 6px; color: #cde; }
a { color: #4a9eff; }
ul.records { list-style: none; }
ul.records li { padding: 6px 0; border-bottom: 1px solid #2a2a2a; }
.count { color: #888; font-size: 14px; margin-left: 8px; }
.flash {
    max-width: 860px;
    margin: 16px auto 0;
    padding: 10px 16px;
    background-color: #24384a;
    border: 1px solid #4a9eff;
    border-radius: 4px;
}
.field { margin-bottom: 14px; }
.field label { display: block; margin-bottom: 4px; color: #9ab; }
.field input[type="text"], .field select, .field textarea {
    width: 100%;
    padding: 8px;
    background-color: #242424;
    color: #e0e0e0;
    border: 1px solid #3a3a3a;
    border-radius: 4px;
}
.field.checkbox label { display: inline; margin-left: 6px; }
button, .button {
    display: inline-block;
    padding: 8px 16px;
    background-color: #4a9eff;
    color: #101418;
    border: none;
    border-radius: 4px;
    font-size: 15px;
    text-decoration: none;
    cursor: pointer;
}
button.danger { background-color: #d9534f; color: #fff; }
.search-form { display: flex; gap: 8px; margin: 12px 0 20px; }
.search-form input { flex: 1; padding: 8px; background-color: #242424; color: #e0e0e0; border: 1px solid #3a3a3a; border-radius: 4px; }
.genres span {
    display: inline-block;
    background-color: #2e2e2e;
    border-radius: 10px;
    padding: 2px 10px;
    margin-right: 6px;
    font-size: 13px;
}
.seeking { margin: 10px 0; padding: 8px 12px; background-color: #223322; border-radius: 4px; }
.muted { color: #888; }
.actions { margin-top: 20px; display: flex; gap: 12px; }
.show-row img { height: 40px; width: 40px; object-fit: cover; border-radius: 4px; vertical-align: middle; margin-right: 10px; }
.error-page { text-align: center; padding: 60px 0; }
.error-page .code { font-size: 64px; color: #4a9eff; }
"#;

/// Escape text for interpolation into HTML
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Shared page chrome; `body` is already-rendered HTML
pub fn layout(title: &str, flash: Option<&str>, body: &str) -> String {
    let flash_html = match flash {
        Some(message) => format!(r#"<div class="flash">{}</div>"#, escape_html(message)),
        None => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title} | Encore</title>
<style>{css}</style>
</head>
<body>
<header>
<a class="brand" href="/">Encore</a>
<nav>
<a href="/venues">Venues</a>
<a href="/artists">Artists</a>
<a href="/shows">Shows</a>
</nav>
</header>
{flash}
<main class="container">
{body}
</main>
</body>
</html>"#,
        title = escape_html(title),
        css = STYLESHEET,
        flash = flash_html,
        body = body,
    )
}

/// GET / body
pub fn home_page(flash: Option<&str>) -> String {
    layout(
        "Home",
        flash,
        r#"<h2>Find your next show</h2>
<p>Encore pairs venues with artists. Browse what's booked, or add your own listing.</p>
<div class="actions">
<a class="button" href="/venues/create">List a venue</a>
<a class="button" href="/artists/create">List an artist</a>
<a class="button" href="/shows/create">Schedule a show</a>
</div>"#,
    )
}

pub fn not_found_page() -> String {
    layout(
        "Not Found",
        None,
        r#"<div class="error-page">
<div class="code">404</div>
<p>That record doesn't exist. It may have been removed.</p>
<p><a href="/">Back to the home page</a></p>
</div>"#,
    )
}

pub fn bad_request_page(reason: &str) -> String {
    let body = format!(
        r#"<div class="error-page">
<div class="code">400</div>
<p>{}</p>
<p><a href="/">Back to the home page</a></p>
</div>"#,
        escape_html(reason)
    );
    layout("Bad Request", None, &body)
}

pub fn server_error_page() -> String {
    layout(
        "Server Error",
        None,
        r#"<div class="error-page">
<div class="code">500</div>
<p>Something went wrong on our side. Please try again.</p>
<p><a href="/">Back to the home page</a></p>
</div>"#,
    )
}

// ---- form building blocks ----

pub(crate) fn text_input(label: &str, name: &str, value: &str, required: bool) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label>
<input type="text" id="{name}" name="{name}" value="{value}"{required}></div>"#,
        name = name,
        label = label,
        value = escape_html(value),
        required = if required { " required" } else { "" },
    )
}

pub(crate) fn genre_select(selected: &[String]) -> String {
    let mut options = String::new();
    for genre in GENRES {
        let selected_attr = if selected.iter().any(|s| s == genre) {
            " selected"
        } else {
            ""
        };
        options.push_str(&format!(
            r#"<option value="{genre}"{selected}>{genre}</option>"#,
            genre = escape_html(genre),
            selected = selected_attr,
        ));
    }

    format!(
        r#"<div class="field"><label for="genres">Genres (pick at least one)</label>
<select id="genres" name="genres" multiple size="8">{}</select></div>"#,
        options
    )
}

pub(crate) fn checkbox_row(label: &str, name: &str, checked: bool) -> String {
    format!(
        r#"<div class="field checkbox"><input type="checkbox" id="{name}" name="{name}" value="y"{checked}><label for="{name}">{label}</label></div>"#,
        name = name,
        label = label,
        checked = if checked { " checked" } else { "" },
    )
}

pub(crate) fn textarea_row(label: &str, name: &str, value: &str) -> String {
    format!(
        r#"<div class="field"><label for="{name}">{label}</label>
<textarea id="{name}" name="{name}" rows="3">{value}</textarea></div>"#,
        name = name,
        label = label,
        value = escape_html(value),
    )
}

/// Delete button wiring: DELETE the record, then go home
pub(crate) fn delete_script(path_prefix: &str, failure_message: &str) -> String {
    format!(
        r#"<script>
function deleteRecord(id) {{
  fetch('{path_prefix}/' + id, {{ method: 'DELETE' }}).then(function (resp) {{
    if (resp.ok) {{ window.location.href = '/'; }} else {{ alert('{failure_message}'); }}
  }});
}}
</script>"#,
        path_prefix = path_prefix,
        failure_message = failure_message,
    )
}

pub(crate) fn search_form(action: &str, term: &str, placeholder: &str) -> String {
    format!(
        r#"<form class="search-form" method="post" action="{action}">
<input type="search" name="search_term" value="{term}" placeholder="{placeholder}">
<button type="submit">Search</button>
</form>"#,
        action = action,
        term = escape_html(term),
        placeholder = placeholder,
    )
}
