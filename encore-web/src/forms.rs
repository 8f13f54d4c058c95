//! Typed form payloads for the create/edit/search submissions
//!
//! Bodies are `application/x-www-form-urlencoded`; multi-selects arrive as
//! repeated keys (`genres=Jazz&genres=Folk`), which `serde_html_form`
//! collects into a `Vec`. Checkboxes are presence flags: any submitted
//! value means checked, absence means unchecked.

use chrono::NaiveDateTime;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::db::artists::NewArtist;
use crate::db::venues::NewVenue;
use encore_common::date_display::parse_form_datetime;

/// Decode an urlencoded form body into a typed form struct
pub fn parse_form<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, String> {
    serde_html_form::from_bytes(bytes).map_err(|err| err.to_string())
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Optional display fields: empty submission becomes NULL
fn none_if_blank(value: String) -> Option<String> {
    if is_blank(&value) {
        None
    } else {
        Some(value)
    }
}

/// Search box submission; an absent or empty term matches everything
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Venue create/edit submission
#[derive(Debug, Deserialize)]
pub struct VenueForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub seeking_talent: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl VenueForm {
    /// Check required fields and convert into the persistence shape.
    ///
    /// Values are stored exactly as submitted; validation only rejects
    /// blank required fields and an empty genre selection.
    pub fn validate(self) -> Result<NewVenue, Vec<String>> {
        let mut problems = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("address", &self.address),
            ("phone", &self.phone),
        ] {
            if is_blank(value) {
                problems.push(format!("{} is required", field));
            }
        }

        let genres: Vec<String> = self.genres.into_iter().filter(|g| !is_blank(g)).collect();
        if genres.is_empty() {
            problems.push("at least one genre is required".to_string());
        }

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(NewVenue {
            name: self.name,
            city: self.city,
            state: self.state,
            address: self.address,
            phone: self.phone,
            genres,
            image_link: none_if_blank(self.image_link),
            facebook_link: none_if_blank(self.facebook_link),
            website: none_if_blank(self.website),
            seeking_talent: self.seeking_talent.is_some(),
            seeking_description: none_if_blank(self.seeking_description),
        })
    }
}

/// Artist create/edit submission (venue shape minus address)
#[derive(Debug, Deserialize)]
pub struct ArtistForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub image_link: String,
    #[serde(default)]
    pub facebook_link: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub seeking_venue: Option<String>,
    #[serde(default)]
    pub seeking_description: String,
}

impl ArtistForm {
    pub fn validate(self) -> Result<NewArtist, Vec<String>> {
        let mut problems = Vec::new();

        for (field, value) in [
            ("name", &self.name),
            ("city", &self.city),
            ("state", &self.state),
            ("phone", &self.phone),
        ] {
            if is_blank(value) {
                problems.push(format!("{} is required", field));
            }
        }

        let genres: Vec<String> = self.genres.into_iter().filter(|g| !is_blank(g)).collect();
        if genres.is_empty() {
            problems.push("at least one genre is required".to_string());
        }

        if !problems.is_empty() {
            return Err(problems);
        }

        Ok(NewArtist {
            name: self.name,
            city: self.city,
            state: self.state,
            phone: self.phone,
            genres,
            image_link: none_if_blank(self.image_link),
            facebook_link: none_if_blank(self.facebook_link),
            website: none_if_blank(self.website),
            seeking_venue: self.seeking_venue.is_some(),
            seeking_description: none_if_blank(self.seeking_description),
        })
    }
}

/// Show create submission
#[derive(Debug, Deserialize)]
pub struct ShowForm {
    #[serde(default)]
    pub venue_id: String,
    #[serde(default)]
    pub artist_id: String,
    #[serde(default)]
    pub start_time: String,
}

/// Validated show submission
#[derive(Debug, Clone, Copy)]
pub struct NewShow {
    pub venue_id: i64,
    pub artist_id: i64,
    pub start_time: NaiveDateTime,
}

impl ShowForm {
    pub fn validate(self) -> Result<NewShow, Vec<String>> {
        let mut problems = Vec::new();

        let venue_id = self.venue_id.trim().parse::<i64>();
        if venue_id.is_err() {
            problems.push("venue id must be a number".to_string());
        }

        let artist_id = self.artist_id.trim().parse::<i64>();
        if artist_id.is_err() {
            problems.push("artist id must be a number".to_string());
        }

        let start_time = parse_form_datetime(&self.start_time);
        if start_time.is_none() {
            problems.push("start time must be a valid date and time".to_string());
        }

        match (venue_id, artist_id, start_time) {
            (Ok(venue_id), Ok(artist_id), Some(start_time)) => Ok(NewShow {
                venue_id,
                artist_id,
                start_time,
            }),
            _ => Err(problems),
        }
    }
}
