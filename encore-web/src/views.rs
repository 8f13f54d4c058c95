//! Typed view models for the rendered pages
//!
//! Each page gets an explicit struct instead of an ad hoc map; show rows
//! carry the counterpart entity's id/name/image denormalized, with the
//! start time already formatted for display.

use chrono::NaiveDateTime;

use crate::db::artists::Artist;
use crate::db::shows::{ShowListingRow, ShowWithArtist, ShowWithVenue};
use crate::db::venues::{Venue, VenueSummary};
use encore_common::date_display::format_start_time;

/// One (city, state) group on the venues index
#[derive(Debug)]
pub struct CityGroup {
    pub city: String,
    pub state: String,
    pub venues: Vec<VenueSummary>,
}

/// A show as rendered on a venue's detail page
#[derive(Debug)]
pub struct VenueShow {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowWithArtist> for VenueShow {
    fn from(show: ShowWithArtist) -> Self {
        VenueShow {
            artist_id: show.artist_id,
            artist_name: show.artist_name,
            artist_image_link: show.artist_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// A show as rendered on an artist's detail page
#[derive(Debug)]
pub struct ArtistShow {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowWithVenue> for ArtistShow {
    fn from(show: ShowWithVenue) -> Self {
        ArtistShow {
            venue_id: show.venue_id,
            venue_name: show.venue_name,
            venue_image_link: show.venue_image_link,
            start_time: format_start_time(&show.start_time),
        }
    }
}

/// Venue detail page: the record plus its shows split around `now`
#[derive(Debug)]
pub struct VenueDetail {
    pub venue: Venue,
    pub past_shows: Vec<VenueShow>,
    pub upcoming_shows: Vec<VenueShow>,
}

/// Artist detail page: the record plus its shows split around `now`
#[derive(Debug)]
pub struct ArtistDetail {
    pub artist: Artist,
    pub past_shows: Vec<ArtistShow>,
    pub upcoming_shows: Vec<ArtistShow>,
}

/// One row of the shows listing
#[derive(Debug)]
pub struct ShowListItem {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: String,
}

impl From<ShowListingRow> for ShowListItem {
    fn from(row: ShowListingRow) -> Self {
        ShowListItem {
            venue_id: row.venue_id,
            venue_name: row.venue_name,
            artist_id: row.artist_id,
            artist_name: row.artist_name,
            artist_image_link: row.artist_image_link,
            start_time: format_start_time(&row.start_time),
        }
    }
}

/// Split shows into (past, upcoming) around `now`.
///
/// A show strictly before `now` is past; everything else, including a show
/// starting exactly at `now`, is upcoming. Every show lands in exactly one
/// bucket.
pub fn split_past_upcoming<T>(
    items: Vec<T>,
    now: NaiveDateTime,
    start_time: impl Fn(&T) -> NaiveDateTime,
) -> (Vec<T>, Vec<T>) {
    let mut past = Vec::new();
    let mut upcoming = Vec::new();

    for item in items {
        if start_time(&item) < now {
            past.push(item);
        } else {
            upcoming.push(item);
        }
    }

    (past, upcoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn dt(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_split_is_a_partition() {
        let now = dt(15, 12);
        let shows = vec![dt(14, 12), dt(15, 11), dt(15, 13), dt(16, 12)];

        let (past, upcoming) = split_past_upcoming(shows.clone(), now, |s| *s);

        assert_eq!(past, vec![dt(14, 12), dt(15, 11)]);
        assert_eq!(upcoming, vec![dt(15, 13), dt(16, 12)]);
        assert_eq!(past.len() + upcoming.len(), shows.len());
    }

    #[test]
    fn test_show_starting_exactly_now_is_upcoming() {
        let now = dt(15, 12);
        let (past, upcoming) = split_past_upcoming(vec![now], now, |s| *s);

        assert!(past.is_empty());
        assert_eq!(upcoming, vec![now]);
    }
}
