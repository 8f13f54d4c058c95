//! Show database operations
//!
//! Shows are create-only: no edit or delete surface. They disappear when
//! either owner (venue or artist) is deleted, via the cascading foreign
//! keys declared in the schema.

use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};

use encore_common::date_display::{parse_sql_datetime, to_sql_datetime};
use encore_common::{Error, Result};

/// Show joined with its artist, for a venue's detail page
#[derive(Debug, Clone)]
pub struct ShowWithArtist {
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Show joined with its venue, for an artist's detail page
#[derive(Debug, Clone)]
pub struct ShowWithVenue {
    pub venue_id: i64,
    pub venue_name: String,
    pub venue_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

/// Fully denormalized row for the shows listing
#[derive(Debug, Clone)]
pub struct ShowListingRow {
    pub venue_id: i64,
    pub venue_name: String,
    pub artist_id: i64,
    pub artist_name: String,
    pub artist_image_link: Option<String>,
    pub start_time: NaiveDateTime,
}

fn parse_start_time(text: String) -> Result<NaiveDateTime> {
    parse_sql_datetime(&text)
        .ok_or_else(|| Error::Internal(format!("unparseable start_time in shows table: {}", text)))
}

/// Whether a database error is the FOREIGN KEY constraint firing
pub fn is_foreign_key_violation(err: &Error) -> bool {
    matches!(
        err,
        Error::Database(sqlx::Error::Database(db_err))
            if db_err.message().contains("FOREIGN KEY")
    )
}

/// Insert a show and return its generated id
///
/// Fails with a FOREIGN KEY violation when either referenced id does not
/// exist; callers surface that as invalid input.
pub async fn insert_show(
    pool: &SqlitePool,
    venue_id: i64,
    artist_id: i64,
    start_time: &NaiveDateTime,
) -> Result<i64> {
    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (?, ?, ?)",
    )
    .bind(venue_id)
    .bind(artist_id)
    .bind(to_sql_datetime(start_time))
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// All shows booked at one venue, joined with the performing artist
pub async fn shows_for_venue(pool: &SqlitePool, venue_id: i64) -> Result<Vec<ShowWithArtist>> {
    let rows = sqlx::query(
        "SELECT s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link, s.start_time
         FROM shows s
         JOIN artists a ON a.id = s.artist_id
         WHERE s.venue_id = ?
         ORDER BY s.start_time",
    )
    .bind(venue_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(ShowWithArtist {
                artist_id: row.get("artist_id"),
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: parse_start_time(row.get("start_time"))?,
            })
        })
        .collect()
}

/// All shows booked for one artist, joined with the hosting venue
pub async fn shows_for_artist(pool: &SqlitePool, artist_id: i64) -> Result<Vec<ShowWithVenue>> {
    let rows = sqlx::query(
        "SELECT s.venue_id, v.name AS venue_name, v.image_link AS venue_image_link, s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         WHERE s.artist_id = ?
         ORDER BY s.start_time",
    )
    .bind(artist_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(ShowWithVenue {
                venue_id: row.get("venue_id"),
                venue_name: row.get("venue_name"),
                venue_image_link: row.get("venue_image_link"),
                start_time: parse_start_time(row.get("start_time"))?,
            })
        })
        .collect()
}

/// Every show with venue and artist denormalized, for the shows listing
pub async fn all_shows(pool: &SqlitePool) -> Result<Vec<ShowListingRow>> {
    let rows = sqlx::query(
        "SELECT s.venue_id, v.name AS venue_name,
                s.artist_id, a.name AS artist_name, a.image_link AS artist_image_link,
                s.start_time
         FROM shows s
         JOIN venues v ON v.id = s.venue_id
         JOIN artists a ON a.id = s.artist_id
         ORDER BY s.start_time",
    )
    .fetch_all(pool)
    .await?;

    rows.into_iter()
        .map(|row| {
            Ok(ShowListingRow {
                venue_id: row.get("venue_id"),
                venue_name: row.get("venue_name"),
                artist_id: row.get("artist_id"),
                artist_name: row.get("artist_name"),
                artist_image_link: row.get("artist_image_link"),
                start_time: parse_start_time(row.get("start_time"))?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::artists::{insert_artist, tests::sample_artist};
    use crate::db::venues::{delete_venue, insert_venue, tests::sample_venue};
    use chrono::NaiveDate;
    use encore_common::db::init_memory_database;

    fn dt(y: i32, mo: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(20, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_join_back() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = insert_venue(&pool, &sample_venue("The Dive", "Oakland", "CA"))
            .await
            .unwrap();
        let artist_id = insert_artist(&pool, &sample_artist("Guns N Petals"))
            .await
            .unwrap();

        insert_show(&pool, venue_id, artist_id, &dt(2030, 5, 1)).await.unwrap();

        let at_venue = shows_for_venue(&pool, venue_id).await.unwrap();
        assert_eq!(at_venue.len(), 1);
        assert_eq!(at_venue[0].artist_name, "Guns N Petals");
        assert_eq!(at_venue[0].start_time, dt(2030, 5, 1));

        let by_artist = shows_for_artist(&pool, artist_id).await.unwrap();
        assert_eq!(by_artist.len(), 1);
        assert_eq!(by_artist[0].venue_name, "The Dive");

        let listing = all_shows(&pool).await.unwrap();
        assert_eq!(listing.len(), 1);
        assert_eq!(listing[0].venue_name, "The Dive");
        assert_eq!(listing[0].artist_name, "Guns N Petals");
    }

    #[tokio::test]
    async fn test_insert_with_missing_owner_is_rejected() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = insert_venue(&pool, &sample_venue("The Dive", "Oakland", "CA"))
            .await
            .unwrap();

        let err = insert_show(&pool, venue_id, 999, &dt(2030, 5, 1))
            .await
            .unwrap_err();
        assert!(is_foreign_key_violation(&err));
    }

    #[tokio::test]
    async fn test_deleting_venue_cascades_to_shows() {
        let pool = init_memory_database().await.unwrap();
        let venue_id = insert_venue(&pool, &sample_venue("The Dive", "Oakland", "CA"))
            .await
            .unwrap();
        let artist_id = insert_artist(&pool, &sample_artist("Guns N Petals"))
            .await
            .unwrap();
        insert_show(&pool, venue_id, artist_id, &dt(2030, 5, 1)).await.unwrap();

        assert!(delete_venue(&pool, venue_id).await.unwrap());

        // No orphaned rows survive the delete
        let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shows")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(remaining, 0);
    }
}
