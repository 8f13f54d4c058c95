//! Artist database operations

use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};

use encore_common::date_display::to_sql_datetime;
use encore_common::Result;

use super::{decode_genres, encode_genres};

/// Artist record as stored
#[derive(Debug, Clone)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating or editing an artist
#[derive(Debug, Clone)]
pub struct NewArtist {
    pub name: String,
    pub city: String,
    pub state: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_venue: bool,
    pub seeking_description: Option<String>,
}

/// Bare listing row for the artists index
#[derive(Debug, Clone)]
pub struct ArtistRef {
    pub id: i64,
    pub name: String,
}

/// Search hit: artist plus its count of shows after `now`
#[derive(Debug, Clone)]
pub struct ArtistSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

fn artist_from_row(row: &sqlx::sqlite::SqliteRow) -> Artist {
    let genres: String = row.get("genres");

    Artist {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        phone: row.get("phone"),
        genres: decode_genres(&genres),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        seeking_venue: row.get("seeking_venue"),
        seeking_description: row.get("seeking_description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Insert an artist and return its generated id
pub async fn insert_artist(pool: &SqlitePool, artist: &NewArtist) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO artists (
            name, city, state, phone, genres,
            image_link, facebook_link, website, seeking_venue, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(encode_genres(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load an artist by id
pub async fn get_artist(pool: &SqlitePool, id: i64) -> Result<Option<Artist>> {
    let row = sqlx::query("SELECT * FROM artists WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(artist_from_row))
}

/// Overwrite every editable field; returns false when the id doesn't exist
pub async fn update_artist(pool: &SqlitePool, id: i64, artist: &NewArtist) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE artists SET
            name = ?, city = ?, state = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website = ?,
            seeking_venue = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&artist.name)
    .bind(&artist.city)
    .bind(&artist.state)
    .bind(&artist.phone)
    .bind(encode_genres(&artist.genres))
    .bind(&artist.image_link)
    .bind(&artist.facebook_link)
    .bind(&artist.website)
    .bind(artist.seeking_venue)
    .bind(&artist.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete an artist; dependent shows cascade. Returns false when the id
/// doesn't exist.
pub async fn delete_artist(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM artists WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Every artist, id and name only, for the index page
pub async fn list_artists(pool: &SqlitePool) -> Result<Vec<ArtistRef>> {
    let rows = sqlx::query_as::<_, (i64, String)>("SELECT id, name FROM artists ORDER BY name")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name)| ArtistRef { id, name })
        .collect())
}

/// Case-insensitive substring match on name; an empty term matches all
pub async fn search_artists(
    pool: &SqlitePool,
    term: &str,
    now: &NaiveDateTime,
) -> Result<Vec<ArtistSummary>> {
    let pattern = format!("%{}%", term);
    let rows = sqlx::query_as::<_, (i64, String, i64)>(
        "SELECT a.id, a.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.artist_id = a.id AND s.start_time > ?) AS num_upcoming_shows
         FROM artists a
         WHERE a.name LIKE ?
         ORDER BY a.name",
    )
    .bind(to_sql_datetime(now))
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, num_upcoming_shows)| ArtistSummary {
            id,
            name,
            num_upcoming_shows,
        })
        .collect())
}

/// Existence check used before scheduling a show
pub async fn artist_exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM artists WHERE id = ?)")
        .bind(id)
        .fetch_one(pool)
        .await?;

    Ok(exists)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::NaiveDate;
    use encore_common::db::init_memory_database;

    pub(crate) fn sample_artist(name: &str) -> NewArtist {
        NewArtist {
            name: name.to_string(),
            city: "San Francisco".to_string(),
            state: "CA".to_string(),
            phone: "555-0101".to_string(),
            genres: vec!["Rock n Roll".to_string()],
            image_link: Some("https://example.com/band.jpg".to_string()),
            facebook_link: None,
            website: None,
            seeking_venue: false,
            seeking_description: None,
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let pool = init_memory_database().await.unwrap();

        let id = insert_artist(&pool, &sample_artist("Guns N Petals")).await.unwrap();
        let artist = get_artist(&pool, id).await.unwrap().unwrap();

        assert_eq!(artist.name, "Guns N Petals");
        assert_eq!(artist.city, "San Francisco");
        assert_eq!(artist.genres, vec!["Rock n Roll"]);
        assert_eq!(artist.image_link.as_deref(), Some("https://example.com/band.jpg"));
        assert!(!artist.seeking_venue);
    }

    #[tokio::test]
    async fn test_update_and_delete() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_artist(&pool, &sample_artist("Before")).await.unwrap();

        let mut update = sample_artist("After");
        update.seeking_venue = true;
        update.seeking_description = Some("Any stage will do".to_string());
        assert!(update_artist(&pool, id, &update).await.unwrap());

        let artist = get_artist(&pool, id).await.unwrap().unwrap();
        assert_eq!(artist.name, "After");
        assert!(artist.seeking_venue);
        assert_eq!(artist.seeking_description.as_deref(), Some("Any stage will do"));

        assert!(delete_artist(&pool, id).await.unwrap());
        assert!(get_artist(&pool, id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_artists_is_id_and_name_only() {
        let pool = init_memory_database().await.unwrap();
        insert_artist(&pool, &sample_artist("Zeta")).await.unwrap();
        insert_artist(&pool, &sample_artist("Alpha")).await.unwrap();

        let artists = list_artists(&pool).await.unwrap();
        let names: Vec<&str> = artists.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "Zeta"]);
    }

    #[tokio::test]
    async fn test_search_matches_substring_any_case() {
        let pool = init_memory_database().await.unwrap();
        insert_artist(&pool, &sample_artist("Guns N Petals")).await.unwrap();
        insert_artist(&pool, &sample_artist("The Wild Sax Band")).await.unwrap();

        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let hits = search_artists(&pool, "GUNS", &now).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Guns N Petals");

        let all = search_artists(&pool, "", &now).await.unwrap();
        assert_eq!(all.len(), 2);
    }
}
