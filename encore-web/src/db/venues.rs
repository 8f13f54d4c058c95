//! Venue database operations

use chrono::NaiveDateTime;
use sqlx::{Row, SqlitePool};

use encore_common::date_display::to_sql_datetime;
use encore_common::Result;

use super::{decode_genres, encode_genres};

/// Venue record as stored
#[derive(Debug, Clone)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Fields accepted when creating or editing a venue
#[derive(Debug, Clone)]
pub struct NewVenue {
    pub name: String,
    pub city: String,
    pub state: String,
    pub address: String,
    pub phone: String,
    pub genres: Vec<String>,
    pub image_link: Option<String>,
    pub facebook_link: Option<String>,
    pub website: Option<String>,
    pub seeking_talent: bool,
    pub seeking_description: Option<String>,
}

/// Listing row: venue plus its count of shows after `now`
#[derive(Debug, Clone)]
pub struct VenueSummary {
    pub id: i64,
    pub name: String,
    pub num_upcoming_shows: i64,
}

impl From<(i64, String, i64)> for VenueSummary {
    fn from((id, name, num_upcoming_shows): (i64, String, i64)) -> Self {
        VenueSummary {
            id,
            name,
            num_upcoming_shows,
        }
    }
}

fn venue_from_row(row: &sqlx::sqlite::SqliteRow) -> Venue {
    let genres: String = row.get("genres");

    Venue {
        id: row.get("id"),
        name: row.get("name"),
        city: row.get("city"),
        state: row.get("state"),
        address: row.get("address"),
        phone: row.get("phone"),
        genres: decode_genres(&genres),
        image_link: row.get("image_link"),
        facebook_link: row.get("facebook_link"),
        website: row.get("website"),
        seeking_talent: row.get("seeking_talent"),
        seeking_description: row.get("seeking_description"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}

/// Insert a venue and return its generated id
pub async fn insert_venue(pool: &SqlitePool, venue: &NewVenue) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO venues (
            name, city, state, address, phone, genres,
            image_link, facebook_link, website, seeking_talent, seeking_description
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(encode_genres(&venue.genres))
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Load a venue by id
pub async fn get_venue(pool: &SqlitePool, id: i64) -> Result<Option<Venue>> {
    let row = sqlx::query("SELECT * FROM venues WHERE id = ?")
        .bind(id)
        .fetch_optional(pool)
        .await?;

    Ok(row.as_ref().map(venue_from_row))
}

/// Overwrite every editable field; returns false when the id doesn't exist
pub async fn update_venue(pool: &SqlitePool, id: i64, venue: &NewVenue) -> Result<bool> {
    let result = sqlx::query(
        r#"
        UPDATE venues SET
            name = ?, city = ?, state = ?, address = ?, phone = ?, genres = ?,
            image_link = ?, facebook_link = ?, website = ?,
            seeking_talent = ?, seeking_description = ?,
            updated_at = CURRENT_TIMESTAMP
        WHERE id = ?
        "#,
    )
    .bind(&venue.name)
    .bind(&venue.city)
    .bind(&venue.state)
    .bind(&venue.address)
    .bind(&venue.phone)
    .bind(encode_genres(&venue.genres))
    .bind(&venue.image_link)
    .bind(&venue.facebook_link)
    .bind(&venue.website)
    .bind(venue.seeking_talent)
    .bind(&venue.seeking_description)
    .bind(id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete a venue; dependent shows cascade. Returns false when the id
/// doesn't exist.
pub async fn delete_venue(pool: &SqlitePool, id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM venues WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Distinct (city, state) pairs with at least one venue
pub async fn localities(pool: &SqlitePool) -> Result<Vec<(String, String)>> {
    let rows = sqlx::query_as::<_, (String, String)>(
        "SELECT DISTINCT city, state FROM venues ORDER BY state, city",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Venues in one (city, state) group, each with its upcoming-show count
pub async fn in_locality(
    pool: &SqlitePool,
    city: &str,
    state: &str,
    now: &NaiveDateTime,
) -> Result<Vec<VenueSummary>> {
    let rows = sqlx::query_as::<_, (i64, String, i64)>(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         WHERE v.city = ? AND v.state = ?
         ORDER BY v.name",
    )
    .bind(to_sql_datetime(now))
    .bind(city)
    .bind(state)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(VenueSummary::from).collect())
}

/// Case-insensitive substring match on name; an empty term matches all
pub async fn search_venues(
    pool: &SqlitePool,
    term: &str,
    now: &NaiveDateTime,
) -> Result<Vec<VenueSummary>> {
    let pattern = format!("%{}%", term);
    let rows = sqlx::query_as::<_, (i64, String, i64)>(
        "SELECT v.id, v.name,
                (SELECT COUNT(*) FROM shows s
                 WHERE s.venue_id = v.id AND s.start_time > ?) AS num_upcoming_shows
         FROM venues v
         WHERE v.name LIKE ?
         ORDER BY v.name",
    )
    .bind(to_sql_datetime(now))
    .bind(pattern)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(VenueSummary::from).collect())
}

/// Existence check used before scheduling a show
pub async fn venue_exists(pool: &SqlitePool, id: i64) -> Result<bool> {
    let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM venues WHERE id = ?)")
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

    pub(crate) fn sample_venue(name: &str, city: &str, state: &str) -> NewVenue {
        NewVenue {
            name: name.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            address: "123 Main St".to_string(),
            phone: "555-0100".to_string(),
            genres: vec!["Jazz".to_string(), "Folk".to_string()],
            image_link: None,
            facebook_link: Some("https://facebook.com/test".to_string()),
            website: None,
            seeking_talent: true,
            seeking_description: Some("Looking for weekend acts".to_string()),
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_roundtrip() {
        let pool = init_memory_database().await.unwrap();
        let new_venue = sample_venue("The Dive", "Oakland", "CA");

        let id = insert_venue(&pool, &new_venue).await.unwrap();
        let venue = get_venue(&pool, id).await.unwrap().unwrap();

        assert_eq!(venue.name, "The Dive");
        assert_eq!(venue.city, "Oakland");
        assert_eq!(venue.state, "CA");
        assert_eq!(venue.address, "123 Main St");
        assert_eq!(venue.phone, "555-0100");
        assert_eq!(venue.genres, vec!["Jazz", "Folk"]);
        assert_eq!(venue.image_link, None);
        assert_eq!(venue.facebook_link.as_deref(), Some("https://facebook.com/test"));
        assert!(venue.seeking_talent);
        assert_eq!(venue.seeking_description.as_deref(), Some("Looking for weekend acts"));
        assert!(!venue.created_at.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_venue() {
        let pool = init_memory_database().await.unwrap();
        assert!(get_venue(&pool, 42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_reflects_all_fields() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_venue(&pool, &sample_venue("Old Name", "Oakland", "CA"))
            .await
            .unwrap();

        let mut update = sample_venue("New Name", "Portland", "OR");
        update.genres = vec!["Blues".to_string()];
        update.seeking_talent = false;
        assert!(update_venue(&pool, id, &update).await.unwrap());

        let venue = get_venue(&pool, id).await.unwrap().unwrap();
        assert_eq!(venue.name, "New Name");
        assert_eq!(venue.city, "Portland");
        assert_eq!(venue.state, "OR");
        assert_eq!(venue.genres, vec!["Blues"]);
        assert!(!venue.seeking_talent);
    }

    #[tokio::test]
    async fn test_update_missing_venue_returns_false() {
        let pool = init_memory_database().await.unwrap();
        let update = sample_venue("Nobody", "Nowhere", "XX");
        assert!(!update_venue(&pool, 42, &update).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_venue() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_venue(&pool, &sample_venue("Doomed", "Oakland", "CA"))
            .await
            .unwrap();

        assert!(delete_venue(&pool, id).await.unwrap());
        assert!(get_venue(&pool, id).await.unwrap().is_none());
        assert!(!delete_venue(&pool, id).await.unwrap());
    }

    #[tokio::test]
    async fn test_localities_are_distinct_pairs() {
        let pool = init_memory_database().await.unwrap();
        insert_venue(&pool, &sample_venue("A", "Portland", "OR")).await.unwrap();
        insert_venue(&pool, &sample_venue("B", "Portland", "OR")).await.unwrap();
        insert_venue(&pool, &sample_venue("C", "Portland", "ME")).await.unwrap();

        let pairs = localities(&pool).await.unwrap();
        assert_eq!(
            pairs,
            vec![
                ("Portland".to_string(), "ME".to_string()),
                ("Portland".to_string(), "OR".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_in_locality_separates_states() {
        let pool = init_memory_database().await.unwrap();
        insert_venue(&pool, &sample_venue("West", "Portland", "OR")).await.unwrap();
        insert_venue(&pool, &sample_venue("East", "Portland", "ME")).await.unwrap();

        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let venues = in_locality(&pool, "Portland", "OR", &now).await.unwrap();
        assert_eq!(venues.len(), 1);
        assert_eq!(venues[0].name, "West");
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        let pool = init_memory_database().await.unwrap();
        insert_venue(&pool, &sample_venue("Guns N Petals Bar", "Oakland", "CA"))
            .await
            .unwrap();
        insert_venue(&pool, &sample_venue("Quiet Room", "Oakland", "CA"))
            .await
            .unwrap();

        let now = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();

        let hits = search_venues(&pool, "guns", &now).await.unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Guns N Petals Bar");

        // Empty term matches everything
        let all = search_venues(&pool, "", &now).await.unwrap();
        assert_eq!(all.len(), 2);
    }

    #[tokio::test]
    async fn test_venue_exists() {
        let pool = init_memory_database().await.unwrap();
        let id = insert_venue(&pool, &sample_venue("Here", "Oakland", "CA"))
            .await
            .unwrap();

        assert!(venue_exists(&pool, id).await.unwrap());
        assert!(!venue_exists(&pool, id + 1).await.unwrap());
    }
}
