//! Database initialization
//!
//! Opens (or creates) the SQLite database, applies the connection pragmas,
//! creates any missing tables, and runs pending schema migrations. Safe to
//! call on every startup.

use std::path::Path;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

use crate::Result;

/// Initialize the database connection pool and schema
pub async fn init_database(db_path: &Path) -> Result<SqlitePool> {
    let newly_created = !db_path.exists();

    // Create parent directory if it doesn't exist
    if let Some(parent) = db_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Foreign keys must be enforced on every pooled connection, so they are
    // set through the connect options rather than a one-off PRAGMA.
    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_millis(5000));

    let pool = SqlitePoolOptions::new()
        .max_connections(10)
        .connect_with(options)
        .await?;

    if newly_created {
        info!("Initialized new database: {}", db_path.display());
    } else {
        info!("Opened existing database: {}", db_path.display());
    }

    create_schema(&pool).await?;
    crate::db::migrations::run_migrations(&pool).await?;

    Ok(pool)
}

/// In-memory database with the full schema, for tests.
///
/// A single connection keeps the in-memory database alive and shared across
/// every use of the pool.
pub async fn init_memory_database() -> Result<SqlitePool> {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;

    create_schema(&pool).await?;
    crate::db::migrations::run_migrations(&pool).await?;

    Ok(pool)
}

/// Create all tables if they don't exist
async fn create_schema(pool: &SqlitePool) -> Result<()> {
    create_schema_version_table(pool).await?;
    create_venues_table(pool).await?;
    create_artists_table(pool).await?;
    create_shows_table(pool).await?;

    info!("Database tables initialized (venues, artists, shows)");
    Ok(())
}

/// Migration history table
async fn create_schema_version_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_venues_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS venues (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            address TEXT NOT NULL,
            phone TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            seeking_talent INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_artists_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS artists (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            city TEXT NOT NULL,
            state TEXT NOT NULL,
            phone TEXT NOT NULL,
            genres TEXT NOT NULL DEFAULT '[]',
            image_link TEXT,
            facebook_link TEXT,
            website TEXT,
            seeking_venue INTEGER NOT NULL DEFAULT 0,
            seeking_description TEXT,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
            updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Shows reference a venue and an artist; deleting either owner cascades to
/// the show.
async fn create_shows_table(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS shows (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            venue_id INTEGER NOT NULL REFERENCES venues(id) ON DELETE CASCADE,
            artist_id INTEGER NOT NULL REFERENCES artists(id) ON DELETE CASCADE,
            start_time TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_venue_id ON shows(venue_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_artist_id ON shows(artist_id)")
        .execute(pool)
        .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_shows_start_time ON shows(start_time)")
        .execute(pool)
        .await?;

    Ok(())
}
