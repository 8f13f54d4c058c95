//! Database schema migrations
//!
//! Versioned schema migrations tracked in the `schema_version` table, so
//! databases created by older builds upgrade in place without manual
//! intervention. Every migration is idempotent and safe to re-run.

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::Result;

/// Current schema version
///
/// Increment this when adding a new migration.
const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Get current schema version from database
///
/// Returns 0 if the schema_version table doesn't exist or has no rows
async fn get_schema_version(pool: &SqlitePool) -> Result<i32> {
    let table_exists: bool = sqlx::query_scalar(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM sqlite_master
            WHERE type='table' AND name='schema_version'
        )
        "#,
    )
    .fetch_one(pool)
    .await?;

    if !table_exists {
        return Ok(0);
    }

    let version: Option<i32> =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_optional(pool)
            .await?;

    Ok(version.unwrap_or(0))
}

/// Record a completed migration in the history table
async fn set_schema_version(pool: &SqlitePool, version: i32) -> Result<()> {
    sqlx::query("INSERT INTO schema_version (version) VALUES (?)")
        .bind(version)
        .execute(pool)
        .await?;

    Ok(())
}

/// Run all pending migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let current_version = get_schema_version(pool).await?;

    if current_version == CURRENT_SCHEMA_VERSION {
        info!("Database schema is up to date (v{})", current_version);
        return Ok(());
    }

    if current_version > CURRENT_SCHEMA_VERSION {
        warn!(
            "Database schema version ({}) is newer than code version ({})",
            current_version, CURRENT_SCHEMA_VERSION
        );
        return Ok(());
    }

    info!(
        "Running database migrations: v{} -> v{}",
        current_version, CURRENT_SCHEMA_VERSION
    );

    if current_version < 1 {
        migrate_v1(pool).await?;
        set_schema_version(pool, 1).await?;
        info!("Migration v1 completed");
    }

    Ok(())
}

/// Migration v1: add the `website` column to venues and artists
///
/// The first deployed schema had no website field; databases created by that
/// build need the column added before the current queries can run against
/// them. Databases created by the current schema already have it.
async fn migrate_v1(pool: &SqlitePool) -> Result<()> {
    add_column_if_missing(pool, "venues", "website", "TEXT").await?;
    add_column_if_missing(pool, "artists", "website", "TEXT").await?;
    Ok(())
}

/// Add a column unless the table already has it
async fn add_column_if_missing(
    pool: &SqlitePool,
    table: &str,
    column: &str,
    column_type: &str,
) -> Result<()> {
    let has_column: i64 = sqlx::query_scalar(&format!(
        "SELECT COUNT(*) FROM pragma_table_info('{}') WHERE name = '{}'",
        table, column
    ))
    .fetch_one(pool)
    .await?;

    if has_column > 0 {
        return Ok(());
    }

    sqlx::query(&format!(
        "ALTER TABLE {} ADD COLUMN {} {}",
        table, column, column_type
    ))
    .execute(pool)
    .await?;

    info!("Added {} column to {} table", column, table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_db() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_get_schema_version_no_table() {
        let pool = setup_test_db().await;
        let version = get_schema_version(&pool).await.unwrap();
        assert_eq!(version, 0);
    }

    #[tokio::test]
    async fn test_get_schema_version_empty_table() {
        let pool = setup_test_db().await;

        sqlx::query(
            "CREATE TABLE schema_version (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP)"
        )
        .execute(&pool)
        .await
        .unwrap();

        let version = get_schema_version(&pool).await.unwrap();
        assert_eq!(version, 0);
    }

    #[tokio::test]
    async fn test_set_and_get_schema_version() {
        let pool = setup_test_db().await;

        sqlx::query(
            "CREATE TABLE schema_version (version INTEGER PRIMARY KEY, applied_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP)"
        )
        .execute(&pool)
        .await
        .unwrap();

        set_schema_version(&pool, 1).await.unwrap();
        let version = get_schema_version(&pool).await.unwrap();
        assert_eq!(version, 1);
    }

    #[tokio::test]
    async fn test_migrate_v1_adds_website_column() {
        let pool = setup_test_db().await;

        // Venues table from the first deployed schema, without website
        sqlx::query(
            r#"
            CREATE TABLE venues (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                address TEXT NOT NULL,
                phone TEXT NOT NULL,
                genres TEXT NOT NULL DEFAULT '[]'
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        sqlx::query(
            r#"
            CREATE TABLE artists (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                city TEXT NOT NULL,
                state TEXT NOT NULL,
                phone TEXT NOT NULL,
                genres TEXT NOT NULL DEFAULT '[]'
            )
            "#,
        )
        .execute(&pool)
        .await
        .unwrap();

        migrate_v1(&pool).await.unwrap();

        let has_column: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pragma_table_info('venues') WHERE name = 'website'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(has_column, 1);
    }

    #[tokio::test]
    async fn test_migrate_v1_idempotent() {
        let pool = setup_test_db().await;

        sqlx::query("CREATE TABLE venues (id INTEGER PRIMARY KEY, website TEXT)")
            .execute(&pool)
            .await
            .unwrap();
        sqlx::query("CREATE TABLE artists (id INTEGER PRIMARY KEY, website TEXT)")
            .execute(&pool)
            .await
            .unwrap();

        migrate_v1(&pool).await.unwrap();
        migrate_v1(&pool).await.unwrap();

        let column_count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM pragma_table_info('venues') WHERE name = 'website'",
        )
        .fetch_one(&pool)
        .await
        .unwrap();
        assert_eq!(column_count, 1);
    }

    #[tokio::test]
    async fn test_run_migrations_records_version() {
        let pool = crate::db::init_memory_database().await.unwrap();

        // init_memory_database already ran the migrations
        let version = get_schema_version(&pool).await.unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);

        // Re-running is a no-op
        run_migrations(&pool).await.unwrap();
        let version = get_schema_version(&pool).await.unwrap();
        assert_eq!(version, CURRENT_SCHEMA_VERSION);
    }
}
