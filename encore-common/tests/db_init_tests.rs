//! Tests for database initialization and schema creation

use encore_common::db::{init_database, init_memory_database};

#[tokio::test]
async fn test_database_creation_when_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("encore.db");

    let result = init_database(&db_path).await;
    assert!(result.is_ok(), "Database initialization failed: {:?}", result.err());

    assert!(db_path.exists(), "Database file was not created");
}

#[tokio::test]
async fn test_database_opens_existing() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("encore.db");

    let pool1 = init_database(&db_path).await.unwrap();
    drop(pool1);

    // Second init opens the same file without error
    let pool2 = init_database(&db_path).await;
    assert!(pool2.is_ok(), "Failed to open existing database: {:?}", pool2.err());
}

#[tokio::test]
async fn test_schema_tables_created() {
    let pool = init_memory_database().await.unwrap();

    for table in ["venues", "artists", "shows", "schema_version"] {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?)",
        )
        .bind(table)
        .fetch_one(&pool)
        .await
        .unwrap();
        assert!(exists, "missing table: {}", table);
    }
}

#[tokio::test]
async fn test_foreign_keys_enforced() {
    let pool = init_memory_database().await.unwrap();

    // A show referencing rows that don't exist must be rejected
    let result = sqlx::query(
        "INSERT INTO shows (venue_id, artist_id, start_time) VALUES (999, 999, '2030-01-01 20:00:00')",
    )
    .execute(&pool)
    .await;

    assert!(result.is_err(), "foreign key violation was not rejected");
}

#[tokio::test]
async fn test_schema_version_recorded() {
    let pool = init_memory_database().await.unwrap();

    let version: i32 =
        sqlx::query_scalar("SELECT version FROM schema_version ORDER BY version DESC LIMIT 1")
            .fetch_one(&pool)
            .await
            .unwrap();

    assert!(version >= 1);
}
