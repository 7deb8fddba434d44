// Database initialization and migration handling
use std::path::Path;

use serde::Serialize;
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};

use crate::db::migrations::{split_statements, MIGRATIONS};
use crate::error::{Error, Result};

/// Open (creating if needed) the schedule store at `db_path`
pub async fn init_db(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DataDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());
    log::info!("Initializing database at: {}", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect(&db_url)
        .await?;

    sqlx::query("PRAGMA journal_mode=WAL;").execute(&pool).await?;

    run_migrations(&pool).await?;

    log::info!("Database initialization complete");
    Ok(pool)
}

/// Open an existing schedule store without writing to it
///
/// Returns None when the file does not exist; nothing is created. No
/// migrations are run, so a store written by an older build may fail to
/// load and the caller falls back to bundled dates.
pub async fn open_read_only(db_path: &Path) -> Result<Option<SqlitePool>> {
    if !db_path.is_file() {
        log::debug!("No schedule store at {}", db_path.display());
        return Ok(None);
    }

    let db_url = format!("sqlite:{}?mode=ro", db_path.display());
    log::debug!("Opening schedule store read-only at: {}", db_path.display());

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(&db_url)
        .await?;
    Ok(Some(pool))
}

/// In-memory store with migrations applied
///
/// Single connection: every connection to `sqlite::memory:` is its own database.
pub async fn init_memory_db() -> Result<SqlitePool> {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await?;
    run_migrations(&pool).await?;
    Ok(pool)
}

/// Apply every migration not yet recorded in `_migrations`
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        "CREATE TABLE IF NOT EXISTS _migrations (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            applied_at TEXT NOT NULL
        )",
    )
    .execute(pool)
    .await?;

    for &(name, script) in MIGRATIONS {
        let applied: i64 = sqlx::query("SELECT COUNT(*) as count FROM _migrations WHERE name = ?")
            .bind(name)
            .fetch_one(pool)
            .await?
            .get("count");

        if applied > 0 {
            log::debug!("{} already applied", name);
            continue;
        }

        log::info!("Applying {}...", name);
        for statement in split_statements(script) {
            sqlx::query(statement)
                .execute(pool)
                .await
                .map_err(|source| Error::Migration {
                    name,
                    statement: statement.to_string(),
                    source,
                })?;
        }

        sqlx::query("INSERT INTO _migrations (name, applied_at) VALUES (?, datetime('now'))")
            .bind(name)
            .execute(pool)
            .await?;

        log::info!("{} applied successfully", name);
    }

    Ok(())
}

/// Get database stats for debugging
pub async fn get_db_stats(pool: &SqlitePool) -> Result<DbStats> {
    let schedule_count: i64 = sqlx::query("SELECT COUNT(*) as count FROM collection_schedules")
        .fetch_one(pool)
        .await?
        .get("count");

    let last_updated =
        sqlx::query_scalar::<_, Option<String>>("SELECT MAX(updated_at) FROM collection_schedules")
            .fetch_one(pool)
            .await?;

    let migration_count: i64 = sqlx::query("SELECT COUNT(*) as count FROM _migrations")
        .fetch_one(pool)
        .await?
        .get("count");

    Ok(DbStats {
        schedule_count,
        last_updated,
        migration_count,
    })
}

#[derive(Debug, Serialize)]
pub struct DbStats {
    pub schedule_count: i64,
    pub last_updated: Option<String>,
    pub migration_count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = init_memory_db().await.expect("Failed to create in-memory database");
        run_migrations(&pool).await.expect("Second run should be a no-op");

        let stats = get_db_stats(&pool).await.unwrap();
        assert_eq!(stats.migration_count, MIGRATIONS.len() as i64);
        assert_eq!(stats.schedule_count, 0);
        assert_eq!(stats.last_updated, None);
    }

    #[tokio::test]
    async fn test_init_db_creates_file() {
        let dir = std::env::temp_dir().join(format!("postroute-test-{}", std::process::id()));
        let path = dir.join("nested").join("postroute.db");

        let pool = init_db(&path).await.expect("Failed to open file database");
        assert!(path.exists());
        pool.close().await;

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_open_read_only_missing_file_creates_nothing() {
        let dir = std::env::temp_dir().join(format!("postroute-ro-test-{}", std::process::id()));
        let path = dir.join("postroute.db");

        let pool = open_read_only(&path).await.expect("Missing store is not an error");
        assert!(pool.is_none());
        assert!(!dir.exists());
    }
}
