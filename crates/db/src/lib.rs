//! SQLite persistence for pages.
//!
//! Exposes pool construction, migrations, and the [`PageRepo`] store.
//!
//! [`PageRepo`]: repositories::PageRepo

use std::path::Path;
use std::time::Duration;

use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};

pub mod error;
pub mod models;
pub mod repositories;

pub type DbPool = sqlx::SqlitePool;

/// Embedded schema migrations from `crates/db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Open (creating if absent) the SQLite database at `location`.
///
/// The parent directory is created when missing.
pub async fn create_pool(location: impl AsRef<Path>) -> Result<DbPool, sqlx::Error> {
    let location = location.as_ref();
    if let Some(dir) = location.parent().filter(|d| !d.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(location)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(8)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Apply all pending migrations. Safe to call on an already-migrated database.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Round-trip a trivial query to confirm the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Open the page store at `location` and bring its schema up to date.
///
/// Idempotent: calling it again against the same location keeps existing rows.
pub async fn initialize(location: impl AsRef<Path>) -> Result<DbPool, sqlx::Error> {
    let location = location.as_ref();
    let pool = create_pool(location).await?;
    tracing::debug!(path = %location.display(), "SQLite pool opened");

    run_migrations(&pool).await?;
    tracing::debug!("Page schema migrations applied");

    Ok(pool)
}
