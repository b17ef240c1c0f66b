//! Repository for the `pages` table.
//!
//! Slug uniqueness is enforced by the `uq_pages_slug` constraint alone;
//! callers never pre-check for an existing slug.

use pagekeep_core::types::DbId;
use sqlx::SqlitePool;

use crate::error::StoreError;
use crate::models::page::{NewPage, Page};

/// Column list for pages queries.
const COLUMNS: &str = "id, title, slug, content, description, author, created_at, updated_at";

const ENTITY: &str = "Page";

/// Provides CRUD operations for pages.
pub struct PageRepo;

impl PageRepo {
    /// Insert a new page, stamping `created_at` and `updated_at` with the current time.
    ///
    /// Fails with [`StoreError::Conflict`] when the slug is already taken.
    pub async fn insert(pool: &SqlitePool, input: &NewPage) -> Result<Page, StoreError> {
        let now = chrono::Utc::now();
        let query = format!(
            "INSERT INTO pages (title, slug, content, description, author, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.description)
            .bind(&input.author)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
            .map_err(|e| StoreError::from_insert(e, &input.slug))
    }

    /// Find a page by ID.
    pub async fn find_by_id(pool: &SqlitePool, id: DbId) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE id = ?");
        sqlx::query_as::<_, Page>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a page by slug.
    pub async fn find_by_slug(pool: &SqlitePool, slug: &str) -> Result<Option<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages WHERE slug = ?");
        sqlx::query_as::<_, Page>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// Fetch a page by ID or fail with [`StoreError::NotFound`].
    pub async fn get_by_id(pool: &SqlitePool, id: DbId) -> Result<Page, StoreError> {
        Self::find_by_id(pool, id)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: format!("with id {id}"),
            })
    }

    /// Fetch a page by slug or fail with [`StoreError::NotFound`].
    pub async fn get_by_slug(pool: &SqlitePool, slug: &str) -> Result<Page, StoreError> {
        Self::find_by_slug(pool, slug)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: format!("with slug '{slug}'"),
            })
    }

    /// List every page, newest first. Ties on `created_at` fall back to `id`.
    pub async fn list_all(pool: &SqlitePool) -> Result<Vec<Page>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM pages ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Page>(&query).fetch_all(pool).await
    }

    /// Replace title, content and description of a page and refresh `updated_at`.
    ///
    /// Runs as a single statement and returns the row as it is after the update.
    /// Slug, author and `created_at` are never touched.
    pub async fn update(
        pool: &SqlitePool,
        id: DbId,
        title: &str,
        content: &str,
        description: Option<&str>,
    ) -> Result<Page, StoreError> {
        let query = format!(
            "UPDATE pages SET
                title = ?,
                content = ?,
                description = ?,
                updated_at = MAX(?, created_at)
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Page>(&query)
            .bind(title)
            .bind(content)
            .bind(description)
            .bind(chrono::Utc::now())
            .bind(id)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| StoreError::NotFound {
                entity: ENTITY,
                key: format!("with id {id}"),
            })
    }

    /// Delete a page by ID. Returns `true` if a row was removed.
    ///
    /// Deleting a missing id is not an error.
    pub async fn delete(pool: &SqlitePool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM pages WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Count stored pages.
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM pages")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
