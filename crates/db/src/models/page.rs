//! Page entity and DTOs.

use pagekeep_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `pages` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Page {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    /// Raw HTML, stored and served verbatim.
    pub content: String,
    pub description: Option<String>,
    pub author: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new page.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePage {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    /// Falls back to the configured default author if `None` or blank.
    pub author: Option<String>,
    /// Derived from the title if `None` or blank.
    pub slug: Option<String>,
}

/// A fully resolved page ready to be inserted: slug and author are settled.
#[derive(Debug, Clone)]
pub struct NewPage {
    pub title: String,
    pub slug: String,
    pub content: String,
    pub description: Option<String>,
    pub author: Option<String>,
}

/// DTO for updating a page. All three fields are replaced.
///
/// Slug and author are fixed at creation and cannot be changed here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePage {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
}
