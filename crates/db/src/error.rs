//! Typed failures of the page store.

use pagekeep_core::error::CoreError;

/// Errors returned by [`PageRepo`](crate::repositories::PageRepo).
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No row matches the given id or slug.
    #[error("{entity} {key} not found")]
    NotFound { entity: &'static str, key: String },

    /// An insert collided with the unique constraint on `pages.slug`.
    #[error("A page with slug '{slug}' already exists")]
    Conflict { slug: String },

    /// Any lower-level database or I/O failure.
    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure, turning unique violations into [`StoreError::Conflict`].
    pub fn from_insert(err: sqlx::Error, slug: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => StoreError::Conflict {
                slug: slug.to_string(),
            },
            _ => StoreError::Storage(err),
        }
    }
}

/// Split a store error into its domain part, or hand back the raw database error.
impl TryFrom<StoreError> for CoreError {
    type Error = sqlx::Error;

    fn try_from(err: StoreError) -> Result<Self, Self::Error> {
        match err {
            StoreError::NotFound { entity, key } => Ok(CoreError::NotFound { entity, key }),
            StoreError::Conflict { slug } => Ok(CoreError::Conflict(format!(
                "A page with slug '{slug}' already exists"
            ))),
            StoreError::Storage(err) => Err(err),
        }
    }
}
