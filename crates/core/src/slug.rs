//! Slug derivation and page input validation.
//!
//! Slugs are the human-readable half of a page's identity. Derivation is a
//! pure function of the title (and, for the fallback path, the clock); it is
//! not injective, so uniqueness is left entirely to the storage layer.

use crate::error::CoreError;

/// Prefix used when a title contains nothing that survives normalization.
pub const FALLBACK_SLUG_PREFIX: &str = "page-";

/// Derive a URL-safe slug from a page title using the current clock.
///
/// See [`derive_slug_at`] for the algorithm.
pub fn derive_slug(title: &str) -> String {
    derive_slug_at(title, chrono::Utc::now().timestamp())
}

/// Derive a URL-safe slug from a page title.
///
/// Lower-cases the title, turns spaces and underscores into hyphens, then
/// keeps only `a-z`, `0-9` and `-`. Non-ASCII characters are dropped whole.
/// Hyphens are neither collapsed nor trimmed. When nothing survives, the
/// slug falls back to `page-{unix_secs}`.
///
/// ```
/// use pagekeep_core::slug::derive_slug_at;
///
/// assert_eq!(derive_slug_at("Hello World", 0), "hello-world");
/// assert_eq!(derive_slug_at("!!!", 1700000000), "page-1700000000");
/// ```
pub fn derive_slug_at(title: &str, unix_secs: i64) -> String {
    let slug: String = title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '_' { '-' } else { c })
        .filter(|&c| is_slug_char(c))
        .collect();

    if slug.is_empty() {
        format!("{FALLBACK_SLUG_PREFIX}{unix_secs}")
    } else {
        slug
    }
}

fn is_slug_char(c: char) -> bool {
    c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a page title (must contain something other than whitespace).
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    Ok(())
}

/// Validate a caller-supplied slug (non-empty, lowercase alphanumeric + hyphens).
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.is_empty() {
        return Err(CoreError::Validation("Slug must not be empty".into()));
    }
    if !slug.chars().all(is_slug_char) {
        return Err(CoreError::Validation(
            "Slug must contain only lowercase alphanumeric characters and hyphens".into(),
        ));
    }
    Ok(())
}
