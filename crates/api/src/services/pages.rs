//! Page create/update orchestration.
//!
//! Composes slug derivation with the page store. The default author is
//! handed in at construction so the service never reads process-wide state.

use pagekeep_core::error::CoreError;
use pagekeep_core::slug::{derive_slug, validate_slug, validate_title};
use pagekeep_core::types::DbId;
use pagekeep_db::models::page::{CreatePage, NewPage, Page, UpdatePage};
use pagekeep_db::repositories::PageRepo;
use pagekeep_db::DbPool;

use crate::error::AppResult;

/// File extension accepted by [`PageService::import_html`].
pub const HTML_EXTENSION: &str = ".html";

/// Bridges create/update requests to slug derivation and the page store.
#[derive(Clone)]
pub struct PageService {
    pool: DbPool,
    default_author: String,
}

impl PageService {
    pub fn new(pool: DbPool, default_author: impl Into<String>) -> Self {
        Self {
            pool,
            default_author: default_author.into(),
        }
    }

    pub fn default_author(&self) -> &str {
        &self.default_author
    }

    /// Create a page, filling in author and slug when the caller left them out.
    ///
    /// A slug collision surfaces as `CoreError::Conflict`; the caller may
    /// retry with a different slug or title.
    pub async fn create_page(&self, input: CreatePage) -> AppResult<Page> {
        validate_title(&input.title)?;

        let slug = match non_blank(input.slug) {
            Some(slug) => {
                validate_slug(&slug)?;
                slug
            }
            None => derive_slug(&input.title),
        };
        let author = non_blank(input.author).unwrap_or_else(|| self.default_author.clone());

        let new_page = NewPage {
            title: input.title,
            slug,
            content: input.content,
            description: input.description,
            author: Some(author),
        };
        let page = PageRepo::insert(&self.pool, &new_page).await?;

        tracing::info!(page_id = page.id, slug = %page.slug, "Page created");
        Ok(page)
    }

    /// Replace title, content and description of an existing page.
    ///
    /// The slug is never re-derived, even when the title changes.
    pub async fn update_page(&self, id: DbId, input: UpdatePage) -> AppResult<Page> {
        validate_title(&input.title)?;

        let page = PageRepo::update(
            &self.pool,
            id,
            &input.title,
            &input.content,
            input.description.as_deref(),
        )
        .await?;

        tracing::info!(page_id = page.id, slug = %page.slug, "Page updated");
        Ok(page)
    }

    pub async fn get_page_by_id(&self, id: DbId) -> AppResult<Page> {
        Ok(PageRepo::get_by_id(&self.pool, id).await?)
    }

    pub async fn get_page_by_slug(&self, slug: &str) -> AppResult<Page> {
        Ok(PageRepo::get_by_slug(&self.pool, slug).await?)
    }

    /// All pages, newest first.
    pub async fn list_pages(&self) -> AppResult<Vec<Page>> {
        Ok(PageRepo::list_all(&self.pool).await?)
    }

    /// Delete a page. Missing ids are a successful no-op.
    pub async fn delete_page(&self, id: DbId) -> AppResult<()> {
        let removed = PageRepo::delete(&self.pool, id).await?;
        if removed {
            tracing::info!(page_id = id, "Page deleted");
        } else {
            tracing::debug!(page_id = id, "Delete of missing page ignored");
        }
        Ok(())
    }

    /// Create a page from an uploaded `.html` file.
    ///
    /// The title is the file name without its extension; the slug is derived
    /// from it and the default author is recorded.
    pub async fn import_html(&self, filename: &str, bytes: Vec<u8>) -> AppResult<Page> {
        let title = html_title_from_filename(filename)?;
        let content = String::from_utf8(bytes).map_err(|_| {
            CoreError::Validation(format!("File '{filename}' is not valid UTF-8"))
        })?;

        self.create_page(CreatePage {
            title,
            content,
            description: None,
            author: None,
            slug: None,
        })
        .await
    }
}

/// Strip the `.html` suffix from an uploaded file name, rejecting anything else.
pub fn html_title_from_filename(filename: &str) -> Result<String, CoreError> {
    let title = filename
        .strip_suffix(HTML_EXTENSION)
        .ok_or_else(|| CoreError::Validation("Only HTML files are allowed".into()))?;
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "File name must have a stem before .html".into(),
        ));
    }
    Ok(title.to_string())
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
