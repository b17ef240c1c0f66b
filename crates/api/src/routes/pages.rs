//! Route definitions for the page JSON API.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{files, pages};
use crate::state::AppState;

/// Page routes, nested under `/api/v1`.
///
/// ```text
/// GET    /pages              list_pages
/// POST   /pages              create_page
/// GET    /pages/{id}         get_page
/// PUT    /pages/{id}         update_page
/// DELETE /pages/{id}         delete_page
/// GET    /page/{slug}        get_page_by_slug
/// POST   /upload             upload_file (multipart)
/// GET    /download/{id}      download_file
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/pages", get(pages::list_pages).post(pages::create_page))
        .route(
            "/pages/{id}",
            get(pages::get_page)
                .put(pages::update_page)
                .delete(pages::delete_page),
        )
        .route("/page/{slug}", get(pages::get_page_by_slug))
        .route("/upload", post(files::upload_file))
        .route("/download/{id}", get(files::download_file))
}
