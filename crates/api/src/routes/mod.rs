pub mod health;
pub mod pages;
pub mod site;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /pages                 list, create
/// /pages/{id}            get, update, delete
/// /page/{slug}           get by slug
/// /upload                import an .html file (multipart)
/// /download/{id}         download page as an .html attachment
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(pages::router())
}
