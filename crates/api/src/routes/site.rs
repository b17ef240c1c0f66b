//! Root-level HTML routes (not under `/api/v1`).

use axum::routing::get;
use axum::Router;

use crate::handlers::site;
use crate::state::AppState;

/// ```text
/// GET /              serve_admin
/// GET /page/{slug}   serve_page
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(site::serve_admin))
        .route("/page/{slug}", get(site::serve_page))
}
