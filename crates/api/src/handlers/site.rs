//! Public pages: raw HTML serving and the admin shell.

use axum::extract::{Path, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use pagekeep_db::repositories::PageRepo;

use crate::error::AppResult;
use crate::handlers::files::HTML_CONTENT_TYPE;
use crate::state::AppState;

const ADMIN_TEMPLATE: &str = include_str!("../../templates/admin.html");
const SITE_NAME_PLACEHOLDER: &str = "{{site_name}}";
const AUTHOR_PLACEHOLDER: &str = "{{author}}";

/// GET /page/{slug}
///
/// Serve the stored HTML verbatim. Missing pages get a plain-text 404.
pub async fn serve_page(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<Response> {
    let response = match PageRepo::find_by_slug(&state.pool, &slug).await? {
        Some(page) => ([(CONTENT_TYPE, HTML_CONTENT_TYPE)], page.content).into_response(),
        None => (StatusCode::NOT_FOUND, "Page not found").into_response(),
    };
    Ok(response)
}

/// GET /
///
/// Admin interface shell, labelled with the configured site name and author.
pub async fn serve_admin(State(state): State<AppState>) -> Html<String> {
    Html(render_admin(
        &state.config.site_name,
        state.pages.default_author(),
    ))
}

/// Fill the admin template in one pass over the template text, so configured
/// values are never themselves scanned for placeholders.
fn render_admin(site_name: &str, author: &str) -> String {
    let site_name = html_escape::encode_text(site_name);
    let author = html_escape::encode_text(author);

    let mut out = String::with_capacity(ADMIN_TEMPLATE.len());
    let mut rest = ADMIN_TEMPLATE;
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let (value, consumed) = if tail.starts_with(SITE_NAME_PLACEHOLDER) {
            (&*site_name, SITE_NAME_PLACEHOLDER.len())
        } else if tail.starts_with(AUTHOR_PLACEHOLDER) {
            (&*author, AUTHOR_PLACEHOLDER.len())
        } else {
            ("{{", 2)
        };
        out.push_str(value);
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}
