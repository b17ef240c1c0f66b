//! HTML file upload and download.

use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pagekeep_core::types::DbId;

use crate::error::{AppError, AppResult};
use crate::extract::ApiPath;
use crate::response::DataResponse;
use crate::state::AppState;

/// `Content-Type` used for served and downloaded pages.
pub const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";

/// POST /upload
///
/// Accepts a multipart form with a required `file` field holding an `.html`
/// document and creates a page from it.
pub async fn upload_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> AppResult<impl IntoResponse> {
    let mut multipart = multipart?;
    let mut file_data: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(e.to_string()))?;
        file_data = Some((filename, data.to_vec()));
    }

    let (filename, data) =
        file_data.ok_or_else(|| AppError::BadRequest("No file uploaded".into()))?;

    let page = state.pages.import_html(&filename, data).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /download/{id}
///
/// Returns the page content as an attachment named `{slug}.html`.
pub async fn download_file(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.get_page_by_id(id).await?;
    let disposition = format!("attachment; filename=\"{}.html\"", page.slug);

    Ok((
        [
            (CONTENT_DISPOSITION, disposition),
            (CONTENT_TYPE, HTML_CONTENT_TYPE.to_string()),
        ],
        page.content,
    ))
}
