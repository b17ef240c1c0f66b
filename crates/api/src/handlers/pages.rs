//! Handlers for the page JSON API.
//!
//! Provides create, fetch (by id and by slug), list, update and delete.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use pagekeep_core::types::DbId;
use pagekeep_db::models::page::{CreatePage, UpdatePage};

use crate::error::AppResult;
use crate::extract::{ApiJson, ApiPath};
use crate::response::{DataResponse, DeletedResponse};
use crate::state::AppState;

/// GET /pages
///
/// List every page, newest first.
pub async fn list_pages(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pages = state.pages.list_pages().await?;
    Ok(Json(DataResponse { data: pages }))
}

/// POST /pages
///
/// Create a page. The slug is derived from the title and the author falls
/// back to the configured default when either is omitted.
pub async fn create_page(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CreatePage>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.create_page(input).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: page })))
}

/// GET /pages/{id}
pub async fn get_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.get_page_by_id(id).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /page/{slug}
pub async fn get_page_by_slug(
    State(state): State<AppState>,
    ApiPath(slug): ApiPath<String>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.get_page_by_slug(&slug).await?;
    Ok(Json(DataResponse { data: page }))
}

/// PUT /pages/{id}
///
/// Replace title, content and description. Slug and author are unchanged.
pub async fn update_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
    ApiJson(input): ApiJson<UpdatePage>,
) -> AppResult<impl IntoResponse> {
    let page = state.pages.update_page(id, input).await?;
    Ok(Json(DataResponse { data: page }))
}

/// DELETE /pages/{id}
///
/// Always succeeds, whether or not the page existed.
pub async fn delete_page(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<DbId>,
) -> AppResult<impl IntoResponse> {
    state.pages.delete_page(id).await?;
    Ok(Json(DataResponse {
        data: DeletedResponse { deleted: true },
    }))
}
