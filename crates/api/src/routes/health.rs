//! `/health`: liveness plus the state of the page store.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use pagekeep_db::repositories::PageRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when the page store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Number of stored pages; `null` when the store could not be queried.
    pub page_count: Option<i64>,
}

impl HealthReport {
    fn from_page_count(page_count: Option<i64>) -> Self {
        let db_healthy = page_count.is_some();
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
            page_count,
        }
    }
}

async fn store_health(State(state): State<AppState>) -> Json<HealthReport> {
    let page_count = match pagekeep_db::health_check(&state.pool).await {
        Ok(()) => PageRepo::count(&state.pool)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "Page count query failed"))
            .ok(),
        Err(err) => {
            tracing::warn!(error = %err, "Page store unreachable");
            None
        }
    };

    Json(HealthReport::from_page_count(page_count))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(store_health))
}
