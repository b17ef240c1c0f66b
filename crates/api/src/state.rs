use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::pages::PageService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: pagekeep_db::DbPool,
    /// Server configuration (site name for the admin page).
    pub config: Arc<ServerConfig>,
    /// Page create/update orchestration.
    pub pages: PageService,
}

impl AppState {
    /// Wire the state from an open pool and loaded configuration.
    pub fn new(pool: pagekeep_db::DbPool, config: ServerConfig) -> Self {
        let pages = PageService::new(pool.clone(), config.default_author.clone());
        Self {
            pool,
            config: Arc::new(config),
            pages,
        }
    }
}
