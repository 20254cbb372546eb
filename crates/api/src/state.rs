use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool. Opened in `main`, closed after shutdown.
    pub pool: league_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
