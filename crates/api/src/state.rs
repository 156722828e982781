use std::sync::Arc;

use dogcollector_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: dogcollector_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object store photo uploads are written to.
    pub store: Arc<dyn ObjectStore>,
}
