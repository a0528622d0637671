use std::sync::Arc;

use luxdam_store::{AssetStore, SavedSearchStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory asset table.
    pub assets: Arc<AssetStore>,
    /// In-memory saved-search list.
    pub saved_searches: Arc<SavedSearchStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
