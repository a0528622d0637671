//! Route definitions for the asset catalog.
//!
//! ```text
//! ASSETS:
//! GET    /                       list_assets (?search=&kind=&status=)
//! POST   /                       create_asset
//! POST   /filter                 filter_assets (advanced criteria body)
//! PATCH  /status                 bulk_status
//! GET    /{id}                   get_asset
//! DELETE /{id}                   delete_asset
//! ```

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Asset routes -- mounted at `/assets`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(assets::list_assets).post(assets::create_asset))
        .route("/filter", post(assets::filter_assets))
        .route("/status", patch(assets::bulk_status))
        .route(
            "/{id}",
            get(assets::get_asset).delete(assets::delete_asset),
        )
}
