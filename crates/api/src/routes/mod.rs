pub mod assets;
pub mod health;
pub mod saved_searches;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assets                        list (basic filters), create
/// /assets/filter                 advanced structured filter (POST)
/// /assets/status                 bulk status change (PATCH)
/// /assets/{id}                   get, delete
///
/// /saved-searches                list, create
/// /saved-searches/{id}           delete
/// /saved-searches/{id}/apply     load snapshot and evaluate it (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/assets", assets::router())
        .nest("/saved-searches", saved_searches::router())
}
