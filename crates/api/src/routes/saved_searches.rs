//! Route definitions for saved searches.
//!
//! ```text
//! SAVED SEARCHES:
//! GET    /                       list_saved_searches
//! POST   /                       create_saved_search
//! DELETE /{id}                   delete_saved_search
//! POST   /{id}/apply             apply_saved_search
//! ```

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::saved_searches;
use crate::state::AppState;

/// Saved-search routes -- mounted at `/saved-searches`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(saved_searches::list_saved_searches).post(saved_searches::create_saved_search),
        )
        .route("/{id}", delete(saved_searches::delete_saved_search))
        .route("/{id}/apply", post(saved_searches::apply_saved_search))
}
