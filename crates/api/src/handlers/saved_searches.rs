//! Handlers for the `/saved-searches` resource.
//!
//! A saved search is a named snapshot of advanced filter criteria.
//! Applying one replaces the current criteria and evaluates it in the same
//! round-trip, so the panel can render the result immediately.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use luxdam_core::error::CoreError;
use luxdam_core::filter::{select_mode, BasicFilters};
use luxdam_core::types::EntityId;
use luxdam_store::models::{CreateSavedSearch, SavedSearch};

use crate::error::{AppError, AppResult};
use crate::handlers::assets::FilterResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Response for applying a saved search: the snapshot plus its evaluation.
#[derive(Debug, Serialize)]
pub struct AppliedSearch {
    pub search: SavedSearch,
    #[serde(flatten)]
    pub result: FilterResult,
}

/// GET /api/v1/saved-searches
///
/// List all saved searches in creation order.
pub async fn list_saved_searches(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let searches = state.saved_searches.list().await;

    Ok(Json(DataResponse { data: searches }))
}

/// POST /api/v1/saved-searches
///
/// Snapshot the submitted criteria under a name.
pub async fn create_saved_search(
    State(state): State<AppState>,
    Json(input): Json<CreateSavedSearch>,
) -> AppResult<impl IntoResponse> {
    let saved = state.saved_searches.add(input.name, input.criteria).await?;

    tracing::info!(
        saved_search_id = saved.id,
        name = %saved.name,
        active_filters = saved.criteria.active_filter_count(),
        "Saved search created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: saved })))
}

/// POST /api/v1/saved-searches/{id}/apply
///
/// Load a snapshot and immediately evaluate it. An unconstrained snapshot
/// falls back to basic mode and matches everything.
pub async fn apply_saved_search(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let saved = state
        .saved_searches
        .find_by_id(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "SavedSearch",
            id,
        }))?;

    let mode = select_mode(BasicFilters::default(), saved.criteria.clone());
    let active_filters = mode.criteria().active_filter_count();
    let assets = state.assets.list(&mode).await;

    tracing::info!(
        saved_search_id = saved.id,
        matches = assets.len(),
        "Saved search applied",
    );

    Ok(Json(DataResponse {
        data: AppliedSearch {
            search: saved,
            result: FilterResult {
                mode: mode.label(),
                active_filters,
                assets,
            },
        },
    }))
}

/// DELETE /api/v1/saved-searches/{id}
///
/// Remove a saved search.
pub async fn delete_saved_search(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let removed = state.saved_searches.remove(id).await;

    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "SavedSearch",
            id,
        }));
    }

    tracing::info!(saved_search_id = id, "Saved search removed");

    Ok(StatusCode::NO_CONTENT)
}
