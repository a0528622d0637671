//! Handlers for the `/assets` resource.
//!
//! Listing runs in one of two mutually exclusive filter modes: basic
//! (search/kind/status query params) or advanced (the full structured
//! criteria, posted to `/filter`). Advanced, when constrained, fully
//! overrides basic -- the response reports the governing mode so clients
//! reset their basic controls.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use luxdam_core::asset::Asset;
use luxdam_core::error::CoreError;
use luxdam_core::filter::{select_mode, BasicFilters, FilterCriteria, FilterMode};
use luxdam_core::types::EntityId;
use luxdam_store::models::{BulkStatusChange, NewAsset};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Result of evaluating a filter: which mode governed, how many predicate
/// categories were constrained, and the matching assets.
#[derive(Debug, Serialize)]
pub struct FilterResult {
    /// `"basic"` or `"advanced"`. When advanced, clients must clear their
    /// basic controls -- the override is total, never a merge.
    pub mode: &'static str,
    /// Active-filter count for badge display.
    pub active_filters: usize,
    pub assets: Vec<Asset>,
}

/// GET /api/v1/assets
///
/// List assets using the basic controls (`?search=&kind=&status=`).
/// Unknown `kind`/`status` values are rejected at deserialization (400).
pub async fn list_assets(
    State(state): State<AppState>,
    Query(basic): Query<BasicFilters>,
) -> AppResult<impl IntoResponse> {
    let mode = FilterMode::Basic(basic.into_criteria());
    let assets = state.assets.list(&mode).await;

    Ok(Json(DataResponse { data: assets }))
}

/// POST /api/v1/assets/filter
///
/// Evaluate an advanced filter-criteria object against the catalog. If the
/// criteria is entirely unconstrained, the listing falls back to basic mode
/// (matching everything).
pub async fn filter_assets(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> AppResult<impl IntoResponse> {
    let mode = select_mode(BasicFilters::default(), criteria);
    let active_filters = mode.criteria().active_filter_count();
    let assets = state.assets.list(&mode).await;

    Ok(Json(DataResponse {
        data: FilterResult {
            mode: mode.label(),
            active_filters,
            assets,
        },
    }))
}

/// POST /api/v1/assets
///
/// Register a new asset (simulated upload). The upload timestamp is set
/// server-side; status defaults to pending.
pub async fn create_asset(
    State(state): State<AppState>,
    Json(input): Json<NewAsset>,
) -> AppResult<impl IntoResponse> {
    let asset = state.assets.create(input).await?;

    tracing::info!(
        asset_id = asset.id,
        name = %asset.name,
        kind = %asset.kind,
        "Asset registered",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: asset })))
}

/// GET /api/v1/assets/{id}
///
/// Fetch a single asset.
pub async fn get_asset(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let asset = state
        .assets
        .find_by_id(id)
        .await
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }))?;

    Ok(Json(DataResponse { data: asset }))
}

/// PATCH /api/v1/assets/status
///
/// Apply a status change to a set of assets. Unknown ids are reported in
/// the outcome rather than failing the whole batch.
pub async fn bulk_status(
    State(state): State<AppState>,
    Json(input): Json<BulkStatusChange>,
) -> AppResult<impl IntoResponse> {
    let outcome = state.assets.set_status_bulk(&input.ids, input.status).await;

    tracing::info!(
        updated = outcome.updated_ids.len(),
        missing = outcome.missing_ids.len(),
        status = %outcome.status,
        "Bulk status change applied",
    );

    Ok(Json(DataResponse { data: outcome }))
}

/// DELETE /api/v1/assets/{id}
///
/// Delete an asset.
pub async fn delete_asset(
    State(state): State<AppState>,
    Path(id): Path<EntityId>,
) -> AppResult<impl IntoResponse> {
    let deleted = state.assets.delete(id).await;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Asset",
            id,
        }));
    }

    tracing::info!(asset_id = id, "Asset deleted");

    Ok(StatusCode::NO_CONTENT)
}
