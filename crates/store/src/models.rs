//! Store-level models and request DTOs.

use serde::{Deserialize, Serialize};

use luxdam_core::asset::{AssetKind, AssetStatus};
use luxdam_core::filter::FilterCriteria;
use luxdam_core::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Assets
// ---------------------------------------------------------------------------

/// DTO for registering a new asset (the simulated upload).
///
/// `status` defaults to pending when omitted, matching the review flow:
/// freshly uploaded assets wait for approval.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAsset {
    pub name: String,
    pub kind: AssetKind,
    pub size_mb: f64,
    pub status: Option<AssetStatus>,
    pub uploaded_by: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// DTO for a bulk status change over a set of assets.
#[derive(Debug, Clone, Deserialize)]
pub struct BulkStatusChange {
    pub ids: Vec<EntityId>,
    pub status: AssetStatus,
}

/// Outcome of a bulk status change. Unknown ids are reported rather than
/// silently dropped.
#[derive(Debug, Clone, Serialize)]
pub struct BulkStatusOutcome {
    pub status: AssetStatus,
    pub updated_ids: Vec<EntityId>,
    pub missing_ids: Vec<EntityId>,
}

// ---------------------------------------------------------------------------
// Saved searches
// ---------------------------------------------------------------------------

/// A named snapshot of filter criteria a user can re-apply.
#[derive(Debug, Clone, Serialize)]
pub struct SavedSearch {
    pub id: EntityId,
    pub name: String,
    pub criteria: FilterCriteria,
    pub created_at: Timestamp,
}

/// DTO for creating a saved search.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSavedSearch {
    pub name: String,
    #[serde(default)]
    pub criteria: FilterCriteria,
}
