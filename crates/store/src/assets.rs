//! In-memory asset table with filtered listing, simulated upload, bulk
//! status changes, and deletion.

use chrono::Utc;
use tokio::sync::RwLock;

use luxdam_core::asset::{validate_asset_name, validate_size_mb, Asset, AssetStatus};
use luxdam_core::error::CoreError;
use luxdam_core::filter::FilterMode;
use luxdam_core::types::EntityId;

use crate::models::{BulkStatusOutcome, NewAsset};
use crate::seed;

struct AssetTable {
    next_id: EntityId,
    rows: Vec<Asset>,
}

/// The asset repository. Cheap to share behind an `Arc`; all methods take
/// `&self` and lock internally.
pub struct AssetStore {
    inner: RwLock<AssetTable>,
}

impl AssetStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(AssetTable {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Create a store pre-loaded with the deterministic mock catalog.
    pub fn seeded() -> Self {
        let rows = seed::seed_assets();
        let next_id = rows.iter().map(|a| a.id).max().unwrap_or(0) + 1;
        Self {
            inner: RwLock::new(AssetTable { next_id, rows }),
        }
    }

    /// List assets matching the governing filter mode, in insertion order.
    ///
    /// Evaluation is synchronous over the full table; the catalog is small
    /// by design and carries no index.
    pub async fn list(&self, mode: &FilterMode) -> Vec<Asset> {
        let table = self.inner.read().await;
        let criteria = mode.criteria();
        table
            .rows
            .iter()
            .filter(|a| criteria.matches(a))
            .cloned()
            .collect()
    }

    /// Fetch a single asset by id.
    pub async fn find_by_id(&self, id: EntityId) -> Option<Asset> {
        let table = self.inner.read().await;
        table.rows.iter().find(|a| a.id == id).cloned()
    }

    /// Register a new asset (the simulated upload). Validates the name and
    /// size, stamps `uploaded_at` server-side, and defaults the status to
    /// pending.
    pub async fn create(&self, input: NewAsset) -> Result<Asset, CoreError> {
        validate_asset_name(&input.name)?;
        validate_size_mb(input.size_mb)?;

        let mut table = self.inner.write().await;
        let asset = Asset {
            id: table.next_id,
            name: input.name,
            kind: input.kind,
            size_mb: input.size_mb,
            status: input.status.unwrap_or(AssetStatus::Pending),
            uploaded_by: input.uploaded_by,
            uploaded_at: Utc::now(),
            category: input.category,
            tags: input.tags,
        };
        table.next_id += 1;
        table.rows.push(asset.clone());
        Ok(asset)
    }

    /// Set the status on every asset in `ids`. Assets are mutated in place;
    /// ids with no matching asset are reported in the outcome.
    pub async fn set_status_bulk(
        &self,
        ids: &[EntityId],
        status: AssetStatus,
    ) -> BulkStatusOutcome {
        let mut table = self.inner.write().await;
        let mut updated_ids = Vec::new();
        let mut missing_ids = Vec::new();

        for &id in ids {
            match table.rows.iter_mut().find(|a| a.id == id) {
                Some(asset) => {
                    asset.status = status;
                    updated_ids.push(id);
                }
                None => missing_ids.push(id),
            }
        }

        BulkStatusOutcome {
            status,
            updated_ids,
            missing_ids,
        }
    }

    /// Remove an asset by id. Returns `true` if a row was removed.
    pub async fn delete(&self, id: EntityId) -> bool {
        let mut table = self.inner.write().await;
        let before = table.rows.len();
        table.rows.retain(|a| a.id != id);
        table.rows.len() < before
    }

    /// Number of assets currently in the table.
    pub async fn count(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}

impl Default for AssetStore {
    fn default() -> Self {
        Self::new()
    }
}
