//! In-memory saved-search list: named filter-criteria snapshots that can
//! be re-applied from the panel.

use chrono::Utc;
use tokio::sync::RwLock;

use luxdam_core::error::CoreError;
use luxdam_core::filter::FilterCriteria;
use luxdam_core::saved_search::validate_saved_search_name;
use luxdam_core::types::EntityId;

use crate::models::SavedSearch;

struct SavedSearchTable {
    next_id: EntityId,
    rows: Vec<SavedSearch>,
}

/// Repository for saved searches. Nothing here persists across restarts.
pub struct SavedSearchStore {
    inner: RwLock<SavedSearchTable>,
}

impl SavedSearchStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(SavedSearchTable {
                next_id: 1,
                rows: Vec::new(),
            }),
        }
    }

    /// Snapshot the given criteria under a name. Names are validated and
    /// must be unique (case-insensitive) so the panel list stays readable.
    pub async fn add(
        &self,
        name: String,
        criteria: FilterCriteria,
    ) -> Result<SavedSearch, CoreError> {
        validate_saved_search_name(&name)?;

        let mut table = self.inner.write().await;
        let trimmed = name.trim().to_string();
        if table
            .rows
            .iter()
            .any(|s| s.name.eq_ignore_ascii_case(&trimmed))
        {
            return Err(CoreError::Conflict(format!(
                "A saved search named '{trimmed}' already exists"
            )));
        }

        let saved = SavedSearch {
            id: table.next_id,
            name: trimmed,
            criteria,
            created_at: Utc::now(),
        };
        table.next_id += 1;
        table.rows.push(saved.clone());
        Ok(saved)
    }

    /// List all saved searches in creation order.
    pub async fn list(&self) -> Vec<SavedSearch> {
        self.inner.read().await.rows.clone()
    }

    /// Fetch one saved search by id.
    pub async fn find_by_id(&self, id: EntityId) -> Option<SavedSearch> {
        let table = self.inner.read().await;
        table.rows.iter().find(|s| s.id == id).cloned()
    }

    /// Remove a saved search by id. Returns `true` if a row was removed.
    pub async fn remove(&self, id: EntityId) -> bool {
        let mut table = self.inner.write().await;
        let before = table.rows.len();
        table.rows.retain(|s| s.id != id);
        table.rows.len() < before
    }
}

impl Default for SavedSearchStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use luxdam_core::asset::AssetKind;

    fn criteria() -> FilterCriteria {
        FilterCriteria {
            kind: vec![AssetKind::Video],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_and_load_round_trips_the_snapshot() {
        let store = SavedSearchStore::new();
        let saved = store
            .add("Videos only".to_string(), criteria())
            .await
            .unwrap();

        let loaded = store.find_by_id(saved.id).await.unwrap();
        assert_eq!(loaded.name, "Videos only");
        assert_eq!(loaded.criteria, criteria());
    }

    #[tokio::test]
    async fn add_trims_and_rejects_duplicates_case_insensitively() {
        let store = SavedSearchStore::new();
        store
            .add("  Videos only ".to_string(), criteria())
            .await
            .unwrap();

        let err = store
            .add("videos ONLY".to_string(), criteria())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[tokio::test]
    async fn add_rejects_invalid_names() {
        let store = SavedSearchStore::new();
        assert!(store.add(String::new(), criteria()).await.is_err());
    }

    #[tokio::test]
    async fn remove_deletes_by_id() {
        let store = SavedSearchStore::new();
        let saved = store.add("One".to_string(), criteria()).await.unwrap();

        assert!(store.remove(saved.id).await);
        assert!(!store.remove(saved.id).await);
        assert!(store.list().await.is_empty());
    }
}
