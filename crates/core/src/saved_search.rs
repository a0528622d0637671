//! Validation helpers for saved searches: named snapshots of filter
//! criteria a user can re-apply from the panel.

use crate::error::CoreError;

/// Maximum length for a saved-search name.
pub const MAX_SAVED_SEARCH_NAME_LEN: usize = 100;

/// Validate a saved-search name: non-empty (after trimming) and within the
/// length limit.
pub fn validate_saved_search_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Saved search name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_SAVED_SEARCH_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Saved search name too long: {} chars (max {MAX_SAVED_SEARCH_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}
