//! Asset catalog model: the uploaded media/document records managed by the
//! admin panel, plus validation helpers for creating them.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::{EntityId, Timestamp};

// ---------------------------------------------------------------------------
// Closed enums
// ---------------------------------------------------------------------------

/// The media kind of an asset. Closed set; anything else is rejected at the
/// serde boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    Image,
    Video,
    Audio,
    Document,
}

impl AssetKind {
    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetKind::Image => "image",
            AssetKind::Video => "video",
            AssetKind::Audio => "audio",
            AssetKind::Document => "document",
        }
    }
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Review status of an asset. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetStatus {
    Approved,
    Pending,
    Rejected,
}

impl AssetStatus {
    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetStatus::Approved => "approved",
            AssetStatus::Pending => "pending",
            AssetStatus::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for AssetStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Entity struct
// ---------------------------------------------------------------------------

/// One uploaded file record.
///
/// `tags` is matched as a set: insertion order is irrelevant to filtering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: EntityId,
    /// Display filename.
    pub name: String,
    pub kind: AssetKind,
    /// File size in megabytes. Always >= 0.
    pub size_mb: f64,
    pub status: AssetStatus,
    /// Free-text uploader name.
    pub uploaded_by: String,
    pub uploaded_at: Timestamp,
    /// Free-text category.
    pub category: String,
    pub tags: Vec<String>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Maximum length for an asset name.
pub const MAX_ASSET_NAME_LEN: usize = 255;

/// Validate an asset name: non-empty and within length limit.
pub fn validate_asset_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Asset name must not be empty".to_string(),
        ));
    }
    if name.len() > MAX_ASSET_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "Asset name too long: {} chars (max {MAX_ASSET_NAME_LEN})",
            name.len()
        )));
    }
    Ok(())
}

/// Validate an asset size: finite and non-negative.
pub fn validate_size_mb(size_mb: f64) -> Result<(), CoreError> {
    if !size_mb.is_finite() || size_mb < 0.0 {
        return Err(CoreError::Validation(format!(
            "Asset size must be a non-negative number of megabytes, got {size_mb}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- Enum serialization ---

    #[test]
    fn kind_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&AssetKind::Document).unwrap(),
            "\"document\""
        );
    }

    #[test]
    fn kind_rejects_unknown_value() {
        let result: Result<AssetKind, _> = serde_json::from_str("\"spreadsheet\"");
        assert!(result.is_err());
    }

    #[test]
    fn status_round_trips_through_display() {
        for status in [
            AssetStatus::Approved,
            AssetStatus::Pending,
            AssetStatus::Rejected,
        ] {
            let json = format!("\"{status}\"");
            let parsed: AssetStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    // --- Name validation ---

    #[test]
    fn validate_asset_name_accepts_valid() {
        assert!(validate_asset_name("pendant-hero.mp4").is_ok());
    }

    #[test]
    fn validate_asset_name_rejects_empty() {
        let err = validate_asset_name("").unwrap_err();
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn validate_asset_name_rejects_whitespace_only() {
        assert!(validate_asset_name("   ").is_err());
    }

    #[test]
    fn validate_asset_name_rejects_too_long() {
        let long_name = "x".repeat(MAX_ASSET_NAME_LEN + 1);
        let err = validate_asset_name(&long_name).unwrap_err();
        assert!(err.to_string().contains("too long"));
    }

    // --- Size validation ---

    #[test]
    fn validate_size_mb_accepts_zero_and_positive() {
        assert!(validate_size_mb(0.0).is_ok());
        assert!(validate_size_mb(45.2).is_ok());
    }

    #[test]
    fn validate_size_mb_rejects_negative() {
        assert!(validate_size_mb(-1.0).is_err());
    }

    #[test]
    fn validate_size_mb_rejects_non_finite() {
        assert!(validate_size_mb(f64::NAN).is_err());
        assert!(validate_size_mb(f64::INFINITY).is_err());
    }
}
