//! Filter engine for the asset catalog: structured criteria, the predicate
//! evaluator, the basic/advanced mode selector, and the active-filter
//! counter.
//!
//! All functions here are pure and synchronous. The evaluator combines the
//! eight predicate categories with logical AND; within the tags predicate,
//! requested tags combine with OR (an asset needs at least one of them).

use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::asset::{Asset, AssetKind, AssetStatus};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Range types
// ---------------------------------------------------------------------------

/// An optional upload-date window, both sides inclusive.
///
/// Bounds arrive as ISO strings (RFC 3339 or plain `YYYY-MM-DD`) or `""`.
/// An empty or unparseable side imposes no bound; a non-empty side still
/// counts as "set" for the active-filter count, mirroring how the admin UI
/// treats a populated date input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DateRange {
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl DateRange {
    /// Parse the inclusive lower bound, if present and well-formed.
    pub fn start_bound(&self) -> Option<Timestamp> {
        parse_timestamp(&self.start)
    }

    /// Parse the inclusive upper bound, if present and well-formed.
    pub fn end_bound(&self) -> Option<Timestamp> {
        parse_timestamp(&self.end)
    }

    /// Whether either side has been filled in.
    pub fn is_constrained(&self) -> bool {
        !self.start.trim().is_empty() || !self.end.trim().is_empty()
    }
}

/// An optional size window in megabytes, both sides inclusive.
///
/// Bounds arrive as numeric strings or `""`. Malformed input coerces to
/// "no bound" (`0` below, `+inf` above) rather than failing the filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SizeRange {
    #[serde(default)]
    pub min: String,
    #[serde(default)]
    pub max: String,
}

impl SizeRange {
    /// Effective inclusive lower bound. Empty or malformed input yields 0.
    pub fn min_bound(&self) -> f64 {
        self.min
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }

    /// Effective inclusive upper bound. Empty or malformed input yields +inf.
    pub fn max_bound(&self) -> f64 {
        self.max
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(f64::INFINITY)
    }

    /// Whether either side has been filled in.
    pub fn is_constrained(&self) -> bool {
        !self.min.trim().is_empty() || !self.max.trim().is_empty()
    }
}

/// Parse an ISO timestamp, accepting full RFC 3339 or a bare date
/// (interpreted as midnight UTC). Returns `None` for empty or malformed
/// input so a bad bound degrades to "no bound".
fn parse_timestamp(s: &str) -> Option<Timestamp> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    let date = s.parse::<NaiveDate>().ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

// ---------------------------------------------------------------------------
// Filter criteria
// ---------------------------------------------------------------------------

/// The structured query over the asset collection.
///
/// Every field defaults to "no constraint": an empty string or empty set
/// matches all assets, never none.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring matched against the asset name.
    #[serde(default)]
    pub search: String,
    /// Allowed asset kinds; empty means any.
    #[serde(default)]
    pub kind: Vec<AssetKind>,
    /// Allowed statuses; empty means any.
    #[serde(default)]
    pub status: Vec<AssetStatus>,
    /// Allowed categories (exact match); empty means any.
    #[serde(default)]
    pub category: Vec<String>,
    /// Allowed uploader names (exact match); empty means any.
    #[serde(default)]
    pub uploaded_by: Vec<String>,
    /// Upload-date window.
    #[serde(default)]
    pub date_range: DateRange,
    /// Size window in megabytes.
    #[serde(default)]
    pub size_range: SizeRange,
    /// Requested tags; an asset matches if it carries at least one.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl FilterCriteria {
    /// Predicate evaluator: does `asset` satisfy every constrained
    /// predicate? Pure function of its inputs.
    pub fn matches(&self, asset: &Asset) -> bool {
        // Search: case-insensitive substring on the name.
        if !self.search.trim().is_empty() {
            let needle = self.search.trim().to_lowercase();
            if !asset.name.to_lowercase().contains(&needle) {
                return false;
            }
        }

        // Set-typed predicates: membership, with empty meaning "any".
        if !self.kind.is_empty() && !self.kind.contains(&asset.kind) {
            return false;
        }
        if !self.status.is_empty() && !self.status.contains(&asset.status) {
            return false;
        }
        if !self.category.is_empty() && !self.category.contains(&asset.category) {
            return false;
        }
        if !self.uploaded_by.is_empty() && !self.uploaded_by.contains(&asset.uploaded_by) {
            return false;
        }

        // Tags: OR within the field -- at least one requested tag present.
        if !self.tags.is_empty() && !self.tags.iter().any(|t| asset.tags.contains(t)) {
            return false;
        }

        // Date window, inclusive on both present sides.
        if let Some(start) = self.date_range.start_bound() {
            if asset.uploaded_at < start {
                return false;
            }
        }
        if let Some(end) = self.date_range.end_bound() {
            if asset.uploaded_at > end {
                return false;
            }
        }

        // Size window, inclusive at both bounds.
        if asset.size_mb < self.size_range.min_bound()
            || asset.size_mb > self.size_range.max_bound()
        {
            return false;
        }

        true
    }

    /// Count of constrained predicate categories, for badge display and
    /// "clear all" affordances. One increment per non-default category;
    /// a range counts once when either side is set. Maximum 8.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if !self.search.trim().is_empty() {
            count += 1;
        }
        if !self.kind.is_empty() {
            count += 1;
        }
        if !self.status.is_empty() {
            count += 1;
        }
        if !self.category.is_empty() {
            count += 1;
        }
        if !self.uploaded_by.is_empty() {
            count += 1;
        }
        if !self.tags.is_empty() {
            count += 1;
        }
        if self.date_range.is_constrained() {
            count += 1;
        }
        if self.size_range.is_constrained() {
            count += 1;
        }
        count
    }

    /// Whether every field is at its permissive default.
    pub fn is_unconstrained(&self) -> bool {
        self.active_filter_count() == 0
    }
}

// ---------------------------------------------------------------------------
// Basic filters and mode selection
// ---------------------------------------------------------------------------

/// The three simple listing controls: search box, kind dropdown, status
/// dropdown.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BasicFilters {
    #[serde(default)]
    pub search: String,
    pub kind: Option<AssetKind>,
    pub status: Option<AssetStatus>,
}

impl BasicFilters {
    /// Lower the basic controls into full criteria so the same evaluator
    /// serves both modes.
    pub fn into_criteria(self) -> FilterCriteria {
        FilterCriteria {
            search: self.search,
            kind: self.kind.into_iter().collect(),
            status: self.status.into_iter().collect(),
            ..FilterCriteria::default()
        }
    }
}

/// The governing filter context for a listing. Advanced, when selected,
/// fully overrides basic -- the variants are mutually exclusive by
/// construction, never merged.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterMode {
    Basic(FilterCriteria),
    Advanced(FilterCriteria),
}

impl FilterMode {
    /// The criteria governing the listing, whichever variant is active.
    pub fn criteria(&self) -> &FilterCriteria {
        match self {
            FilterMode::Basic(c) | FilterMode::Advanced(c) => c,
        }
    }

    /// Human-facing mode label, used in API responses so clients know to
    /// reset their basic controls when advanced wins.
    pub fn label(&self) -> &'static str {
        match self {
            FilterMode::Basic(_) => "basic",
            FilterMode::Advanced(_) => "advanced",
        }
    }
}

/// Pick the governing mode. If the advanced criteria constrains anything,
/// it wins and the basic values are discarded entirely; otherwise the basic
/// controls apply.
pub fn select_mode(basic: BasicFilters, advanced: FilterCriteria) -> FilterMode {
    if advanced.is_unconstrained() {
        FilterMode::Basic(basic.into_criteria())
    } else {
        FilterMode::Advanced(advanced)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
