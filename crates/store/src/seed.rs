//! Deterministic mock catalog loaded at startup.
//!
//! The records mirror the lighting-brand media library the admin panel
//! manages: product hero shots, campaign footage, spec sheets, and audio
//! stings. Fixed ids and timestamps keep listings reproducible for tests.

use luxdam_core::asset::{Asset, AssetKind, AssetStatus};
use luxdam_core::types::{EntityId, Timestamp};

fn ts(s: &str) -> Timestamp {
    s.parse().expect("seed timestamp is valid RFC 3339")
}

#[allow(clippy::too_many_arguments)]
fn asset(
    id: EntityId,
    name: &str,
    kind: AssetKind,
    size_mb: f64,
    status: AssetStatus,
    uploaded_by: &str,
    uploaded_at: &str,
    category: &str,
    tags: &[&str],
) -> Asset {
    Asset {
        id,
        name: name.to_string(),
        kind,
        size_mb,
        status,
        uploaded_by: uploaded_by.to_string(),
        uploaded_at: ts(uploaded_at),
        category: category.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

/// The seed catalog, in upload order.
pub fn seed_assets() -> Vec<Asset> {
    vec![
        asset(
            1,
            "pendant-hero.mp4",
            AssetKind::Video,
            45.2,
            AssetStatus::Approved,
            "Maya Lindqvist",
            "2024-03-10T09:15:00Z",
            "product",
            &["pendant", "hero", "showroom"],
        ),
        asset(
            2,
            "lumen-series-spec-sheet.pdf",
            AssetKind::Document,
            2.1,
            AssetStatus::Pending,
            "Jonas Weber",
            "2024-03-12T14:02:00Z",
            "documentation",
            &["spec", "lumen-series"],
        ),
        asset(
            3,
            "sconce-detail.png",
            AssetKind::Image,
            8.4,
            AssetStatus::Approved,
            "Maya Lindqvist",
            "2024-02-28T11:40:00Z",
            "product",
            &["sconce", "detail"],
        ),
        asset(
            4,
            "spring-campaign-cut.mp4",
            AssetKind::Video,
            128.0,
            AssetStatus::Pending,
            "Priya Raman",
            "2024-03-18T16:25:00Z",
            "campaign",
            &["campaign", "spring"],
        ),
        asset(
            5,
            "ambient-sting.wav",
            AssetKind::Audio,
            12.7,
            AssetStatus::Approved,
            "Jonas Weber",
            "2024-01-22T08:05:00Z",
            "campaign",
            &["audio", "sting"],
        ),
        asset(
            6,
            "floor-lamp-lineup.jpg",
            AssetKind::Image,
            5.3,
            AssetStatus::Rejected,
            "Priya Raman",
            "2024-03-02T10:10:00Z",
            "product",
            &["floor-lamp", "lineup"],
        ),
        asset(
            7,
            "installation-guide.pdf",
            AssetKind::Document,
            0.9,
            AssetStatus::Approved,
            "Maya Lindqvist",
            "2024-02-14T13:55:00Z",
            "documentation",
            &["guide", "installation"],
        ),
        asset(
            8,
            "showroom-walkthrough.mp4",
            AssetKind::Video,
            310.6,
            AssetStatus::Rejected,
            "Jonas Weber",
            "2024-03-20T17:45:00Z",
            "showroom",
            &["showroom", "walkthrough", "hero"],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_ids_are_unique_and_sequential() {
        let assets = seed_assets();
        for (i, asset) in assets.iter().enumerate() {
            assert_eq!(asset.id, i as EntityId + 1);
        }
    }

    #[test]
    fn seed_covers_every_kind_and_status() {
        let assets = seed_assets();
        for kind in [
            AssetKind::Image,
            AssetKind::Video,
            AssetKind::Audio,
            AssetKind::Document,
        ] {
            assert!(assets.iter().any(|a| a.kind == kind), "missing {kind}");
        }
        for status in [
            AssetStatus::Approved,
            AssetStatus::Pending,
            AssetStatus::Rejected,
        ] {
            assert!(
                assets.iter().any(|a| a.status == status),
                "missing {status}"
            );
        }
    }

    #[test]
    fn seed_sizes_are_non_negative() {
        assert!(seed_assets().iter().all(|a| a.size_mb >= 0.0));
    }
}
