//! Province and region reference data.
//!
//! Both collections are fetched once per session and then only read. A
//! missing cross-reference (a destination's region, a region's province)
//! resolves to the display sentinel, never an error.

use contracts::{Province, Region};
use leptos::prelude::{Set, With};
use log::error;

use crate::api::{ApiError, TourismApi};
use crate::search::RegionLabels;

use super::DirectoryContext;

/// Shown when a referenced region or province is not in the cache.
pub const UNKNOWN_LABEL: &str = "Unknown";

impl DirectoryContext {
    pub fn find_province(&self, id: i64) -> Option<Province> {
        self.provinces
            .with(|list| list.iter().find(|p| p.id == id).cloned())
    }

    pub fn find_region(&self, id: i64) -> Option<Region> {
        self.regions
            .with(|list| list.iter().find(|r| r.id == id).cloned())
    }

    /// Region and province display names for a destination's region id.
    pub fn region_labels(&self, region_id: i64) -> RegionLabels {
        let region = self.find_region(region_id);
        let province = region
            .as_ref()
            .and_then(|r| self.find_province(r.id_provinsi));
        RegionLabels {
            region: region
                .map(|r| r.nama_daerah)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
            province: province
                .map(|p| p.nama_provinsi)
                .unwrap_or_else(|| UNKNOWN_LABEL.to_string()),
        }
    }
}

/// Fetch the province collection. No retry is scheduled on failure.
pub async fn load_provinces(api: &impl TourismApi, ctx: DirectoryContext) {
    match api.fetch_provinces().await {
        Ok(list) => ctx.provinces.set(list),
        Err(err) => {
            error!("failed to fetch provinces: {err}");
            ctx.provinces.set(Vec::new());
            ctx.error.set(Some(match err {
                ApiError::Status { .. } => "Gagal mengambil data provinsi.".to_string(),
                other => format!("Gagal mengambil data provinsi: {other}"),
            }));
        }
    }
}

/// Fetch the region collection. No retry is scheduled on failure.
pub async fn load_regions(api: &impl TourismApi, ctx: DirectoryContext) {
    match api.fetch_regions().await {
        Ok(list) => ctx.regions.set(list),
        Err(err) => {
            error!("failed to fetch regions: {err}");
            ctx.regions.set(Vec::new());
            ctx.error.set(Some(match err {
                ApiError::Status { .. } => "Gagal mengambil data daerah.".to_string(),
                other => format!("Gagal mengambil data daerah: {other}"),
            }));
        }
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use leptos::prelude::GetUntracked;

    use super::*;
    use crate::state::testing::{province, region, MockApi};

    #[test]
    fn load_fills_both_collections() {
        let ctx = DirectoryContext::new();
        let api = MockApi {
            provinces: Ok(vec![province(1, "Jawa Timur")]),
            regions: Ok(vec![region(10, 1, "Malang")]),
            ..MockApi::default()
        };

        block_on(load_provinces(&api, ctx));
        block_on(load_regions(&api, ctx));

        assert_eq!(ctx.provinces.get_untracked().len(), 1);
        assert_eq!(ctx.regions.get_untracked().len(), 1);
        assert_eq!(ctx.error.get_untracked(), None);
    }

    #[test]
    fn region_fetch_failure_stores_a_message_and_leaves_the_list_empty() {
        let ctx = DirectoryContext::new();
        let api = MockApi {
            regions: Err(ApiError::Status {
                status: 500,
                message: None,
            }),
            ..MockApi::default()
        };

        block_on(load_regions(&api, ctx));

        assert!(ctx.regions.get_untracked().is_empty());
        assert_eq!(
            ctx.error.get_untracked().as_deref(),
            Some("Gagal mengambil data daerah.")
        );
    }

    #[test]
    fn network_failure_message_carries_the_cause() {
        let ctx = DirectoryContext::new();
        let api = MockApi {
            provinces: Err(ApiError::Network("offline".to_string())),
            ..MockApi::default()
        };

        block_on(load_provinces(&api, ctx));

        let message = ctx.error.get_untracked().unwrap();
        assert!(message.starts_with("Gagal mengambil data provinsi:"));
        assert!(message.contains("offline"));
    }

    #[test]
    fn lookups_fall_back_to_the_unknown_sentinel() {
        let ctx = DirectoryContext::new();
        ctx.provinces.set(vec![province(1, "Jawa Timur")]);
        ctx.regions.set(vec![region(10, 1, "Malang"), region(11, 7, "Tanpa Provinsi")]);

        let labels = ctx.region_labels(10);
        assert_eq!(labels.region, "Malang");
        assert_eq!(labels.province, "Jawa Timur");

        // Region known, its province missing from the cache.
        let labels = ctx.region_labels(11);
        assert_eq!(labels.region, "Tanpa Provinsi");
        assert_eq!(labels.province, UNKNOWN_LABEL);

        // Region itself missing.
        let labels = ctx.region_labels(99);
        assert_eq!(labels.region, UNKNOWN_LABEL);
        assert_eq!(labels.province, UNKNOWN_LABEL);
    }
}
