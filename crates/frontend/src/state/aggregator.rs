//! Best-effort assembly of the cross-region destination superset.
//!
//! Global search needs data beyond the selected region. The aggregator
//! tries the bulk endpoint first and falls back to scanning a bounded
//! number of regions. Every failure here is swallowed: search completeness
//! degrades, the user never sees an error.

use contracts::Destination;
use leptos::prelude::{GetUntracked, Set};
use log::{debug, warn};

use crate::api::TourismApi;

use super::DirectoryContext;

/// How many regions the degraded-mode scan visits when the bulk endpoint
/// yields nothing.
pub const REGION_SCAN_LIMIT: usize = 10;

/// Build the all-data superset: bulk endpoint first, then a bounded
/// per-region scan when bulk comes back empty or fails.
///
/// After a non-empty superset lands, an active query is re-run against it
/// so earlier searches pick up the wider data.
pub async fn load_all_destinations(
    api: &impl TourismApi,
    ctx: DirectoryContext,
    scan_limit: usize,
) {
    let bulk = match api.fetch_all_destinations().await {
        Ok(list) => list,
        Err(err) => {
            warn!("bulk destination fetch failed: {err}");
            Vec::new()
        }
    };
    if !bulk.is_empty() {
        debug!("superset: {} destinations from the bulk endpoint", bulk.len());
        store_superset(ctx, bulk);
        return;
    }

    // Degraded mode: one call per region, bounded, errors skipped.
    let regions = ctx.regions.get_untracked();
    let mut collected = Vec::new();
    for region in regions.iter().take(scan_limit) {
        match api.fetch_destinations_by_region(region.id).await {
            Ok(mut list) => collected.append(&mut list),
            Err(err) => {
                warn!("superset scan skipped region {}: {err}", region.id);
            }
        }
    }
    if !collected.is_empty() {
        debug!(
            "superset: {} destinations from the first {} regions",
            collected.len(),
            regions.len().min(scan_limit)
        );
        store_superset(ctx, collected);
    }
}

/// Refetch the superset from the bulk endpoint alone, as done after
/// mutations. Returns the fresh list so callers can re-search against it
/// without waiting for signal propagation; failure returns an empty list
/// and is only logged.
pub async fn refresh_superset(api: &impl TourismApi, ctx: DirectoryContext) -> Vec<Destination> {
    match api.fetch_all_destinations().await {
        Ok(list) => {
            debug!("superset refreshed: {} destinations", list.len());
            ctx.superset.set(list.clone());
            list
        }
        Err(err) => {
            warn!("superset refresh failed: {err}");
            Vec::new()
        }
    }
}

fn store_superset(ctx: DirectoryContext, destinations: Vec<Destination>) {
    ctx.superset.set(destinations);
    if !ctx.query.get_untracked().is_empty() {
        ctx.run_search();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use futures::executor::block_on;

    use super::*;
    use crate::api::ApiError;
    use crate::state::testing::{dest, region, MockApi};

    #[test]
    fn bulk_result_becomes_the_superset_without_scanning_regions() {
        let ctx = DirectoryContext::new();
        ctx.regions.set(vec![region(10, 1, "Malang")]);
        let api = MockApi {
            all_destinations: Ok(vec![dest(1, 10, "Jatim Park"), dest(2, 10, "Museum Angkut")]),
            ..MockApi::default()
        };

        block_on(load_all_destinations(&api, ctx, REGION_SCAN_LIMIT));

        assert_eq!(ctx.superset.get_untracked().len(), 2);
        assert_eq!(api.count("all"), 1);
        assert_eq!(api.count("region"), 0);
    }

    #[test]
    fn empty_bulk_falls_back_to_a_bounded_region_scan() {
        let ctx = DirectoryContext::new();
        ctx.regions.set(vec![
            region(10, 1, "Malang"),
            region(11, 1, "Batu"),
            region(12, 1, "Blitar"),
        ]);
        let api = MockApi {
            all_destinations: Ok(Vec::new()),
            by_region: HashMap::from([
                (10, Ok(vec![dest(1, 10, "Jatim Park")])),
                (11, Ok(vec![dest(2, 11, "Alun-Alun Batu")])),
                (12, Ok(vec![dest(3, 12, "Candi Penataran")])),
            ]),
            ..MockApi::default()
        };

        block_on(load_all_destinations(&api, ctx, 2));

        // Only the first two regions are visited.
        let ids: Vec<i64> = ctx
            .superset
            .get_untracked()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(api.count("region"), 2);
    }

    #[test]
    fn scan_skips_failing_regions_and_keeps_the_rest() {
        let ctx = DirectoryContext::new();
        ctx.regions.set(vec![region(10, 1, "Malang"), region(11, 1, "Batu")]);
        let api = MockApi {
            all_destinations: Err(ApiError::Network("offline".to_string())),
            by_region: HashMap::from([
                (10, Err(ApiError::Status { status: 500, message: None })),
                (11, Ok(vec![dest(2, 11, "Alun-Alun Batu")])),
            ]),
            ..MockApi::default()
        };

        block_on(load_all_destinations(&api, ctx, REGION_SCAN_LIMIT));

        let ids: Vec<i64> = ctx
            .superset
            .get_untracked()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![2]);
        // Best effort only: nothing surfaced to the user.
        assert_eq!(ctx.error.get_untracked(), None);
    }

    #[test]
    fn total_failure_leaves_the_superset_empty_and_silent() {
        let ctx = DirectoryContext::new();
        ctx.regions.set(vec![region(10, 1, "Malang")]);
        let api = MockApi {
            all_destinations: Err(ApiError::Network("offline".to_string())),
            by_region: HashMap::from([(
                10,
                Err(ApiError::Network("offline".to_string())),
            )]),
            ..MockApi::default()
        };

        block_on(load_all_destinations(&api, ctx, REGION_SCAN_LIMIT));

        assert!(ctx.superset.get_untracked().is_empty());
        assert_eq!(ctx.error.get_untracked(), None);
    }

    #[test]
    fn an_active_query_is_rerun_once_the_superset_lands() {
        let ctx = DirectoryContext::new();
        ctx.query.set("pantai".to_string());
        let api = MockApi {
            all_destinations: Ok(vec![dest(1, 10, "Pantai Klayar"), dest(2, 10, "Kawah Ijen")]),
            ..MockApi::default()
        };

        block_on(load_all_destinations(&api, ctx, REGION_SCAN_LIMIT));

        let ids: Vec<i64> = ctx
            .search_results
            .get_untracked()
            .iter()
            .map(|d| d.id)
            .collect();
        assert_eq!(ids, vec![1]);
        assert!(ctx.results_visible.get_untracked());
    }

    #[test]
    fn refresh_superset_returns_the_fresh_list_and_stores_it() {
        let ctx = DirectoryContext::new();
        ctx.superset.set(vec![dest(9, 10, "Lama")]);
        let api = MockApi {
            all_destinations: Ok(vec![dest(1, 10, "Baru")]),
            ..MockApi::default()
        };

        let fresh = block_on(refresh_superset(&api, ctx));

        assert_eq!(fresh.len(), 1);
        assert_eq!(ctx.superset.get_untracked(), fresh);
    }

    #[test]
    fn refresh_superset_failure_is_swallowed() {
        let ctx = DirectoryContext::new();
        ctx.superset.set(vec![dest(9, 10, "Lama")]);
        let api = MockApi {
            all_destinations: Err(ApiError::Status { status: 502, message: None }),
            ..MockApi::default()
        };

        let fresh = block_on(refresh_superset(&api, ctx));

        assert!(fresh.is_empty());
        assert_eq!(ctx.error.get_untracked(), None);
    }
}
