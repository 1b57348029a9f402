//! Session state for the directory.
//!
//! [`DirectoryContext`] is the single source of truth: one `Copy` bundle of
//! signals provided at the app root, mirroring the container pattern used
//! for the rest of the UI state. Synchronous commands live here; async
//! choreography (reference loads, region loads, the superset aggregator,
//! mutations) lives in the submodules and is generic over
//! [`TourismApi`](crate::api::TourismApi) so it runs under plain
//! `cargo test`.

pub mod aggregator;
pub mod loader;
pub mod mutations;
pub mod reference;

use contracts::{Destination, Province, Region};
use leptos::prelude::*;

use crate::search::{search_destinations, MatchFields};

/// Active screen. Browsing is the initial state; add and delete modes are
/// reachable only from it, and "back" always returns to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Browse,
    Add,
    Delete,
}

/// All session state of the application.
#[derive(Clone, Copy)]
pub struct DirectoryContext {
    pub screen: RwSignal<Screen>,
    /// Live free-text query.
    pub query: RwSignal<String>,
    pub selected_province: RwSignal<Option<i64>>,
    pub selected_region: RwSignal<Option<i64>>,
    /// Reference collections, loaded once per session.
    pub provinces: RwSignal<Vec<Province>>,
    pub regions: RwSignal<Vec<Region>>,
    /// Destinations of the selected region.
    pub destinations: RwSignal<Vec<Destination>>,
    /// Best-effort cross-region superset backing global search.
    pub superset: RwSignal<Vec<Destination>>,
    pub search_results: RwSignal<Vec<Destination>>,
    pub results_visible: RwSignal<bool>,
    /// Current user-visible error, if any.
    pub error: RwSignal<Option<String>>,
    /// True while a region load or a mutation is in flight.
    pub loading: RwSignal<bool>,
    /// Guard so the superset aggregator runs at most once per session.
    pub aggregator_started: RwSignal<bool>,
    /// Which destination fields the search matches against.
    pub match_fields: MatchFields,
}

impl DirectoryContext {
    pub fn new() -> Self {
        Self::with_match_fields(MatchFields::default())
    }

    pub fn with_match_fields(match_fields: MatchFields) -> Self {
        Self {
            screen: RwSignal::new(Screen::Browse),
            query: RwSignal::new(String::new()),
            selected_province: RwSignal::new(None),
            selected_region: RwSignal::new(None),
            provinces: RwSignal::new(Vec::new()),
            regions: RwSignal::new(Vec::new()),
            destinations: RwSignal::new(Vec::new()),
            superset: RwSignal::new(Vec::new()),
            search_results: RwSignal::new(Vec::new()),
            results_visible: RwSignal::new(false),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            aggregator_started: RwSignal::new(false),
            match_fields,
        }
    }

    /// Regions belonging to the selected province, in cache order. Empty
    /// when no province is selected.
    pub fn regions_for_province(&self) -> Vec<Region> {
        let Some(province_id) = self.selected_province.get() else {
            return Vec::new();
        };
        self.regions.with(|regions| {
            regions
                .iter()
                .filter(|region| region.id_provinsi == province_id)
                .cloned()
                .collect()
        })
    }

    /// Select (or clear) a province. A province change always invalidates
    /// the region selection and the region-scoped list, even when the
    /// previously selected region would also belong to the new province.
    pub fn select_province(&self, id: Option<i64>) {
        self.selected_province.set(id);
        self.selected_region.set(None);
        self.destinations.set(Vec::new());
    }

    /// Select (or clear) a region. Loading the region's destinations is the
    /// caller's follow-up, see [`loader::load_region_destinations`].
    pub fn select_region(&self, id: Option<i64>) {
        self.selected_region.set(id);
        if id.is_none() {
            self.destinations.set(Vec::new());
        }
    }

    /// Reset query, selections and search output in one step.
    pub fn clear_filters(&self) {
        self.query.set(String::new());
        self.select_province(None);
        self.search_results.set(Vec::new());
        self.results_visible.set(false);
    }

    /// Update the query and re-run the search over the currently known sets.
    pub fn update_query(&self, value: String) {
        self.query.set(value);
        self.run_search();
    }

    /// Search the cached superset plus the region-scoped list.
    pub fn run_search(&self) {
        let superset = self.superset.get_untracked();
        self.apply_search(&superset);
    }

    /// Search against a freshly fetched superset instead of the cached one.
    ///
    /// Used right after mutations so the re-search observes post-mutation
    /// data without waiting for signal propagation.
    pub fn run_search_with(&self, fresh_superset: &[Destination]) {
        self.apply_search(fresh_superset);
    }

    fn apply_search(&self, superset: &[Destination]) {
        let query = self.query.get_untracked();
        let regional = self.destinations.get_untracked();
        let outcome = search_destinations(
            &query,
            &[superset, &regional],
            self.match_fields,
            |region_id| self.region_labels(region_id),
        );
        self.search_results.set(outcome.results);
        self.results_visible.set(outcome.visible);
    }

    /// The selected region's destinations narrowed by the live query. This
    /// feeds the grid under the filters and is independent of the search
    /// results panel.
    pub fn filtered_destinations(&self) -> Vec<Destination> {
        let needle = self.query.get().to_lowercase();
        self.destinations.with(|list| {
            list.iter()
                .filter(|dest| dest.nama.to_lowercase().contains(&needle))
                .cloned()
                .collect()
        })
    }

    /// Jump to a search result: select its region and province when both
    /// resolve in the reference cache, and hide the results panel either
    /// way. Returns the region id to load when a selection was applied.
    pub fn reveal_result(&self, dest: &Destination) -> Option<i64> {
        let resolved = self.find_region(dest.id_daerah).and_then(|region| {
            self.find_province(region.id_provinsi)
                .map(|province| (region, province))
        });
        let selected = resolved.map(|(region, province)| {
            self.selected_province.set(Some(province.id));
            self.selected_region.set(Some(region.id));
            region.id
        });
        self.results_visible.set(false);
        selected
    }

    pub fn show_add(&self) {
        if self.screen.get_untracked() == Screen::Browse {
            self.screen.set(Screen::Add);
        }
    }

    pub fn show_delete(&self) {
        if self.screen.get_untracked() == Screen::Browse {
            self.screen.set(Screen::Delete);
        }
    }

    /// Back to browsing from either mode.
    pub fn show_browse(&self) {
        self.screen.set(Screen::Browse);
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Canned gateway and confirmation gate shared by the state tests.

    use std::cell::RefCell;
    use std::collections::HashMap;

    use async_trait::async_trait;
    use contracts::{Destination, DestinationDraft, Province, Region};

    use crate::api::{ApiError, TourismApi};
    use crate::state::mutations::ConfirmGate;

    pub fn province(id: i64, name: &str) -> Province {
        Province::new(id, name)
    }

    pub fn region(id: i64, province_id: i64, name: &str) -> Region {
        Region::new(id, province_id, name)
    }

    pub fn dest(id: i64, region_id: i64, nama: &str) -> Destination {
        Destination {
            id,
            id_daerah: region_id,
            nama: nama.to_string(),
            alamat: String::new(),
            rating: 4.0,
            link_gmaps: String::new(),
        }
    }

    pub fn draft(region_id: i64, nama: &str) -> DestinationDraft {
        DestinationDraft {
            id_daerah: region_id,
            nama: nama.to_string(),
            alamat: "Jl. Raya 1".to_string(),
            rating: 4.5,
            link_gmaps: "https://maps.google.com".to_string(),
        }
    }

    /// Backend double returning canned responses and recording every call.
    pub struct MockApi {
        pub provinces: Result<Vec<Province>, ApiError>,
        pub regions: Result<Vec<Region>, ApiError>,
        pub all_destinations: Result<Vec<Destination>, ApiError>,
        pub by_region: HashMap<i64, Result<Vec<Destination>, ApiError>>,
        pub create_result: Result<Destination, ApiError>,
        pub delete_result: Result<(), ApiError>,
        pub calls: RefCell<Vec<String>>,
    }

    impl Default for MockApi {
        fn default() -> Self {
            Self {
                provinces: Ok(Vec::new()),
                regions: Ok(Vec::new()),
                all_destinations: Ok(Vec::new()),
                by_region: HashMap::new(),
                create_result: Ok(dest(1, 1, "Baru")),
                delete_result: Ok(()),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl MockApi {
        /// Number of recorded calls starting with `prefix`.
        pub fn count(&self, prefix: &str) -> usize {
            self.calls
                .borrow()
                .iter()
                .filter(|call| call.starts_with(prefix))
                .count()
        }
    }

    #[async_trait(?Send)]
    impl TourismApi for MockApi {
        async fn fetch_provinces(&self) -> Result<Vec<Province>, ApiError> {
            self.calls.borrow_mut().push("provinces".to_string());
            self.provinces.clone()
        }

        async fn fetch_regions(&self) -> Result<Vec<Region>, ApiError> {
            self.calls.borrow_mut().push("regions".to_string());
            self.regions.clone()
        }

        async fn fetch_all_destinations(&self) -> Result<Vec<Destination>, ApiError> {
            self.calls.borrow_mut().push("all".to_string());
            self.all_destinations.clone()
        }

        async fn fetch_destinations_by_region(
            &self,
            region_id: i64,
        ) -> Result<Vec<Destination>, ApiError> {
            self.calls.borrow_mut().push(format!("region {region_id}"));
            self.by_region
                .get(&region_id)
                .cloned()
                .unwrap_or_else(|| Ok(Vec::new()))
        }

        async fn create_destination(
            &self,
            draft: &DestinationDraft,
        ) -> Result<Destination, ApiError> {
            self.calls.borrow_mut().push(format!("create {}", draft.nama));
            self.create_result.clone()
        }

        async fn delete_destination(&self, id: i64) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(format!("delete {id}"));
            self.delete_result.clone()
        }
    }

    /// Confirmation gate answering with a fixed verdict.
    pub struct StubConfirm {
        pub answer: bool,
        pub asked: RefCell<usize>,
    }

    impl StubConfirm {
        pub fn yes() -> Self {
            Self {
                answer: true,
                asked: RefCell::new(0),
            }
        }

        pub fn no() -> Self {
            Self {
                answer: false,
                asked: RefCell::new(0),
            }
        }
    }

    impl ConfirmGate for StubConfirm {
        fn confirm(&self, _message: &str) -> bool {
            *self.asked.borrow_mut() += 1;
            self.answer
        }
    }
}
