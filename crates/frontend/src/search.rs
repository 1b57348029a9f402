//! Free-text search across destination collections.
//!
//! Pure logic, no signals and no network: callers hand in the destination
//! sets they currently know about (the all-data superset first, then the
//! region-scoped list), the union is deduplicated by id with the first
//! occurrence winning, and the survivors are matched case-insensitively
//! against the configured fields.

use std::collections::HashSet;

use contracts::Destination;

/// Which destination fields participate in matching.
///
/// The default matches the name alone, the narrowest and most predictable
/// policy. Address and resolved region/province names can be switched on
/// per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchFields {
    pub name: bool,
    pub address: bool,
    pub region: bool,
    pub province: bool,
}

impl MatchFields {
    pub const NAME_ONLY: Self = Self {
        name: true,
        address: false,
        region: false,
        province: false,
    };

    /// Name, address, and the resolved region/province display names.
    pub const BROAD: Self = Self {
        name: true,
        address: true,
        region: true,
        province: true,
    };
}

impl Default for MatchFields {
    fn default() -> Self {
        Self::NAME_ONLY
    }
}

/// Region and province display names for one destination, resolved by the
/// caller so this module stays free of cache lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionLabels {
    pub region: String,
    pub province: String,
}

/// Result of one search run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOutcome {
    pub results: Vec<Destination>,
    /// Whether the results panel should be shown. Any non-blank query keeps
    /// the panel up, so "no matches" renders distinctly from "search
    /// inactive".
    pub visible: bool,
}

/// Search `sets` for `query`.
///
/// A blank query yields an empty, hidden outcome. Otherwise the sets are
/// unioned in the order given, deduplicated by destination id (first
/// occurrence wins, insertion order preserved) and filtered to entries
/// matching the query on the enabled fields.
pub fn search_destinations(
    query: &str,
    sets: &[&[Destination]],
    fields: MatchFields,
    resolve: impl Fn(i64) -> RegionLabels,
) -> SearchOutcome {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return SearchOutcome::default();
    }
    let needle = trimmed.to_lowercase();

    let mut seen: HashSet<i64> = HashSet::new();
    let mut results = Vec::new();
    for set in sets {
        for dest in *set {
            if !seen.insert(dest.id) {
                continue;
            }
            if matches(dest, &needle, fields, &resolve) {
                results.push(dest.clone());
            }
        }
    }

    // Any non-blank query keeps the panel visible, matches or not.
    SearchOutcome {
        results,
        visible: true,
    }
}

fn matches(
    dest: &Destination,
    needle: &str,
    fields: MatchFields,
    resolve: &impl Fn(i64) -> RegionLabels,
) -> bool {
    if fields.name && contains(&dest.nama, needle) {
        return true;
    }
    if fields.address && contains(&dest.alamat, needle) {
        return true;
    }
    if fields.region || fields.province {
        let labels = resolve(dest.id_daerah);
        if fields.region && contains(&labels.region, needle) {
            return true;
        }
        if fields.province && contains(&labels.province, needle) {
            return true;
        }
    }
    false
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dest(id: i64, nama: &str) -> Destination {
        Destination {
            id,
            id_daerah: 1,
            nama: nama.to_string(),
            alamat: String::new(),
            rating: 4.0,
            link_gmaps: String::new(),
        }
    }

    fn no_labels(_: i64) -> RegionLabels {
        RegionLabels::default()
    }

    #[test]
    fn overlapping_sets_yield_each_id_once() {
        let superset = vec![dest(1, "Pantai A")];
        let regional = vec![dest(1, "Pantai A"), dest(2, "Pantai B")];

        let outcome = search_destinations(
            "pantai",
            &[&superset, &regional],
            MatchFields::NAME_ONLY,
            no_labels,
        );

        let ids: Vec<i64> = outcome.results.iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn first_occurrence_wins_and_order_is_preserved() {
        let superset = vec![dest(3, "Telaga Sarangan"), dest(1, "Pantai Klayar")];
        let regional = vec![dest(1, "Pantai Klayar (regional copy)"), dest(2, "Pantai Watu Karung")];

        let outcome = search_destinations(
            "pantai",
            &[&superset, &regional],
            MatchFields::NAME_ONLY,
            no_labels,
        );

        // The id=1 copy from the superset wins; the regional rename never shows.
        let names: Vec<&str> = outcome.results.iter().map(|d| d.nama.as_str()).collect();
        assert_eq!(names, vec!["Pantai Klayar", "Pantai Watu Karung"]);
    }

    #[test]
    fn blank_queries_hide_the_results_panel() {
        let data = vec![dest(1, "Gunung Bromo")];
        for query in ["", "   ", "\t\n"] {
            let outcome =
                search_destinations(query, &[&data], MatchFields::NAME_ONLY, no_labels);
            assert!(outcome.results.is_empty());
            assert!(!outcome.visible);
        }
    }

    #[test]
    fn zero_matches_still_show_the_panel() {
        let data = vec![dest(1, "Gunung Bromo")];
        let outcome =
            search_destinations("pantai", &[&data], MatchFields::NAME_ONLY, no_labels);
        assert!(outcome.results.is_empty());
        assert!(outcome.visible);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let data = vec![dest(1, "Candi Borobudur")];
        let outcome =
            search_destinations("BOROBUDUR", &[&data], MatchFields::NAME_ONLY, no_labels);
        assert_eq!(outcome.results.len(), 1);
    }

    #[test]
    fn name_only_ignores_address() {
        let mut d = dest(1, "Kawah Ijen");
        d.alamat = "Tamansari, Licin, Banyuwangi".to_string();
        let data = vec![d];

        let narrow =
            search_destinations("banyuwangi", &[&data], MatchFields::NAME_ONLY, no_labels);
        assert!(narrow.results.is_empty());

        let broad = search_destinations("banyuwangi", &[&data], MatchFields::BROAD, no_labels);
        assert_eq!(broad.results.len(), 1);
    }

    #[test]
    fn broad_fields_match_resolved_region_and_province_names() {
        let data = vec![dest(1, "Air Terjun Madakaripura")];
        let resolve = |id_daerah: i64| {
            assert_eq!(id_daerah, 1);
            RegionLabels {
                region: "Probolinggo".to_string(),
                province: "Jawa Timur".to_string(),
            }
        };

        let by_region =
            search_destinations("probolinggo", &[&data], MatchFields::BROAD, resolve);
        assert_eq!(by_region.results.len(), 1);

        let by_province =
            search_destinations("jawa timur", &[&data], MatchFields::BROAD, resolve);
        assert_eq!(by_province.results.len(), 1);
    }
}
