#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Query-time street name search.
//!
//! Deliberately simple: the query is normalized through the same
//! pipeline as catalog names, and a name matches when its canonical
//! key contains the normalized query as a substring. Results keep the
//! catalog's lexicographic order; there is no relevance scoring and no
//! fuzzy matching, so the same query always returns the same list.

use callejero_catalog::StreetCatalog;
use callejero_history::normalize::normalize;

/// Default number of results returned to the UI.
pub const SEARCH_RESULT_LIMIT: usize = 10;

/// Minimum query length the UI is expected to enforce before calling
/// [`search`]. The function itself handles shorter queries correctly;
/// the gate exists to keep single-character queries from flooding the
/// result panel, and it belongs to the caller.
pub const MIN_QUERY_LEN: usize = 2;

/// One search result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    /// Display name, exactly as shown on the map.
    pub name: String,
    /// Whether the name resolved to a historical record, so the UI can
    /// style the two tiers differently.
    pub has_history: bool,
}

/// Returns up to `limit` catalog names matching `query`, in catalog
/// (lexicographic) order.
///
/// An empty or whitespace-only query matches nothing.
#[must_use]
pub fn search(query: &str, catalog: &StreetCatalog, limit: usize) -> Vec<SearchHit> {
    let needle = normalize(query);
    if needle.is_empty() {
        return Vec::new();
    }

    catalog
        .entries()
        .filter(|entry| entry.key.contains(&needle))
        .map(|entry| SearchHit {
            name: entry.name.clone(),
            has_history: entry.history.is_some(),
        })
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use callejero_catalog::GeometryFeature;
    use callejero_history::HistoryIndex;
    use callejero_history_models::HistoricalRecord;
    use geo::line_string;

    fn record(current_name: &str) -> HistoricalRecord {
        HistoricalRecord {
            current_name: current_name.to_string(),
            description: None,
            legal_basis: None,
            previous_names: Vec::new(),
            wikipedia: None,
        }
    }

    fn feature(name: &str) -> GeometryFeature {
        GeometryFeature {
            display_name: Some(name.to_string()),
            line: line_string![(x: -58.40, y: -34.60), (x: -58.41, y: -34.61)],
        }
    }

    fn catalog_of(names: &[&str], records: Vec<HistoricalRecord>) -> StreetCatalog {
        let index = HistoryIndex::build(records);
        StreetCatalog::build(names.iter().map(|n| feature(n)), &index)
    }

    #[test]
    fn finds_substring_matches_ignoring_prefix_and_case() {
        let catalog = catalog_of(
            &[
                "Avenida Rivadavia",
                "Bolivar",
                "Chacabuco",
                "Defensa",
                "Esmeralda",
                "Florida",
                "Lavalle",
                "Moreno",
                "Piedras",
                "Reconquista",
            ],
            vec![record("Avenida Rivadavia")],
        );

        let hits = search("rivad", &catalog, SEARCH_RESULT_LIMIT);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Avenida Rivadavia");
        assert!(hits[0].has_history);
    }

    #[test]
    fn has_history_reflects_catalog_state() {
        let catalog = catalog_of(
            &["Avenida Rivadavia", "Zelaya"],
            vec![record("Avenida Rivadavia")],
        );

        let hits = search("a", &catalog, SEARCH_RESULT_LIMIT);
        let rivadavia = hits.iter().find(|h| h.name == "Avenida Rivadavia").unwrap();
        let zelaya = hits.iter().find(|h| h.name == "Zelaya").unwrap();
        assert!(rivadavia.has_history);
        assert!(!zelaya.has_history);
    }

    #[test]
    fn results_keep_lexicographic_order() {
        let catalog = catalog_of(&["Moreno", "Bolivar", "Defensa"], Vec::new());
        let hits = search("o", &catalog, SEARCH_RESULT_LIMIT);
        let names: Vec<&str> = hits
            .iter()
            .map(|h| h.name.as_str())
            .collect();
        assert_eq!(names, vec!["Bolivar", "Moreno"]);
    }

    #[test]
    fn never_exceeds_limit() {
        let names = [
            "Austria", "Brasil", "California", "Catamarca", "Cordoba", "Corrientes", "Ecuador",
            "Guatemala", "Jujuy", "La Rioja", "Mexico", "Paraguay", "Salta", "Santa Fe",
        ];
        let catalog = catalog_of(&names, Vec::new());

        let hits = search("a", &catalog, SEARCH_RESULT_LIMIT);
        assert_eq!(hits.len(), SEARCH_RESULT_LIMIT);
    }

    #[test]
    fn single_character_queries_work() {
        // The minimum-length gate belongs to the caller; the function
        // itself must behave for any non-empty query.
        let catalog = catalog_of(&["Zelaya"], Vec::new());
        let hits = search("z", &catalog, SEARCH_RESULT_LIMIT);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_query_matches_nothing() {
        let catalog = catalog_of(&["Zelaya"], Vec::new());
        assert!(search("", &catalog, SEARCH_RESULT_LIMIT).is_empty());
        assert!(search("   ", &catalog, SEARCH_RESULT_LIMIT).is_empty());
    }

    #[test]
    fn query_is_normalized_like_names() {
        let catalog = catalog_of(&["Avenida Rivadavia"], Vec::new());
        // Prefix and diacritics in the query normalize away too.
        let hits = search("av. rivadavía", &catalog, SEARCH_RESULT_LIMIT);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn empty_catalog_returns_no_results() {
        let catalog = StreetCatalog::build(Vec::new(), &HistoryIndex::build(Vec::new()));
        assert!(search("rivad", &catalog, SEARCH_RESULT_LIMIT).is_empty());
    }
}
