//! Convenience loader for the full dataset pair.
//!
//! Reads the historical JSON and the geometry `GeoJSON`, builds the
//! history index, and joins them into a catalog. This is the single
//! latency-bearing startup step; everything after it operates on
//! read-only in-memory state.

use std::path::Path;

use callejero_history::{HistoryError, HistoryIndex};

use crate::{CatalogError, StreetCatalog, geometry};

/// Errors from loading either dataset.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// Historical dataset failed to load.
    #[error("historical dataset: {0}")]
    History(#[from] HistoryError),

    /// Geometry dataset failed to load.
    #[error("geometry dataset: {0}")]
    Geometry(#[from] CatalogError),
}

/// Loads both datasets and builds the catalog.
///
/// # Errors
///
/// Returns [`LoadError`] if either file cannot be read or parsed.
/// Callers that must stay up on failure (the server) degrade to
/// [`StreetCatalog::default`] and surface the message instead.
pub fn load_catalog(
    history_path: impl AsRef<Path>,
    geometry_path: impl AsRef<Path>,
) -> Result<StreetCatalog, LoadError> {
    let records = callejero_history::load_records(history_path)?;
    let index = HistoryIndex::build(records);
    let features = geometry::load_features(geometry_path)?;
    Ok(StreetCatalog::build(features, &index))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_files_are_errors_not_panics() {
        let result = load_catalog("/nonexistent/historical.json", "/nonexistent/streets.geojson");
        assert!(matches!(result, Err(LoadError::History(_))));
    }

    #[test]
    fn loads_dataset_pair_from_disk() {
        let dir = std::env::temp_dir().join("callejero_load_test");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();

        std::fs::write(
            dir.join("historical.json"),
            r#"[{"currentName": "Coronel Esteban Bonorino"}]"#,
        )
        .unwrap();
        std::fs::write(
            dir.join("streets.geojson"),
            r#"{
                "type": "FeatureCollection",
                "features": [{
                    "type": "Feature",
                    "properties": {"nombre": "Esteban Bonorino"},
                    "geometry": {
                        "type": "LineString",
                        "coordinates": [[-58.44, -34.63], [-58.45, -34.64]]
                    }
                }]
            }"#,
        )
        .unwrap();

        let catalog =
            load_catalog(dir.join("historical.json"), dir.join("streets.geojson")).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.history_for("Esteban Bonorino").unwrap().current_name,
            "Coronel Esteban Bonorino"
        );

        let _ = std::fs::remove_dir_all(&dir);
    }
}
