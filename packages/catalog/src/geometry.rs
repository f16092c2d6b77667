//! Geometry dataset loading.
//!
//! The geometry dataset is a `GeoJSON` `FeatureCollection` of street
//! segments. Each feature carries the street's display name in its
//! `nombre` property (`name` accepted as an alias) and a `LineString`
//! or `MultiLineString` geometry. A `MultiLineString` contributes one
//! segment per member line under the same name. Features with other
//! geometry types are skipped.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use geo::LineString;
use geojson::GeoJson;

use crate::CatalogError;

/// One drawable street segment as read from the geometry dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryFeature {
    /// Raw display name from the `nombre` property. Absent or empty
    /// names are excluded when the catalog is built.
    pub display_name: Option<String>,
    /// The segment's line geometry in lon/lat order.
    pub line: LineString<f64>,
}

/// Loads geometry features from a `GeoJSON` file.
///
/// # Errors
///
/// Returns [`CatalogError`] if the file cannot be read or is not a
/// `GeoJSON` `FeatureCollection`.
pub fn load_features(path: impl AsRef<Path>) -> Result<Vec<GeometryFeature>, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let features = features_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} street segments from {}",
        features.len(),
        path.display()
    );
    Ok(features)
}

/// Parses geometry features from any reader.
///
/// # Errors
///
/// Returns [`CatalogError`] if the stream is not a `GeoJSON`
/// `FeatureCollection`.
pub fn features_from_reader(reader: impl Read) -> Result<Vec<GeometryFeature>, CatalogError> {
    let geojson = GeoJson::from_reader(reader)?;
    let GeoJson::FeatureCollection(collection) = geojson else {
        return Err(CatalogError::NotAFeatureCollection);
    };

    let mut features = Vec::new();

    for feature in collection.features {
        let display_name = feature
            .property("nombre")
            .or_else(|| feature.property("name"))
            .and_then(|v| v.as_str())
            .map(str::to_string);

        let Some(geometry) = feature.geometry else {
            continue;
        };
        let Ok(geo_geom) = geo::Geometry::<f64>::try_from(geometry) else {
            log::warn!("Skipping feature with unconvertible geometry ({display_name:?})");
            continue;
        };

        match geo_geom {
            geo::Geometry::LineString(line) => features.push(GeometryFeature {
                display_name,
                line,
            }),
            geo::Geometry::MultiLineString(multi) => {
                for line in multi.0 {
                    features.push(GeometryFeature {
                        display_name: display_name.clone(),
                        line,
                    });
                }
            }
            _ => {
                log::trace!("Skipping non-line feature ({display_name:?})");
            }
        }
    }

    Ok(features)
}
