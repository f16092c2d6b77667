#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street catalog: the per-name view over the geometry dataset.
//!
//! Built once at startup by grouping geometry segments by their exact
//! display name and resolving each name against the history index
//! through a single canonical-key lookup. Read-only afterwards and
//! shared by the search engine and the selection controller.
//!
//! Segment handles are opaque [`SegmentId`]s handed to the rendering
//! collaborator; the catalog privately keeps each segment's line
//! geometry only to answer bounding-region queries for viewport
//! framing.

pub mod geometry;
pub mod load;

use std::collections::BTreeMap;
use std::sync::Arc;

use callejero_history::HistoryIndex;
use callejero_history::normalize::normalize;
use callejero_history_models::HistoricalRecord;
use geo::{BoundingRect, Coord, LineString, Rect};
use serde::{Deserialize, Serialize};

pub use geometry::{GeometryFeature, features_from_reader, load_features};
pub use load::{LoadError, load_catalog};

/// Errors from loading the geometry dataset.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `GeoJSON` parsing error.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// JSON syntax error in the geometry dataset.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The dataset was valid `GeoJSON` but not a `FeatureCollection`.
    #[error("geometry dataset is not a GeoJSON FeatureCollection")]
    NotAFeatureCollection,
}

/// Opaque handle to one drawable street segment, assigned in load
/// order. The rendering collaborator keys its layers by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SegmentId(pub u32);

/// One distinct street name with its segments and resolved history.
#[derive(Debug, Clone)]
pub struct StreetEntry {
    /// Raw display name, exactly as written in the geometry dataset.
    pub name: String,
    /// Canonical key, computed once at build time. The same value the
    /// search engine compares queries against.
    pub key: String,
    /// Segments carrying this name (a street broken into blocks).
    pub segments: Vec<SegmentId>,
    /// Resolved historical record. `None` is a first-class outcome:
    /// the street is still selectable, just without narrative content.
    pub history: Option<Arc<HistoricalRecord>>,
}

/// All distinct street names from the geometry dataset, each with its
/// segments and (when resolution succeeded) historical record.
#[derive(Debug, Default)]
pub struct StreetCatalog {
    entries: BTreeMap<String, StreetEntry>,
    segment_lines: Vec<LineString<f64>>,
}

impl StreetCatalog {
    /// Builds the catalog from geometry features.
    ///
    /// Features with an absent or empty display name are excluded
    /// entirely. Remaining features are grouped by exact display name;
    /// each group is normalized once and resolved against the index
    /// with a single lookup.
    #[must_use]
    pub fn build(
        features: impl IntoIterator<Item = GeometryFeature>,
        index: &HistoryIndex,
    ) -> Self {
        let mut entries: BTreeMap<String, StreetEntry> = BTreeMap::new();
        let mut segment_lines = Vec::new();

        for feature in features {
            let Some(name) = feature.display_name else {
                continue;
            };
            if name.trim().is_empty() {
                continue;
            }

            #[allow(clippy::cast_possible_truncation)]
            let id = SegmentId(segment_lines.len() as u32);
            segment_lines.push(feature.line);

            entries
                .entry(name.clone())
                .or_insert_with(|| {
                    let key = normalize(&name);
                    let history = index.lookup(&key).map(Arc::clone);
                    StreetEntry {
                        name,
                        key,
                        segments: Vec::new(),
                        history,
                    }
                })
                .segments
                .push(id);
        }

        let with_history = entries.values().filter(|e| e.history.is_some()).count();
        log::info!(
            "Street catalog built: {} names over {} segments, {with_history} with history",
            entries.len(),
            segment_lines.len()
        );

        Self {
            entries,
            segment_lines,
        }
    }

    /// All distinct display names in lexicographic order.
    pub fn all_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// All entries in lexicographic name order.
    pub fn entries(&self) -> impl Iterator<Item = &StreetEntry> {
        self.entries.values()
    }

    /// The full entry for a display name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StreetEntry> {
        self.entries.get(name)
    }

    /// Segment handles for a display name; empty for unknown names.
    #[must_use]
    pub fn segments_for(&self, name: &str) -> &[SegmentId] {
        self.entries
            .get(name)
            .map_or(&[], |entry| entry.segments.as_slice())
    }

    /// Resolved historical record for a display name, if any.
    #[must_use]
    pub fn history_for(&self, name: &str) -> Option<&Arc<HistoricalRecord>> {
        self.entries.get(name).and_then(|e| e.history.as_ref())
    }

    /// Bounding region over all of a name's segments, for viewport
    /// framing. `None` for unknown names or degenerate geometry.
    #[must_use]
    pub fn bounding_region(&self, name: &str) -> Option<Rect<f64>> {
        let entry = self.entries.get(name)?;

        let mut region: Option<Rect<f64>> = None;
        for id in &entry.segments {
            let Some(rect) = self
                .segment_lines
                .get(id.0 as usize)
                .and_then(BoundingRect::bounding_rect)
            else {
                continue;
            };
            region = Some(match region {
                None => rect,
                Some(acc) => merge_rects(acc, rect),
            });
        }
        region
    }

    /// Finds a display name by case-insensitive exact match, for
    /// restoring a selection from a shareable location. Raw-name
    /// equality, not canonical-key equality.
    #[must_use]
    pub fn find_name_ignore_case(&self, raw: &str) -> Option<&str> {
        // Unicode folding, not ASCII: accented letters must match
        // across case ("PUEYRREDÓN" vs "Pueyrredón").
        let folded = raw.to_lowercase();
        self.entries
            .keys()
            .find(|name| name.to_lowercase() == folded)
            .map(String::as_str)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` when no named features were loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Smallest rect containing both inputs.
fn merge_rects(a: Rect<f64>, b: Rect<f64>) -> Rect<f64> {
    Rect::new(
        Coord {
            x: a.min().x.min(b.min().x),
            y: a.min().y.min(b.min().y),
        },
        Coord {
            x: a.max().x.max(b.max().x),
            y: a.max().y.max(b.max().y),
        },
    )
}
