//! Directive values returned to the rendering collaborator.
//!
//! The controller never calls into a rendering API. Every transition
//! returns a list of directives; the collaborator (map frontend)
//! applies them in order. All types serialize to JSON for the HTTP
//! surface.

use callejero_catalog::{SegmentId, StreetEntry};
use callejero_history_models::HistoricalRecord;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// Visual weight tier for a street segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightTier {
    /// Unselected, no historical record.
    Default,
    /// Unselected, has a historical record.
    HasHistory,
    /// Currently selected.
    Highlighted,
}

/// Lon/lat bounds for viewport framing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Viewport {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl From<Rect<f64>> for Viewport {
    fn from(rect: Rect<f64>) -> Self {
        Self {
            min_lon: rect.min().x,
            min_lat: rect.min().y,
            max_lon: rect.max().x,
            max_lat: rect.max().y,
        }
    }
}

/// Detail-panel content: the resolved record or an explicit
/// no-history placeholder. A missing record is a first-class outcome,
/// not an error.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PanelContent {
    /// The street resolved to a historical record.
    #[serde(rename_all = "camelCase")]
    History {
        /// Display name as selected.
        name: String,
        /// The resolved record.
        record: HistoricalRecord,
    },
    /// No record matched; the panel shows a placeholder.
    #[serde(rename_all = "camelCase")]
    NoHistory {
        /// Display name as selected.
        name: String,
    },
}

impl PanelContent {
    /// Panel content for a catalog entry.
    #[must_use]
    pub fn for_entry(entry: &StreetEntry) -> Self {
        entry.history.as_ref().map_or_else(
            || Self::NoHistory {
                name: entry.name.clone(),
            },
            |record| Self::History {
                name: entry.name.clone(),
                record: (**record).clone(),
            },
        )
    }
}

/// One side effect for the rendering collaborator to apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Directive {
    /// Set a segment's visual weight tier.
    #[serde(rename_all = "camelCase")]
    SetWeight {
        /// The segment to restyle.
        segment: SegmentId,
        /// Target tier.
        tier: WeightTier,
    },
    /// Frame the viewport to a bounding region.
    #[serde(rename_all = "camelCase")]
    FrameViewport {
        /// Region covering all selected segments.
        viewport: Viewport,
    },
    /// Show the detail panel.
    #[serde(rename_all = "camelCase")]
    ShowPanel {
        /// Record or no-history placeholder.
        panel: PanelContent,
    },
    /// Persist the selection to the shareable location (`None` clears
    /// it). Only emitted when the caller asked for persistence.
    #[serde(rename_all = "camelCase")]
    PersistSelection {
        /// Name to persist, or `None` to remove.
        name: Option<String>,
    },
}
