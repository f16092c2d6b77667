#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Selection state machine over "which street is currently selected".
//!
//! Two states: idle and selected. Every transition is driven through a
//! typed [`Command`] or the `select`/`clear`/`restore` methods — UI
//! clicks, search picks, and shareable-location restores all share the
//! same path, so visual state can never diverge by origin. Transitions
//! return [`Directive`] values for the rendering collaborator instead
//! of touching any rendering API.
//!
//! Selecting a name the catalog does not know is a silent no-op for
//! the user; the caller gets [`Outcome::NotFound`] so integration bugs
//! are still loggable.

pub mod directives;

use callejero_catalog::StreetCatalog;
use serde::Deserialize;

pub use directives::{Directive, PanelContent, Viewport, WeightTier};

/// A typed transition request. UI events and navigation events are
/// translated into commands and consumed synchronously.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Command {
    /// Select a street by its display name (user click or search pick).
    #[serde(rename_all = "camelCase")]
    Select {
        /// Display name to select.
        name: String,
    },
    /// Clear the current selection.
    ClearSelection,
    /// Restore a selection from a shareable location (page load,
    /// back/forward navigation). Matched case-insensitively against
    /// catalog display names; never re-persists.
    #[serde(rename_all = "camelCase")]
    Restore {
        /// Persisted location payload.
        location: String,
    },
}

/// Result of a selection attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The transition happened; apply these directives in order.
    Applied(Vec<Directive>),
    /// Unknown or unselectable target: state unchanged, nothing to
    /// apply, no user-visible error.
    NotFound,
}

/// The selection state machine. At most one street is selected at a
/// time; state is mutated only through the methods below.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Option<String>,
}

impl SelectionController {
    /// Starts idle.
    #[must_use]
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Currently selected display name, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Applies a typed command. `Select` and `ClearSelection` persist;
    /// `Restore` never does, so navigating back cannot push new
    /// history entries.
    pub fn apply(&mut self, command: &Command, catalog: &StreetCatalog) -> Outcome {
        match command {
            Command::Select { name } => self.select(name, catalog, true),
            Command::ClearSelection => Outcome::Applied(self.clear(catalog, true)),
            Command::Restore { location } => self.restore(location, catalog),
        }
    }

    /// Selects a street by display name.
    ///
    /// Unknown names, and names without segments, leave the state
    /// unchanged and return [`Outcome::NotFound`]. Otherwise the
    /// previous selection's weight is restored, the new segments are
    /// highlighted, the viewport is framed to their bounding region,
    /// the selection is optionally persisted, and the detail panel is
    /// shown.
    pub fn select(&mut self, name: &str, catalog: &StreetCatalog, persist: bool) -> Outcome {
        let Some(entry) = catalog.get(name) else {
            log::debug!("Ignoring selection of unknown street {name:?}");
            return Outcome::NotFound;
        };
        if entry.segments.is_empty() {
            log::debug!("Ignoring selection of segmentless street {name:?}");
            return Outcome::NotFound;
        }

        let mut directives = Vec::new();

        if let Some(prev) = self.selected.take() {
            push_unhighlight(&mut directives, &prev, catalog);
        }

        for &segment in &entry.segments {
            directives.push(Directive::SetWeight {
                segment,
                tier: WeightTier::Highlighted,
            });
        }

        if let Some(region) = catalog.bounding_region(name) {
            directives.push(Directive::FrameViewport {
                viewport: region.into(),
            });
        }

        if persist {
            directives.push(Directive::PersistSelection {
                name: Some(entry.name.clone()),
            });
        }

        directives.push(Directive::ShowPanel {
            panel: PanelContent::for_entry(entry),
        });

        self.selected = Some(entry.name.clone());
        Outcome::Applied(directives)
    }

    /// Clears the selection. From idle this is a no-op with no
    /// directives.
    pub fn clear(&mut self, catalog: &StreetCatalog, persist: bool) -> Vec<Directive> {
        let mut directives = Vec::new();

        if let Some(prev) = self.selected.take() {
            push_unhighlight(&mut directives, &prev, catalog);
            if persist {
                directives.push(Directive::PersistSelection { name: None });
            }
        }

        directives
    }

    /// Restores a selection from a shareable-location payload: exact
    /// case-insensitive match on raw display names (not canonical-key
    /// matching), then the ordinary select path with persistence off.
    pub fn restore(&mut self, location: &str, catalog: &StreetCatalog) -> Outcome {
        let Some(name) = catalog.find_name_ignore_case(location) else {
            log::debug!("No catalog name matches persisted location {location:?}");
            return Outcome::NotFound;
        };
        self.select(name, catalog, false)
    }
}

/// Returns a previously-selected street's segments to their resting
/// tier: `HasHistory` when it resolves to a record, `Default`
/// otherwise.
fn push_unhighlight(directives: &mut Vec<Directive>, name: &str, catalog: &StreetCatalog) {
    let tier = if catalog.history_for(name).is_some() {
        WeightTier::HasHistory
    } else {
        WeightTier::Default
    };
    for &segment in catalog.segments_for(name) {
        directives.push(Directive::SetWeight { segment, tier });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use callejero_catalog::{GeometryFeature, SegmentId};
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

    fn feature(name: &str, x0: f64, y0: f64, x1: f64, y1: f64) -> GeometryFeature {
        GeometryFeature {
            display_name: Some(name.to_string()),
            line: line_string![(x: x0, y: y0), (x: x1, y: y1)],
        }
    }

    /// "Avenida Rivadavia" has history; "Zelaya" does not.
    fn sample_catalog() -> StreetCatalog {
        let index = HistoryIndex::build([record("Avenida Rivadavia")]);
        StreetCatalog::build(
            vec![
                feature("Avenida Rivadavia", -58.40, -34.60, -58.41, -34.61),
                feature("Avenida Rivadavia", -58.41, -34.61, -58.42, -34.62),
                feature("Zelaya", -58.44, -34.58, -58.45, -34.59),
            ],
            &index,
        )
    }

    fn weights_for(directives: &[Directive], tier: WeightTier) -> Vec<SegmentId> {
        directives
            .iter()
            .filter_map(|d| match d {
                Directive::SetWeight { segment, tier: t } if *t == tier => Some(*segment),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn select_highlights_frames_persists_and_shows_panel() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        let Outcome::Applied(directives) = controller.select("Avenida Rivadavia", &catalog, true)
        else {
            panic!("expected a selection");
        };

        assert_eq!(controller.selected(), Some("Avenida Rivadavia"));
        assert_eq!(weights_for(&directives, WeightTier::Highlighted).len(), 2);
        assert!(directives
            .iter()
            .any(|d| matches!(d, Directive::FrameViewport { .. })));
        assert!(directives.iter().any(|d| matches!(
            d,
            Directive::PersistSelection { name: Some(n) } if n == "Avenida Rivadavia"
        )));
        assert!(directives.iter().any(|d| matches!(
            d,
            Directive::ShowPanel {
                panel: PanelContent::History { record, .. }
            } if record.current_name == "Avenida Rivadavia"
        )));
    }

    #[test]
    fn viewport_covers_both_segments() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        let Outcome::Applied(directives) = controller.select("Avenida Rivadavia", &catalog, false)
        else {
            panic!("expected a selection");
        };

        let viewport = directives
            .iter()
            .find_map(|d| match d {
                Directive::FrameViewport { viewport } => Some(*viewport),
                _ => None,
            })
            .unwrap();
        assert!((viewport.min_lon - (-58.42)).abs() < 1e-9);
        assert!((viewport.max_lon - (-58.40)).abs() < 1e-9);
    }

    #[test]
    fn selecting_street_without_history_shows_placeholder_panel() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        let Outcome::Applied(directives) = controller.select("Zelaya", &catalog, false) else {
            panic!("expected a selection");
        };

        assert!(directives.iter().any(|d| matches!(
            d,
            Directive::ShowPanel {
                panel: PanelContent::NoHistory { name }
            } if name == "Zelaya"
        )));
    }

    #[test]
    fn unknown_name_is_a_reported_no_op() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        assert_eq!(
            controller.select("Calle Inventada", &catalog, true),
            Outcome::NotFound
        );
        assert_eq!(controller.selected(), None);

        // Also from a selected state: the prior selection survives.
        controller.select("Zelaya", &catalog, false);
        assert_eq!(
            controller.select("Calle Inventada", &catalog, true),
            Outcome::NotFound
        );
        assert_eq!(controller.selected(), Some("Zelaya"));
    }

    #[test]
    fn reselect_restores_previous_weight_to_resting_tier() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        controller.select("Avenida Rivadavia", &catalog, false);
        let Outcome::Applied(directives) = controller.select("Zelaya", &catalog, false) else {
            panic!("expected a selection");
        };

        // Rivadavia has history: both its segments drop back to the
        // has-history tier, exactly once each.
        let restored = weights_for(&directives, WeightTier::HasHistory);
        assert_eq!(restored.len(), 2);
        assert_eq!(weights_for(&directives, WeightTier::Highlighted).len(), 1);
        assert_eq!(controller.selected(), Some("Zelaya"));
    }

    #[test]
    fn clear_restores_weight_and_goes_idle() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        controller.select("Zelaya", &catalog, true);
        let directives = controller.clear(&catalog, true);

        // Zelaya has no history: back to the default tier.
        assert_eq!(weights_for(&directives, WeightTier::Default).len(), 1);
        assert!(directives
            .iter()
            .any(|d| matches!(d, Directive::PersistSelection { name: None })));
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn clear_from_idle_is_empty() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();
        assert!(controller.clear(&catalog, true).is_empty());
    }

    #[test]
    fn restore_matches_case_insensitively_without_persisting() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        let Outcome::Applied(directives) = controller.restore("avenida rivadavia", &catalog)
        else {
            panic!("expected a restore");
        };

        assert_eq!(controller.selected(), Some("Avenida Rivadavia"));
        assert!(!directives
            .iter()
            .any(|d| matches!(d, Directive::PersistSelection { .. })));
    }

    #[test]
    fn restore_of_unknown_location_is_not_found() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();
        assert_eq!(
            controller.restore("calle inventada", &catalog),
            Outcome::NotFound
        );
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn commands_share_the_select_and_clear_paths() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();

        let outcome = controller.apply(
            &Command::Select {
                name: "Zelaya".to_string(),
            },
            &catalog,
        );
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(controller.selected(), Some("Zelaya"));

        let outcome = controller.apply(
            &Command::Restore {
                location: "AVENIDA RIVADAVIA".to_string(),
            },
            &catalog,
        );
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(controller.selected(), Some("Avenida Rivadavia"));

        let outcome = controller.apply(&Command::ClearSelection, &catalog);
        assert!(matches!(outcome, Outcome::Applied(_)));
        assert_eq!(controller.selected(), None);
    }

    #[test]
    fn empty_catalog_makes_every_selection_a_no_op() {
        let catalog = StreetCatalog::build(Vec::new(), &HistoryIndex::build(Vec::new()));
        let mut controller = SelectionController::new();
        assert_eq!(
            controller.select("Zelaya", &catalog, true),
            Outcome::NotFound
        );
        assert!(controller.clear(&catalog, true).is_empty());
    }

    #[test]
    fn directives_serialize_with_stable_tags() {
        let catalog = sample_catalog();
        let mut controller = SelectionController::new();
        let Outcome::Applied(directives) = controller.select("Zelaya", &catalog, true) else {
            panic!("expected a selection");
        };

        let json = serde_json::to_string(&directives).unwrap();
        assert!(json.contains(r#""type":"setWeight""#));
        assert!(json.contains(r#""tier":"highlighted""#));
        assert!(json.contains(r#""type":"showPanel""#));
        assert!(json.contains(r#""kind":"noHistory""#));
    }
}
