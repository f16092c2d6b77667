#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! API request and response types for the callejero server.
//!
//! These types are serialized to JSON for the REST API. They are
//! separate from the engine types so the API contract can evolve
//! independently of the core.

use callejero_catalog::SegmentId;
use callejero_selection::{Directive, PanelContent};
use serde::{Deserialize, Serialize};

/// `GET /api/health` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiHealth {
    /// Whether the server is up.
    pub healthy: bool,
    /// Server version.
    pub version: String,
    /// Number of distinct street names in the catalog.
    pub streets: usize,
    /// Human-readable dataset load failure, when the server is running
    /// in the degraded empty-catalog state.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset_error: Option<String>,
}

/// One street name with its history flag, for name lists and search
/// results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiName {
    /// Display name.
    pub name: String,
    /// Whether a historical record resolved for it.
    pub has_history: bool,
}

/// `GET /api/streets/{name}` response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStreetDetail {
    /// Display name.
    pub name: String,
    /// Opaque segment handles for the rendering layer.
    pub segments: Vec<SegmentId>,
    /// Detail-panel content (record or no-history placeholder).
    pub panel: PanelContent,
}

/// `GET /api/search` query parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// Query text.
    pub q: String,
    /// Optional result cap; defaults to the engine's limit.
    pub limit: Option<usize>,
}

/// `POST /api/selection` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectRequest {
    /// Display name to select.
    pub name: String,
}

/// `POST /api/selection/restore` request body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestoreRequest {
    /// Persisted shareable-location payload.
    pub location: String,
}

/// Response to selection commands.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionResponse {
    /// `false` when the target was unknown and nothing changed.
    pub found: bool,
    /// Directives for the rendering collaborator, in application
    /// order.
    pub directives: Vec<Directive>,
}

/// `GET /api/selection` response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentSelection {
    /// Currently selected display name, if any.
    pub selected: Option<String>,
}
