#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Historical street-naming dataset types.
//!
//! These types mirror the shape of the historical dataset JSON: one
//! record per street that carries narrative content (former names,
//! ordinance references, Wikipedia summaries). They are independent of
//! the geometry dataset; the two are joined at catalog-build time via
//! canonical name keys.

use serde::{Deserialize, Serialize};

/// A single historical naming record, loaded once and immutable after.
///
/// Records have no explicit identity; they are only reachable through
/// canonical-key lookups in the history index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoricalRecord {
    /// The street's current official name as written in the dataset
    /// (may carry honorifics, street-type prefixes, or
    /// "Lastname, Firstname" ordering).
    pub current_name: String,
    /// Narrative description of the person or event the street is
    /// named after.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Ordinance or decree that established the current name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_basis: Option<String>,
    /// Former names in chronological order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub previous_names: Vec<PreviousName>,
    /// Optional Wikipedia reference. Dropped at load time if the URL
    /// fails the scheme/domain allowlist.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wikipedia: Option<WikipediaRef>,
}

/// A former name of a street: either a bare name string or a name with
/// an accompanying description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PreviousName {
    /// Bare former name.
    Plain(String),
    /// Former name with narrative context.
    #[serde(rename_all = "camelCase")]
    Detailed {
        /// The former name.
        name: String,
        /// Why/when the street carried this name.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl PreviousName {
    /// The former name regardless of representation.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Detailed { name, .. } => name,
        }
    }
}

/// A Wikipedia article reference attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WikipediaRef {
    /// Article lead-section summary.
    pub summary: String,
    /// Article URL. Validated against an https + wikipedia.org
    /// allowlist when the dataset is loaded.
    pub url: String,
}
