#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Street-name resolution engine for the Buenos Aires historical map.
//!
//! Historical records are authored free-text: inconsistent diacritics,
//! honorific titles ("Dr.", "Coronel"), street-type prefixes
//! ("Avenida"), and "Lastname, Firstname" ordering. The geometry
//! dataset spells the same streets differently. This crate joins the
//! two deterministically:
//!
//! - **Index time**: each record's current name is normalized into a
//!   canonical key, plus reordering variants, and registered in a
//!   [`HistoryIndex`].
//! - **Lookup time**: geometry names and search queries are normalized
//!   through the identical pipeline and resolved by exact key match.
//!
//! The pipeline is rule-based only; there is no fuzzy or edit-distance
//! matching. Ambiguous names resolve to whichever record appears first
//! in the dataset (first writer wins), which keeps resolution stable
//! across runs.

pub mod dataset;
pub mod index;
pub mod normalize;
pub mod titles;
pub mod variants;

pub use callejero_history_models::{HistoricalRecord, PreviousName, WikipediaRef};
pub use dataset::{HistoryError, load_records, records_from_reader};
pub use index::HistoryIndex;
pub use normalize::normalize;
pub use variants::variants;
