//! Historical dataset loading and link sanitization.
//!
//! The dataset is a JSON array of [`HistoricalRecord`]s on local disk.
//! Loading never reaches the network; the only validation beyond JSON
//! shape is the Wikipedia link allowlist, which silently drops
//! references whose URL is not an https `wikipedia.org` address.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use callejero_history_models::HistoricalRecord;
use url::Url;

/// Errors from loading the historical dataset.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Loads and sanitizes the historical dataset from a JSON file.
///
/// # Errors
///
/// Returns [`HistoryError`] if the file cannot be read or is not a
/// JSON array of records.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<HistoricalRecord>, HistoryError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let records = records_from_reader(BufReader::new(file))?;
    log::info!(
        "Loaded {} historical records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses and sanitizes historical records from any reader.
///
/// # Errors
///
/// Returns [`HistoryError`] if the stream is not a JSON array of
/// records.
pub fn records_from_reader(reader: impl Read) -> Result<Vec<HistoricalRecord>, HistoryError> {
    let mut records: Vec<HistoricalRecord> = serde_json::from_reader(reader)?;
    for record in &mut records {
        sanitize_wikipedia(record);
    }
    Ok(records)
}

/// Drops the Wikipedia reference when its URL fails the allowlist.
/// An untrusted link is omitted, never surfaced as an error.
fn sanitize_wikipedia(record: &mut HistoricalRecord) {
    if let Some(wiki) = &record.wikipedia
        && !is_allowed_wikipedia_url(&wiki.url)
    {
        log::debug!(
            "Dropping invalid Wikipedia link for {:?}: {}",
            record.current_name,
            wiki.url
        );
        record.wikipedia = None;
    }
}

/// Returns `true` when the URL is https and points at `wikipedia.org`
/// or one of its language subdomains.
#[must_use]
pub fn is_allowed_wikipedia_url(raw: &str) -> bool {
    let Ok(url) = Url::parse(raw) else {
        return false;
    };
    url.scheme() == "https"
        && url
            .host_str()
            .is_some_and(|host| host == "wikipedia.org" || host.ends_with(".wikipedia.org"))
}
