//! Canonical-key lookup table over the historical dataset.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Arc;

use callejero_history_models::HistoricalRecord;

use crate::variants::variants;

/// Exact-match index from canonical key to historical record.
///
/// Built once from the dataset and read-only afterwards. A record is
/// registered under every variant of its current name. Keys are never
/// overwritten: when two records produce the same key, the first one in
/// dataset order wins and later ones are shadowed under that key. This
/// is policy, not a defect — ambiguous historical names must resolve
/// the same way on every load, and existing content relies on the
/// current resolution.
#[derive(Debug, Default)]
pub struct HistoryIndex {
    by_key: BTreeMap<String, Arc<HistoricalRecord>>,
}

impl HistoryIndex {
    /// Builds the index from records in dataset order.
    ///
    /// Empty variant keys are skipped: unnamed geometry features never
    /// enter the catalog, so an empty key could only mask a dataset
    /// defect.
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = HistoricalRecord>) -> Self {
        let mut by_key: BTreeMap<String, Arc<HistoricalRecord>> = BTreeMap::new();
        let mut record_count = 0usize;

        for record in records {
            record_count += 1;
            let record = Arc::new(record);

            for key in variants(&record.current_name) {
                if key.is_empty() {
                    log::debug!(
                        "Skipping empty canonical key for record {:?}",
                        record.current_name
                    );
                    continue;
                }

                match by_key.entry(key) {
                    Entry::Vacant(slot) => {
                        slot.insert(Arc::clone(&record));
                    }
                    Entry::Occupied(slot) => {
                        log::debug!(
                            "Key {:?} already registered to {:?}; shadowing {:?}",
                            slot.key(),
                            slot.get().current_name,
                            record.current_name
                        );
                    }
                }
            }
        }

        log::info!(
            "History index built: {} keys from {record_count} records",
            by_key.len()
        );

        Self { by_key }
    }

    /// Looks up a record by exact canonical key. No fuzzy fallback.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<&Arc<HistoricalRecord>> {
        self.by_key.get(key)
    }

    /// Number of registered keys (not records; a record usually owns
    /// several keys).
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_key.len()
    }

    /// `true` when no records were registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_key.is_empty()
    }
}
