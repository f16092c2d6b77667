//! Canonical-key variants for "Lastname, Firstname" authored names.
//!
//! Historical records frequently write people's names surname-first
//! ("Acevedo, Eduardo") while the geometry dataset writes them in
//! natural order ("Eduardo Acevedo") or surname-only ("Acevedo"). A
//! record is registered in the index under every variant key so all
//! three spellings resolve to it.

use std::collections::BTreeSet;

use crate::normalize::normalize;

/// Returns the set of canonical keys a historical name can match under.
///
/// Always contains `normalize(raw)`. If the raw name contains the
/// `", "` separator it is split once at the first occurrence into
/// (surname, given); the reordered form ("given surname") and the
/// surname-only form are added as well. Additional comma-separated
/// parts beyond the first split are left inside the given-name side
/// as-is.
#[must_use]
pub fn variants(raw: &str) -> BTreeSet<String> {
    let mut keys = BTreeSet::new();
    keys.insert(normalize(raw));

    if let Some((surname, given)) = raw.split_once(", ") {
        keys.insert(normalize(&format!("{given} {surname}")));
        keys.insert(normalize(surname));
    }

    keys
}
