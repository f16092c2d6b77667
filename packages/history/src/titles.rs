//! Fixed token tables for street-type prefixes and honorific titles.
//!
//! Both tables are applied symmetrically at index time and lookup time
//! so that "Av. Dr. Honorio Pueyrredon" and "HONORIO PUEYRREDON"
//! produce the same canonical key. Entries are uppercase because the
//! normalization pipeline uppercases before consulting them.

/// Street-type prefixes stripped once from the start of a name.
///
/// Dotted forms are listed for completeness; the pipeline removes
/// periods before prefix matching, so they only matter to callers that
/// consult the table directly.
pub const STREET_TYPE_PREFIXES: &[&str] = &["AVENIDA", "AV", "AV.", "CALLE", "PASAJE", "PASEO"];

/// Honorific titles stripped wherever they appear inside a name.
///
/// Historical records title people inconsistently ("Dr. Enrique
/// Finochietto" vs "Enrique Finochietto"); the geometry dataset mostly
/// omits titles. Multi-word entries must appear before their prefixes
/// would match on their own, which the regex construction handles by
/// sorting alternatives longest-first.
pub const HONORIFICS: &[&str] = &[
    "DOCTOR",
    "DR",
    "DR.",
    "CORONEL",
    "GENERAL",
    "TENIENTE",
    "CAPITAN",
    "ALMIRANTE",
    "INGENIERO",
    "ING",
    "ING.",
    "PRESIDENTE",
    "DIPUTADO NACIONAL",
    "MECANICO MILITAR",
];
