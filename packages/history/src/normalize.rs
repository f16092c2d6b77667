//! Street-name normalization into canonical matching keys.
//!
//! Provides a deterministic normalization pipeline applied symmetrically
//! at index time and lookup time. This ensures that "Av. Rivadavia" and
//! "AVENIDA RIVADAVIA" produce the same canonical key, which is the
//! join key between the historical dataset and the geometry dataset.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::UnicodeNormalization;

use crate::titles;

/// Regex that removes an honorific title together with the whitespace
/// that follows it, anywhere in the (already uppercased) name.
///
/// Alternatives are sorted longest-first so that "INGENIERO" wins over
/// its prefix "ING".
static HONORIFIC_RE: LazyLock<Regex> = LazyLock::new(|| {
    let mut tokens: Vec<&str> = titles::HONORIFICS.to_vec();
    tokens.sort_by_key(|t| std::cmp::Reverse(t.len()));
    let alternatives: Vec<String> = tokens.iter().map(|t| regex::escape(t)).collect();
    let pattern = format!(r"\b(?:{})\s+", alternatives.join("|"));
    Regex::new(&pattern).expect("valid regex")
});

/// Normalizes a street name into its canonical matching key.
///
/// The pipeline, in order:
/// 1. Uppercase
/// 2. Strip diacritics (`É` → `E`), preserving `Ñ`
/// 3. Remove commas and periods
/// 4. Collapse whitespace and trim
/// 5. Strip one leading street-type prefix ("AVENIDA", "CALLE", ...)
/// 6. Strip every honorific title ("DOCTOR", "CORONEL", ...)
///
/// Pure and total: the same input always yields the same key, and any
/// input (including empty) yields a defined result.
#[must_use]
pub fn normalize(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }

    let upper = raw.to_uppercase();
    let folded = strip_diacritics(&upper);
    let no_punct = folded.replace([',', '.'], "");
    let collapsed = no_punct.split_whitespace().collect::<Vec<_>>().join(" ");
    let unprefixed = strip_street_prefix(&collapsed);
    let untitled = HONORIFIC_RE.replace_all(unprefixed, "");

    untitled.trim().to_string()
}

/// Decomposes accented characters and drops the combining marks
/// (U+0300–U+036F), so "É" becomes "E".
///
/// `Ñ` is the one exception: it is a distinct letter in Spanish, not an
/// accented N, so the N + combining-tilde pair is recomposed instead of
/// stripped.
fn strip_diacritics(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.nfd().peekable();

    while let Some(c) = chars.next() {
        if (c == 'N' || c == 'n') && chars.peek() == Some(&'\u{0303}') {
            chars.next();
            out.push(if c == 'N' { 'Ñ' } else { 'ñ' });
            continue;
        }
        if ('\u{0300}'..='\u{036F}').contains(&c) {
            continue;
        }
        out.push(c);
    }

    out
}

/// Strips a single leading street-type prefix token, if present and
/// followed by more of the name. A name that *is* a prefix token
/// ("AVENIDA" alone) is left untouched.
fn strip_street_prefix(name: &str) -> &str {
    if let Some((first, rest)) = name.split_once(' ')
        && titles::STREET_TYPE_PREFIXES.contains(&first)
    {
        return rest;
    }
    name
}
