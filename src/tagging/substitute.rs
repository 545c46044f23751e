//! Transliteration, synonym substitution and the hyphen policy.

use super::tables::SUBSTITUTIONS;

/// Apply the substitution map in declaration order: diacritics, symbol
/// transliteration and canonical abbreviations.
pub fn apply_substitutions(title: &str) -> String {
    let mut out = title.to_string();
    for (from, to) in SUBSTITUTIONS.iter() {
        out = out.replace(from, to);
    }
    out
}

/// Decide the hyphen policy from the FIRST hyphen only: non-space
/// characters on both sides mean every hyphen is a word-joiner and all
/// of them are removed; otherwise hyphens are left for the structuring
/// stage to turn into tag boundaries. A hyphen at either end of the
/// string makes no adjustment.
pub fn merge_hyphens(title: &str) -> String {
    let idx = match title.find('-') {
        Some(idx) if idx > 0 => idx,
        _ => return title.to_string(),
    };
    let joined_before = title[..idx]
        .chars()
        .next_back()
        .map(|c| c != ' ')
        .unwrap_or(false);
    let joined_after = title[idx + 1..]
        .chars()
        .next()
        .map(|c| c != ' ')
        .unwrap_or(false);
    if joined_before && joined_after {
        title.replace('-', "")
    } else {
        title.to_string()
    }
}
