//! Post-structuring fixups.
//!
//! These stages target patterns that only become visible once `#`
//! markers exist: redundant tags, glued edition tokens, roman-numeral
//! runs and degenerate empty tags.

use super::rules;
use super::tables::{
    COMPILED_HASHTAG_FIXUP_RULES, COMPILED_LONE_HASHTAG_RULES, EDITION_WORDS, REDUNDANT_TAGS,
    ROMAN_RUN,
};

/// Delete tags that never carry information. Idempotent.
pub fn remove_redundant_tags(tag: &str) -> String {
    let mut out = tag.to_string();
    for redundant in REDUNDANT_TAGS {
        out = out.replace(redundant, "");
    }
    out
}

/// Apply the post-structuring fixup table, then make sure `RPG` stands
/// alone: a first occurrence at index > 0 without a `#` directly before
/// it gets one inserted (for every occurrence).
pub fn fix_hashtags(tag: &str) -> String {
    let mut out = rules::apply(tag, &COMPILED_HASHTAG_FIXUP_RULES, true);
    if let Some(idx) = out.find("RPG") {
        let attached = idx > 0
            && out[..idx]
                .chars()
                .next_back()
                .map(|c| c != '#')
                .unwrap_or(false);
        if attached {
            out = out.replace("RPG", " #RPG");
        }
    }
    out
}

/// Give compound edition words their own tag when they sit glued to a
/// preceding token.
pub fn fix_editions(tag: &str) -> String {
    let mut out = tag.to_string();
    for edition in EDITION_WORDS {
        let attached = match out.find(edition) {
            Some(idx) if idx > 0 => out[..idx]
                .chars()
                .next_back()
                .map(|c| c != ' ' && c != '#')
                .unwrap_or(false),
            _ => false,
        };
        if attached {
            out = out.replace(edition, &format!(" #{edition}"));
        }
    }
    out
}

/// Split the first roman-numeral run off the token it is glued to by
/// inserting a space before it. Only the first run is handled and the
/// text keeps the prefix plus the run itself.
pub fn isolate_roman_numerals(tag: &str) -> String {
    let re = match ROMAN_RUN.as_ref() {
        Some(re) => re,
        None => return tag.to_string(),
    };
    match re.find(tag) {
        Some(m) => format!("{} {}", &tag[..m.start()], m.as_str()),
        None => tag.to_string(),
    }
}

/// Collapse a lone trailing `#` and any `#` surrounded by whitespace
/// into a single space.
pub fn remove_lone_hashtags(tag: &str) -> String {
    rules::apply(tag, &COMPILED_LONE_HASHTAG_RULES, false)
}
