//! Hashtag structuring.

use super::tables::TAG_SEPARATORS;

/// Convert a cleaned title into `#Word #Word` form.
///
/// Plain spaces are deleted BEFORE separators become boundaries, so word
/// adjacency only survives at separator characters; hyphens get their
/// boundary first, then the remaining separators, then the leading `#`.
pub fn split_into_tags(title: &str) -> String {
    let mut out = title.replace(' ', "");
    out = out.replace('-', " #");
    out = out.trim().to_string();
    for sep in TAG_SEPARATORS {
        out = out.replace(*sep, " #");
    }
    format!("#{out}")
}
