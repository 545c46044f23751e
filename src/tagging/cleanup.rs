//! Lexical cleanup stages.
//!
//! The first three pipeline stages: literal noise stripping, numbering
//! normalization and regex noise-pattern removal. All run before the
//! title is structured into tags.

use super::rules;
use super::tables::{
    COMPILED_NOISE_RULES, COMPILED_NUMBERING_RULES, LITERAL_STRIP, NUMERAL_SHORTHAND,
};

/// Strip literal noise substrings (punctuation, decoration phrases).
pub fn strip_literals(title: &str) -> String {
    let mut out = title.to_string();
    for literal in LITERAL_STRIP {
        out = out.replace(literal, "");
    }
    out
}

/// Normalize numbering: apply numeral shorthands, then collapse a
/// whitespace-numeral run glued to a colon into the bare colon.
pub fn normalize_numbering(title: &str) -> String {
    let mut out = title.to_string();
    for (from, to) in NUMERAL_SHORTHAND {
        out = out.replace(from, to);
    }
    rules::apply(&out, &COMPILED_NUMBERING_RULES, false)
}

/// Remove noise patterns (bracket text, edition words, long ids, ranges).
/// Unmatched patterns are no-ops.
pub fn strip_noise_patterns(title: &str) -> String {
    rules::apply(title, &COMPILED_NOISE_RULES, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(strip_literals("Clank! In! Space!"), "Clank In Space");
        assert_eq!(strip_literals("Munchkin 3½"), "Munchkin 3");
        assert_eq!(strip_literals("#Catan"), "Catan");
    }

    #[test]
    fn test_strip_decoration_phrases() {
        assert_eq!(strip_literals("Scythe The Board Game"), "Scythe ");
        assert_eq!(strip_literals("Everdell Expansion Pack"), "Everdell ");
        assert_eq!(strip_literals("X-Wing Miniatures Game"), "X-Wing ");
    }

    #[test]
    fn test_dots_go_before_vol() {
        // "." is stripped first, so the dotted form reaches the bare entry.
        assert_eq!(strip_literals("Dixit Vol. 2"), "Dixit  2");
    }

    #[test]
    fn test_numeral_shorthand() {
        assert_eq!(
            normalize_numbering("Warhammer 40000: Conquest"),
            "Warhammer 40k: Conquest"
        );
    }

    #[test]
    fn test_numeral_colon_collapse() {
        assert_eq!(
            normalize_numbering("Zombicide 2: Prison Outbreak"),
            "Zombicide: Prison Outbreak"
        );
        // Plain whitespace before a colon collapses too.
        assert_eq!(normalize_numbering("Inis : Seasons"), "Inis: Seasons");
    }

    #[test]
    fn test_bracket_text_removed() {
        assert_eq!(
            strip_noise_patterns("Ticket to Ride (Deluxe Edition)"),
            "Ticket to Ride "
        );
        assert_eq!(strip_noise_patterns("Azul [Promo] Tiles"), "Azul  Tiles");
    }

    #[test]
    fn test_edition_words_removed() {
        assert_eq!(strip_noise_patterns("Catan Second Edition"), "Catan ");
        assert_eq!(strip_noise_patterns("Carcassonne Segunda Edição"), "Carcassonne ");
    }

    #[test]
    fn test_long_ids_and_ranges_removed() {
        assert_eq!(strip_noise_patterns("Lote 123456 Dominion"), "Lote  Dominion");
        assert_eq!(strip_noise_patterns("Catan 5-6"), "Catan ");
        assert_eq!(strip_noise_patterns("Anno 1800 – 1900"), "Anno ");
    }

    #[test]
    fn test_deck_building_article_capture() {
        assert_eq!(
            strip_noise_patterns("Legendary: A Marvel Deck Building Game"),
            "Legendary:  Marvel "
        );
    }
}
