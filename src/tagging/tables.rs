//! Constant rewrite tables.
//!
//! Process-wide read-only tables consumed by the pipeline stages. Every
//! table is ordered and the order is significant, both inside a table and
//! across stages: later stages assume the normalized form produced by
//! earlier ones.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::{compile, compile_pattern, CompiledRule, RewriteRule, RuleAction};

/// Literal substrings stripped from the raw title, in order.
///
/// Punctuation first, then decoration phrases. `.` is stripped before the
/// `Vol.` entry, so dotted titles reach the phrase entries bare.
pub static LITERAL_STRIP: &[&str] = &[
    "?", "\"", "'", "!", "¡", ",", "ª",
    ".", "‘", "¿", "{", "[", "}", "]",
    "_", "#", "½", "+", "*", "%", "º",
    "°",
    "The Board Game",
    "The Boardgame",
    "The BoardGame",
    "Boardgame",
    "BoardGame",
    "Board Game",
    "The Deckbuilding Game",
    "Deck-Building Game",
    "Expansion Pack",
    "Expansion pack",
    "Expansion",
    "expansion",
    "Volume",
    "Vol.",
    "Vol",
    "The Miniatures Game",
    "Tabletop Miniatures Game",
    "Miniatures Game",
    "The Card Game",
];

/// Literal numeral shorthands applied before the numeral-colon collapse.
pub static NUMERAL_SHORTHAND: &[(&str, &str)] = &[("Warhammer 40000", "Warhammer 40k")];

/// Numbering fixes: a numeral glued to a colon loses the numeral and the
/// whitespace run before it.
pub static NUMBERING_RULES: &[RewriteRule] = &[RewriteRule {
    pattern: r"\s+[0-9]*:",
    action: RuleAction::Replace(":"),
}];

/// Noise patterns removed before structuring.
///
/// The deck-building record deletes its article and phrase captures and
/// keeps whatever sits between them; the rest delete whole matches.
pub static NOISE_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: "(An*)([^.]*)(Deck Building Game)",
        action: RuleAction::DeleteCaptured {
            article: 1,
            phrase: 3,
        },
    },
    RewriteRule {
        pattern: r"(First|Second|Third|Fourth|Fifth|Sixth|Seventh)\s*Edition",
        action: RuleAction::Delete,
    },
    RewriteRule {
        pattern: r"(Primeira|Segunda|Terceira|Quarta|Quinta|Sexta|Sétima)\s*Edição",
        action: RuleAction::Delete,
    },
    // Editorial bracket text, e.g. "(Deluxe Edition)" or "[Promo]".
    RewriteRule {
        pattern: r"[\(\[].*?[\)\]]",
        action: RuleAction::Delete,
    },
    // Long numeric ids and numeric ranges.
    RewriteRule {
        pattern: "[0-9]{5,}",
        action: RuleAction::Delete,
    },
    RewriteRule {
        pattern: r"[0-9]+\s*–\s*[0-9]+",
        action: RuleAction::Delete,
    },
    RewriteRule {
        pattern: "[0-9]+-[0-9]+",
        action: RuleAction::Delete,
    },
];

/// Transliteration and synonym substitutions, applied in declaration
/// order as literal, case-sensitive replacements.
pub static SUBSTITUTIONS: Lazy<IndexMap<&'static str, &'static str>> = Lazy::new(|| {
    IndexMap::from([
        ("ö", "o"),
        ("à", "a"),
        ("ū", "u"),
        ("&", "N"),
        ("$", "s"),
        ("The Roleplaying Game", "RPG"),
        ("Roleplaying Game", "RPG"),
        ("Role Playing Game", "RPG"),
        ("X-Wing", "XWing"),
        ("Y-Wing", "YWing"),
        ("Set #", "Set"),
    ])
});

/// Known franchise names, in check order. A name followed by a subtitle
/// word without a colon separator gets one inserted after it.
pub static SERIES: &[&str] = &[
    "Pandemic",
    "Dungeons & Dragons",
    "Zombicide",
    "Zpocalypse",
    "Zooloretto",
    "Wings of Glory",
    "World of Darkness",
    "Black Plague",
    "Green Horde",
    "Zombie Dice",
    "The Boardgame",
    "Zombie Fluxx",
    "DC",
    "Marvel",
    "GURPS",
    "Star Wars",
    "O Senhor dos Anéis",
    "A Guerra dos Tronos",
    "Guerra dos Tronos",
    "Tiny Epic",
    "Invader",
    "Dark Side",
    "Bang",
    "Encantados",
    "Exploding Kittens",
    "Ticket to Ride",
    "Clank",
    "7 Wonders",
    "Fronteira do Império",
    "Lenda dos Cinco Anéis",
    "Viticulture",
    "El Grande",
    "Pathfinder",
    "Tormenta",
    "T.I.M.E.",
    "Advanced Dungeons & Dragons",
    "Achtung",
    "Kick-Ass",
    "CO2",
    "Dungeon World",
    "Chamado de Cthulhu",
    "Tiny Dungeon",
    "Ubongo",
    "Warhammer 40k",
    "Carcassonne",
    "Alhambra",
    "Alien vs Predator",
    "Card Kingdoms",
    "The Lord of the Rings",
    "Core Rulebook",
    "Bounty Hunters",
    "Triumph of Chaos",
    "Pokémon",
    "Digimon",
    "Torg Eternity",
    "Munchkin",
    "The Witcher",
    "Viticulture: Tuscany",
    "The Witcher: Old World",
    "Star Wars: Destiny",
    "Anachrony",
    "Patchwork",
    "BANG",
    "X-Wing",
    "Y-Wing",
    "A Máscara",
    "Harry Potter",
    "Dwar7s",
    "Marco Polo",
    "Glen More",
    "Disney",
    "Banco Imobiliário",
    "Hanabi",
    "Código Secreto",
    "Codenames",
    "Pixel Tactics",
    "Adventure Time",
];

/// Tags that never carry information once structuring is done.
pub static REDUNDANT_TAGS: &[&str] = &["#TheBoardGame", "#ADeckBuildingAdventure"];

/// Post-structuring fixups, all case-insensitive. Each match becomes a
/// single space and the string is right-trimmed after each rule.
pub static HASHTAG_FIXUP_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"(?i)#[0-9]*edição\w*\s*",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: r"(?i)[0-9]+[stndrdth]{2,}edition\w*\s*",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: r"(?i)[0-9]+edition\w*\s*",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: "(?i)DeckBuildingGame",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: "(?i)vol[0-9]",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: "(?i)#Expansão",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: "(?i)#Expansion",
        action: RuleAction::Replace(" "),
    },
];

/// Compound edition words that get split into their own tag.
pub static EDITION_WORDS: &[&str] = &["DeluxeEdition", "SpecialEdition"];

/// Degenerate lone-`#` cleanup: a trailing `#` or a `#` surrounded by
/// whitespace collapses into a single space.
pub static LONE_HASHTAG_RULES: &[RewriteRule] = &[
    RewriteRule {
        pattern: r"\s+#$",
        action: RuleAction::Replace(" "),
    },
    RewriteRule {
        pattern: r"\s+#\s+",
        action: RuleAction::Replace(" "),
    },
];

/// Separator characters converted into tag boundaries during structuring.
pub static TAG_SEPARATORS: &[char] = &[':', '/', '\\', '–', '-', '—'];

/// Built-in terminal overrides for titles the pipeline mishandles.
pub static DEFAULT_OVERRIDES: &[(&str, &str)] = &[
    (
        "#ManoplaDoInfinito #UmJogoLoveLetter",
        "#ManoplaDoInfinito Um Jogo #LoveLetter",
    ),
    ("#Mission #RedPlanet", "#MissionRedPlanet"),
    ("#TickettoRide", "#TicketToRide"),
];

/// A roman-numeral run glued to further roman-numeral characters.
pub static ROMAN_RUN: Lazy<Option<Regex>> = Lazy::new(|| compile_pattern(r"([XVI]+)[XVI*]"));

pub static COMPILED_NUMBERING_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile(NUMBERING_RULES));
pub static COMPILED_NOISE_RULES: Lazy<Vec<CompiledRule>> = Lazy::new(|| compile(NOISE_RULES));
pub static COMPILED_HASHTAG_FIXUP_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile(HASHTAG_FIXUP_RULES));
pub static COMPILED_LONE_HASHTAG_RULES: Lazy<Vec<CompiledRule>> =
    Lazy::new(|| compile(LONE_HASHTAG_RULES));
