//! Hashtag Generation
//!
//! Deterministic pipeline turning a free-form board-game title into a
//! canonical `#Word #Word` hashtag string:
//! 1. Strip literal noise (punctuation, "Board Game" phrase family)
//! 2. Normalize numbering (numeral shorthand, numeral-colon collapse)
//! 3. Remove noise patterns (bracket text, edition words, long ids)
//! 4. Insert subtitle separators after known series names
//! 5. Apply transliteration and synonym substitutions
//! 6. Decide the hyphen policy from the first hyphen
//! 7. Structure the title into `#`-tags
//! 8.-12. Post-structuring fixups (redundant, edition, roman, lone `#`)
//! 13. Apply terminal overrides
//!
//! Every stage is a pure string transformation; correctness depends on
//! stage order, never on shared state.

pub mod cleanup;
pub mod config;
pub mod error;
pub mod fixups;
pub mod overrides;
pub mod pipeline;
pub mod rules;
pub mod series;
pub mod structure;
pub mod substitute;
pub mod tables;

pub use config::TagConfig;
pub use error::{TagError, TagResult};
pub use overrides::OverrideMap;
pub use pipeline::{generate_tag, GeneratedTag, TagPipeline};
