//! tabletag — hashtag generation for board game trade listings.
//!
//! Core library turning free-form game titles into the canonical
//! `#Word #Word` hashtag strings posted into the trade feed.

pub mod tagging;

pub use tagging::{generate_tag, GeneratedTag, TagConfig, TagPipeline};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
