//! Tag pipeline orchestration.
//!
//! Composes the normalization stages in their fixed order. Every stage
//! is a pure string transformation; the pipeline only owns the two
//! tables that configuration can extend (series names and overrides).

use once_cell::sync::Lazy;
use serde::Serialize;

use super::cleanup;
use super::config::TagConfig;
use super::error::TagResult;
use super::fixups;
use super::overrides::OverrideMap;
use super::series::SeriesTable;
use super::structure;
use super::substitute;
use super::tables::SERIES;

/// Complete tag-generation pipeline.
#[derive(Debug)]
pub struct TagPipeline {
    series: SeriesTable,
    overrides: OverrideMap,
}

/// Result of tagging one title.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTag {
    /// Original title as submitted.
    pub original: String,
    /// Final hashtag string, trimmed.
    pub tag: String,
    /// Whether the override table replaced the pipeline output.
    pub overridden: bool,
}

impl TagPipeline {
    /// Build a pipeline from configuration. Loading a configured override
    /// file is the only fallible step.
    pub fn new(config: &TagConfig) -> TagResult<Self> {
        let mut names: Vec<String> = Vec::new();
        if config.series.use_builtin {
            names.extend(SERIES.iter().map(|name| name.to_string()));
        }
        names.extend(config.series.extra.iter().cloned());
        let series = SeriesTable::new(names);

        let mut overrides = if config.overrides.use_builtin {
            OverrideMap::builtin()
        } else {
            OverrideMap::new()
        };
        if let Some(ref path) = config.overrides.path {
            let extra = OverrideMap::from_toml_file(path)?;
            overrides.merge(&extra);
        }

        log::debug!(
            "tag pipeline ready: {} series names, {} overrides",
            series.len(),
            overrides.len()
        );
        Ok(Self { series, overrides })
    }

    /// Pipeline with the built-in tables only. Never fails.
    pub fn with_defaults() -> Self {
        Self {
            series: SeriesTable::new(SERIES.iter().map(|name| name.to_string())),
            overrides: OverrideMap::builtin(),
        }
    }

    /// Run `title` through the full pipeline.
    ///
    /// Total for every input: a malformed title degrades to a cosmetic
    /// imperfection, never an error.
    pub fn generate(&self, title: &str) -> GeneratedTag {
        // 1.-3. Lexical cleanup
        let mut tag = cleanup::strip_literals(title);
        tag = cleanup::normalize_numbering(&tag);
        tag = cleanup::strip_noise_patterns(&tag);
        // 4. Series disambiguation
        tag = self.series.insert_separators(&tag);
        // 5.-6. Substitutions and the hyphen policy
        tag = substitute::apply_substitutions(&tag);
        tag = substitute::merge_hyphens(&tag);
        // 7. Structuring
        tag = structure::split_into_tags(&tag);
        // 8.-12. Post-structuring fixups
        tag = fixups::remove_redundant_tags(&tag);
        tag = fixups::fix_hashtags(&tag);
        tag = fixups::fix_editions(&tag);
        tag = fixups::isolate_roman_numerals(&tag);
        tag = fixups::remove_lone_hashtags(&tag);
        // 13. Terminal override, before the final trim
        let (tag, overridden) = match self.overrides.lookup(&tag) {
            Some(replacement) => (replacement.to_string(), true),
            None => (tag, false),
        };
        let tag = tag.trim().to_string();

        log::trace!("tagged {title:?} -> {tag:?}");
        GeneratedTag {
            original: title.to_string(),
            tag,
            overridden,
        }
    }
}

impl GeneratedTag {
    /// Individual tokens of the final tag string.
    pub fn tags(&self) -> Vec<&str> {
        self.tag.split_whitespace().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.tag.is_empty()
    }
}

static DEFAULT_PIPELINE: Lazy<TagPipeline> = Lazy::new(TagPipeline::with_defaults);

/// Generate a hashtag string for a game title using the built-in tables.
///
/// The contract consumed by the feed layer: pure, deterministic, and
/// total — any input yields a best-effort tag rather than an error.
pub fn generate_tag(title: &str) -> String {
    DEFAULT_PIPELINE.generate(title).tag
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colon_subtitle() {
        assert_eq!(generate_tag("Pandemic: Legacy"), "#Pandemic #Legacy");
    }

    #[test]
    fn test_series_gets_separator() {
        assert_eq!(generate_tag("Pandemic Legacy"), "#Pandemic #Legacy");
        assert_eq!(generate_tag("Zombicide Green Horde"), "#Zombicide #GreenHorde");
        assert_eq!(generate_tag("Clank! In! Space!"), "#Clank #InSpace");
    }

    #[test]
    fn test_bracket_edition_dropped() {
        assert_eq!(generate_tag("Ticket to Ride (Deluxe Edition)"), "#TicketToRide");
    }

    #[test]
    fn test_miniatures_phrase_and_wing_merge() {
        assert_eq!(generate_tag("X-Wing Miniatures Game"), "#XWing");
    }

    #[test]
    fn test_numeral_shorthand_keeps_series_whole() {
        assert_eq!(
            generate_tag("Warhammer 40000: Conquest"),
            "#Warhammer40k #Conquest"
        );
    }

    #[test]
    fn test_exception_override() {
        let result = TagPipeline::with_defaults().generate("Mission: Red Planet");
        assert_eq!(result.tag, "#MissionRedPlanet");
        assert!(result.overridden);
    }

    #[test]
    fn test_deck_building_phrase() {
        assert_eq!(
            generate_tag("Legendary: A Marvel Deck Building Game"),
            "#Legendary #Marvel"
        );
    }

    #[test]
    fn test_numeral_colon_collapse() {
        assert_eq!(
            generate_tag("Zombicide 2: Prison Outbreak"),
            "#Zombicide #PrisonOutbreak"
        );
    }

    #[test]
    fn test_rpg_title() {
        assert_eq!(
            generate_tag("Pathfinder Roleplaying Game: Core Rulebook"),
            "#Pathfinder #RPG #CoreRulebook"
        );
    }

    #[test]
    fn test_deluxe_edition_tag() {
        assert_eq!(generate_tag("Scythe Deluxe Edition"), "#Scythe #DeluxeEdition");
    }

    #[test]
    fn test_trailing_separator_leaves_no_empty_tag() {
        assert_eq!(generate_tag("Dominion:"), "#Dominion");
    }

    #[test]
    fn test_generated_tag_accessors() {
        let result = TagPipeline::with_defaults().generate("Pandemic: Legacy");
        assert_eq!(result.original, "Pandemic: Legacy");
        assert_eq!(result.tags(), vec!["#Pandemic", "#Legacy"]);
        assert!(!result.is_empty());
        assert!(!result.overridden);
    }
}
