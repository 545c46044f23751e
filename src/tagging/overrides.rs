//! Terminal override table.
//!
//! Exact-match replacement of a fully processed tag string, the escape
//! hatch for titles the general pipeline mishandles. Built-in entries
//! cover the known corpus; extra entries load from a TOML file.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::error::{TagError, TagResult};
use super::tables::DEFAULT_OVERRIDES;

/// Exact-match overrides applied after every other stage.
#[derive(Debug, Clone, Default)]
pub struct OverrideMap {
    entries: IndexMap<String, String>,
}

/// On-disk form: a flat `[overrides]` string table.
#[derive(Debug, Deserialize)]
struct OverrideFile {
    #[serde(default)]
    overrides: IndexMap<String, String>,
}

impl OverrideMap {
    /// Empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map holding the built-in entries.
    pub fn builtin() -> Self {
        let entries = DEFAULT_OVERRIDES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        Self { entries }
    }

    /// Load entries from a TOML file.
    pub fn from_toml_file(path: &Path) -> TagResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| TagError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let file: OverrideFile = toml::from_str(&contents).map_err(|source| TagError::Toml {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!(
            "loaded {} override entries from {}",
            file.overrides.len(),
            path.display()
        );
        Ok(Self {
            entries: file.overrides,
        })
    }

    /// Merge `other` into `self`; `other` wins on key collision.
    pub fn merge(&mut self, other: &OverrideMap) {
        for (from, to) in &other.entries {
            self.entries.insert(from.clone(), to.clone());
        }
    }

    /// Add a single entry.
    pub fn insert(&mut self, from: impl Into<String>, to: impl Into<String>) {
        self.entries.insert(from.into(), to.into());
    }

    /// The replacement for `tag`, if one exists.
    pub fn lookup(&self, tag: &str) -> Option<&str> {
        self.entries.get(tag).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
