//! Tagging configuration.
//!
//! The built-in tables cover the known title corpus; configuration only
//! extends them (extra franchise names, extra override entries).

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Top-level tagging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TagConfig {
    pub series: SeriesConfig,
    pub overrides: OverrideConfig,
}

/// Series table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    /// Use the built-in franchise list.
    pub use_builtin: bool,
    /// Extra franchise names, checked after the built-in list.
    pub extra: Vec<String>,
}

/// Override table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OverrideConfig {
    /// Use the built-in override entries.
    pub use_builtin: bool,
    /// Optional TOML file with extra overrides (`[overrides]` string table).
    /// Entries from the file win over built-in ones on key collision.
    pub path: Option<PathBuf>,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            series: SeriesConfig::default(),
            overrides: OverrideConfig::default(),
        }
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            extra: Vec::new(),
        }
    }
}

impl Default for OverrideConfig {
    fn default() -> Self {
        Self {
            use_builtin: true,
            path: None,
        }
    }
}

impl TagConfig {
    /// Load configuration from `~/.config/tabletag/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        let config_path = Self::config_path();
        match std::fs::read_to_string(&config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e} — using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {} — using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("tabletag").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}
