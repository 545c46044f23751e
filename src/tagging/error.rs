//! Error types for the tagging module.
//!
//! Tag generation itself is total and never fails; only loading
//! user-provided tables at pipeline construction can go wrong.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the tagging module.
pub type TagResult<T> = Result<T, TagError>;

/// Errors surfaced while building a pipeline from configuration.
#[derive(Debug, Error)]
pub enum TagError {
    #[error("failed to read table file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse table file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
