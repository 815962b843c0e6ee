//! Errors for the fallible edges of the kernel: loading configuration and
//! vocabulary data. Validation itself never fails.

use std::io;
use std::path::PathBuf;

/// Failure to load a `twlint.toml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Failure to load or extract a class vocabulary.
#[derive(Debug, thiserror::Error)]
pub enum VocabularyError {
    #[error("failed to read vocabulary {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid vocabulary file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("vocabulary has no static names and no dynamic prefixes")]
    Empty,
}
