//! Error types for configuration and key input.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid decimal separator {0:?}: must be ASCII punctuation other than a sign")]
    InvalidSeparator(char),

    #[error("max_display_len must be at least 1")]
    InvalidDisplayLength,
}

/// Errors raised while reading key tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyError {
    #[error("unknown key {0:?}")]
    Unknown(String),
}
