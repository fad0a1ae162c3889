use std::path::PathBuf;

use thiserror::Error;

/// Various errors that can happen while selecting, loading or checking an
/// environment configuration record.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown build target: {0:?}")]
    UnknownTarget(String),

    #[error("{field} is not a valid absolute URL ({value:?}): {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },

    #[error("{field} uses an unsupported scheme: {scheme}")]
    UnsupportedScheme { field: &'static str, scheme: String },

    #[error("Unable to read config file {path:?}: {source}")]
    Io { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to render config: {0}")]
    Render(#[from] toml::ser::Error),

    #[error("The active environment config has already been initialized")]
    AlreadyInitialized,
}
