//! Configuration errors.

use thiserror::Error;

/// Errors raised while loading or validating an [`AvatarConfig`](super::AvatarConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// YAML parsing or serialization failed.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// File I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A value is outside its accepted range.
    #[error("Validation error: {0}")]
    Validation(String),
}
