//! Configuration loading errors.

/// Errors raised while loading or validating an [`EngineConfig`](super::EngineConfig).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Failed to read config: {0}")]
    Io(String),

    /// The YAML could not be parsed or written.
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value is out of range.
    #[error("Invalid config value: {0}")]
    Validation(String),
}
