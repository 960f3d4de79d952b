//! Unified configuration loading for the section-line engine.
//!
//! Loads all configuration from a single YAML file. Every field has a serde
//! default, so a partial file (or none at all) is valid.

mod defaults;
mod engine;
mod error;
mod fitting;
mod smoothing;
mod spread;

// Re-export main types
pub use engine::EngineConfig;
pub use error::ConfigError;

// Re-export section types
pub use fitting::FittingSection;
pub use smoothing::SmoothingSection;
pub use spread::SpreadSection;
