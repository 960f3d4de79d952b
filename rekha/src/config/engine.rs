//! Main EngineConfig and conversion methods.

use std::f64::consts::FRAC_PI_2;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::fitting::FitConfig;
use crate::smoothing::SmoothingConfig;

use super::error::ConfigError;
use super::fitting::FittingSection;
use super::smoothing::SmoothingSection;
use super::spread::SpreadSection;

/// Full section-line engine configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    /// Best-fit solver settings
    #[serde(default)]
    pub fitting: FittingSection,

    /// Path smoother settings
    #[serde(default)]
    pub smoothing: SmoothingSection,

    /// Coincident-point spread settings
    #[serde(default)]
    pub spread: SpreadSection,
}

impl EngineConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_yaml(&contents)
    }

    /// Load from default config path (configs/rekha.yaml)
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = Path::new("configs/rekha.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to YAML
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_yaml::to_string(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Check value ranges
    pub fn validate(&self) -> Result<(), ConfigError> {
        let f = &self.fitting;
        if f.max_rounds == 0 {
            return Err(invalid("fitting.max_rounds must be at least 1"));
        }
        if !(f.convergence_tolerance.is_finite() && f.convergence_tolerance > 0.0) {
            return Err(invalid("fitting.convergence_tolerance must be positive"));
        }
        if !(f.nudge.is_finite() && f.nudge > 0.0) {
            return Err(invalid("fitting.nudge must be positive"));
        }
        if f.max_nudges == 0 {
            return Err(invalid("fitting.max_nudges must be at least 1"));
        }
        if !(f.unconstrained_limit > 0.0 && f.unconstrained_limit <= FRAC_PI_2) {
            return Err(invalid("fitting.unconstrained_limit must be in (0, π/2]"));
        }

        let s = &self.smoothing;
        if s.max_sweeps == 0 {
            return Err(invalid("smoothing.max_sweeps must be at least 1"));
        }
        if !(s.guideline_density.is_finite() && s.guideline_density >= 0.0) {
            return Err(invalid("smoothing.guideline_density must be non-negative"));
        }

        if !(self.spread.spacing.is_finite() && self.spread.spacing > 0.0) {
            return Err(invalid("spread.spacing must be positive"));
        }
        Ok(())
    }

    /// Convert to FitConfig for BestFitSolver
    pub fn to_fit_config(&self) -> FitConfig {
        self.fitting.to_fit_config()
    }

    /// Convert to SmoothingConfig for PathSmoother
    pub fn to_smoothing_config(&self) -> SmoothingConfig {
        self.smoothing.to_smoothing_config()
    }
}

fn invalid(msg: &str) -> ConfigError {
    ConfigError::Validation(msg.to_string())
}
