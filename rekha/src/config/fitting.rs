//! Best-fit solver configuration section.

use serde::{Deserialize, Serialize};

use crate::fitting::FitConfig;

use super::defaults;

/// Best-fit solver settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FittingSection {
    /// Regression round cap
    #[serde(default = "defaults::max_rounds")]
    pub max_rounds: usize,

    /// Stop when a round turns less than this (radians)
    #[serde(default = "defaults::convergence_tolerance")]
    pub convergence_tolerance: f64,

    /// Nudge after a vertical regression (radians)
    #[serde(default = "defaults::nudge")]
    pub nudge: f64,

    /// Consecutive vertical regressions before giving up
    #[serde(default = "defaults::max_nudges")]
    pub max_nudges: usize,

    /// Rotation bound without an angle hint (radians)
    #[serde(default = "defaults::unconstrained_limit")]
    pub unconstrained_limit: f64,
}

impl Default for FittingSection {
    fn default() -> Self {
        Self {
            max_rounds: defaults::max_rounds(),
            convergence_tolerance: defaults::convergence_tolerance(),
            nudge: defaults::nudge(),
            max_nudges: defaults::max_nudges(),
            unconstrained_limit: defaults::unconstrained_limit(),
        }
    }
}

impl FittingSection {
    /// Convert to FitConfig
    pub fn to_fit_config(&self) -> FitConfig {
        FitConfig {
            max_rounds: self.max_rounds,
            convergence_tolerance: self.convergence_tolerance,
            nudge: self.nudge,
            max_nudges: self.max_nudges,
            unconstrained_limit: self.unconstrained_limit,
        }
    }
}
