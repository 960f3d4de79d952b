//! Path smoothing configuration section.

use serde::{Deserialize, Serialize};

use crate::smoothing::SmoothingConfig;

use super::defaults;

/// Path smoother settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SmoothingSection {
    /// Sweep cap
    #[serde(default = "defaults::max_sweeps")]
    pub max_sweeps: usize,

    /// Smooth guideline orderings when the guideline is sparse
    #[serde(default = "defaults::enabled")]
    pub after_guideline: bool,

    /// Minimum point count for smoothing a guideline ordering
    #[serde(default = "defaults::guideline_min_points")]
    pub guideline_min_points: usize,

    /// Smooth a guideline ordering only above this many points per waypoint
    #[serde(default = "defaults::guideline_density")]
    pub guideline_density: f64,
}

impl Default for SmoothingSection {
    fn default() -> Self {
        Self {
            max_sweeps: defaults::max_sweeps(),
            after_guideline: true,
            guideline_min_points: defaults::guideline_min_points(),
            guideline_density: defaults::guideline_density(),
        }
    }
}

impl SmoothingSection {
    /// Convert to SmoothingConfig
    pub fn to_smoothing_config(&self) -> SmoothingConfig {
        SmoothingConfig {
            max_sweeps: self.max_sweeps,
        }
    }
}
