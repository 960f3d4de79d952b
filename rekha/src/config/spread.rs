//! Coincident-point spread section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Spread settings for fully coincident point sets
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SpreadSection {
    /// Spacing between spread points (map units)
    #[serde(default = "defaults::spread_spacing")]
    pub spacing: f64,
}

impl Default for SpreadSection {
    fn default() -> Self {
        Self {
            spacing: defaults::spread_spacing(),
        }
    }
}
