//! Request and response documents.
//!
//! A [`SectionRequest`] describes one section-line build in YAML or JSON:
//!
//! ```yaml
//! mode: projected
//! azimuth_degrees: 60
//! tolerance_degrees: 15
//! guideline: [500000, 500250, 500750, 500450]   # optional, flat x y pairs
//! wells:
//!   - { id: "101", x: 500100, y: 500200 }
//!   - { id: "202", x: 500700, y: 500400 }
//! ```
//!
//! Results serialise to JSON with [`to_json`].

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SectionError;
use crate::features::PointSet;
use crate::guideline::guideline_from_flat;
use crate::section::{SectionHints, SectionLineEngine, SectionLineResult, SectionMode};

/// One well location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WellLocation {
    /// Stable identifier
    pub id: String,
    /// Easting
    pub x: f64,
    /// Northing
    pub y: f64,
}

/// A section-line build request.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SectionRequest {
    /// Well locations
    pub wells: Vec<WellLocation>,

    /// Section mode
    #[serde(default)]
    pub mode: SectionMode,

    /// Preferred direction as a compass bearing (degrees clockwise from north)
    #[serde(default)]
    pub azimuth_degrees: Option<f64>,

    /// Maximum deviation from the bearing (degrees)
    #[serde(default)]
    pub tolerance_degrees: Option<f64>,

    /// Guideline as a flat `x1 y1 x2 y2 …` list
    #[serde(default)]
    pub guideline: Option<Vec<f64>>,
}

/// Errors raised while reading or running a request.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    /// File could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parse error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON parse or write error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request itself is invalid
    #[error(transparent)]
    Section(#[from] SectionError),
}

impl SectionRequest {
    /// Load a request from a YAML (or JSON, which is valid YAML) file
    pub fn load(path: &Path) -> Result<Self, RequestError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, RequestError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse from JSON string
    pub fn from_json(json: &str) -> Result<Self, RequestError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Well locations keyed by id, in request order.
    pub fn point_set(&self) -> Result<PointSet<String>, SectionError> {
        PointSet::from_entries(self.wells.iter().map(|w| (w.id.clone(), (w.x, w.y))))
    }

    /// Hints in engine units.
    pub fn hints(&self) -> Result<SectionHints, SectionError> {
        let mut hints = SectionHints::new(self.mode);
        if let Some(bearing) = self.azimuth_degrees {
            hints = hints.with_azimuth_degrees(bearing);
        }
        if let Some(tolerance) = self.tolerance_degrees {
            hints = hints.with_tolerance_degrees(tolerance);
        }
        if let Some(flat) = &self.guideline {
            hints = hints.with_guideline(guideline_from_flat(flat)?);
        }
        Ok(hints)
    }

    /// Build the section line with `engine`.
    pub fn run(&self, engine: &SectionLineEngine) -> Result<SectionLineResult<String>, RequestError> {
        let points = self.point_set()?;
        let hints = self.hints()?;
        Ok(engine.build(&points, &hints)?)
    }
}

/// Serialise a result as pretty-printed JSON.
pub fn to_json<K: Serialize>(result: &SectionLineResult<K>) -> Result<String, RequestError> {
    Ok(serde_json::to_string_pretty(result)?)
}
