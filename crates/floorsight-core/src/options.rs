//! Configuration options for the floor projector.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::plane::DEFAULT_PARALLEL_EPSILON;

/// Options controlling how corner rays are projected onto the floor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectorOptions {
    /// A ray is parallel to a plane when `|direction . normal|` is below this.
    pub parallel_epsilon: f64,

    /// Whether to also emit a segment from the eye to every floor hit.
    pub include_sight_lines: bool,
}

impl Default for ProjectorOptions {
    fn default() -> Self {
        Self {
            parallel_epsilon: DEFAULT_PARALLEL_EPSILON,
            include_sight_lines: false,
        }
    }
}

impl ProjectorOptions {
    /// Parses options from JSON. Missing fields take their default value.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut options: Self = serde_json::from_str(json)?;
        options.sanitize();
        Ok(options)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Serializes the options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn sanitize(&mut self) {
        if !(self.parallel_epsilon.is_finite() && self.parallel_epsilon >= 0.0) {
            log::warn!(
                "ignoring parallel_epsilon {}, using {}",
                self.parallel_epsilon,
                DEFAULT_PARALLEL_EPSILON
            );
            self.parallel_epsilon = DEFAULT_PARALLEL_EPSILON;
        }
    }
}
