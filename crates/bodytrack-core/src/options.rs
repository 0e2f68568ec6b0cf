//! Configuration options for bodytrack.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::anchor::DEFAULT_CHARACTER_OFFSET;
use crate::angle::AngleUnit;
use crate::error::{BodyTrackError, Result};
use crate::limb::LimbDefinition;

/// Global configuration options for bodytrack.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Unit reported in measurements.
    pub angle_unit: AngleUnit,

    /// Limbs measured every frame.
    pub limbs: Vec<LimbDefinition>,

    /// Offset of the overlay anchor from the body anchor, in metres.
    pub character_offset: Vec3,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            angle_unit: AngleUnit::Degrees,
            limbs: LimbDefinition::knees(),
            character_offset: DEFAULT_CHARACTER_OFFSET,
        }
    }
}

impl Options {
    /// Parses options from JSON. Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&content)?;
        log::info!(
            "loaded options from {}: {} limb(s), unit {:?}",
            path.display(),
            options.limbs.len(),
            options.angle_unit
        );
        Ok(options)
    }

    /// Looks up a configured limb by name.
    pub fn limb(&self, name: &str) -> Result<&LimbDefinition> {
        self.limbs
            .iter()
            .find(|limb| limb.name == name)
            .ok_or_else(|| BodyTrackError::LimbNotFound(name.to_string()))
    }
}
