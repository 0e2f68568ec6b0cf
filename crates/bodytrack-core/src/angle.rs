//! Joint angle evaluation.
//!
//! The angle at a pivot joint is measured between the two segments running
//! from the pivot to its neighbouring joints:
//!
//! ```text
//!   cos(θ) = (v1 · v2) / (|v1| |v2|),   v1 = proximal - pivot,  v2 = distal - pivot
//! ```
//!
//! The result lies in `[0, π]`. Zero means the segments are folded onto each
//! other, π means the limb is fully extended.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::error::{BodyTrackError, Result};

/// Unit an [`AngleResult`] is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AngleUnit {
    /// Degrees, `[0, 180]` for joint angles.
    #[default]
    Degrees,
    /// Radians, `[0, π]` for joint angles.
    Radians,
}

impl AngleUnit {
    /// Short suffix used when printing values in this unit.
    #[must_use]
    pub fn suffix(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "°",
            AngleUnit::Radians => " rad",
        }
    }
}

/// An angle value tagged with its unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleResult {
    value: f32,
    unit: AngleUnit,
}

impl AngleResult {
    /// Creates an angle from a value in radians.
    #[must_use]
    pub fn from_radians(radians: f32) -> Self {
        Self {
            value: radians,
            unit: AngleUnit::Radians,
        }
    }

    /// Creates an angle from a value in degrees.
    #[must_use]
    pub fn from_degrees(degrees: f32) -> Self {
        Self {
            value: degrees,
            unit: AngleUnit::Degrees,
        }
    }

    /// Returns the raw value in this angle's own unit.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Returns the unit of [`Self::value`].
    #[must_use]
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Returns the angle in radians.
    #[must_use]
    pub fn radians(&self) -> f32 {
        match self.unit {
            AngleUnit::Radians => self.value,
            AngleUnit::Degrees => self.value.to_radians(),
        }
    }

    /// Returns the angle in degrees.
    #[must_use]
    pub fn degrees(&self) -> f32 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value.to_degrees(),
        }
    }

    /// Converts this angle to the given unit.
    #[must_use]
    pub fn to_unit(&self, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => Self::from_degrees(self.degrees()),
            AngleUnit::Radians => Self::from_radians(self.radians()),
        }
    }
}

impl fmt::Display for AngleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "{:.*}{}", p, self.value, self.unit.suffix()),
            None => write!(f, "{}{}", self.value, self.unit.suffix()),
        }
    }
}

/// Inverse cosine of a ratio that may have drifted slightly outside `[-1, 1]`.
///
/// Nearly parallel segments can yield ratios like `1.0000001` after rounding;
/// those are clamped instead of producing NaN.
#[must_use]
pub fn angle_from_cosine(cos_theta: f32) -> f32 {
    cos_theta.clamp(-1.0, 1.0).acos()
}

/// Returns the angle in radians between two segment vectors.
///
/// # Errors
///
/// Returns [`BodyTrackError::InvalidInput`] if either vector has zero or
/// non-finite length.
pub fn angle_between(v1: Vec3, v2: Vec3) -> Result<f32> {
    let len1 = v1.length();
    let len2 = v2.length();

    if !is_usable_length(len1) {
        return Err(BodyTrackError::InvalidInput(format!(
            "proximal segment has length {len1}"
        )));
    }
    if !is_usable_length(len2) {
        return Err(BodyTrackError::InvalidInput(format!(
            "distal segment has length {len2}"
        )));
    }

    Ok(angle_from_cosine(v1.dot(v2) / (len1 * len2)))
}

fn is_usable_length(len: f32) -> bool {
    len.is_finite() && len > 0.0
}

/// Computes the angle at `pivot` formed by `proximal` and `distal`, in radians.
///
/// All three points must share a coordinate space; no conversion is done.
///
/// # Errors
///
/// Returns [`BodyTrackError::InvalidInput`] if `proximal` or `distal`
/// coincides with `pivot`.
pub fn angle_at_pivot(proximal: Vec3, pivot: Vec3, distal: Vec3) -> Result<AngleResult> {
    angle_between(proximal - pivot, distal - pivot).map(AngleResult::from_radians)
}

/// Same as [`angle_at_pivot`] but returns the result in `unit`.
///
/// # Errors
///
/// See [`angle_at_pivot`].
pub fn angle_at_pivot_in(
    unit: AngleUnit,
    proximal: Vec3,
    pivot: Vec3,
    distal: Vec3,
) -> Result<AngleResult> {
    angle_at_pivot(proximal, pivot, distal).map(|angle| angle.to_unit(unit))
}
