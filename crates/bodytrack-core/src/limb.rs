//! Limb samples and the named joints that define them.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::angle::{angle_at_pivot_in, AngleResult, AngleUnit};
use crate::error::Result;
use crate::skeleton::{JointPosition, SkeletonSnapshot};

/// Joint names used by the standard leg definitions.
pub mod joints {
    pub const LEFT_UP_LEG: &str = "left_upLeg_joint";
    pub const LEFT_LEG: &str = "left_leg_joint";
    pub const LEFT_FOOT: &str = "left_foot_joint";
    pub const RIGHT_UP_LEG: &str = "right_upLeg_joint";
    pub const RIGHT_LEG: &str = "right_leg_joint";
    pub const RIGHT_FOOT: &str = "right_foot_joint";
}

/// Three joint positions forming a two-segment limb.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimbSample {
    /// Joint on the body side of the pivot (e.g. hip).
    pub proximal: JointPosition,
    /// Joint at which the angle is measured (e.g. knee).
    pub pivot: JointPosition,
    /// Joint on the far side of the pivot (e.g. ankle).
    pub distal: JointPosition,
}

impl LimbSample {
    /// Creates a new limb sample.
    #[must_use]
    pub fn new(proximal: Vec3, pivot: Vec3, distal: Vec3) -> Self {
        Self {
            proximal,
            pivot,
            distal,
        }
    }

    /// Segment from the pivot to the proximal joint.
    #[must_use]
    pub fn proximal_segment(&self) -> Vec3 {
        self.proximal - self.pivot
    }

    /// Segment from the pivot to the distal joint.
    #[must_use]
    pub fn distal_segment(&self) -> Vec3 {
        self.distal - self.pivot
    }

    /// Computes the interior angle at the pivot.
    pub fn angle(&self, unit: AngleUnit) -> Result<AngleResult> {
        angle_at_pivot_in(unit, self.proximal, self.pivot, self.distal)
    }
}

/// A named limb described by the joints that make up its sample.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimbDefinition {
    /// Display name, e.g. `left_knee`.
    pub name: String,
    /// Joint name of the proximal end.
    pub proximal: String,
    /// Joint name of the pivot.
    pub pivot: String,
    /// Joint name of the distal end.
    pub distal: String,
}

impl LimbDefinition {
    /// Creates a new limb definition.
    pub fn new(
        name: impl Into<String>,
        proximal: impl Into<String>,
        pivot: impl Into<String>,
        distal: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            proximal: proximal.into(),
            pivot: pivot.into(),
            distal: distal.into(),
        }
    }

    /// Hip / knee / ankle of the left leg.
    #[must_use]
    pub fn left_knee() -> Self {
        Self::new(
            "left_knee",
            joints::LEFT_UP_LEG,
            joints::LEFT_LEG,
            joints::LEFT_FOOT,
        )
    }

    /// Hip / knee / ankle of the right leg.
    #[must_use]
    pub fn right_knee() -> Self {
        Self::new(
            "right_knee",
            joints::RIGHT_UP_LEG,
            joints::RIGHT_LEG,
            joints::RIGHT_FOOT,
        )
    }

    /// Both knees, left first.
    #[must_use]
    pub fn knees() -> Vec<Self> {
        vec![Self::left_knee(), Self::right_knee()]
    }

    /// Extracts this limb's sample from a snapshot.
    ///
    /// Returns `None` if any of the three joints is not tracked.
    #[must_use]
    pub fn sample(&self, skeleton: &SkeletonSnapshot) -> Option<LimbSample> {
        Some(LimbSample::new(
            skeleton.position(&self.proximal)?,
            skeleton.position(&self.pivot)?,
            skeleton.position(&self.distal)?,
        ))
    }

    /// Names of joints from this limb that are missing in `skeleton`.
    pub fn missing_joints<'a>(
        &'a self,
        skeleton: &'a SkeletonSnapshot,
    ) -> impl Iterator<Item = &'a str> + 'a {
        [&self.proximal, &self.pivot, &self.distal]
            .into_iter()
            .map(String::as_str)
            .filter(|name| !skeleton.contains(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BodyTrackError;

    fn bent_left_leg() -> SkeletonSnapshot {
        SkeletonSnapshot::new()
            .with_position(joints::LEFT_UP_LEG, Vec3::new(0.1, 1.0, 0.0))
            .with_position(joints::LEFT_LEG, Vec3::new(0.1, 0.5, 0.0))
            .with_position(joints::LEFT_FOOT, Vec3::new(0.1, 0.5, 0.5))
    }

    #[test]
    fn test_sample_from_snapshot() {
        let sample = LimbDefinition::left_knee().sample(&bent_left_leg()).unwrap();
        assert_eq!(sample.pivot, Vec3::new(0.1, 0.5, 0.0));
        assert_eq!(sample.proximal_segment(), Vec3::new(0.0, 0.5, 0.0));

        let angle = sample.angle(AngleUnit::Degrees).unwrap();
        assert!((angle.degrees() - 90.0).abs() < 1e-3);
    }

    #[test]
    fn test_sample_missing_joint() {
        let mut skeleton = bent_left_leg();
        skeleton.remove(joints::LEFT_FOOT);

        let limb = LimbDefinition::left_knee();
        assert!(limb.sample(&skeleton).is_none());
        assert_eq!(
            limb.missing_joints(&skeleton).collect::<Vec<_>>(),
            vec![joints::LEFT_FOOT]
        );
    }

    #[test]
    fn test_right_knee_ignores_left_joints() {
        assert!(LimbDefinition::right_knee().sample(&bent_left_leg()).is_none());
    }

    #[test]
    fn test_collapsed_limb_is_invalid() {
        let sample = LimbSample::new(Vec3::ONE, Vec3::ONE, Vec3::ZERO);
        assert!(matches!(
            sample.angle(AngleUnit::Radians),
            Err(BodyTrackError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_knees_order() {
        let names: Vec<_> = LimbDefinition::knees().into_iter().map(|l| l.name).collect();
        assert_eq!(names, vec!["left_knee", "right_knee"]);
    }
}
