//! Placement of an overlay anchor relative to a tracked body.
//!
//! An overlay (such as a rigged character) follows the body anchor: it takes
//! the body's world translation plus a fixed offset, and copies the body's
//! rotation so the skeleton pose stays aligned with the body.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// Default overlay offset: one metre to the left of the body.
pub const DEFAULT_CHARACTER_OFFSET: Vec3 = Vec3::new(-1.0, 0.0, 0.0);

/// World pose of an overlay anchor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnchorPose {
    /// World translation.
    pub translation: Vec3,
    /// World rotation.
    pub rotation: Quat,
}

impl Default for AnchorPose {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
        }
    }
}

impl AnchorPose {
    /// Derives the overlay pose from a body anchor's world transform.
    ///
    /// Scale in `body_transform` is discarded. The decomposition may not be
    /// exact for matrices with shear.
    #[must_use]
    pub fn from_body_transform(body_transform: &Mat4, offset: Vec3) -> Self {
        let (_scale, rotation, translation) = body_transform.to_scale_rotation_translation();
        Self {
            translation: translation + offset,
            rotation,
        }
    }

    /// Converts this pose to a Mat4.
    #[must_use]
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.translation)
    }

    /// Returns the rotation as Euler angles (in degrees).
    #[must_use]
    pub fn euler_angles_degrees(&self) -> Vec3 {
        let (x, y, z) = self.rotation.to_euler(glam::EulerRot::XYZ);
        Vec3::new(x, y, z) * (180.0 / std::f32::consts::PI)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_applied_to_translation() {
        let body = Mat4::from_translation(Vec3::new(0.5, 0.0, -2.0));
        let pose = AnchorPose::from_body_transform(&body, DEFAULT_CHARACTER_OFFSET);
        assert!((pose.translation - Vec3::new(-0.5, 0.0, -2.0)).length() < 1e-6);
        assert!(pose.rotation.angle_between(Quat::IDENTITY) < 1e-6);
    }

    #[test]
    fn test_rotation_copied_from_body() {
        let rotation = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        let body = Mat4::from_rotation_translation(rotation, Vec3::new(1.0, 0.0, 0.0));
        let pose = AnchorPose::from_body_transform(&body, Vec3::ZERO);

        assert!(pose.rotation.angle_between(rotation) < 1e-4);
        assert!((pose.euler_angles_degrees().y - 90.0).abs() < 0.1);
    }

    #[test]
    fn test_scale_is_discarded() {
        let body = Mat4::from_scale_rotation_translation(
            Vec3::splat(2.0),
            Quat::IDENTITY,
            Vec3::new(0.0, 1.0, 0.0),
        );
        let pose = AnchorPose::from_body_transform(&body, Vec3::ZERO);
        let back = pose.to_matrix();
        assert!((back.x_axis.truncate().length() - 1.0).abs() < 1e-5);
        assert!((back.w_axis.truncate() - Vec3::new(0.0, 1.0, 0.0)).length() < 1e-6);
    }
}
