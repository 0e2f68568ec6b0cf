//! Tracking frames delivered by a body-tracking source.

use bodytrack_core::{AnchorPose, Mat4, SkeletonSnapshot, Vec3};
use serde::{Deserialize, Serialize};

/// A tracked body: its world transform and current skeleton.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAnchor {
    /// Identifier that stays stable while the body is tracked.
    pub id: u64,
    /// World transform of the body root.
    #[serde(default = "identity")]
    pub transform: Mat4,
    /// Model-space joint transforms.
    pub skeleton: SkeletonSnapshot,
}

fn identity() -> Mat4 {
    Mat4::IDENTITY
}

impl BodyAnchor {
    /// Creates a body anchor at the world origin.
    pub fn new(id: u64, skeleton: SkeletonSnapshot) -> Self {
        Self {
            id,
            transform: Mat4::IDENTITY,
            skeleton,
        }
    }

    /// Sets the world transform.
    #[must_use]
    pub fn with_transform(mut self, transform: Mat4) -> Self {
        self.transform = transform;
        self
    }

    /// World position of the body root.
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Pose an overlay should take when following this body.
    pub fn overlay_pose(&self, offset: Vec3) -> AnchorPose {
        AnchorPose::from_body_transform(&self.transform, offset)
    }
}

/// One discrete update from the tracking source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackingFrame {
    /// Increasing frame counter.
    pub sequence: u64,
    /// Capture time in seconds.
    #[serde(default)]
    pub timestamp: f64,
    /// Bodies updated in this frame.
    #[serde(default)]
    pub bodies: Vec<BodyAnchor>,
}

impl TrackingFrame {
    /// Creates an empty frame.
    pub fn new(sequence: u64, timestamp: f64) -> Self {
        Self {
            sequence,
            timestamp,
            bodies: Vec::new(),
        }
    }

    /// Adds a body to this frame.
    #[must_use]
    pub fn with_body(mut self, body: BodyAnchor) -> Self {
        self.bodies.push(body);
        self
    }
}
