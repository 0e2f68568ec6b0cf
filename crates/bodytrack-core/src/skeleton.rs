//! Skeleton snapshots keyed by joint name.
//!
//! A snapshot holds the model-space transform of every joint the tracking
//! source currently sees. Joints that lost tracking are simply absent.

use std::collections::HashMap;

use glam::{Mat4, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{BodyTrackError, Result};

/// A 3D joint position in skeleton model space.
pub type JointPosition = Vec3;

/// Extracts the translation part of a joint transform.
#[must_use]
pub fn position_from_transform(transform: &Mat4) -> JointPosition {
    transform.w_axis.truncate()
}

/// Model-space joint transforms of one tracked skeleton at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkeletonSnapshot {
    joints: HashMap<String, Mat4>,
}

impl SkeletonSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the model transform of a joint, replacing any previous value.
    pub fn insert_transform(&mut self, name: impl Into<String>, transform: Mat4) {
        self.joints.insert(name.into(), transform);
    }

    /// Sets a joint from a bare position (identity rotation).
    pub fn insert_position(&mut self, name: impl Into<String>, position: JointPosition) {
        self.insert_transform(name, Mat4::from_translation(position));
    }

    /// Builder form of [`Self::insert_position`].
    #[must_use]
    pub fn with_position(mut self, name: impl Into<String>, position: JointPosition) -> Self {
        self.insert_position(name, position);
        self
    }

    /// Returns the model transform of a joint, if it is tracked.
    #[must_use]
    pub fn model_transform(&self, name: &str) -> Option<&Mat4> {
        self.joints.get(name)
    }

    /// Returns the model-space position of a joint, if it is tracked.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<JointPosition> {
        self.model_transform(name).map(position_from_transform)
    }

    /// Like [`Self::position`] but reports a missing joint as an error.
    pub fn require(&self, name: &str) -> Result<JointPosition> {
        self.position(name)
            .ok_or_else(|| BodyTrackError::JointNotFound(name.to_string()))
    }

    /// Removes a joint, as when tracking for it is lost.
    pub fn remove(&mut self, name: &str) -> Option<Mat4> {
        self.joints.remove(name)
    }

    /// Checks if a joint is tracked.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.joints.contains_key(name)
    }

    /// Returns an iterator over joint names.
    pub fn joint_names(&self) -> impl Iterator<Item = &str> {
        self.joints.keys().map(String::as_str)
    }

    /// Returns the number of tracked joints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.joints.len()
    }

    /// Returns true if no joint is tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.joints.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, Mat4)> for SkeletonSnapshot {
    fn from_iter<I: IntoIterator<Item = (S, Mat4)>>(iter: I) -> Self {
        Self {
            joints: iter
                .into_iter()
                .map(|(name, transform)| (name.into(), transform))
                .collect(),
        }
    }
}
