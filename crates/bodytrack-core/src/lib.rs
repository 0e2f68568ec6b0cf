//! Core abstractions for bodytrack-rs.
//!
//! This crate provides the pure computation used throughout bodytrack-rs:
//! - [`angle_at_pivot`] for the interior angle at a joint from three positions
//! - [`SkeletonSnapshot`] for named model-space joint transforms
//! - [`LimbDefinition`] and [`LimbSample`] for describing measured limbs
//! - [`AnchorPose`] for placing an overlay relative to a tracked body
//! - Configuration options and error types

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Builder patterns return Self which doesn't need must_use
#![allow(clippy::must_use_candidate)]

pub mod anchor;
pub mod angle;
pub mod error;
pub mod limb;
pub mod options;
pub mod skeleton;

pub use anchor::{AnchorPose, DEFAULT_CHARACTER_OFFSET};
pub use angle::{
    angle_at_pivot, angle_at_pivot_in, angle_between, angle_from_cosine, AngleResult, AngleUnit,
};
pub use error::{BodyTrackError, Result};
pub use limb::{joints, LimbDefinition, LimbSample};
pub use options::Options;
pub use skeleton::{position_from_transform, JointPosition, SkeletonSnapshot};

// Re-export glam types for convenience
pub use glam::{Mat4, Quat, Vec3};
