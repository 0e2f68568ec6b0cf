//! bodytrack-rs: knee flexion angles from a live stream of tracked skeletons.
//!
//! A body-tracking source delivers frames of named joint transforms. For each
//! frame, bodytrack looks up the hip, knee and ankle of each leg and computes
//! the interior angle at the knee.
//!
//! # Quick Start
//!
//! ```no_run
//! use bodytrack::*;
//!
//! fn main() -> Result<()> {
//!     let options = init(None)?;
//!     let monitor = LimbAngleMonitor::from_options(&options);
//!     let latest = LatestFrame::new();
//!
//!     let mut session = TrackingSession::new();
//!     let sink = latest.clone();
//!     session.subscribe(move |frame| sink.publish(monitor.update(frame)));
//!
//!     let mut source = ReplaySource::from_path("recording.json")?;
//!     session.run(&mut source)?;
//!
//!     if let Some(measurements) = latest.take() {
//!         for m in measurements {
//!             println!("{:?}", m.angle("left_knee"));
//!         }
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`TrackingSource`] yields [`TrackingFrame`]s (a device binding or a
//!   [`ReplaySource`]).
//! - [`TrackingSession`] delivers each frame to its subscribers.
//! - [`LimbAngleMonitor`] turns a frame into [`FrameMeasurement`]s, skipping
//!   limbs whose joints are not tracked.
//! - [`LatestFrame`] lets a slower consumer read only the newest result.

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

mod frame;
mod init;
mod latest;
mod monitor;
mod replay;
mod session;

// Re-export core types
pub use bodytrack_core::{
    anchor::{AnchorPose, DEFAULT_CHARACTER_OFFSET},
    angle::{angle_at_pivot, angle_at_pivot_in, angle_between, AngleResult, AngleUnit},
    error::{BodyTrackError, Result},
    joints,
    limb::{LimbDefinition, LimbSample},
    options::Options,
    skeleton::{position_from_transform, JointPosition, SkeletonSnapshot},
    Mat4, Quat, Vec3,
};

pub use frame::{BodyAnchor, TrackingFrame};
pub use init::{init, init_logging};
pub use latest::LatestFrame;
pub use monitor::{FrameMeasurement, LimbAngleMonitor, LimbMeasurement};
pub use replay::{Recording, ReplaySource};
pub use session::{TrackingSession, TrackingSource};
