//! Per-frame limb angle measurement.
//!
//! For every body in a frame and every configured limb, the three joint
//! positions are looked up by name and handed to the angle evaluator. A limb
//! with a missing joint or a degenerate segment is skipped for that frame.

use bodytrack_core::{AngleResult, AngleUnit, BodyTrackError, LimbDefinition, Options};

use crate::frame::{BodyAnchor, TrackingFrame};

/// The angle of one limb in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct LimbMeasurement {
    /// Name of the limb definition.
    pub limb: String,
    /// Measured angle, or `None` if the limb was skipped.
    pub angle: Option<AngleResult>,
}

/// All limb angles of one body in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameMeasurement {
    /// Sequence number of the source frame.
    pub sequence: u64,
    /// Body the measurements belong to.
    pub body_id: u64,
    /// One entry per configured limb, in configuration order.
    pub limbs: Vec<LimbMeasurement>,
}

impl FrameMeasurement {
    /// Returns the angle of a limb by name, if it was measured.
    pub fn angle(&self, limb: &str) -> Option<AngleResult> {
        self.limbs
            .iter()
            .find(|m| m.limb == limb)
            .and_then(|m| m.angle)
    }

    /// Number of limbs skipped in this frame.
    pub fn skipped(&self) -> usize {
        self.limbs.iter().filter(|m| m.angle.is_none()).count()
    }
}

/// Measures configured limb angles on each frame.
#[derive(Debug, Clone)]
pub struct LimbAngleMonitor {
    limbs: Vec<LimbDefinition>,
    unit: AngleUnit,
}

impl Default for LimbAngleMonitor {
    fn default() -> Self {
        Self::knees(AngleUnit::Degrees)
    }
}

impl LimbAngleMonitor {
    /// Creates a monitor for the given limbs.
    pub fn new(limbs: Vec<LimbDefinition>, unit: AngleUnit) -> Self {
        Self { limbs, unit }
    }

    /// Monitors the left and right knee.
    pub fn knees(unit: AngleUnit) -> Self {
        Self::new(LimbDefinition::knees(), unit)
    }

    /// Creates a monitor from configured options.
    pub fn from_options(options: &Options) -> Self {
        Self::new(options.limbs.clone(), options.angle_unit)
    }

    /// Limbs measured by this monitor.
    pub fn limbs(&self) -> &[LimbDefinition] {
        &self.limbs
    }

    /// Unit of produced angles.
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// Measures every body in `frame`.
    pub fn update(&self, frame: &TrackingFrame) -> Vec<FrameMeasurement> {
        frame
            .bodies
            .iter()
            .map(|body| self.measure_body(frame.sequence, body))
            .collect()
    }

    /// Measures all limbs of a single body.
    pub fn measure_body(&self, sequence: u64, body: &BodyAnchor) -> FrameMeasurement {
        let limbs = self
            .limbs
            .iter()
            .map(|limb| LimbMeasurement {
                limb: limb.name.clone(),
                angle: self.measure_limb(sequence, body, limb),
            })
            .collect();

        let measurement = FrameMeasurement {
            sequence,
            body_id: body.id,
            limbs,
        };
        log::trace!("frame {sequence} body {}: {measurement:?}", body.id);
        measurement
    }

    fn measure_limb(
        &self,
        sequence: u64,
        body: &BodyAnchor,
        limb: &LimbDefinition,
    ) -> Option<AngleResult> {
        let Some(sample) = limb.sample(&body.skeleton) else {
            let missing: Vec<_> = limb.missing_joints(&body.skeleton).collect();
            log::debug!(
                "frame {sequence} body {}: skipping {} (untracked: {})",
                body.id,
                limb.name,
                missing.join(", ")
            );
            return None;
        };

        match sample.angle(self.unit) {
            Ok(angle) => Some(angle),
            Err(BodyTrackError::InvalidInput(reason)) => {
                log::warn!(
                    "frame {sequence} body {}: skipping {}: {reason}",
                    body.id,
                    limb.name
                );
                None
            }
            Err(e) => {
                log::warn!("frame {sequence} body {}: {}: {e}", body.id, limb.name);
                None
            }
        }
    }
}
