//! Replaying recorded tracking frames from JSON.
//!
//! A recording looks like:
//!
//! ```json
//! { "frames": [ { "sequence": 0, "timestamp": 0.0, "bodies": [ ... ] } ] }
//! ```

use std::collections::VecDeque;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use bodytrack_core::Result;
use serde::{Deserialize, Serialize};

use crate::frame::TrackingFrame;
use crate::session::TrackingSource;

/// On-disk layout of a recording.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Recording {
    /// Frames in delivery order.
    pub frames: Vec<TrackingFrame>,
}

impl Recording {
    /// Writes this recording as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A [`TrackingSource`] that yields frames from a recording in file order.
#[derive(Debug, Clone, Default)]
pub struct ReplaySource {
    frames: VecDeque<TrackingFrame>,
}

impl ReplaySource {
    /// Creates a source from in-memory frames.
    pub fn from_frames(frames: impl IntoIterator<Item = TrackingFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Parses a recording from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let recording: Recording = serde_json::from_reader(reader)?;
        Ok(Self::from_frames(recording.frames))
    }

    /// Loads a recording from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = Self::from_reader(BufReader::new(File::open(path)?))?;
        log::info!(
            "loaded {} recorded frame(s) from {}",
            source.remaining(),
            path.display()
        );
        Ok(source)
    }

    /// Frames not yet delivered.
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl TrackingSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<TrackingFrame>> {
        Ok(self.frames.pop_front())
    }
}
