//! Error types for bodytrack-rs.

use thiserror::Error;

/// The main error type for bodytrack-rs operations.
#[derive(Error, Debug)]
pub enum BodyTrackError {
    /// A limb sample cannot produce a well-defined angle, e.g. because one of
    /// its segments has zero length.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A joint with the given name is not present in the skeleton snapshot.
    #[error("joint '{0}' not found in skeleton")]
    JointNotFound(String),

    /// A limb with the given name is not configured.
    #[error("limb '{0}' not found")]
    LimbNotFound(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for bodytrack-rs operations.
pub type Result<T> = std::result::Result<T, BodyTrackError>;
