//! Error types for hand_geometry

use thiserror::Error;

/// Result type for hand_geometry operations
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Ways tracker input can be malformed.
///
/// The geometry itself never fails; these are raised at the boundary where
/// raw tracker output is turned into [`LandmarkSet`](crate::LandmarkSet)s.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeometryError {
    /// A landmark set did not have exactly 21 points
    #[error("landmark set must have {expected} points, got {actual}")]
    LandmarkCount { expected: usize, actual: usize },

    /// Centroid of an empty point list
    #[error("cannot take the centroid of zero points")]
    EmptyPoints,

    /// Handedness label other than "Left" / "Right"
    #[error("unknown handedness label: {0:?}")]
    UnknownHandedness(String),

    /// A detection carried no handedness category at all
    #[error("detection {0} has no handedness category")]
    MissingHandedness(usize),

    /// The parallel per-hand arrays disagree in length
    #[error("detection arrays disagree: {handedness} handedness, {image} image, {world} world")]
    MismatchedDetections { handedness: usize, image: usize, world: usize },

    /// Tracker JSON could not be decoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
