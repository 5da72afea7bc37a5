//! Per-frame hand tracker output and handedness selection.
//!
//! The tracker reports each hand three times over, in parallel arrays:
//! a handedness category list, normalised image landmarks (0–1, for
//! overlays) and world landmarks (model space, for scale-consistent
//! geometry).  [`HandLandmarkerResult::from_json`] zips them into
//! [`HandDetection`]s and validates every set on the way in.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use serde::Deserialize;

use crate::error::{GeometryError, Result};
use crate::landmarks::LandmarkSet;
use crate::vector::Vec3;

// ════════════════════════════════════════════════════════════════════════════
// Handedness
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Handedness {
    Left,
    Right,
}

impl Handedness {
    pub fn opposite(self) -> Handedness {
        match self {
            Handedness::Left  => Handedness::Right,
            Handedness::Right => Handedness::Left,
        }
    }

    /// The tracker's category name.
    pub fn label(self) -> &'static str {
        match self {
            Handedness::Left  => "Left",
            Handedness::Right => "Right",
        }
    }
}

impl fmt::Display for Handedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Handedness {
    type Err = GeometryError;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Left"  => Ok(Handedness::Left),
            "Right" => Ok(Handedness::Right),
            other   => Err(GeometryError::UnknownHandedness(other.to_string())),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HandDetection / HandLandmarkerResult
// ════════════════════════════════════════════════════════════════════════════

/// One detected hand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HandDetection {
    /// Label as reported by the tracker (mirrored, see [`select_hand`]).
    pub handedness: Handedness,
    /// Model-space landmarks.
    pub world: LandmarkSet,
    /// Normalised image-space landmarks.
    pub image: LandmarkSet,
}

/// Every hand detected in a single frame, in tracker order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HandLandmarkerResult {
    pub hands: Vec<HandDetection>,
}

// Wire shape of the tracker's result object.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawResult {
    #[serde(default)]
    landmarks: Vec<Vec<Vec3>>,
    #[serde(default)]
    world_landmarks: Vec<Vec<Vec3>>,
    #[serde(default, alias = "handednesses")]
    handedness: Vec<Vec<RawCategory>>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawCategory {
    category_name: String,
}

impl HandLandmarkerResult {
    pub fn new(hands: Vec<HandDetection>) -> Self {
        HandLandmarkerResult { hands }
    }

    /// Decode and validate one frame of tracker JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawResult = serde_json::from_str(json)?;

        let (n_hand, n_image, n_world) =
            (raw.handedness.len(), raw.landmarks.len(), raw.world_landmarks.len());
        if n_hand != n_image || n_hand != n_world {
            warn!("rejecting frame: {} handedness, {} image, {} world", n_hand, n_image, n_world);
            return Err(GeometryError::MismatchedDetections {
                handedness: n_hand,
                image:      n_image,
                world:      n_world,
            });
        }

        let hands = raw.handedness.iter()
            .zip(&raw.world_landmarks)
            .zip(&raw.landmarks)
            .enumerate()
            .map(|(i, ((categories, world), image))| -> Result<HandDetection> {
                let top = categories.first().ok_or(GeometryError::MissingHandedness(i))?;
                Ok(HandDetection {
                    handedness: top.category_name.parse()?,
                    world:      LandmarkSet::from_slice(world)?,
                    image:      LandmarkSet::from_slice(image)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        debug!("decoded frame with {} hand(s)", hands.len());
        Ok(HandLandmarkerResult { hands })
    }

    /// Read a JSON frame from disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn is_empty(&self) -> bool {
        self.hands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.hands.len()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Selection
// ════════════════════════════════════════════════════════════════════════════

/// Return the `(world, image)` landmarks of the user's `hand`.
///
/// The tracker labels hands as seen by a mirrored camera, so the user's
/// right hand is the first detection *reported* as `Left` and vice versa.
/// `None` when no detection carries the opposite label.
pub fn select_hand(
    hand: Handedness,
    result: &HandLandmarkerResult,
) -> Option<(LandmarkSet, LandmarkSet)> {
    let (i, found) = result.hands.iter()
        .enumerate()
        .find(|(_, d)| d.handedness != hand)?;
    debug!("{} hand -> detection {} (reported {})", hand, i, found.handedness);
    Some((found.world, found.image))
}

/// [`select_hand`] bound to [`Handedness::Right`].
pub fn right_hand(result: &HandLandmarkerResult) -> Option<(LandmarkSet, LandmarkSet)> {
    select_hand(Handedness::Right, result)
}

/// [`select_hand`] bound to [`Handedness::Left`].
pub fn left_hand(result: &HandLandmarkerResult) -> Option<(LandmarkSet, LandmarkSet)> {
    select_hand(Handedness::Left, result)
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
