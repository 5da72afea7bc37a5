//! Finger and palm features derived from a single [`LandmarkSet`].
//!
//! # Extension score
//!
//! Each finger is three bones between four joints.  With every bone
//! normalised, `|b₂ × b₁|` is the sine of the bend at the first joint and
//! `|b₃ × b₂|` the sine at the second, so
//!
//! ```text
//! score = sin θ₁ + sin θ₂        0 = straight,  2 = both joints at 90°
//! ```
//!
//! A finger counts as extended when its score is below a per-finger
//! threshold ([`FeatureConfig`]).  The thumb bends sideways even when open,
//! hence its tighter threshold.

use log::debug;
use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::landmarks::{Finger, LandmarkSet, WRIST};
use crate::vector::{cross, distance, length, normalized, Vec3};

/// Landmarks averaged by [`hand_center`]: wrist, index and pinky knuckles.
pub const PALM_POINTS: [usize; 3] = [WRIST, 5, 17];

/// Landmark that, with the wrist, gives the hand's main axis.
pub const MIDDLE_KNUCKLE: usize = 9;

// ════════════════════════════════════════════════════════════════════════════
// FeatureConfig
// ════════════════════════════════════════════════════════════════════════════

/// Extension thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureConfig {
    /// Thumb is extended below this score (default: 0.6)
    pub thumb_threshold: f32,
    /// Every other finger is extended below this score (default: 1.0)
    pub finger_threshold: f32,
}

impl Default for FeatureConfig {
    fn default() -> Self {
        FeatureConfig {
            thumb_threshold:  0.6,
            finger_threshold: 1.0,
        }
    }
}

impl FeatureConfig {
    pub fn threshold(&self, finger: Finger) -> f32 {
        match finger {
            Finger::Thumb => self.thumb_threshold,
            _             => self.finger_threshold,
        }
    }

    pub fn is_finger_extended(&self, landmarks: &LandmarkSet, finger: Finger) -> bool {
        finger_extension(landmarks, finger) < self.threshold(finger)
    }

    pub fn extended_fingers(&self, landmarks: &LandmarkSet) -> [bool; 5] {
        Finger::ALL.map(|f| self.is_finger_extended(landmarks, f))
    }

    pub fn count_extended_fingers(&self, landmarks: &LandmarkSet) -> usize {
        self.extended_fingers(landmarks).iter().filter(|&&e| e).count()
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Palm
// ════════════════════════════════════════════════════════════════════════════

/// Arithmetic mean of `points` on all three axes.
pub fn centroid(points: &[Vec3]) -> Result<Vec3> {
    if points.is_empty() {
        return Err(GeometryError::EmptyPoints);
    }
    Ok(mean(points))
}

fn mean(points: &[Vec3]) -> Vec3 {
    let sum = points.iter().fold(Vec3::ZERO, |acc, &p| acc + p);
    (1.0 / points.len() as f32) * sum
}

/// Stable palm reference point.
pub fn hand_center(landmarks: &LandmarkSet) -> Vec3 {
    mean(&PALM_POINTS.map(|i| landmarks[i]))
}

/// True when wrist → middle knuckle runs more vertically than
/// horizontally in the x/y plane.
pub fn is_hand_upright(landmarks: &LandmarkSet) -> bool {
    let axis = landmarks[MIDDLE_KNUCKLE] - landmarks[WRIST];
    axis.y.abs() > axis.x.abs()
}

// ════════════════════════════════════════════════════════════════════════════
// Fingers
// ════════════════════════════════════════════════════════════════════════════

/// Bend score of `finger`: `|b₂ × b₁| + |b₃ × b₂|` over its unit bones.
pub fn finger_extension(landmarks: &LandmarkSet, finger: Finger) -> f32 {
    let [j0, j1, j2, j3] = landmarks.finger_joints(finger);
    let first  = normalized(j1 - j0);
    let second = normalized(j2 - j1);
    let third  = normalized(j3 - j2);

    let first_joint  = cross(second, first);
    let second_joint = cross(third, second);

    length(first_joint) + length(second_joint)
}

/// [`FeatureConfig::is_finger_extended`] with the default thresholds.
pub fn is_finger_extended(landmarks: &LandmarkSet, finger: Finger) -> bool {
    FeatureConfig::default().is_finger_extended(landmarks, finger)
}

/// Number of extended fingers (0–5) with the default thresholds.
pub fn count_extended_fingers(landmarks: &LandmarkSet) -> usize {
    FeatureConfig::default().count_extended_fingers(landmarks)
}

/// Extension scores, thumb to pinky.
pub fn finger_extensions(landmarks: &LandmarkSet) -> [f32; 5] {
    Finger::ALL.map(|f| finger_extension(landmarks, f))
}

/// Sum of distances from each fingertip to the fingertips' centroid.
pub fn finger_spread(landmarks: &LandmarkSet) -> f32 {
    let tips = landmarks.tips();
    let center = mean(&tips);
    tips.iter().map(|&t| distance(t, center)).sum()
}

// ════════════════════════════════════════════════════════════════════════════
// HandFeatures
// ════════════════════════════════════════════════════════════════════════════

/// All features of one hand, ready to hand to a gesture classifier.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct HandFeatures {
    /// Extension scores, thumb to pinky.
    pub extensions:     [f32; 5],
    /// Per-finger extended flags, thumb to pinky.
    pub extended:       [bool; 5],
    pub extended_count: usize,
    pub spread:         f32,
    pub center:         Vec3,
    pub upright:        bool,
}

impl HandFeatures {
    pub fn extract(landmarks: &LandmarkSet, config: &FeatureConfig) -> Self {
        let extended = config.extended_fingers(landmarks);
        let features = HandFeatures {
            extensions:     finger_extensions(landmarks),
            extended,
            extended_count: extended.iter().filter(|&&e| e).count(),
            spread:         finger_spread(landmarks),
            center:         hand_center(landmarks),
            upright:        is_hand_upright(landmarks),
        };
        debug!(
            "features: {} extended, spread {:.3}, upright {}",
            features.extended_count, features.spread, features.upright
        );
        features
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
