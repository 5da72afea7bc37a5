//! # hand_geometry
//!
//! Geometric features over the 21-point hand landmarks reported by a hand
//! tracker, meant to feed a gesture recogniser.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use hand_geometry::{right_hand, FeatureConfig, HandFeatures, HandLandmarkerResult};
//!
//! let frame = HandLandmarkerResult::from_path("frame.json").unwrap();
//! if let Some((world, _image)) = right_hand(&frame) {
//!     let f = HandFeatures::extract(&world, &FeatureConfig::default());
//!     println!("{} fingers up, spread {:.3}", f.extended_count, f.spread);
//! }
//! ```
//!
//! ## Features
//!
//! | Function | Result |
//! |---|---|
//! | [`finger_extension`] | bend score, ≈ sin θ₁ + sin θ₂ (0 = straight) |
//! | [`is_finger_extended`] | score below 0.6 (thumb) / 1.0 (others) |
//! | [`count_extended_fingers`] | 0–5 |
//! | [`finger_extensions`] | five scores, thumb to pinky |
//! | [`finger_spread`] | Σ fingertip distance to the fingertips' centroid |
//! | [`hand_center`] | centroid of wrist, index and pinky knuckles |
//! | [`is_hand_upright`] | wrist → middle knuckle mostly vertical |
//!
//! Use world landmarks for these; image landmarks are for drawing.

pub mod detection;
pub mod error;
pub mod features;
pub mod landmarks;
pub mod vector;

pub use detection::{left_hand, right_hand, select_hand, HandDetection, HandLandmarkerResult, Handedness};
pub use error::{GeometryError, Result};
pub use features::{
    centroid, count_extended_fingers, finger_extension, finger_extensions, finger_spread,
    hand_center, is_finger_extended, is_hand_upright, FeatureConfig, HandFeatures,
};
pub use landmarks::{Finger, LandmarkSet, FINGER_STARTS, LANDMARK_COUNT};
pub use vector::Vec3;
