//! The 21-point hand topology.
//!
//! ```text
//!            8   12  16  20        tips       (start + 3)
//!            7   11  15  19
//!      4     6   10  14  18
//!       3    5    9  13  17        knuckles   (start)
//!        2
//!         1                        thumb start
//!              0                   wrist
//! ```

use std::ops::Index;

use crate::error::{GeometryError, Result};
use crate::vector::Vec3;

/// Number of landmarks the tracker reports per hand.
pub const LANDMARK_COUNT: usize = 21;

/// Landmark index of the wrist.
pub const WRIST: usize = 0;

/// First landmark of each finger, thumb to pinky.
pub const FINGER_STARTS: [usize; 5] = [1, 5, 9, 13, 17];

// ════════════════════════════════════════════════════════════════════════════
// Finger
// ════════════════════════════════════════════════════════════════════════════

/// One of the five fingers, in [`FINGER_STARTS`] order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Finger {
    Thumb,
    Index,
    Middle,
    Ring,
    Pinky,
}

impl Finger {
    pub const ALL: [Finger; 5] = [
        Finger::Thumb,
        Finger::Index,
        Finger::Middle,
        Finger::Ring,
        Finger::Pinky,
    ];

    /// Landmark index of the finger's base joint.
    pub fn start_index(self) -> usize {
        FINGER_STARTS[self as usize]
    }

    /// Landmark index of the fingertip.
    pub fn tip_index(self) -> usize {
        self.start_index() + 3
    }

    /// Inverse of [`Finger::start_index`].
    pub fn from_start_index(index: usize) -> Option<Finger> {
        FINGER_STARTS
            .iter()
            .position(|&s| s == index)
            .map(|i| Finger::ALL[i])
    }

    pub fn name(self) -> &'static str {
        match self {
            Finger::Thumb  => "thumb",
            Finger::Index  => "index",
            Finger::Middle => "middle",
            Finger::Ring   => "ring",
            Finger::Pinky  => "pinky",
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// LandmarkSet
// ════════════════════════════════════════════════════════════════════════════

/// Exactly [`LANDMARK_COUNT`] points for one hand.
///
/// The length is part of the type, so every `start + 3` lookup made by the
/// feature functions is in bounds.  Build one with [`LandmarkSet::new`] or
/// the checked [`LandmarkSet::from_slice`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LandmarkSet {
    points: [Vec3; LANDMARK_COUNT],
}

impl LandmarkSet {
    pub fn new(points: [Vec3; LANDMARK_COUNT]) -> Self {
        LandmarkSet { points }
    }

    /// Copy `points` into a set, failing unless there are exactly 21.
    pub fn from_slice(points: &[Vec3]) -> Result<Self> {
        let points: [Vec3; LANDMARK_COUNT] =
            points.try_into().map_err(|_| GeometryError::LandmarkCount {
                expected: LANDMARK_COUNT,
                actual:   points.len(),
            })?;
        Ok(LandmarkSet { points })
    }

    pub fn points(&self) -> &[Vec3; LANDMARK_COUNT] {
        &self.points
    }

    pub fn wrist(&self) -> Vec3 {
        self.points[WRIST]
    }

    /// The four joints of `finger`, base to tip.
    pub fn finger_joints(&self, finger: Finger) -> [Vec3; 4] {
        let s = finger.start_index();
        [self.points[s], self.points[s + 1], self.points[s + 2], self.points[s + 3]]
    }

    pub fn tip(&self, finger: Finger) -> Vec3 {
        self.points[finger.tip_index()]
    }

    /// All five fingertips, thumb to pinky.
    pub fn tips(&self) -> [Vec3; 5] {
        Finger::ALL.map(|f| self.tip(f))
    }
}

impl Index<usize> for LandmarkSet {
    type Output = Vec3;
    fn index(&self, i: usize) -> &Vec3 {
        &self.points[i]
    }
}

impl TryFrom<Vec<Vec3>> for LandmarkSet {
    type Error = GeometryError;
    fn try_from(points: Vec<Vec3>) -> Result<Self> {
        LandmarkSet::from_slice(&points)
    }
}

impl TryFrom<&[Vec3]> for LandmarkSet {
    type Error = GeometryError;
    fn try_from(points: &[Vec3]) -> Result<Self> {
        LandmarkSet::from_slice(points)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
