//! Minimal 3D vector kit used by every landmark computation.
//!
//! All operations take [`Vec3`] by value and return fresh values; nothing
//! here mutates its inputs.

use std::ops::{Add, Mul, Neg, Sub};

use serde::{Deserialize, Serialize};

// ════════════════════════════════════════════════════════════════════════════
// Vec3
// ════════════════════════════════════════════════════════════════════════════

/// A point or direction in 3D space.
///
/// Deserialises from the tracker's `{ "x": .., "y": .., "z": .. }` objects;
/// unknown fields such as `visibility` are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vec3 { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f32 {
        dot(self, other)
    }

    pub fn cross(self, other: Vec3) -> Vec3 {
        cross(self, other)
    }

    pub fn length(self) -> f32 {
        length(self)
    }

    pub fn normalized(self) -> Vec3 {
        normalized(self)
    }

    pub fn try_normalized(self) -> Option<Vec3> {
        try_normalized(self)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vec3 {
    type Output = Vec3;
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;
    fn sub(self, rhs: Vec3) -> Vec3 {
        sub(self, rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        scale(self, rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;
    fn neg(self) -> Vec3 {
        scale(-1.0, self)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Vec3 { x, y, z }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Free functions
// ════════════════════════════════════════════════════════════════════════════

/// Component-wise `a − b`.
pub fn sub(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(a.x - b.x, a.y - b.y, a.z - b.z)
}

/// Component-wise `r · v`.
pub fn scale(r: f32, v: Vec3) -> Vec3 {
    Vec3::new(r * v.x, r * v.y, r * v.z)
}

pub fn dot(a: Vec3, b: Vec3) -> f32 {
    a.x * b.x + a.y * b.y + a.z * b.z
}

pub fn length(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Unit vector in the direction of `v`.
///
/// `v` must be non-zero: a zero vector divides by zero and every component
/// of the result is NaN.  Use [`try_normalized`] when that can happen.
pub fn normalized(v: Vec3) -> Vec3 {
    scale(1.0 / length(v), v)
}

/// Like [`normalized`] but `None` for a zero-length (or non-finite) input.
pub fn try_normalized(v: Vec3) -> Option<Vec3> {
    let len = length(v);
    if len > 0.0 && len.is_finite() {
        Some(scale(1.0 / len, v))
    } else {
        None
    }
}

/// Right-handed cross product `a × b`.
pub fn cross(a: Vec3, b: Vec3) -> Vec3 {
    Vec3::new(
        a.y * b.z - a.z * b.y,
        a.z * b.x - a.x * b.z,
        a.x * b.y - a.y * b.x,
    )
}

/// Squared Euclidean distance over all three axes.
pub fn distance_squared(a: Vec3, b: Vec3) -> f32 {
    let d = sub(a, b);
    dot(d, d)
}

pub fn distance(a: Vec3, b: Vec3) -> f32 {
    distance_squared(a, b).sqrt()
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn close(a: f32, b: f32) -> bool { (a - b).abs() < EPS }

    fn close_vec(a: Vec3, b: Vec3) -> bool {
        close(a.x, b.x) && close(a.y, b.y) && close(a.z, b.z)
    }

    fn samples() -> Vec<Vec3> {
        vec![
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.3, -1.2, 2.5),
            Vec3::new(-0.04, 0.07, 0.01),
            Vec3::new(3.0, 4.0, 12.0),
        ]
    }

    #[test]
    fn sub_and_scale_componentwise() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 4.0);
        assert_eq!(sub(a, b), Vec3::new(0.5, 3.0, -1.0));
        assert_eq!(scale(2.0, a), Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(a - b, sub(a, b));
        assert_eq!(2.0 * a, scale(2.0, a));
    }

    #[test]
    fn length_of_pythagorean_triple() {
        assert!(close(length(Vec3::new(3.0, 4.0, 12.0)), 13.0));
    }

    #[test]
    fn length_scales_linearly() {
        for v in samples() {
            assert!(close(length(scale(2.0, v)), 2.0 * length(v)));
        }
    }

    #[test]
    fn normalized_has_unit_length() {
        for v in samples() {
            let n = normalized(v);
            assert!(close(length(n), 1.0));
            assert!(close(dot(n, n), 1.0));
        }
    }

    #[test]
    fn normalizing_zero_is_not_finite() {
        assert!(!normalized(Vec3::ZERO).is_finite());
        assert_eq!(try_normalized(Vec3::ZERO), None);
        assert!(try_normalized(Vec3::new(0.0, 2.0, 0.0)).is_some());
    }

    #[test]
    fn cross_of_basis_vectors() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        assert_eq!(cross(x, y), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn cross_is_anticommutative() {
        let vs = samples();
        for a in &vs {
            for b in &vs {
                assert!(close_vec(cross(*a, *b), scale(-1.0, cross(*b, *a))));
            }
        }
    }

    #[test]
    fn distance_uses_every_axis() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(0.0, 0.0, 2.0);
        assert!(close(distance_squared(a, b), 4.0));
        assert!(close(distance(a, b), 2.0));
    }

    #[test]
    fn deserialises_tracker_landmark() {
        let v: Vec3 = serde_json::from_str(r#"{"x":0.5,"y":0.25,"z":-0.1,"visibility":0}"#)
            .unwrap();
        assert_eq!(v, Vec3::new(0.5, 0.25, -0.1));
    }
}
