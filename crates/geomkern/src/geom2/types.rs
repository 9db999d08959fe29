//! 2D vector helpers and the polar offset representation.
//!
//! - `Vec2Ext`: kernel operations on `nalgebra::Vector2<f64>` (points and
//!   offsets share the type; meaning comes from the call site).
//! - `PolarOffset2`: `(angle, distance)`, 0 = east, positive anti-clockwise.

use nalgebra::Vector2;

use crate::error::{GeomError, Result};
use crate::scalar::normalize_rad_pi;

/// Kernel operations on 2D vectors.
pub trait Vec2Ext {
    /// Unit vector, or the zero vector when the length is zero or non-finite.
    fn safe_normalize(&self) -> Vector2<f64>;
    /// Rotated 90° anti-clockwise.
    fn left_normal(&self) -> Vector2<f64>;
    /// Scalar cross product `self.x * other.y - self.y * other.x`.
    fn cross2(&self, other: &Vector2<f64>) -> f64;
    /// `atan2(y, x)` in `(-π, π]`.
    fn heading(&self) -> f64;
    fn rotated_by(&self, angle: f64) -> Vector2<f64>;
    /// Point reached by moving `distance` along `angle` from `self`.
    fn offset_polar(&self, angle: f64, distance: f64) -> Vector2<f64>;
    /// Shortest signed turn from `self`'s heading to `other`'s, in `[-π, π)`.
    fn signed_angle_to(&self, other: &Vector2<f64>) -> f64;
    fn distance_to(&self, other: &Vector2<f64>) -> f64;
}

impl Vec2Ext for Vector2<f64> {
    #[inline]
    fn safe_normalize(&self) -> Vector2<f64> {
        let n = self.norm();
        if n > 0.0 && n.is_finite() {
            self / n
        } else {
            tracing::trace!(x = self.x, y = self.y, "normalize fallback to zero vector");
            Vector2::zeros()
        }
    }
    #[inline]
    fn left_normal(&self) -> Vector2<f64> {
        Vector2::new(-self.y, self.x)
    }
    #[inline]
    fn cross2(&self, other: &Vector2<f64>) -> f64 {
        self.x * other.y - self.y * other.x
    }
    #[inline]
    fn heading(&self) -> f64 {
        self.y.atan2(self.x)
    }
    #[inline]
    fn rotated_by(&self, angle: f64) -> Vector2<f64> {
        let (s, c) = angle.sin_cos();
        Vector2::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }
    #[inline]
    fn offset_polar(&self, angle: f64, distance: f64) -> Vector2<f64> {
        self + PolarOffset2::new(angle, distance).to_vector()
    }
    #[inline]
    fn signed_angle_to(&self, other: &Vector2<f64>) -> f64 {
        normalize_rad_pi(other.heading() - self.heading())
    }
    #[inline]
    fn distance_to(&self, other: &Vector2<f64>) -> f64 {
        (other - self).norm()
    }
}

/// Arithmetic mean of a point set. Errors on an empty slice.
pub fn average_of(points: &[Vector2<f64>]) -> Result<Vector2<f64>> {
    if points.is_empty() {
        return Err(GeomError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }
    let sum = points.iter().fold(Vector2::zeros(), |acc, p| acc + p);
    Ok(sum / points.len() as f64)
}

/// Polar form of a 2D offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarOffset2 {
    /// Radians, 0 = +X, positive anti-clockwise.
    pub angle: f64,
    pub distance: f64,
}

impl PolarOffset2 {
    #[inline]
    pub fn new(angle: f64, distance: f64) -> Self {
        Self { angle, distance }
    }

    /// Polar form of `v`; the zero vector maps to `(0, 0)`.
    #[inline]
    pub fn from_vector(v: Vector2<f64>) -> Self {
        Self {
            angle: v.heading(),
            distance: v.norm(),
        }
    }

    #[inline]
    pub fn to_vector(&self) -> Vector2<f64> {
        let (s, c) = self.angle.sin_cos();
        Vector2::new(c * self.distance, s * self.distance)
    }

    /// Same offset with a non-negative distance and angle in `[-π, π)`.
    pub fn normalized(&self) -> Self {
        let (angle, distance) = if self.distance < 0.0 {
            (self.angle + std::f64::consts::PI, -self.distance)
        } else {
            (self.angle, self.distance)
        };
        Self {
            angle: normalize_rad_pi(angle),
            distance,
        }
    }
}
