//! 3D segments and the infinite lines through them.

use nalgebra::Vector3;

use super::types::Vec3Ext;
use crate::cfg::{DET_EPS, DIST_EPS};

/// 3D segment `P1 → P2`, also used as an infinite line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line3 {
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
}

impl Line3 {
    #[inline]
    pub fn new(p1: Vector3<f64>, p2: Vector3<f64>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }
    #[inline]
    pub fn direction(&self) -> Vector3<f64> {
        self.p2 - self.p1
    }
    #[inline]
    pub fn unit_direction(&self) -> Vector3<f64> {
        self.direction().safe_normalize()
    }
    #[inline]
    pub fn midpoint(&self) -> Vector3<f64> {
        (self.p1 + self.p2) * 0.5
    }
    #[inline]
    pub fn fraction_point(&self, f: f64) -> Vector3<f64> {
        self.p1 + self.direction() * f
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
    #[inline]
    pub fn translated(&self, offset: Vector3<f64>) -> Self {
        Self::new(self.p1 + offset, self.p2 + offset)
    }

    /// Line parameter of the projection of `p` (0 for a degenerate line).
    pub fn parameter_of(&self, p: Vector3<f64>) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.p1).dot(&d) / len2
    }

    /// Closest point of the segment to `p`.
    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        self.fraction_point(self.parameter_of(p).clamp(0.0, 1.0))
    }

    pub fn distance_to_point(&self, p: Vector3<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    pub fn is_point_on_line(&self, p: Vector3<f64>) -> bool {
        self.distance_to_point(p) <= DIST_EPS
    }

    /// Mutually closest points of the two infinite lines, `(on self, on other)`.
    ///
    /// `None` when the lines are parallel or either is degenerate.
    pub fn closest_approach(&self, other: &Line3) -> Option<(Vector3<f64>, Vector3<f64>)> {
        let (d1, d2) = (self.direction(), other.direction());
        let r = self.p1 - other.p1;
        let (a, b, e) = (d1.dot(&d1), d1.dot(&d2), d2.dot(&d2));
        let (c, f) = (d1.dot(&r), d2.dot(&r));
        let denom = a * e - b * b;
        if denom <= DET_EPS * a * e || a == 0.0 || e == 0.0 {
            return None;
        }
        let s = (b * f - c * e) / denom;
        let t = (a * f - b * c) / denom;
        Some((self.fraction_point(s), other.fraction_point(t)))
    }
}
