//! Parametric 2D curves over `t ∈ [0, 1]` and the quadratic/cubic Béziers.
//!
//! `Curve2` supplies tangent angle, curvature and polyline sampling from the
//! three closed-form evaluations each curve provides.

use nalgebra::Vector2;

use super::polyline::Polyline2;
use super::types::Vec2Ext;
use crate::cfg::DET_EPS;

/// A parametric 2D curve.
pub trait Curve2 {
    /// Position at `t`.
    fn point_at(&self, t: f64) -> Vector2<f64>;
    /// First derivative (velocity) at `t`.
    fn first_derivative(&self, t: f64) -> Vector2<f64>;
    /// Second derivative (acceleration) at `t`.
    fn second_derivative(&self, t: f64) -> Vector2<f64>;

    /// Heading of the first derivative.
    fn tangent_angle(&self, t: f64) -> f64 {
        self.first_derivative(t).heading()
    }

    /// `|x'y'' − y'x''| / (x'² + y'²)^1.5`, zero where the speed vanishes.
    fn curvature(&self, t: f64) -> f64 {
        let d1 = self.first_derivative(t);
        let d2 = self.second_derivative(t);
        let denom = d1.norm_squared().powf(1.5);
        if denom <= DET_EPS || !denom.is_finite() {
            return 0.0;
        }
        d1.cross2(&d2).abs() / denom
    }

    /// `segments + 1` evenly spaced samples (at least two).
    fn to_polyline(&self, segments: usize) -> Polyline2 {
        let n = segments.max(1);
        Polyline2::new(
            (0..=n)
                .map(|i| self.point_at(i as f64 / n as f64))
                .collect(),
        )
    }
}

#[inline]
fn clamp_t(t: f64) -> f64 {
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// `B(t) = (1−t)²P₀ + 2(1−t)tP₁ + t²P₂`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier2 {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl QuadraticBezier2 {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p0, p1, p2 }
    }
}

impl Curve2 for QuadraticBezier2 {
    fn point_at(&self, t: f64) -> Vector2<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        self.p0 * (s * s) + self.p1 * (2.0 * s * t) + self.p2 * (t * t)
    }

    fn first_derivative(&self, t: f64) -> Vector2<f64> {
        let t = clamp_t(t);
        (self.p1 - self.p0) * (2.0 * (1.0 - t)) + (self.p2 - self.p1) * (2.0 * t)
    }

    fn second_derivative(&self, _t: f64) -> Vector2<f64> {
        (self.p2 - self.p1 * 2.0 + self.p0) * 2.0
    }
}

/// `B(t) = (1−t)³P₀ + 3(1−t)²tP₁ + 3(1−t)t²P₂ + t³P₃`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier2 {
    pub p0: Vector2<f64>,
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
    pub p3: Vector2<f64>,
}

impl CubicBezier2 {
    #[inline]
    pub fn new(p0: Vector2<f64>, p1: Vector2<f64>, p2: Vector2<f64>, p3: Vector2<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve2 for CubicBezier2 {
    fn point_at(&self, t: f64) -> Vector2<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.p1 * (3.0 * s * s * t)
            + self.p2 * (3.0 * s * t * t)
            + self.p3 * (t * t * t)
    }

    fn first_derivative(&self, t: f64) -> Vector2<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    fn second_derivative(&self, t: f64) -> Vector2<f64> {
        let t = clamp_t(t);
        (self.p2 - self.p1 * 2.0 + self.p0) * (6.0 * (1.0 - t))
            + (self.p3 - self.p2 * 2.0 + self.p1) * (6.0 * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn endpoints_exact() {
        let q = QuadraticBezier2::new(vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]);
        assert_eq!(q.point_at(0.0), q.p0);
        assert_eq!(q.point_at(1.0), q.p2);
        let c = CubicBezier2::new(
            vector![0.0, 0.0],
            vector![1.0, 2.0],
            vector![3.0, 2.0],
            vector![4.0, 0.0],
        );
        assert_eq!(c.point_at(0.0), c.p0);
        assert_eq!(c.point_at(1.0), c.p3);
    }

    #[test]
    fn quadratic_apex() {
        let q = QuadraticBezier2::new(vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]);
        assert!((q.point_at(0.5) - vector![1.0, 1.0]).norm() < 1e-12);
        // horizontal tangent at the apex
        assert!(q.tangent_angle(0.5).abs() < 1e-12);
        // x' = 2, y'' = -8  →  κ = 16 / 8 = 2
        assert!((q.curvature(0.5) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn straight_cubic_has_no_curvature() {
        let c = CubicBezier2::new(
            vector![0.0, 0.0],
            vector![1.0, 1.0],
            vector![2.0, 2.0],
            vector![3.0, 3.0],
        );
        assert!(c.curvature(0.3).abs() < 1e-12);
        // coincident controls: zero speed, defined zero curvature
        let p = vector![1.0, 1.0];
        assert_eq!(CubicBezier2::new(p, p, p, p).curvature(0.5), 0.0);
    }

    #[test]
    fn sampling() {
        let q = QuadraticBezier2::new(vector![0.0, 0.0], vector![1.0, 2.0], vector![2.0, 0.0]);
        let pl = q.to_polyline(8);
        assert_eq!(pl.points.len(), 9);
        assert_eq!(pl.points[8], q.p2);
    }
}
