//! Parametric 3D curves over `t ∈ [0, 1]`: quadratic/cubic Béziers and
//! azimuth/elevation arcs on a sphere.

use nalgebra::Vector3;

use super::polyline::Polyline3;
use super::types::Vec3Ext;
use crate::cfg::DET_EPS;
use crate::error::{GeomError, Result};

pub trait Curve3 {
    fn point_at(&self, t: f64) -> Vector3<f64>;
    fn first_derivative(&self, t: f64) -> Vector3<f64>;
    fn second_derivative(&self, t: f64) -> Vector3<f64>;

    /// Unit tangent (zero where the speed vanishes).
    fn tangent(&self, t: f64) -> Vector3<f64> {
        self.first_derivative(t).safe_normalize()
    }

    /// `|r' × r''| / |r'|³`, zero where the speed vanishes.
    fn curvature(&self, t: f64) -> f64 {
        let d1 = self.first_derivative(t);
        let d2 = self.second_derivative(t);
        let denom = d1.norm().powi(3);
        if denom <= DET_EPS || !denom.is_finite() {
            return 0.0;
        }
        d1.cross(&d2).norm() / denom
    }

    fn to_polyline(&self, segments: usize) -> Polyline3 {
        let n = segments.max(1);
        Polyline3::new((0..=n).map(|i| self.point_at(i as f64 / n as f64)).collect())
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

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct QuadraticBezier3 {
    pub p0: Vector3<f64>,
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
}

impl QuadraticBezier3 {
    #[inline]
    pub fn new(p0: Vector3<f64>, p1: Vector3<f64>, p2: Vector3<f64>) -> Self {
        Self { p0, p1, p2 }
    }
}

impl Curve3 for QuadraticBezier3 {
    fn point_at(&self, t: f64) -> Vector3<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        self.p0 * (s * s) + self.p1 * (2.0 * s * t) + self.p2 * (t * t)
    }

    fn first_derivative(&self, t: f64) -> Vector3<f64> {
        let t = clamp_t(t);
        (self.p1 - self.p0) * (2.0 * (1.0 - t)) + (self.p2 - self.p1) * (2.0 * t)
    }

    fn second_derivative(&self, _t: f64) -> Vector3<f64> {
        (self.p2 - self.p1 * 2.0 + self.p0) * 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier3 {
    pub p0: Vector3<f64>,
    pub p1: Vector3<f64>,
    pub p2: Vector3<f64>,
    pub p3: Vector3<f64>,
}

impl CubicBezier3 {
    #[inline]
    pub fn new(p0: Vector3<f64>, p1: Vector3<f64>, p2: Vector3<f64>, p3: Vector3<f64>) -> Self {
        Self { p0, p1, p2, p3 }
    }
}

impl Curve3 for CubicBezier3 {
    fn point_at(&self, t: f64) -> Vector3<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        self.p0 * (s * s * s)
            + self.p1 * (3.0 * s * s * t)
            + self.p2 * (3.0 * s * t * t)
            + self.p3 * (t * t * t)
    }

    fn first_derivative(&self, t: f64) -> Vector3<f64> {
        let t = clamp_t(t);
        let s = 1.0 - t;
        (self.p1 - self.p0) * (3.0 * s * s)
            + (self.p2 - self.p1) * (6.0 * s * t)
            + (self.p3 - self.p2) * (3.0 * t * t)
    }

    fn second_derivative(&self, t: f64) -> Vector3<f64> {
        let t = clamp_t(t);
        (self.p2 - self.p1 * 2.0 + self.p0) * (6.0 * (1.0 - t))
            + (self.p3 - self.p2 * 2.0 + self.p1) * (6.0 * t)
    }
}

/// Arc swept across a sphere of `radius` around `center`, with azimuth and
/// elevation both interpolated linearly in the curve parameter.
///
/// Z-up: azimuth from +X in the XY plane, elevation from the XY plane
/// toward +Z. A pure elevation sweep traces a meridian (a great circle); a
/// pure azimuth sweep traces a parallel at the fixed elevation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc3 {
    center: Vector3<f64>,
    radius: f64,
    start_azimuth: f64,
    delta_azimuth: f64,
    start_elevation: f64,
    delta_elevation: f64,
}

impl Arc3 {
    /// Errors with `InvalidRadius` unless `radius` is finite and positive.
    pub fn new(
        center: Vector3<f64>,
        radius: f64,
        (start_azimuth, delta_azimuth): (f64, f64),
        (start_elevation, delta_elevation): (f64, f64),
    ) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeomError::InvalidRadius(radius));
        }
        Ok(Self {
            center,
            radius,
            start_azimuth,
            delta_azimuth,
            start_elevation,
            delta_elevation,
        })
    }

    #[inline]
    pub fn center(&self) -> Vector3<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }
    #[inline]
    pub fn start_azimuth(&self) -> f64 {
        self.start_azimuth
    }
    #[inline]
    pub fn delta_azimuth(&self) -> f64 {
        self.delta_azimuth
    }
    #[inline]
    pub fn start_elevation(&self) -> f64 {
        self.start_elevation
    }
    #[inline]
    pub fn delta_elevation(&self) -> f64 {
        self.delta_elevation
    }
    #[inline]
    pub fn end_azimuth(&self) -> f64 {
        self.start_azimuth + self.delta_azimuth
    }
    #[inline]
    pub fn end_elevation(&self) -> f64 {
        self.start_elevation + self.delta_elevation
    }

    #[inline]
    pub fn start_point(&self) -> Vector3<f64> {
        self.point_at(0.0)
    }
    #[inline]
    pub fn end_point(&self) -> Vector3<f64> {
        self.point_at(1.0)
    }

    /// `(azimuth, elevation)` at `t`; extrapolates outside `[0, 1]`.
    #[inline]
    pub fn angles_at(&self, t: f64) -> (f64, f64) {
        (
            self.start_azimuth + self.delta_azimuth * t,
            self.start_elevation + self.delta_elevation * t,
        )
    }

    /// Arc length, `∫ r √(δe² + cos²e · δa²) dt` by composite Simpson.
    ///
    /// Exact for single-axis sweeps.
    pub fn length(&self) -> f64 {
        const STEPS: usize = 64;
        let speed = |t: f64| {
            let (_, e) = self.angles_at(t);
            let ce = e.cos();
            self.radius * (self.delta_elevation.powi(2) + (ce * self.delta_azimuth).powi(2)).sqrt()
        };
        let h = 1.0 / STEPS as f64;
        let inner: f64 = (1..STEPS)
            .map(|i| {
                let w = if i % 2 == 1 { 4.0 } else { 2.0 };
                w * speed(i as f64 * h)
            })
            .sum();
        (speed(0.0) + inner + speed(1.0)) * h / 3.0
    }
}

impl Curve3 for Arc3 {
    fn point_at(&self, t: f64) -> Vector3<f64> {
        let (a, e) = self.angles_at(t);
        self.center.offset_az_el(a, e, self.radius)
    }

    fn first_derivative(&self, t: f64) -> Vector3<f64> {
        let (a, e) = self.angles_at(t);
        let (sa, ca) = a.sin_cos();
        let (se, ce) = e.sin_cos();
        let (da, de) = (self.delta_azimuth, self.delta_elevation);
        Vector3::new(
            -se * de * ca - ce * sa * da,
            -se * de * sa + ce * ca * da,
            ce * de,
        ) * self.radius
    }

    fn second_derivative(&self, t: f64) -> Vector3<f64> {
        let (a, e) = self.angles_at(t);
        let (sa, ca) = a.sin_cos();
        let (se, ce) = e.sin_cos();
        let (da, de) = (self.delta_azimuth, self.delta_elevation);
        let sq = da * da + de * de;
        let mixed = 2.0 * se * de * da;
        Vector3::new(
            -ce * ca * sq + mixed * sa,
            -ce * sa * sq - mixed * ca,
            -se * de * de,
        ) * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    #[test]
    fn bezier_endpoints_and_curvature() {
        let q = QuadraticBezier3::new(vector![0.0, 0.0, 0.0], vector![1.0, 2.0, 0.0], vector![2.0, 0.0, 0.0]);
        assert_eq!(q.point_at(0.0), q.p0);
        assert_eq!(q.point_at(1.0), q.p2);
        assert_relative_eq!(q.curvature(0.5), 2.0, epsilon = 1e-12);
        let c = CubicBezier3::new(
            vector![0.0, 0.0, 0.0],
            vector![1.0, 1.0, 1.0],
            vector![2.0, 2.0, 2.0],
            vector![3.0, 3.0, 3.0],
        );
        assert_eq!(c.point_at(1.0), c.p3);
        assert!(c.curvature(0.4).abs() < 1e-12);
        assert_relative_eq!(c.tangent(0.4), vector![1.0, 1.0, 1.0].normalize(), epsilon = 1e-12);
    }

    #[test]
    fn azimuth_sweep_on_the_equator() {
        let arc = Arc3::new(Vector3::zeros(), 2.0, (0.0, FRAC_PI_2), (0.0, 0.0)).unwrap();
        assert_relative_eq!(arc.start_point(), vector![2.0, 0.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(arc.end_point(), vector![0.0, 2.0, 0.0], epsilon = 1e-12);
        assert_relative_eq!(arc.curvature(0.3), 0.5, epsilon = 1e-12);
        assert_relative_eq!(arc.length(), PI, epsilon = 1e-12);
        assert_relative_eq!(arc.first_derivative(0.0), vector![0.0, PI, 0.0], epsilon = 1e-12);
        assert_eq!(arc.to_polyline(8).point_count(), 9);
    }

    #[test]
    fn elevation_only_sweep_follows_a_meridian() {
        let c = vector![1.0, -1.0, 0.5];
        let arc = Arc3::new(c, 3.0, (FRAC_PI_2, 0.0), (0.0, FRAC_PI_4)).unwrap();
        assert_relative_eq!(arc.start_point(), c + vector![0.0, 3.0, 0.0], epsilon = 1e-12);
        let h = 3.0 * FRAC_PI_4.cos();
        assert_relative_eq!(arc.end_point(), c + vector![0.0, h, h], epsilon = 1e-12);
        // every sample stays on the sphere and in the x = c.x meridian plane
        for p in &arc.to_polyline(16).points {
            assert_relative_eq!((p - c).norm(), 3.0, epsilon = 1e-12);
            assert_relative_eq!(p.x, c.x, epsilon = 1e-12);
        }
        assert_relative_eq!(arc.length(), 3.0 * FRAC_PI_4, epsilon = 1e-12);
        // meridians are great circles
        assert_relative_eq!(arc.curvature(0.6), 1.0 / 3.0, epsilon = 1e-12);
    }

    #[test]
    fn parallel_above_the_equator_is_a_small_circle() {
        let el = PI / 3.0;
        let arc = Arc3::new(Vector3::zeros(), 2.0, (0.0, PI), (el, 0.0)).unwrap();
        assert_relative_eq!(arc.curvature(0.25), 1.0 / (2.0 * el.cos()), epsilon = 1e-12);
        assert_relative_eq!(arc.length(), 2.0 * el.cos() * PI, epsilon = 1e-12);
        assert_relative_eq!(arc.start_point().z, 2.0 * el.sin(), epsilon = 1e-12);
    }

    #[test]
    fn mixed_sweep_derivatives_match_differences() {
        let arc = Arc3::new(vector![0.0, 0.0, 1.0], 1.5, (0.3, 1.2), (-0.4, 0.9)).unwrap();
        let (t, h) = (0.4, 1e-5);
        let d1 = (arc.point_at(t + h) - arc.point_at(t - h)) / (2.0 * h);
        assert_relative_eq!(arc.first_derivative(t), d1, epsilon = 1e-8);
        let d2 = (arc.first_derivative(t + h) - arc.first_derivative(t - h)) / (2.0 * h);
        assert_relative_eq!(arc.second_derivative(t), d2, epsilon = 1e-7);
        let (a, e) = arc.angles_at(1.0);
        assert_relative_eq!(a, arc.end_azimuth(), epsilon = 1e-15);
        assert_relative_eq!(e, arc.end_elevation(), epsilon = 1e-15);
    }

    #[test]
    fn arc_rejects_non_positive_radius() {
        assert_eq!(
            Arc3::new(Vector3::zeros(), 0.0, (0.0, 1.0), (0.0, 0.0)),
            Err(GeomError::InvalidRadius(0.0))
        );
        assert!(Arc3::new(Vector3::zeros(), -2.0, (0.0, 1.0), (0.0, 0.0)).is_err());
        assert!(Arc3::new(Vector3::zeros(), f64::NAN, (0.0, 1.0), (0.0, 0.0)).is_err());
    }
}
