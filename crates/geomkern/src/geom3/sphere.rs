//! Spheres and sphere wedges.
//!
//! Invariants
//! - `Sphere3::radius > 0` (checked by `new`).
//! - `SphereWedge3`: `inner_radius <= outer_radius` and
//!   `min_elevation <= max_elevation` (the constructor orders both pairs).

use std::f64::consts::PI;

use nalgebra::Vector3;

use super::line::Line3;
use super::types::Vec3Ext;
use crate::cfg::{DIST_EPS, PARAM_EPS};
use crate::error::{GeomError, Result};
use crate::scalar::is_angle_in_range_rad_eps;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sphere3 {
    center: Vector3<f64>,
    radius: f64,
}

impl Sphere3 {
    pub fn new(center: Vector3<f64>, radius: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeomError::InvalidRadius(radius));
        }
        Ok(Self { center, radius })
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
    pub fn surface_area(&self) -> f64 {
        4.0 * PI * self.radius * self.radius
    }
    #[inline]
    pub fn volume(&self) -> f64 {
        4.0 / 3.0 * PI * self.radius.powi(3)
    }

    /// Inclusive containment.
    #[inline]
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        self.center.distance_to(&p) <= self.radius + DIST_EPS
    }

    /// Surface point in the Z-up azimuth/elevation convention.
    #[inline]
    pub fn point_at_az_el(&self, azimuth: f64, elevation: f64) -> Vector3<f64> {
        self.center.offset_az_el(azimuth, elevation, self.radius)
    }

    /// Line parameters where `|P1 + tD − C|² = r²`, ascending; a tangent
    /// (discriminant within tolerance) gives one value.
    fn line_params(&self, line: &Line3) -> Vec<f64> {
        let len = line.length();
        if len == 0.0 {
            return Vec::new();
        }
        let u = line.direction() / len;
        let f = line.p1 - self.center;
        let b = f.dot(&u);
        let c = f.norm_squared() - self.radius * self.radius;
        let disc = b * b - c;
        let tol = DIST_EPS * self.radius.max(1.0);
        if disc < -tol {
            Vec::new()
        } else if disc <= tol {
            vec![-b / len]
        } else {
            let root = disc.sqrt();
            vec![(-b - root) / len, (-b + root) / len]
        }
    }

    /// Points where the infinite line through `line` meets the surface.
    pub fn intersect_line(&self, line: &Line3) -> Vec<Vector3<f64>> {
        self.line_params(line)
            .into_iter()
            .map(|t| line.fraction_point(t))
            .collect()
    }

    /// Points where the segment meets the surface.
    pub fn intersect_segment(&self, line: &Line3) -> Vec<Vector3<f64>> {
        self.line_params(line)
            .into_iter()
            .filter(|&t| t >= -PARAM_EPS && t <= 1.0 + PARAM_EPS)
            .map(|t| line.fraction_point(t))
            .collect()
    }
}

/// Shell region between two concentric spheres, bounded by an azimuth sweep
/// and an elevation band.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SphereWedge3 {
    pub center: Vector3<f64>,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub start_azimuth: f64,
    pub delta_azimuth: f64,
    pub min_elevation: f64,
    pub max_elevation: f64,
}

impl SphereWedge3 {
    pub fn new(
        center: Vector3<f64>,
        radii: (f64, f64),
        start_azimuth: f64,
        delta_azimuth: f64,
        elevations: (f64, f64),
    ) -> Self {
        Self {
            center,
            inner_radius: radii.0.min(radii.1),
            outer_radius: radii.0.max(radii.1),
            start_azimuth,
            delta_azimuth,
            min_elevation: elevations.0.min(elevations.1),
            max_elevation: elevations.0.max(elevations.1),
        }
    }

    /// Radius, azimuth and elevation tests, all inclusive.
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        let v = p - self.center;
        let d = v.norm();
        if d > self.outer_radius + DIST_EPS || d < self.inner_radius - DIST_EPS {
            return false;
        }
        if d <= DIST_EPS {
            return true;
        }
        let el = v.elevation();
        // on the vertical axis the azimuth is undefined; only elevation counts
        let on_axis = v.x.hypot(v.y) <= DIST_EPS;
        (on_axis || is_angle_in_range_rad_eps(v.azimuth(), self.start_azimuth, self.delta_azimuth, PARAM_EPS))
            && el >= self.min_elevation - PARAM_EPS
            && el <= self.max_elevation + PARAM_EPS
    }
}
