//! Planes with an embedded orthonormal 2D frame.
//!
//! `make_plane` orthogonalizes the caller's approximate up vector against the
//! normal (Gram–Schmidt) to get the local Y axis, then takes
//! `x_axis = y_axis × normal`, so `(x_axis, y_axis, normal)` is right-handed.
//! Local 2D coordinates and polar offsets map through that frame.

use nalgebra::{Vector2, Vector3};

use super::line::Line3;
use super::types::Vec3Ext;
use crate::cfg::{DET_EPS, DIST_EPS};
use crate::error::{GeomError, Result};
use crate::geom2::PolarOffset2;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plane3 {
    pub origin: Vector3<f64>,
    /// Unit normal.
    pub normal: Vector3<f64>,
    /// Unit local X axis, in the plane.
    pub x_axis: Vector3<f64>,
    /// Unit local Y axis, in the plane.
    pub y_axis: Vector3<f64>,
}

impl Plane3 {
    /// Build the frame from `origin`, `normal` and an approximate `up`.
    ///
    /// Errors when the normal is zero or `up` is parallel to it.
    pub fn make_plane(origin: Vector3<f64>, normal: Vector3<f64>, up: Vector3<f64>) -> Result<Self> {
        let n = normal.safe_normalize();
        if n == Vector3::zeros() {
            return Err(GeomError::DegeneratePlane { reason: "zero normal" });
        }
        let y = up - n * n.dot(&up);
        if y.norm() <= DET_EPS * up.norm().max(1.0) {
            return Err(GeomError::DegeneratePlane {
                reason: "up vector parallel to normal",
            });
        }
        let y_axis = y.safe_normalize();
        let x_axis = y_axis.cross(&n);
        Ok(Self {
            origin,
            normal: n,
            x_axis,
            y_axis,
        })
    }

    /// Frame is orthonormal within `DIST_EPS`.
    pub fn is_valid(&self) -> bool {
        let unit = |v: &Vector3<f64>| (v.norm() - 1.0).abs() <= DIST_EPS;
        unit(&self.normal)
            && unit(&self.x_axis)
            && unit(&self.y_axis)
            && self.normal.dot(&self.x_axis).abs() <= DIST_EPS
            && self.normal.dot(&self.y_axis).abs() <= DIST_EPS
            && self.x_axis.dot(&self.y_axis).abs() <= DIST_EPS
    }

    #[inline]
    pub fn project_2d_to_3d(&self, p: Vector2<f64>) -> Vector3<f64> {
        self.origin + self.x_axis * p.x + self.y_axis * p.y
    }

    /// Local coordinates of the orthogonal projection of `p`.
    #[inline]
    pub fn project_3d_to_2d(&self, p: Vector3<f64>) -> Vector2<f64> {
        let d = p - self.origin;
        Vector2::new(d.dot(&self.x_axis), d.dot(&self.y_axis))
    }

    pub fn project_polar_to_3d(&self, offset: PolarOffset2) -> Vector3<f64> {
        self.project_2d_to_3d(offset.to_vector())
    }

    pub fn project_3d_to_polar(&self, p: Vector3<f64>) -> PolarOffset2 {
        PolarOffset2::from_vector(self.project_3d_to_2d(p))
    }

    /// Signed distance, positive on the normal side.
    #[inline]
    pub fn distance_to_point(&self, p: Vector3<f64>) -> f64 {
        (p - self.origin).dot(&self.normal)
    }

    #[inline]
    pub fn closest_point(&self, p: Vector3<f64>) -> Vector3<f64> {
        p - self.normal * self.distance_to_point(p)
    }

    /// Where the infinite line through `line` pierces the plane.
    ///
    /// `None` for a line parallel to the plane (including lines lying in it).
    pub fn intersect_line(&self, line: &Line3) -> Option<Vector3<f64>> {
        let d = line.direction();
        let denom = d.dot(&self.normal);
        if denom.abs() <= DET_EPS * d.norm() {
            return None;
        }
        let t = (self.origin - line.p1).dot(&self.normal) / denom;
        Some(line.fraction_point(t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::vector;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn frame_is_orthonormal() {
        let p = Plane3::make_plane(vector![1.0, 2.0, 3.0], vector![0.0, 0.0, 2.0], vector![0.3, 1.0, 0.7]).unwrap();
        assert!(p.is_valid());
        assert_relative_eq!(p.y_axis, vector![0.3, 1.0, 0.0].normalize(), epsilon = 1e-12);
        assert_relative_eq!(p.x_axis.cross(&p.y_axis), p.normal, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_frames_fail() {
        let o = Vector3::zeros();
        assert!(Plane3::make_plane(o, Vector3::zeros(), Vector3::y()).is_err());
        assert!(Plane3::make_plane(o, Vector3::z(), Vector3::z() * 3.0).is_err());
    }

    #[test]
    fn projections_round_trip() {
        let p = Plane3::make_plane(vector![0.0, 0.0, 1.0], vector![1.0, 1.0, 1.0], Vector3::z()).unwrap();
        let local = vector![2.5, -1.0];
        let world = p.project_2d_to_3d(local);
        assert_relative_eq!(p.distance_to_point(world), 0.0, epsilon = 1e-12);
        assert_relative_eq!(p.project_3d_to_2d(world), local, epsilon = 1e-12);
        let polar = PolarOffset2::new(FRAC_PI_2, 2.0);
        let w = p.project_polar_to_3d(polar);
        assert_relative_eq!(w, p.origin + p.y_axis * 2.0, epsilon = 1e-12);
        let back = p.project_3d_to_polar(w);
        assert_relative_eq!(back.angle, FRAC_PI_2, epsilon = 1e-12);
        assert_relative_eq!(back.distance, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn line_piercing() {
        let p = Plane3::make_plane(Vector3::zeros(), Vector3::z(), Vector3::y()).unwrap();
        let l = Line3::new(vector![1.0, 1.0, 5.0], vector![1.0, 1.0, 4.0]);
        assert_relative_eq!(p.intersect_line(&l).unwrap(), vector![1.0, 1.0, 0.0], epsilon = 1e-12);
        let flat = Line3::new(vector![0.0, 0.0, 1.0], vector![1.0, 0.0, 1.0]);
        assert!(p.intersect_line(&flat).is_none());
        assert_relative_eq!(p.distance_to_point(vector![3.0, 3.0, -2.0]), -2.0);
        assert_eq!(p.closest_point(vector![3.0, 3.0, -2.0]), vector![3.0, 3.0, 0.0]);
    }
}
