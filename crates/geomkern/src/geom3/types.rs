//! 3D vector helpers: direction angles, axis rotation, slerp, circles in
//! arbitrary planes.
//!
//! Conventions
//! - Z is up. Azimuth is measured in the XY plane from +X toward +Y;
//!   elevation is measured from the XY plane toward +Z.
//! - `x = r·cos(el)·cos(az)`, `y = r·cos(el)·sin(az)`, `z = r·sin(el)`.

use nalgebra::Vector3;

use crate::cfg::{ANGLE_EPS, DET_EPS};
use crate::error::{GeomError, Result};

/// Kernel operations on 3D vectors.
pub trait Vec3Ext {
    /// Unit vector, or the zero vector when the length is zero or non-finite.
    fn safe_normalize(&self) -> Vector3<f64>;
    /// `atan2(y, x)`.
    fn azimuth(&self) -> f64;
    /// `atan2(z, |xy|)`, in `[-π/2, π/2]`.
    fn elevation(&self) -> f64;
    /// Point reached by moving `distance` along `(azimuth, elevation)`.
    fn offset_az_el(&self, azimuth: f64, elevation: f64, distance: f64) -> Vector3<f64>;
    /// Rodrigues rotation by `angle` (right-handed) about `axis`.
    fn rotated_about_axis(&self, axis: &Vector3<f64>, angle: f64) -> Result<Vector3<f64>>;
    fn distance_to(&self, other: &Vector3<f64>) -> f64;
    /// Some unit vector orthogonal to `self` (zero for the zero vector).
    fn any_orthogonal(&self) -> Vector3<f64>;
}

impl Vec3Ext for Vector3<f64> {
    #[inline]
    fn safe_normalize(&self) -> Vector3<f64> {
        let n = self.norm();
        if n > 0.0 && n.is_finite() {
            self / n
        } else {
            tracing::trace!(x = self.x, y = self.y, z = self.z, "normalize fallback to zero vector");
            Vector3::zeros()
        }
    }

    #[inline]
    fn azimuth(&self) -> f64 {
        self.y.atan2(self.x)
    }

    #[inline]
    fn elevation(&self) -> f64 {
        self.z.atan2(self.x.hypot(self.y))
    }

    #[inline]
    fn offset_az_el(&self, azimuth: f64, elevation: f64, distance: f64) -> Vector3<f64> {
        let (sa, ca) = azimuth.sin_cos();
        let (se, ce) = elevation.sin_cos();
        self + Vector3::new(ce * ca, ce * sa, se) * distance
    }

    fn rotated_about_axis(&self, axis: &Vector3<f64>, angle: f64) -> Result<Vector3<f64>> {
        let len = axis.norm();
        if len <= DET_EPS || !len.is_finite() {
            return Err(GeomError::ZeroAxis);
        }
        let k = axis / len;
        let (s, c) = angle.sin_cos();
        Ok(self * c + k.cross(self) * s + k * (k.dot(self) * (1.0 - c)))
    }

    #[inline]
    fn distance_to(&self, other: &Vector3<f64>) -> f64 {
        (other - self).norm()
    }

    fn any_orthogonal(&self) -> Vector3<f64> {
        // cross with the axis least aligned with self
        let a = self.abs();
        let pick = if a.x <= a.y && a.x <= a.z {
            Vector3::x()
        } else if a.y <= a.z {
            Vector3::y()
        } else {
            Vector3::z()
        };
        self.cross(&pick).safe_normalize()
    }
}

/// Arithmetic mean of a point set. Errors on an empty slice.
pub fn average_of(points: &[Vector3<f64>]) -> Result<Vector3<f64>> {
    if points.is_empty() {
        return Err(GeomError::InsufficientPoints {
            required: 1,
            actual: 0,
        });
    }
    let sum = points.iter().fold(Vector3::zeros(), |acc, p| acc + p);
    Ok(sum / points.len() as f64)
}

/// Spherical interpolation between the directions of `a` and `b`.
///
/// The direction moves at constant angular speed along the shorter great
/// circle; the length is interpolated linearly. `t` is not clamped.
/// Directions closer than `ANGLE_EPS` return `a`. Antipodal inputs turn
/// about an arbitrary axis orthogonal to `a`.
pub fn slerp(a: &Vector3<f64>, b: &Vector3<f64>, t: f64) -> Vector3<f64> {
    let (ua, ub) = (a.safe_normalize(), b.safe_normalize());
    let cos = ua.dot(&ub).clamp(-1.0, 1.0);
    let theta = cos.acos();
    if theta <= ANGLE_EPS {
        return *a;
    }
    let len = a.norm() + (b.norm() - a.norm()) * t;
    let sin = theta.sin();
    let dir = if sin <= ANGLE_EPS {
        let axis = ua.any_orthogonal();
        // any_orthogonal is unit for a non-zero `ua`
        ua * (theta * t).cos() + axis.cross(&ua) * (theta * t).sin()
    } else {
        ua * (((1.0 - t) * theta).sin() / sin) + ub * ((t * theta).sin() / sin)
    };
    dir * len
}

/// Point at `angle` on the circle of `radius` around `center` in the plane
/// with normal `normal`.
///
/// Angle zero points along `reference` projected into the plane; positive
/// angles turn right-handed about `normal`.
pub fn point_on_circle(
    center: &Vector3<f64>,
    normal: &Vector3<f64>,
    reference: &Vector3<f64>,
    radius: f64,
    angle: f64,
) -> Result<Vector3<f64>> {
    let n = normal.safe_normalize();
    if n == Vector3::zeros() {
        return Err(GeomError::ZeroAxis);
    }
    let u = (reference - n * n.dot(reference)).safe_normalize();
    if u == Vector3::zeros() {
        return Err(GeomError::DegeneratePlane {
            reason: "reference direction parallel to normal",
        });
    }
    let v = n.cross(&u);
    let (s, c) = angle.sin_cos();
    Ok(center + (u * c + v * s) * radius)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn az_el_of_axes() {
        assert_relative_eq!(Vector3::new(0.0, 1.0, 0.0).azimuth(), FRAC_PI_2);
        assert_relative_eq!(Vector3::new(0.0, 0.0, 2.0).elevation(), FRAC_PI_2);
        assert_relative_eq!(Vector3::new(1.0, 0.0, 1.0).elevation(), FRAC_PI_4);
        let p = Vector3::<f64>::zeros().offset_az_el(FRAC_PI_2, 0.0, 3.0);
        assert_relative_eq!(p, Vector3::new(0.0, 3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn rodrigues_quarter_turn() {
        let v = Vector3::new(1.0, 0.0, 0.0);
        let r = v.rotated_about_axis(&Vector3::new(0.0, 0.0, 5.0), FRAC_PI_2).unwrap();
        assert_relative_eq!(r, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
        assert_eq!(v.rotated_about_axis(&Vector3::zeros(), 1.0), Err(GeomError::ZeroAxis));
    }

    #[test]
    fn slerp_midpoint_and_degenerates() {
        let a = Vector3::new(1.0, 0.0, 0.0);
        let b = Vector3::new(0.0, 1.0, 0.0);
        let m = slerp(&a, &b, 0.5);
        assert_relative_eq!(m, Vector3::new(FRAC_PI_4.cos(), FRAC_PI_4.sin(), 0.0), epsilon = 1e-12);
        assert_relative_eq!(slerp(&a, &b, 1.0), b, epsilon = 1e-12);
        // coincident directions: start point, no NaN
        assert_eq!(slerp(&a, &(a * 2.0), 0.3), a);
        // antipodal: still unit length and orthogonal halfway
        let h = slerp(&a, &(-a), 0.5);
        assert!(h.iter().all(|c| c.is_finite()));
        assert_relative_eq!(h.norm(), 1.0, epsilon = 1e-12);
        assert!(h.dot(&a).abs() < 1e-12);
    }

    #[test]
    fn circle_in_tilted_plane() {
        let c = Vector3::new(1.0, 1.0, 1.0);
        let n = Vector3::new(0.0, 0.0, 1.0);
        let reference = Vector3::new(1.0, 0.0, 0.5);
        let p = point_on_circle(&c, &n, &reference, 2.0, FRAC_PI_2).unwrap();
        assert_relative_eq!(p, Vector3::new(1.0, 3.0, 1.0), epsilon = 1e-12);
        assert!(point_on_circle(&c, &n, &n, 1.0, 0.0).is_err());
        assert!(point_on_circle(&c, &Vector3::zeros(), &reference, 1.0, 0.0).is_err());
    }

    #[test]
    fn average_rejects_empty() {
        assert!(average_of(&[]).is_err());
        let m = average_of(&[Vector3::new(0.0, 0.0, 0.0), Vector3::new(2.0, 4.0, 6.0)]).unwrap();
        assert_eq!(m, Vector3::new(1.0, 2.0, 3.0));
    }
}
