//! Polar `(azimuth, elevation, distance)` offsets.
//!
//! Two axis conventions are in use and both are kept, under separate names:
//! - Z-up (`from_vector` / `to_vector`), matching `Vec3Ext::offset_az_el`:
//!   `x = r·cos(el)·cos(az)`, `y = r·cos(el)·sin(az)`, `z = r·sin(el)`.
//! - Y-up (`from_vector_y_up` / `to_vector_y_up`), for scene data whose
//!   vertical axis is Y: `x = r·cos(el)·cos(az)`, `y = r·sin(el)`,
//!   `z = r·cos(el)·sin(az)`.
//!
//! They are not interchangeable; mixing them swaps the Y and Z axes.

use std::f64::consts::{FRAC_PI_2, PI};

use nalgebra::Vector3;

use super::types::Vec3Ext;
use crate::scalar::normalize_rad_pi;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarOffset3 {
    /// Radians around the vertical axis.
    pub azimuth: f64,
    /// Radians above the horizontal plane.
    pub elevation: f64,
    pub distance: f64,
}

impl PolarOffset3 {
    #[inline]
    pub fn new(azimuth: f64, elevation: f64, distance: f64) -> Self {
        Self {
            azimuth,
            elevation,
            distance,
        }
    }

    /// Z-up polar form of `v`; the zero vector maps to all zeros.
    pub fn from_vector(v: Vector3<f64>) -> Self {
        Self::new(v.azimuth(), v.elevation(), v.norm())
    }

    /// Z-up Cartesian offset.
    pub fn to_vector(&self) -> Vector3<f64> {
        Vector3::<f64>::zeros().offset_az_el(self.azimuth, self.elevation, self.distance)
    }

    /// Y-up polar form of `v`.
    pub fn from_vector_y_up(v: Vector3<f64>) -> Self {
        Self::new(v.z.atan2(v.x), v.y.atan2(v.x.hypot(v.z)), v.norm())
    }

    /// Y-up Cartesian offset.
    pub fn to_vector_y_up(&self) -> Vector3<f64> {
        let (sa, ca) = self.azimuth.sin_cos();
        let (se, ce) = self.elevation.sin_cos();
        Vector3::new(ce * ca, se, ce * sa) * self.distance
    }

    /// Equivalent offset with `distance >= 0`, elevation in `[-π/2, π/2]`
    /// and azimuth in `[-π, π)`.
    pub fn normalized(&self) -> Self {
        let (mut az, mut el, mut d) = (self.azimuth, normalize_rad_pi(self.elevation), self.distance);
        if d < 0.0 {
            d = -d;
            az += PI;
            el = -el;
        }
        // elevation past a pole: come back down on the far side
        if el > FRAC_PI_2 {
            el = PI - el;
            az += PI;
        } else if el < -FRAC_PI_2 {
            el = -PI - el;
            az += PI;
        }
        Self::new(normalize_rad_pi(az), el, d)
    }
}
