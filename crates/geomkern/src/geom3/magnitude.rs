//! Angular heightmap: a magnitude per direction around a centre.
//!
//! Layout
//! - Backed by a `NumericArray2D<f64>`; column `x` spans azimuth `[-π, π]`
//!   left to right, row `y` spans elevation `[-π/2, π/2]` bottom to top.
//! - Lookups clamp elevation and wrap azimuth into `[-π, π)`.
//! - Directions use the Z-up convention of `Vec3Ext::offset_az_el`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use nalgebra::Vector3;

use super::types::Vec3Ext;
use crate::array::NumericArray2D;
use crate::error::Result;
use crate::scalar::normalize_rad_pi;

#[derive(Clone, Debug, PartialEq)]
pub struct MagnitudeSphere3 {
    pub center: Vector3<f64>,
    grid: NumericArray2D<f64>,
}

#[inline]
fn az_fraction(azimuth: f64) -> f64 {
    (normalize_rad_pi(azimuth) + PI) / TAU
}

#[inline]
fn el_fraction(elevation: f64) -> f64 {
    (elevation.clamp(-FRAC_PI_2, FRAC_PI_2) + FRAC_PI_2) / PI
}

#[inline]
fn nearest(fraction: f64, len: usize) -> usize {
    ((fraction * (len - 1) as f64).round() as usize).min(len - 1)
}

impl MagnitudeSphere3 {
    /// Zero magnitudes on a `width × height` grid (array size limits apply).
    pub fn new(center: Vector3<f64>, width: usize, height: usize) -> Result<Self> {
        Ok(Self {
            center,
            grid: NumericArray2D::new(width, height)?,
        })
    }

    pub fn from_grid(center: Vector3<f64>, grid: NumericArray2D<f64>) -> Self {
        Self { center, grid }
    }

    #[inline]
    pub fn grid(&self) -> &NumericArray2D<f64> {
        &self.grid
    }

    /// Azimuth/elevation at the centre of cell `(x, y)`.
    pub fn cell_direction(&self, x: usize, y: usize) -> (f64, f64) {
        let fx = if self.grid.width() > 1 { x as f64 / (self.grid.width() - 1) as f64 } else { 0.0 };
        let fy = if self.grid.height() > 1 { y as f64 / (self.grid.height() - 1) as f64 } else { 0.0 };
        (fx * TAU - PI, fy * PI - FRAC_PI_2)
    }

    /// Write `value` into the cell nearest to the direction.
    pub fn set_at(&mut self, azimuth: f64, elevation: f64, value: f64) -> Result<()> {
        let x = nearest(az_fraction(azimuth), self.grid.width());
        let y = nearest(el_fraction(elevation), self.grid.height());
        self.grid.set(x, y, value)
    }

    /// Bilinear magnitude in the direction.
    pub fn value_at(&self, azimuth: f64, elevation: f64) -> f64 {
        self.grid
            .interpolated_value(az_fraction(azimuth), el_fraction(elevation))
    }

    /// Surface point: the centre pushed out by the magnitude.
    pub fn point_at(&self, azimuth: f64, elevation: f64) -> Vector3<f64> {
        self.center
            .offset_az_el(azimuth, elevation, self.value_at(azimuth, elevation))
    }

    pub fn max_value(&self) -> f64 {
        self.grid.max()
    }

    /// Populate every cell from `f(azimuth, elevation)`.
    pub fn populate_with(&mut self, mut f: impl FnMut(f64, f64) -> f64) {
        let (w, h) = (self.grid.width(), self.grid.height());
        let step_x = if w > 1 { TAU / (w - 1) as f64 } else { 0.0 };
        let step_y = if h > 1 { PI / (h - 1) as f64 } else { 0.0 };
        self.grid
            .populate_with(|x, y| f(x as f64 * step_x - PI, y as f64 * step_y - FRAC_PI_2));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn constant_field_is_a_sphere() {
        let mut m = MagnitudeSphere3::new(Vector3::new(1.0, 0.0, 0.0), 9, 5).unwrap();
        m.populate_with(|_, _| 2.0);
        assert_relative_eq!(m.value_at(0.3, -0.4), 2.0, epsilon = 1e-12);
        let p = m.point_at(0.0, 0.0);
        assert_relative_eq!(p, Vector3::new(3.0, 0.0, 0.0), epsilon = 1e-12);
        assert_eq!(m.max_value(), 2.0);
    }

    #[test]
    fn nearest_cell_write() {
        let mut m = MagnitudeSphere3::new(Vector3::zeros(), 5, 3).unwrap();
        // azimuth 0 is the middle column, elevation 0 the middle row
        m.set_at(0.0, 0.0, 7.0).unwrap();
        assert_eq!(m.grid().get(2, 1).unwrap(), 7.0);
        assert_eq!(m.value_at(0.0, 0.0), 7.0);
        assert_eq!(m.max_value(), 7.0);
        // elevation clamps to the poles
        m.set_at(0.0, 5.0, 1.0).unwrap();
        assert_eq!(m.grid().get(2, 2).unwrap(), 1.0);
        assert_eq!(m.cell_direction(2, 1), (0.0, 0.0));
    }

    #[test]
    fn azimuth_wraps() {
        let mut m = MagnitudeSphere3::new(Vector3::zeros(), 5, 3).unwrap();
        m.populate_with(|az, _| az);
        assert_relative_eq!(m.value_at(0.5 + TAU, 0.0), m.value_at(0.5, 0.0), epsilon = 1e-9);
    }
}
