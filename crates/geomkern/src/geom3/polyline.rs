//! Open 3D point chains, the 3D twin of `geom2::polyline`.

use nalgebra::Vector3;

use super::box3::Box3;
use super::line::Line3;
use crate::error::{GeomError, Result};

/// Open 3D chain of points; `n` points give `n - 1` lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline3 {
    pub points: Vec<Vector3<f64>>,
}

impl Polyline3 {
    #[inline]
    pub fn new(points: Vec<Vector3<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn line_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn lines(&self) -> Vec<Line3> {
        self.points
            .windows(2)
            .map(|w| Line3::new(w[0], w[1]))
            .collect()
    }

    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Point at `fraction` of the arc length, clamped; `None` when empty.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<Vector3<f64>> {
        let first = *self.points.first()?;
        let total = self.length();
        if total <= 0.0 {
            return Some(first);
        }
        let f = if fraction.is_nan() { 0.0 } else { fraction.clamp(0.0, 1.0) };
        let mut remaining = f * total;
        for w in self.points.windows(2) {
            let seg = (w[1] - w[0]).norm();
            if remaining <= seg && seg > 0.0 {
                return Some(w[0] + (w[1] - w[0]) * (remaining / seg));
            }
            remaining -= seg;
        }
        self.points.last().copied()
    }

    pub fn resampled(&self, count: usize) -> Result<Polyline3> {
        if self.points.is_empty() {
            return Err(GeomError::InsufficientPoints { required: 1, actual: 0 });
        }
        if count < 2 {
            return Err(GeomError::InsufficientPoints { required: 2, actual: count });
        }
        let last = (count - 1) as f64;
        Ok(Polyline3::new(
            (0..count)
                .filter_map(|i| self.point_at_fraction(i as f64 / last))
                .collect(),
        ))
    }

    pub fn bounding_box(&self) -> Result<Box3> {
        Box3::from_points(&self.points)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn walk_and_resample() {
        let p = Polyline3::new(vec![
            vector![0.0, 0.0, 0.0],
            vector![0.0, 0.0, 2.0],
            vector![0.0, 2.0, 2.0],
        ]);
        assert_eq!(p.length(), 4.0);
        assert_eq!(p.line_count(), 2);
        assert_eq!(p.point_at_fraction(0.75), Some(vector![0.0, 1.0, 2.0]));
        let r = p.resampled(5).unwrap();
        assert_eq!(r.point_count(), 5);
        assert_eq!(r.points[2], vector![0.0, 0.0, 2.0]);
        assert_eq!(p.reversed().points[0], vector![0.0, 2.0, 2.0]);
        assert_eq!(p.bounding_box().unwrap().volume(), 0.0);
    }
}
