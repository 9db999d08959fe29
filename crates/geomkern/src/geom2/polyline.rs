//! Open 2D point chains: arc-length walking and uniform resampling.

use nalgebra::Vector2;

use super::line::Line2;
use super::rect::Rect2;
use crate::error::{GeomError, Result};

/// Open chain of points; `n` points give `n - 1` lines.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polyline2 {
    pub points: Vec<Vector2<f64>>,
}

impl Polyline2 {
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
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

    pub fn lines(&self) -> Vec<Line2> {
        self.points
            .windows(2)
            .map(|w| Line2::new(w[0], w[1]))
            .collect()
    }

    pub fn length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Point at `fraction` of the arc length, clamped to the ends.
    ///
    /// `None` for an empty polyline; a single point (or zero total length)
    /// returns the first point.
    pub fn point_at_fraction(&self, fraction: f64) -> Option<Vector2<f64>> {
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

    /// `count` points evenly spaced by arc length, ends included.
    pub fn resampled(&self, count: usize) -> Result<Polyline2> {
        if self.points.is_empty() {
            return Err(GeomError::InsufficientPoints { required: 1, actual: 0 });
        }
        if count < 2 {
            return Err(GeomError::InsufficientPoints { required: 2, actual: count });
        }
        let last = (count - 1) as f64;
        let points = (0..count)
            .filter_map(|i| self.point_at_fraction(i as f64 / last))
            .collect();
        Ok(Polyline2::new(points))
    }

    pub fn bounding_rect(&self) -> Result<Rect2> {
        Rect2::from_points(&self.points)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.points.iter().rev().copied().collect())
    }
}
