//! Axis-aligned rectangles in screen convention.
//!
//! Conventions
//! - `top_left` holds the minimum coordinates, `bottom_right` the maximum
//!   (y grows downward); constructors normalize swapped corners.
//! - `contains` is inclusive; `intersects` requires positive-area overlap.

use nalgebra::Vector2;

use super::polygon::Polygon2;
use crate::error::{GeomError, Result};

/// Nine reference points of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    TopLeft,
    Top,
    TopRight,
    Left,
    Center,
    Right,
    BottomLeft,
    Bottom,
    BottomRight,
}

impl Anchor {
    /// Position as `(fx, fy)` fractions of width and height.
    pub fn fraction(self) -> (f64, f64) {
        match self {
            Anchor::TopLeft => (0.0, 0.0),
            Anchor::Top => (0.5, 0.0),
            Anchor::TopRight => (1.0, 0.0),
            Anchor::Left => (0.0, 0.5),
            Anchor::Center => (0.5, 0.5),
            Anchor::Right => (1.0, 0.5),
            Anchor::BottomLeft => (0.0, 1.0),
            Anchor::Bottom => (0.5, 1.0),
            Anchor::BottomRight => (1.0, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect2 {
    pub top_left: Vector2<f64>,
    pub bottom_right: Vector2<f64>,
}

impl Rect2 {
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            top_left: a.inf(&b),
            bottom_right: a.sup(&b),
        }
    }

    /// Negative sizes are taken by magnitude.
    pub fn from_center_size(center: Vector2<f64>, width: f64, height: f64) -> Self {
        let half = Vector2::new(width.abs(), height.abs()) * 0.5;
        Self {
            top_left: center - half,
            bottom_right: center + half,
        }
    }

    /// Tight bounds of a non-empty point set.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or(GeomError::InsufficientPoints { required: 1, actual: 0 })?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Ok(Self {
            top_left: lo,
            bottom_right: hi,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }
    #[inline]
    pub fn size(&self) -> Vector2<f64> {
        self.bottom_right - self.top_left
    }
    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        (self.top_left + self.bottom_right) * 0.5
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    /// Corners clockwise on screen, starting at `top_left`.
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        let (tl, br) = (self.top_left, self.bottom_right);
        [tl, Vector2::new(br.x, tl.y), br, Vector2::new(tl.x, br.y)]
    }

    /// `top_left + (fx·w, fy·h)`; fractions outside `[0, 1]` extrapolate.
    #[inline]
    pub fn point_at_fraction(&self, fx: f64, fy: f64) -> Vector2<f64> {
        self.top_left + Vector2::new(fx * self.width(), fy * self.height())
    }

    pub fn anchor_point(&self, anchor: Anchor) -> Vector2<f64> {
        let (fx, fy) = anchor.fraction();
        self.point_at_fraction(fx, fy)
    }

    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        p.x >= self.top_left.x && p.x <= self.bottom_right.x && p.y >= self.top_left.y && p.y <= self.bottom_right.y
    }

    /// Positive-area overlap; touching edges do not count.
    pub fn intersects(&self, other: &Rect2) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.top_left.y < other.bottom_right.y
            && other.top_left.y < self.bottom_right.y
    }

    pub fn intersection(&self, other: &Rect2) -> Option<Rect2> {
        if !self.intersects(other) {
            return None;
        }
        Some(Rect2 {
            top_left: self.top_left.sup(&other.top_left),
            bottom_right: self.bottom_right.inf(&other.bottom_right),
        })
    }

    pub fn union(&self, other: &Rect2) -> Rect2 {
        Rect2 {
            top_left: self.top_left.inf(&other.top_left),
            bottom_right: self.bottom_right.sup(&other.bottom_right),
        }
    }

    pub fn expanded_to_include(&self, p: Vector2<f64>) -> Rect2 {
        Rect2 {
            top_left: self.top_left.inf(&p),
            bottom_right: self.bottom_right.sup(&p),
        }
    }

    /// Shrink each side by `amount` (negative grows). Collapses to the
    /// centre instead of inverting.
    pub fn inset(&self, amount: f64) -> Rect2 {
        let c = self.center();
        let half_w = (self.width() * 0.5 - amount).max(0.0);
        let half_h = (self.height() * 0.5 - amount).max(0.0);
        Rect2 {
            top_left: c - Vector2::new(half_w, half_h),
            bottom_right: c + Vector2::new(half_w, half_h),
        }
    }

    #[inline]
    pub fn translated(&self, offset: Vector2<f64>) -> Rect2 {
        Rect2 {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    pub fn to_polygon(&self) -> Polygon2 {
        Polygon2::new(self.corners().to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn normalizes_corners() {
        let r = Rect2::new(vector![4.0, 1.0], vector![0.0, 3.0]);
        assert_eq!(r.top_left, vector![0.0, 1.0]);
        assert_eq!(r.bottom_right, vector![4.0, 3.0]);
        assert_eq!(r.width(), 4.0);
        assert_eq!(r.height(), 2.0);
        assert_eq!(r.area(), 8.0);
        assert_eq!(r.anchor_point(Anchor::Bottom), vector![2.0, 3.0]);
        assert_eq!(r.anchor_point(Anchor::Center), r.center());
    }

    #[test]
    fn overlap_rules() {
        let a = Rect2::new(vector![0.0, 0.0], vector![2.0, 2.0]);
        let b = Rect2::new(vector![1.0, 1.0], vector![3.0, 3.0]);
        let touching = Rect2::new(vector![2.0, 0.0], vector![3.0, 2.0]);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching));
        assert_eq!(
            a.intersection(&b),
            Some(Rect2::new(vector![1.0, 1.0], vector![2.0, 2.0]))
        );
        assert_eq!(a.intersection(&touching), None);
        assert_eq!(a.union(&b), Rect2::new(vector![0.0, 0.0], vector![3.0, 3.0]));
        assert!(a.contains(vector![2.0, 2.0]));
    }

    #[test]
    fn inset_collapses() {
        let r = Rect2::new(vector![0.0, 0.0], vector![4.0, 2.0]);
        let s = r.inset(0.5);
        assert_eq!(s, Rect2::new(vector![0.5, 0.5], vector![3.5, 1.5]));
        let c = r.inset(5.0);
        assert_eq!(c.area(), 0.0);
        assert_eq!(c.center(), r.center());
    }

    #[test]
    fn bounds_of_points() {
        assert!(Rect2::from_points(&[]).is_err());
        let r = Rect2::from_points(&[vector![1.0, 5.0], vector![-2.0, 0.0], vector![3.0, 2.0]]).unwrap();
        assert_eq!(r, Rect2::new(vector![-2.0, 0.0], vector![3.0, 5.0]));
        assert_eq!(r.expanded_to_include(vector![4.0, 6.0]).bottom_right, vector![4.0, 6.0]);
    }
}
