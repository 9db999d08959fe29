//! 2D line segment `P1 → P2`.
//!
//! The same value serves as an infinite line (`try_intersect`) or a bounded
//! segment (`does_intersect`, `segment_intersection`, `is_point_on_line`).
//! Zero-length lines are legal; derived directions fall back to zero.

use nalgebra::Vector2;

use super::solvers;
use super::types::Vec2Ext;
use crate::cfg::{GeomCfg, DIST_EPS};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line2 {
    pub p1: Vector2<f64>,
    pub p2: Vector2<f64>,
}

impl Line2 {
    #[inline]
    pub fn new(p1: Vector2<f64>, p2: Vector2<f64>) -> Self {
        Self { p1, p2 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.p2 - self.p1).norm()
    }
    /// Unnormalized `P2 - P1`.
    #[inline]
    pub fn direction(&self) -> Vector2<f64> {
        self.p2 - self.p1
    }
    #[inline]
    pub fn unit_direction(&self) -> Vector2<f64> {
        self.direction().safe_normalize()
    }
    /// Unit normal on the left of the direction (zero for a degenerate line).
    #[inline]
    pub fn normal(&self) -> Vector2<f64> {
        self.unit_direction().left_normal()
    }
    #[inline]
    pub fn angle(&self) -> f64 {
        self.direction().heading()
    }
    #[inline]
    pub fn midpoint(&self) -> Vector2<f64> {
        (self.p1 + self.p2) * 0.5
    }
    /// `P1 + f (P2 - P1)`; fractions outside `[0, 1]` extrapolate.
    #[inline]
    pub fn fraction_point(&self, f: f64) -> Vector2<f64> {
        self.p1 + self.direction() * f
    }
    #[inline]
    pub fn reversed(&self) -> Self {
        Self::new(self.p2, self.p1)
    }
    #[inline]
    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self::new(self.p1 + offset, self.p2 + offset)
    }
    /// Parallel copy shifted `distance` along the left normal.
    #[inline]
    pub fn offset(&self, distance: f64) -> Self {
        self.translated(self.normal() * distance)
    }
    /// Segment grown by `distance` past each end.
    pub fn extrapolate(&self, distance: f64) -> Self {
        let u = self.unit_direction();
        Self::new(self.p1 - u * distance, self.p2 + u * distance)
    }

    /// Line parameter of the orthogonal projection of `p` (0 for a degenerate line).
    pub fn parameter_of(&self, p: Vector2<f64>) -> f64 {
        let d = self.direction();
        let len2 = d.norm_squared();
        if len2 == 0.0 {
            return 0.0;
        }
        (p - self.p1).dot(&d) / len2
    }

    /// Closest point of the segment to `p`.
    pub fn closest_point(&self, p: Vector2<f64>) -> Vector2<f64> {
        self.fraction_point(self.parameter_of(p).clamp(0.0, 1.0))
    }

    pub fn distance_to_point(&self, p: Vector2<f64>) -> f64 {
        (p - self.closest_point(p)).norm()
    }

    /// Does `p` lie on the segment (within `DIST_EPS`)?
    pub fn is_point_on_line(&self, p: Vector2<f64>) -> bool {
        self.distance_to_point(p) <= DIST_EPS
    }

    /// Intersection of the two infinite lines; `None` if parallel or colinear.
    pub fn try_intersect(&self, other: &Line2) -> Option<Vector2<f64>> {
        solvers::line_line_intersection(self, other, GeomCfg::default())
    }

    /// Do the two segments touch (colinear overlap included)?
    pub fn does_intersect(&self, other: &Line2) -> bool {
        solvers::segments_intersect(self, other, GeomCfg::default())
    }

    /// Single crossing point of the two segments, if any.
    pub fn segment_intersection(&self, other: &Line2) -> Option<Vector2<f64>> {
        solvers::segment_intersection(self, other, GeomCfg::default())
    }
}
