//! Circles by centre and radius: measures, containment and the convenience
//! wrappers over the intersection solvers.

use std::f64::consts::{PI, TAU};

use nalgebra::Vector2;

use super::line::Line2;
use super::rect::Rect2;
use super::solvers;
use super::types::Vec2Ext;
use crate::cfg::{GeomCfg, DIST_EPS};
use crate::error::{GeomError, Result};

/// Circle by centre and radius.
///
/// Invariant: `radius` is finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle2 {
    pub(crate) center: Vector2<f64>,
    pub(crate) radius: f64,
}

/// Shared radius contract for circles and arcs.
pub(crate) fn check_radius(radius: f64) -> Result<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(GeomError::InvalidRadius(radius));
    }
    Ok(())
}

impl Circle2 {
    /// Errors with `InvalidRadius` unless `radius` is finite and positive.
    pub fn new(center: Vector2<f64>, radius: f64) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self { center, radius })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn diameter(&self) -> f64 {
        2.0 * self.radius
    }
    #[inline]
    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }
    #[inline]
    pub fn circumference(&self) -> f64 {
        TAU * self.radius
    }

    /// Inclusive containment (boundary within `DIST_EPS` counts).
    #[inline]
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        self.center.distance_to(&p) <= self.radius + DIST_EPS
    }

    #[inline]
    pub fn point_at_angle(&self, angle: f64) -> Vector2<f64> {
        self.center.offset_polar(angle, self.radius)
    }

    /// Heading of `p` as seen from the centre.
    #[inline]
    pub fn angle_of(&self, p: Vector2<f64>) -> f64 {
        (p - self.center).heading()
    }

    pub fn bounding_rect(&self) -> Rect2 {
        Rect2::from_center_size(self.center, self.diameter(), self.diameter())
    }

    /// Points where the segment `line` crosses or touches the circle.
    pub fn intersect_line(&self, line: &Line2) -> Vec<Vector2<f64>> {
        solvers::circle_line_intersections(self, line, GeomCfg::default())
    }

    /// Points where the infinite line through `line` meets the circle.
    pub fn intersect_infinite_line(&self, line: &Line2) -> Vec<Vector2<f64>> {
        solvers::circle_infinite_line_intersections(self, line, GeomCfg::default())
    }

    pub fn intersect_circle(&self, other: &Circle2) -> Vec<Vector2<f64>> {
        solvers::circle_circle_intersections(self, other, GeomCfg::default())
    }

    /// Tangent points seen from `p`; empty if `p` is inside.
    pub fn tangent_points(&self, p: Vector2<f64>) -> Vec<Vector2<f64>> {
        solvers::tangent_points(self, p)
    }
}
