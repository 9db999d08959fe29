//! Circular arcs and annular sectors.
//!
//! Angles are radians; `delta_angle` is signed (negative sweeps clockwise)
//! and may exceed a full turn, in which case every heading is inside.

use std::f64::consts::TAU;

use nalgebra::Vector2;

use super::circle::{check_radius, Circle2};
use super::curve::Curve2;
use super::line::Line2;
use super::types::Vec2Ext;
use crate::cfg::{DIST_EPS, PARAM_EPS};
use crate::error::{GeomError, Result};
use crate::scalar::is_angle_in_range_rad_eps;

/// Arc of a circle from `start_angle` sweeping by `delta_angle`.
///
/// Invariant: `radius` is finite and strictly positive.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Arc2 {
    pub(crate) center: Vector2<f64>,
    pub(crate) radius: f64,
    pub(crate) start_angle: f64,
    pub(crate) delta_angle: f64,
}

impl Arc2 {
    /// Errors with `InvalidRadius` unless `radius` is finite and positive.
    pub fn new(center: Vector2<f64>, radius: f64, start_angle: f64, delta_angle: f64) -> Result<Self> {
        check_radius(radius)?;
        Ok(Self {
            center,
            radius,
            start_angle,
            delta_angle,
        })
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
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
    #[inline]
    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    /// Supporting circle.
    #[inline]
    pub fn circle(&self) -> Circle2 {
        Circle2 {
            center: self.center,
            radius: self.radius,
        }
    }
    #[inline]
    pub fn end_angle(&self) -> f64 {
        self.start_angle + self.delta_angle
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.delta_angle.abs().min(TAU)
    }
    #[inline]
    pub fn start_point(&self) -> Vector2<f64> {
        self.center.offset_polar(self.start_angle, self.radius)
    }
    #[inline]
    pub fn end_point(&self) -> Vector2<f64> {
        self.center.offset_polar(self.end_angle(), self.radius)
    }
    /// Point at `fraction` of the sweep (extrapolates outside `[0, 1]`).
    #[inline]
    pub fn point_at_fraction(&self, fraction: f64) -> Vector2<f64> {
        self.center
            .offset_polar(self.start_angle + self.delta_angle * fraction, self.radius)
    }

    /// Is the heading inside the sweep (ends inclusive, `PARAM_EPS` slack)?
    #[inline]
    pub fn contains_angle(&self, angle: f64) -> bool {
        is_angle_in_range_rad_eps(angle, self.start_angle, self.delta_angle, PARAM_EPS)
    }

    /// Does `p` lie on the arc (within `DIST_EPS` of the circle)?
    pub fn contains_point(&self, p: Vector2<f64>) -> bool {
        let v = p - self.center;
        (v.norm() - self.radius).abs() <= DIST_EPS && self.contains_angle(v.heading())
    }

    /// Segment/arc intersections: circle hits filtered by the sweep.
    pub fn intersect_line(&self, line: &Line2) -> Vec<Vector2<f64>> {
        self.circle()
            .intersect_line(line)
            .into_iter()
            .filter(|p| self.contains_angle((p - self.center).heading()))
            .collect()
    }

    pub fn intersect_circle(&self, other: &Circle2) -> Vec<Vector2<f64>> {
        self.circle()
            .intersect_circle(other)
            .into_iter()
            .filter(|p| self.contains_angle((p - self.center).heading()))
            .collect()
    }
}

impl Curve2 for Arc2 {
    fn point_at(&self, t: f64) -> Vector2<f64> {
        self.point_at_fraction(t)
    }

    fn first_derivative(&self, t: f64) -> Vector2<f64> {
        let a = self.start_angle + self.delta_angle * t;
        let k = self.radius * self.delta_angle;
        Vector2::new(-a.sin() * k, a.cos() * k)
    }

    fn second_derivative(&self, t: f64) -> Vector2<f64> {
        let a = self.start_angle + self.delta_angle * t;
        let k = -self.radius * self.delta_angle * self.delta_angle;
        Vector2::new(a.cos() * k, a.sin() * k)
    }
}

fn push_unique(out: &mut Vec<Vector2<f64>>, p: Vector2<f64>) {
    if !out.iter().any(|q| (q - p).norm() <= DIST_EPS * 10.0) {
        out.push(p);
    }
}

/// Region between two concentric arcs and their two radial edges.
///
/// Invariants: `0 <= inner_radius <= outer_radius`, `outer_radius > 0`
/// (constructor swaps the radii). A zero inner radius is a plain pie slice.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AnnularSector2 {
    pub(crate) center: Vector2<f64>,
    pub(crate) inner_radius: f64,
    pub(crate) outer_radius: f64,
    pub(crate) start_angle: f64,
    pub(crate) delta_angle: f64,
}

impl AnnularSector2 {
    /// Errors with `InvalidRadius` for a negative or non-finite radius, or
    /// when both radii are zero.
    pub fn new(
        center: Vector2<f64>,
        radius_a: f64,
        radius_b: f64,
        start_angle: f64,
        delta_angle: f64,
    ) -> Result<Self> {
        for r in [radius_a, radius_b] {
            if !r.is_finite() || r < 0.0 {
                return Err(GeomError::InvalidRadius(r));
            }
        }
        let (inner_radius, outer_radius) = if radius_a <= radius_b {
            (radius_a, radius_b)
        } else {
            (radius_b, radius_a)
        };
        check_radius(outer_radius)?;
        Ok(Self {
            center,
            inner_radius,
            outer_radius,
            start_angle,
            delta_angle,
        })
    }

    #[inline]
    pub fn center(&self) -> Vector2<f64> {
        self.center
    }
    #[inline]
    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }
    #[inline]
    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }
    #[inline]
    pub fn start_angle(&self) -> f64 {
        self.start_angle
    }
    #[inline]
    pub fn delta_angle(&self) -> f64 {
        self.delta_angle
    }

    /// Inner boundary arc; `None` for a pie slice.
    #[inline]
    pub fn inner_arc(&self) -> Option<Arc2> {
        (self.inner_radius > 0.0).then_some(Arc2 {
            center: self.center,
            radius: self.inner_radius,
            start_angle: self.start_angle,
            delta_angle: self.delta_angle,
        })
    }
    #[inline]
    pub fn outer_arc(&self) -> Arc2 {
        Arc2 {
            center: self.center,
            radius: self.outer_radius,
            start_angle: self.start_angle,
            delta_angle: self.delta_angle,
        }
    }
    /// Radial edge at `start_angle`, inner to outer.
    pub fn start_edge(&self) -> Line2 {
        self.radial_edge(self.start_angle)
    }
    /// Radial edge at the end angle, inner to outer.
    pub fn end_edge(&self) -> Line2 {
        self.radial_edge(self.start_angle + self.delta_angle)
    }
    fn radial_edge(&self, angle: f64) -> Line2 {
        Line2::new(
            self.center.offset_polar(angle, self.inner_radius),
            self.center.offset_polar(angle, self.outer_radius),
        )
    }

    pub fn area(&self) -> f64 {
        let sweep = self.delta_angle.abs().min(TAU);
        0.5 * sweep * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    /// Inside the outer circle, outside the inner one, and within the sweep.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let v = p - self.center;
        let d = v.norm();
        if d > self.outer_radius + DIST_EPS || d < self.inner_radius - DIST_EPS {
            return false;
        }
        // the centre itself has no heading; it belongs to a sector with no hole
        d <= DIST_EPS
            || is_angle_in_range_rad_eps(v.heading(), self.start_angle, self.delta_angle, PARAM_EPS)
    }

    /// Boundary crossings of a segment: both arcs plus both radial edges.
    pub fn intersect_line(&self, line: &Line2) -> Vec<Vector2<f64>> {
        let mut out = Vec::new();
        for p in self.outer_arc().intersect_line(line) {
            push_unique(&mut out, p);
        }
        if let Some(inner) = self.inner_arc() {
            for p in inner.intersect_line(line) {
                push_unique(&mut out, p);
            }
        }
        if self.delta_angle.abs() < TAU {
            for edge in [self.start_edge(), self.end_edge()] {
                if let Some(p) = edge.segment_intersection(line) {
                    push_unique(&mut out, p);
                }
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;
    use std::f64::consts::{FRAC_PI_2, PI};

    #[test]
    fn quarter_arc_tangent_chord() {
        let arc = Arc2::new(vector![0.0, 0.0], 5.0, 0.0, FRAC_PI_2).unwrap();
        let line = Line2::new(vector![5.0, -1.0], vector![5.0, 6.0]);
        let pts = arc.intersect_line(&line);
        assert_eq!(pts.len(), 1);
        assert!((pts[0] - vector![5.0, 0.0]).norm() < 1e-9);
    }

    #[test]
    fn arc_filters_by_sweep() {
        let arc = Arc2::new(vector![0.0, 0.0], 1.0, 0.0, FRAC_PI_2).unwrap();
        let horiz = Line2::new(vector![-2.0, 0.5], vector![2.0, 0.5]);
        let pts = arc.intersect_line(&horiz);
        assert_eq!(pts.len(), 1);
        assert!(pts[0].x > 0.0);
        // clockwise sweep picks the other half
        let cw = Arc2::new(vector![0.0, 0.0], 1.0, PI, -FRAC_PI_2).unwrap();
        let pts = cw.intersect_line(&horiz);
        assert_eq!(pts.len(), 1);
        assert!(pts[0].x < 0.0);
    }

    #[test]
    fn arc_measures_and_curve() {
        let arc = Arc2::new(vector![1.0, 1.0], 2.0, 0.0, PI).unwrap();
        assert!((arc.length() - 2.0 * PI).abs() < 1e-12);
        assert!((arc.end_point() - vector![-1.0, 1.0]).norm() < 1e-12);
        assert!((arc.point_at(0.5) - vector![1.0, 3.0]).norm() < 1e-12);
        assert!((arc.curvature(0.3) - 0.5).abs() < 1e-12);
        assert!(arc.contains_point(vector![1.0, 3.0]));
        assert!(!arc.contains_point(vector![1.0, -1.0]));
        let pl = arc.to_polyline(4);
        assert_eq!(pl.points.len(), 5);
    }

    #[test]
    fn sector_containment() {
        let s = AnnularSector2::new(vector![0.0, 0.0], 3.0, 1.0, 0.0, FRAC_PI_2).unwrap();
        assert_eq!(s.inner_radius(), 1.0);
        assert!(s.contains(vector![1.5, 1.5]));
        assert!(!s.contains(vector![0.2, 0.2]));
        assert!(!s.contains(vector![-1.5, 1.5]));
        assert!(!s.contains(vector![3.0, 3.0]));
        assert!((s.area() - 0.5 * FRAC_PI_2 * 8.0).abs() < 1e-12);
    }

    #[test]
    fn sector_line_crossings() {
        let s = AnnularSector2::new(vector![0.0, 0.0], 1.0, 3.0, 0.0, FRAC_PI_2).unwrap();
        // both arcs, once each inside the sweep
        let line = Line2::new(vector![-1.0, 0.5], vector![4.0, 0.5]);
        let pts = s.intersect_line(&line);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().any(|p| (p.x - 0.75f64.sqrt()).abs() < 1e-9));
        assert!(pts.iter().any(|p| (p.x - 8.75f64.sqrt()).abs() < 1e-9));
        // outer arc plus the start edge on the x axis
        let line = Line2::new(vector![2.0, -1.0], vector![2.0, 4.0]);
        let pts = s.intersect_line(&line);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().any(|p| (p - vector![2.0, 0.0]).norm() < 1e-9));
    }

    #[test]
    fn invalid_radii_are_rejected() {
        let o = vector![0.0, 0.0];
        assert_eq!(Arc2::new(o, -1.0, 0.0, PI), Err(GeomError::InvalidRadius(-1.0)));
        assert!(Arc2::new(o, 0.0, 0.0, PI).is_err());
        assert!(AnnularSector2::new(o, -1.0, 2.0, 0.0, PI).is_err());
        assert!(AnnularSector2::new(o, 0.0, 0.0, 0.0, PI).is_err());
        assert!(AnnularSector2::new(o, 1.0, f64::NAN, 0.0, PI).is_err());
    }

    #[test]
    fn pie_slice_has_no_inner_arc() {
        let s = AnnularSector2::new(vector![0.0, 0.0], 2.0, 0.0, 0.0, FRAC_PI_2).unwrap();
        assert!(s.inner_arc().is_none());
        assert!(s.contains(vector![0.0, 0.0]));
        assert!(s.contains(vector![0.5, 0.5]));
        // outer arc and both radial edges
        let line = Line2::new(vector![-1.0, 1.0], vector![3.0, 1.0]);
        let pts = s.intersect_line(&line);
        assert_eq!(pts.len(), 2);
        assert!(pts.iter().any(|p| (p - vector![0.0, 1.0]).norm() < 1e-9));
        assert!(pts.iter().any(|p| (p.x - 3f64.sqrt()).abs() < 1e-9));
    }
}
