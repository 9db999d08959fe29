//! Simple polygons and triangles.
//!
//! Vertices are an ordered, implicitly closed list (the last point is not
//! repeated). Either winding is accepted; `signed_area` reports it
//! (positive for counter-clockwise in y-up axes).

use nalgebra::Vector2;
use tracing::debug;

use super::line::Line2;
use super::rect::Rect2;
use super::types::{average_of, Vec2Ext};
use crate::cfg::{DET_EPS, DIST_EPS};
use crate::error::{GeomError, Result};

#[derive(Clone, Debug, PartialEq)]
pub struct Polygon2 {
    pub points: Vec<Vector2<f64>>,
}

impl Polygon2 {
    #[inline]
    pub fn new(points: Vec<Vector2<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed edge loop; empty below two vertices.
    pub fn lines(&self) -> Vec<Line2> {
        let n = self.points.len();
        if n < 2 {
            return Vec::new();
        }
        (0..n)
            .map(|i| Line2::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }

    /// Shoelace sum / 2.
    pub fn signed_area(&self) -> f64 {
        let n = self.points.len();
        if n < 3 {
            return 0.0;
        }
        0.5 * (0..n)
            .map(|i| self.points[i].cross2(&self.points[(i + 1) % n]))
            .sum::<f64>()
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }

    pub fn perimeter(&self) -> f64 {
        self.lines().iter().map(Line2::length).sum()
    }

    /// Area centroid; the vertex average when the area vanishes.
    pub fn centroid(&self) -> Result<Vector2<f64>> {
        if self.points.is_empty() {
            return Err(GeomError::InsufficientPoints { required: 1, actual: 0 });
        }
        let a = self.signed_area();
        if a.abs() <= DET_EPS {
            return average_of(&self.points);
        }
        let n = self.points.len();
        let mut acc = Vector2::zeros();
        for i in 0..n {
            let (p, q) = (self.points[i], self.points[(i + 1) % n]);
            acc += (p + q) * p.cross2(&q);
        }
        Ok(acc / (6.0 * a))
    }

    /// Even-odd rule; boundary points count as inside.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let lines = self.lines();
        if self.points.len() < 3 {
            return false;
        }
        if lines.iter().any(|l| l.is_point_on_line(p)) {
            return true;
        }
        let mut inside = false;
        for l in &lines {
            let (a, b) = (l.p1, l.p2);
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) / (b.y - a.y) * (b.x - a.x);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }

    pub fn bounding_rect(&self) -> Result<Rect2> {
        Rect2::from_points(&self.points)
    }

    pub fn translated(&self, offset: Vector2<f64>) -> Self {
        Self::new(self.points.iter().map(|p| p + offset).collect())
    }

    /// All turns share one sign (colinear runs allowed).
    pub fn is_convex(&self) -> bool {
        let n = self.points.len();
        if n < 3 {
            return false;
        }
        let mut sign = 0.0f64;
        for i in 0..n {
            let a = self.points[i];
            let b = self.points[(i + 1) % n];
            let c = self.points[(i + 2) % n];
            let turn = (b - a).cross2(&(c - b));
            if turn.abs() <= DET_EPS {
                continue;
            }
            if sign == 0.0 {
                sign = turn.signum();
            } else if turn.signum() != sign {
                return false;
            }
        }
        sign != 0.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle2 {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub c: Vector2<f64>,
}

impl Triangle2 {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Self {
        Self { a, b, c }
    }

    #[inline]
    pub fn signed_area(&self) -> f64 {
        0.5 * (self.b - self.a).cross2(&(self.c - self.a))
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
    #[inline]
    pub fn centroid(&self) -> Vector2<f64> {
        (self.a + self.b + self.c) / 3.0
    }

    /// Edges `a→b`, `b→c`, `c→a`.
    pub fn lines(&self) -> [Line2; 3] {
        [
            Line2::new(self.a, self.b),
            Line2::new(self.b, self.c),
            Line2::new(self.c, self.a),
        ]
    }

    /// Inclusive barycentric sign test.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let d1 = (self.b - self.a).cross2(&(p - self.a));
        let d2 = (self.c - self.b).cross2(&(p - self.b));
        let d3 = (self.a - self.c).cross2(&(p - self.c));
        let neg = d1 < -DET_EPS || d2 < -DET_EPS || d3 < -DET_EPS;
        let pos = d1 > DET_EPS || d2 > DET_EPS || d3 > DET_EPS;
        !(neg && pos)
    }

    pub fn to_polygon(&self) -> Polygon2 {
        Polygon2::new(vec![self.a, self.b, self.c])
    }

    /// Move every edge `distance` toward the opposite vertex and re-intersect.
    ///
    /// Returns `self` unchanged when two offset edges fail to meet or the
    /// inset is large enough to flip or collapse the triangle.
    pub fn inset(&self, distance: f64) -> Triangle2 {
        let verts = [self.a, self.b, self.c];
        // edge i runs verts[i] → verts[i+1]; verts[i+2] is opposite
        let mut edges = [Line2::new(self.a, self.a); 3];
        for i in 0..3 {
            let edge = Line2::new(verts[i], verts[(i + 1) % 3]);
            let mut n = edge.normal();
            if n.dot(&(verts[(i + 2) % 3] - edge.p1)) < 0.0 {
                n = -n;
            }
            edges[i] = edge.translated(n * distance);
        }
        // new corner i sits between edges i-1 and i
        let mut corners = [Vector2::zeros(); 3];
        for i in 0..3 {
            match edges[(i + 2) % 3].try_intersect(&edges[i]) {
                Some(p) => corners[i] = p,
                None => {
                    debug!(distance, "triangle inset: offset edges do not meet");
                    return *self;
                }
            }
        }
        let inset = Triangle2::new(corners[0], corners[1], corners[2]);
        // past the inradius the offset triangle comes back point-reflected
        let flipped = (inset.b - inset.a).dot(&(self.b - self.a)) <= 0.0;
        if flipped || inset.area() <= DIST_EPS * DIST_EPS {
            debug!(distance, "triangle inset: result would invert");
            return *self;
        }
        inset
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    fn square() -> Polygon2 {
        Polygon2::new(vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 4.0],
            vector![0.0, 4.0],
        ])
    }

    #[test]
    fn square_measures() {
        let sq = square();
        assert_eq!(sq.area(), 16.0);
        assert_eq!(sq.signed_area(), 16.0);
        assert_eq!(sq.perimeter(), 16.0);
        assert!((sq.centroid().unwrap() - vector![2.0, 2.0]).norm() < 1e-12);
        assert!(sq.is_convex());
        assert_eq!(sq.lines().len(), 4);
    }

    #[test]
    fn clockwise_area_is_positive() {
        let mut pts = square().points;
        pts.reverse();
        let cw = Polygon2::new(pts);
        assert_eq!(cw.area(), 16.0);
        assert_eq!(cw.signed_area(), -16.0);
    }

    #[test]
    fn contains_even_odd() {
        // L-shape
        let l = Polygon2::new(vec![
            vector![0.0, 0.0],
            vector![4.0, 0.0],
            vector![4.0, 1.0],
            vector![1.0, 1.0],
            vector![1.0, 4.0],
            vector![0.0, 4.0],
        ]);
        assert!(l.contains(vector![0.5, 3.0]));
        assert!(l.contains(vector![3.0, 0.5]));
        assert!(!l.contains(vector![3.0, 3.0]));
        assert!(l.contains(vector![4.0, 0.5]));
        assert!(!l.is_convex());
    }

    #[test]
    fn degenerate_polygons() {
        assert!(Polygon2::new(vec![]).centroid().is_err());
        let flat = Polygon2::new(vec![vector![0.0, 0.0], vector![2.0, 0.0], vector![4.0, 0.0]]);
        assert_eq!(flat.area(), 0.0);
        assert_eq!(flat.centroid().unwrap(), vector![2.0, 0.0]);
        assert!(!flat.is_convex());
    }

    #[test]
    fn triangle_inset_shrinks() {
        let t = Triangle2::new(vector![0.0, 0.0], vector![6.0, 0.0], vector![0.0, 6.0]);
        let s = t.inset(0.5);
        assert!(s.area() < t.area());
        // legs are axis-aligned, so the right-angle corner moves diagonally
        assert!((s.a - vector![0.5, 0.5]).norm() < 1e-9);
        for l in s.lines() {
            assert!(t.contains(l.p1));
        }
        // same answer for the opposite winding
        let r = Triangle2::new(t.a, t.c, t.b).inset(0.5);
        assert!((r.area() - s.area()).abs() < 1e-9);
    }

    #[test]
    fn triangle_inset_too_large_is_identity() {
        let t = Triangle2::new(vector![0.0, 0.0], vector![2.0, 0.0], vector![0.0, 2.0]);
        assert_eq!(t.inset(5.0), t);
        let flat = Triangle2::new(vector![0.0, 0.0], vector![1.0, 0.0], vector![2.0, 0.0]);
        assert_eq!(flat.inset(0.1), flat);
    }

    #[test]
    fn triangle_containment() {
        let t = Triangle2::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![0.0, 4.0]);
        assert!(t.contains(vector![1.0, 1.0]));
        assert!(t.contains(vector![2.0, 2.0]));
        assert!(!t.contains(vector![3.0, 3.0]));
        assert_eq!(t.centroid(), vector![4.0 / 3.0, 4.0 / 3.0]);
        assert_eq!(t.to_polygon().area(), 8.0);
    }
}
