//! Closed-form 2D intersection solvers.
//!
//! - `line_line_intersection`: 2×2 linear solve on the infinite lines.
//! - `segments_intersect` / `segment_intersection`: bounded variants with a
//!   colinear bounding-box fallback.
//! - `circle_line_intersections`: quadratic in the line parameter.
//! - `circle_circle_intersections`: radical-line construction.
//! - `tangent_points`: tangents from an external point.
//!
//! Degenerate configurations (parallel, concentric, inside-the-circle) are
//! expected outcomes and come back as `None` or an empty `Vec`.

use nalgebra::Vector2;

use super::circle::Circle2;
use super::line::Line2;
use super::types::Vec2Ext;
use crate::cfg::GeomCfg;

/// Line parameters `(t, u)` of the crossing point on `a` and `b`.
fn crossing_params(a: &Line2, b: &Line2, cfg: GeomCfg) -> Option<(f64, f64)> {
    let r = a.direction();
    let s = b.direction();
    let det = r.cross2(&s);
    if det.abs() <= cfg.eps_det * r.norm() * s.norm() {
        return None;
    }
    let qp = b.p1 - a.p1;
    Some((qp.cross2(&s) / det, qp.cross2(&r) / det))
}

#[inline]
fn within_unit(x: f64, eps: f64) -> bool {
    x >= -eps && x <= 1.0 + eps
}

/// Intersection of the infinite lines through `a` and `b`.
///
/// Returns `None` when the determinant vanishes (parallel, colinear or
/// zero-length input).
pub fn line_line_intersection(a: &Line2, b: &Line2, cfg: GeomCfg) -> Option<Vector2<f64>> {
    let (t, _) = crossing_params(a, b, cfg)?;
    Some(a.fraction_point(t))
}

/// Crossing point of the two segments, if both parameters land in `[0, 1]`.
///
/// Colinear overlaps have no single crossing point and return `None`; use
/// `segments_intersect` to detect them.
pub fn segment_intersection(a: &Line2, b: &Line2, cfg: GeomCfg) -> Option<Vector2<f64>> {
    let (t, u) = crossing_params(a, b, cfg)?;
    if within_unit(t, cfg.eps_param) && within_unit(u, cfg.eps_param) {
        Some(a.fraction_point(t))
    } else {
        None
    }
}

/// Do the segments touch? Falls back to bounding-box overlap for colinear pairs.
pub fn segments_intersect(a: &Line2, b: &Line2, cfg: GeomCfg) -> bool {
    if let Some((t, u)) = crossing_params(a, b, cfg) {
        return within_unit(t, cfg.eps_param) && within_unit(u, cfg.eps_param);
    }
    // Parallel: only colinear segments can still touch.
    let r = a.direction();
    let off = b.p1 - a.p1;
    let scale = r.norm().max(off.norm()).max(1.0);
    let colinear = if r.norm() > 0.0 {
        r.cross2(&off).abs() <= cfg.eps_dist * scale
    } else {
        b.is_point_on_line(a.p1)
    };
    colinear && boxes_overlap(a, b, cfg.eps_dist)
}

fn boxes_overlap(a: &Line2, b: &Line2, eps: f64) -> bool {
    let (amin, amax) = (a.p1.inf(&a.p2), a.p1.sup(&a.p2));
    let (bmin, bmax) = (b.p1.inf(&b.p2), b.p1.sup(&b.p2));
    amin.x <= bmax.x + eps && bmin.x <= amax.x + eps && amin.y <= bmax.y + eps && bmin.y <= amax.y + eps
}

/// Line parameters where the infinite line through `line` meets the circle.
///
/// Empty for a miss or a zero-length line; one value for a tangent (within
/// `eps_dist`); otherwise two, ascending.
fn circle_line_params(circle: &Circle2, line: &Line2, cfg: GeomCfg) -> Vec<f64> {
    let len = line.length();
    if len <= cfg.eps_det {
        return Vec::new();
    }
    let u = line.direction() / len;
    let f = line.p1 - circle.center;
    // |f + s u|² = r²  →  s² + 2 (f·u) s + (f·f − r²) = 0 ; quarter discriminant:
    let b = f.dot(&u);
    let c = f.norm_squared() - circle.radius * circle.radius;
    let disc = b * b - c;
    let tol = cfg.eps_dist * circle.radius.abs().max(1.0);
    if disc < -tol {
        Vec::new()
    } else if disc <= tol {
        vec![-b / len]
    } else {
        let root = disc.sqrt();
        vec![(-b - root) / len, (-b + root) / len]
    }
}

/// Points where the infinite line through `line` meets the circle.
pub fn circle_infinite_line_intersections(circle: &Circle2, line: &Line2, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    circle_line_params(circle, line, cfg)
        .into_iter()
        .map(|t| line.fraction_point(t))
        .collect()
}

/// Points where the segment meets the circle.
pub fn circle_line_intersections(circle: &Circle2, line: &Line2, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    circle_line_params(circle, line, cfg)
        .into_iter()
        .filter(|&t| within_unit(t, cfg.eps_param))
        .map(|t| line.fraction_point(t))
        .collect()
}

/// Intersection points of two circles.
///
/// Empty when the circles are separate, nested, or concentric (concentric
/// equal circles would intersect everywhere; that case is rejected rather
/// than enumerated). Tangent circles yield one point.
pub fn circle_circle_intersections(a: &Circle2, b: &Circle2, cfg: GeomCfg) -> Vec<Vector2<f64>> {
    let dv = b.center - a.center;
    let d = dv.norm();
    if d <= cfg.eps_dist {
        return Vec::new();
    }
    let (ra, rb) = (a.radius, b.radius);
    if d > ra + rb + cfg.eps_dist || d < (ra - rb).abs() - cfg.eps_dist {
        return Vec::new();
    }
    // distance from a's centre to the radical line
    let x = (d * d + ra * ra - rb * rb) / (2.0 * d);
    let h2 = ra * ra - x * x;
    let axis = dv / d;
    let base = a.center + axis * x;
    // same threshold seen from either circle
    if h2 <= cfg.eps_dist * ra.abs().max(rb.abs()).max(1.0) {
        return vec![base];
    }
    let h = h2.sqrt();
    let n = axis.left_normal();
    vec![base + n * h, base - n * h]
}

/// Tangent points on `circle` seen from `p`.
///
/// Empty when `p` is inside the circle; otherwise the two points at
/// `±acos(r / d)` around the centre-to-point heading (they coincide when `p`
/// lies on the circle).
pub fn tangent_points(circle: &Circle2, p: Vector2<f64>) -> Vec<Vector2<f64>> {
    let v = p - circle.center;
    let d = v.norm();
    if d < circle.radius || d == 0.0 {
        return Vec::new();
    }
    let heading = v.heading();
    let spread = (circle.radius / d).clamp(-1.0, 1.0).acos();
    vec![
        circle.center.offset_polar(heading + spread, circle.radius),
        circle.center.offset_polar(heading - spread, circle.radius),
    ]
}
