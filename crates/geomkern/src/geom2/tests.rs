use super::*;
use nalgebra::vector;
use std::f64::consts::{FRAC_PI_2, PI};

#[test]
fn parallel_lines_do_not_intersect() {
    let a = Line2::new(vector![0.0, 0.0], vector![4.0, 0.0]);
    let b = Line2::new(vector![0.0, 1.0], vector![4.0, 1.0]);
    assert!(a.try_intersect(&b).is_none());
    assert!(!a.does_intersect(&b));
}

#[test]
fn line_intersection_is_symmetric() {
    let a = Line2::new(vector![0.0, 0.0], vector![4.0, 4.0]);
    let b = Line2::new(vector![0.0, 4.0], vector![4.0, 0.0]);
    let p = a.try_intersect(&b).unwrap();
    let q = b.try_intersect(&a).unwrap();
    assert!((p - q).norm() < 1e-12);
    assert!((p - vector![2.0, 2.0]).norm() < 1e-12);
}

#[test]
fn infinite_versus_bounded() {
    let a = Line2::new(vector![0.0, 0.0], vector![1.0, 0.0]);
    let b = Line2::new(vector![3.0, -1.0], vector![3.0, 1.0]);
    assert_eq!(a.try_intersect(&b), Some(vector![3.0, 0.0]));
    assert!(a.segment_intersection(&b).is_none());
    assert!(!a.does_intersect(&b));
}

#[test]
fn colinear_overlap_falls_back_to_boxes() {
    let a = Line2::new(vector![0.0, 0.0], vector![2.0, 0.0]);
    let b = Line2::new(vector![1.0, 0.0], vector![3.0, 0.0]);
    let c = Line2::new(vector![5.0, 0.0], vector![6.0, 0.0]);
    assert!(a.does_intersect(&b));
    assert!(a.segment_intersection(&b).is_none());
    assert!(!a.does_intersect(&c));
}

#[test]
fn circle_pair_is_symmetric_as_a_set() {
    let a = Circle2::new(vector![0.0, 0.0], 3.0).unwrap();
    let b = Circle2::new(vector![2.0, 1.0], 2.5).unwrap();
    let ab = a.intersect_circle(&b);
    let ba = b.intersect_circle(&a);
    assert_eq!(ab.len(), 2);
    assert_eq!(ba.len(), 2);
    for p in &ab {
        assert!(ba.iter().any(|q| (p - q).norm() < 1e-9));
        assert!((p.norm() - 3.0).abs() < 1e-9);
    }
}

#[test]
fn arc_and_sector_share_the_angle_rule() {
    let arc = Arc2::new(vector![0.0, 0.0], 2.0, 3.0 * FRAC_PI_2, PI).unwrap();
    // sweep crosses the wrap at 2π: covers the right half-plane
    assert!(arc.contains_angle(0.0));
    assert!(arc.contains_angle(-FRAC_PI_2));
    assert!(!arc.contains_angle(PI));
    let sector = AnnularSector2::new(arc.center(), 1.0, 2.0, arc.start_angle(), arc.delta_angle()).unwrap();
    assert!(sector.contains(vector![1.5, 0.0]));
    assert!(!sector.contains(vector![-1.5, 0.0]));
}

#[test]
fn rect_polygon_agree() {
    let r = Rect2::new(vector![1.0, 1.0], vector![5.0, 3.0]);
    let poly = r.to_polygon();
    assert_eq!(poly.area(), r.area());
    assert!(poly.contains(r.center()));
    assert_eq!(poly.bounding_rect().unwrap(), r);
    assert_eq!(poly.perimeter(), 12.0);
}

#[test]
fn curve_sampling_feeds_polyline() {
    let arc = Arc2::new(vector![0.0, 0.0], 1.0, 0.0, PI).unwrap();
    let pl = arc.to_polyline(256);
    // chord sum approaches the arc length from below
    assert!(pl.length() < arc.length());
    assert!((pl.length() - arc.length()).abs() < 1e-4);
    let half = pl.point_at_fraction(0.5).unwrap();
    assert!((half - vector![0.0, 1.0]).norm() < 1e-9);
}

#[test]
fn inset_triangle_stays_similar() {
    let t = Triangle2::new(vector![0.0, 0.0], vector![4.0, 0.0], vector![2.0, 3.0]);
    let s = t.inset(0.25);
    let ratio = s.area() / t.area();
    assert!(ratio > 0.0 && ratio < 1.0);
    // centroid stays inside the shrunken triangle
    assert!(s.contains(t.centroid()));
}
