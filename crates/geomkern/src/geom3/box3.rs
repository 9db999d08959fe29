//! Axis-aligned boxes in 3D, stored by centre and extents.

use nalgebra::Vector3;

use crate::error::{GeomError, Result};

/// Axis-aligned box by centre and extents: `width` along X, `height` along
/// Y, `length` along Z. Extents are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Box3 {
    pub center: Vector3<f64>,
    pub width: f64,
    pub height: f64,
    pub length: f64,
}

impl Box3 {
    /// Negative extents are taken by magnitude.
    pub fn new(center: Vector3<f64>, width: f64, height: f64, length: f64) -> Self {
        Self {
            center,
            width: width.abs(),
            height: height.abs(),
            length: length.abs(),
        }
    }

    pub fn from_min_max(a: Vector3<f64>, b: Vector3<f64>) -> Self {
        let (lo, hi) = (a.inf(&b), a.sup(&b));
        let size = hi - lo;
        Self::new((lo + hi) * 0.5, size.x, size.y, size.z)
    }

    pub fn from_points(points: &[Vector3<f64>]) -> Result<Self> {
        let (first, rest) = points
            .split_first()
            .ok_or(GeomError::InsufficientPoints { required: 1, actual: 0 })?;
        let (lo, hi) = rest
            .iter()
            .fold((*first, *first), |(lo, hi), p| (lo.inf(p), hi.sup(p)));
        Ok(Self::from_min_max(lo, hi))
    }

    #[inline]
    pub fn size(&self) -> Vector3<f64> {
        Vector3::new(self.width, self.height, self.length)
    }
    #[inline]
    pub fn min_corner(&self) -> Vector3<f64> {
        self.center - self.size() * 0.5
    }
    #[inline]
    pub fn max_corner(&self) -> Vector3<f64> {
        self.center + self.size() * 0.5
    }
    #[inline]
    pub fn volume(&self) -> f64 {
        self.width * self.height * self.length
    }

    /// All eight corners; bit `i` of the index selects max on axis `i`.
    pub fn corners(&self) -> [Vector3<f64>; 8] {
        let (lo, hi) = (self.min_corner(), self.max_corner());
        std::array::from_fn(|i| {
            Vector3::new(
                if i & 1 == 0 { lo.x } else { hi.x },
                if i & 2 == 0 { lo.y } else { hi.y },
                if i & 4 == 0 { lo.z } else { hi.z },
            )
        })
    }

    /// Inclusive containment.
    pub fn contains(&self, p: Vector3<f64>) -> bool {
        let (lo, hi) = (self.min_corner(), self.max_corner());
        (0..3).all(|i| p[i] >= lo[i] && p[i] <= hi[i])
    }

    /// Positive-volume overlap; touching faces do not count.
    pub fn intersects(&self, other: &Box3) -> bool {
        let (alo, ahi) = (self.min_corner(), self.max_corner());
        let (blo, bhi) = (other.min_corner(), other.max_corner());
        (0..3).all(|i| alo[i] < bhi[i] && blo[i] < ahi[i])
    }

    pub fn expanded_to_include(&self, p: Vector3<f64>) -> Self {
        Self::from_min_max(self.min_corner().inf(&p), self.max_corner().sup(&p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::vector;

    #[test]
    fn corners_and_volume() {
        let b = Box3::from_min_max(vector![2.0, 0.0, 1.0], vector![0.0, 4.0, -1.0]);
        assert_eq!(b.center, vector![1.0, 2.0, 0.0]);
        assert_eq!(b.volume(), 16.0);
        let c = b.corners();
        assert_eq!(c[0], vector![0.0, 0.0, -1.0]);
        assert_eq!(c[7], vector![2.0, 4.0, 1.0]);
        assert!(c.iter().all(|p| b.contains(*p)));
    }

    #[test]
    fn overlap_and_growth() {
        let a = Box3::new(Vector3::zeros(), 2.0, 2.0, 2.0);
        let b = Box3::new(vector![1.5, 0.0, 0.0], 2.0, 2.0, 2.0);
        let touching = Box3::new(vector![2.0, 0.0, 0.0], 2.0, 2.0, 2.0);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&touching));
        let g = a.expanded_to_include(vector![3.0, 0.0, 0.0]);
        assert_eq!(g.max_corner().x, 3.0);
        assert_eq!(g.min_corner().x, -1.0);
        assert!(Box3::from_points(&[]).is_err());
    }
}
