//! Reproducible random 2D samples: points in rectangles and discs, and
//! star-shaped polygons.
//!
//! A [`DrawKey`] names one draw inside a stream. Its two halves become the
//! seed of a fresh `StdRng`, so draw `k` of a stream can be replayed on its
//! own without drawing `0..k` first.

use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use nalgebra::Vector2;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::circle::Circle2;
use super::polygon::Polygon2;
use super::rect::Rect2;
use super::types::Vec2Ext;

/// Address of one draw: `stream` picks the experiment, `draw` the sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DrawKey {
    pub stream: u64,
    pub draw: u64,
}

impl DrawKey {
    #[inline]
    pub fn new(stream: u64, draw: u64) -> Self {
        Self { stream, draw }
    }

    /// Next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            draw: self.draw.wrapping_add(1),
            ..self
        }
    }

    pub fn rng(self) -> StdRng {
        let mut seed = [0u8; 32];
        seed[..8].copy_from_slice(&self.stream.to_le_bytes());
        seed[8..16].copy_from_slice(&self.draw.to_le_bytes());
        // tag bytes keep the all-zero key away from the all-zero seed
        seed[16..].copy_from_slice(b"geomkern.rand.v1");
        StdRng::from_seed(seed)
    }
}

/// Star-shaped polygon sampler.
///
/// Vertices sit at evenly spaced headings around `center`, each heading
/// nudged by up to `heading_jitter` of the spacing and each radius scaled by
/// `1 + u` with `|u| <= radius_jitter`.
#[derive(Clone, Debug, PartialEq)]
pub struct StarSampler {
    /// Vertex count, drawn uniformly; values below 3 are raised to 3.
    pub vertices: RangeInclusive<usize>,
    pub center: Vector2<f64>,
    pub radius: f64,
    pub heading_jitter: f64,
    pub radius_jitter: f64,
    /// Start from a random heading instead of 0.
    pub spin: bool,
}

impl Default for StarSampler {
    fn default() -> Self {
        Self {
            vertices: 12..=12,
            center: Vector2::zeros(),
            radius: 1.0,
            heading_jitter: 0.3,
            radius_jitter: 0.25,
            spin: true,
        }
    }
}

impl StarSampler {
    pub fn with_vertices(mut self, vertices: RangeInclusive<usize>) -> Self {
        self.vertices = vertices;
        self
    }

    pub fn with_center(mut self, center: Vector2<f64>, radius: f64) -> Self {
        self.center = center;
        self.radius = radius;
        self
    }

    /// Counter-clockwise polygon for `key`; equal keys give equal polygons.
    pub fn draw(&self, key: DrawKey) -> Polygon2 {
        let mut rng = key.rng();
        let lo = (*self.vertices.start()).max(3);
        let hi = (*self.vertices.end()).max(lo);
        let n = rng.gen_range(lo..=hi);

        let spacing = TAU / n as f64;
        // under half a spacing, so consecutive headings never swap
        let wobble = self.heading_jitter.clamp(0.0, 0.49) * spacing;
        let stretch = self.radius_jitter.clamp(0.0, 0.99);
        let radius = self.radius.abs().max(1e-9);
        let phase = if self.spin { rng.gen_range(0.0..TAU) } else { 0.0 };

        let points = (0..n)
            .map(|k| {
                let heading = phase + k as f64 * spacing + rng.gen_range(-1.0..=1.0) * wobble;
                let r = radius * (1.0 + rng.gen_range(-1.0..=1.0) * stretch);
                self.center.offset_polar(heading, r)
            })
            .collect();
        Polygon2::new(points)
    }

    /// `count` consecutive draws starting at `first`.
    pub fn draws(&self, first: DrawKey, count: usize) -> impl Iterator<Item = Polygon2> + '_ {
        std::iter::successors(Some(first), |k| Some(k.next()))
            .take(count)
            .map(move |key| self.draw(key))
    }
}

/// Uniform point in the (inclusive) rectangle.
pub fn random_point_in_rect<R: Rng>(rng: &mut R, rect: &Rect2) -> Vector2<f64> {
    rect.point_at_fraction(rng.gen::<f64>(), rng.gen::<f64>())
}

/// Area-uniform point in the disc (`sqrt` radius correction).
pub fn random_point_in_circle<R: Rng>(rng: &mut R, circle: &Circle2) -> Vector2<f64> {
    let r = circle.radius * rng.gen::<f64>().sqrt();
    circle.center.offset_polar(rng.gen_range(0.0..TAU), r)
}
