//! Print a few replayable star polygons with their area, perimeter and
//! bounding box, for a quick visual sanity check of the sampler.
//!
//! Usage:
//!   cargo run -p geomkern --example radial_polygons -- [stream]

use geomkern::geom2::rand::{DrawKey, StarSampler};
use nalgebra::Vector2;

fn main() {
    let stream = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(2025);
    let sampler = StarSampler::default()
        .with_vertices(5..=12)
        .with_center(Vector2::zeros(), 2.0);
    for (index, poly) in sampler.draws(DrawKey::new(stream, 0), 5).enumerate() {
        let bounds = match poly.bounding_rect() {
            Ok(r) => format!("{:.2}×{:.2}", r.width(), r.height()),
            Err(e) => format!("n/a ({e})"),
        };
        println!(
            "sample {index}: n={}, area={:.3}, perimeter={:.3}, convex={}, bounds={bounds}",
            poly.len(),
            poly.area(),
            poly.perimeter(),
            poly.is_convex()
        );
    }
}
