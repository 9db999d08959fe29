//! 2D geometry kernel.
//!
//! Purpose
//! - Immutable value types (line, circle, arc, annular sector, polygon,
//!   triangle, rectangle, polyline, Béziers) over `nalgebra::Vector2<f64>`.
//! - Closed-form intersection, containment, inset and curve evaluation.
//!
//! Conventions
//! - Points and offsets are both `Vector2<f64>`; `Vec2Ext` adds the kernel
//!   operations.
//! - Angles are radians, 0 along +X, positive anti-clockwise.
//! - Degenerate configurations come back as `None`/empty; only contract
//!   violations return `GeomError`.
//! - Tolerances come from `crate::cfg`; the solvers take a `GeomCfg` so
//!   callers can tighten or loosen them.

mod arc;
mod circle;
mod curve;
mod line;
mod polygon;
mod polyline;
pub mod rand;
mod rect;
pub mod solvers;
mod types;

pub use arc::{AnnularSector2, Arc2};
pub use circle::Circle2;
pub use curve::{CubicBezier2, Curve2, QuadraticBezier2};
pub use line::Line2;
pub use polygon::{Polygon2, Triangle2};
pub use polyline::Polyline2;
pub use rect::{Anchor, Rect2};
pub use types::{average_of, PolarOffset2, Vec2Ext};

#[cfg(test)]
mod tests;
