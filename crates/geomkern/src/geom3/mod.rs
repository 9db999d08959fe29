//! 3D geometry kernel.
//!
//! Purpose
//! - Mirror of `geom2` one dimension up: line, plane, sphere, sphere wedge,
//!   arc, box, polyline and Béziers over `nalgebra::Vector3<f64>`.
//! - Orientation helpers: azimuth/elevation, Rodrigues rotation, slerp,
//!   circles in arbitrary planes, and the `MagnitudeSphere3` heightmap.
//!
//! Conventions
//! - Z is up for `Vec3Ext`, `Sphere3`, `SphereWedge3` and `MagnitudeSphere3`.
//!   `PolarOffset3` also offers separately named Y-up conversions.
//! - Construction-time violations (non-positive sphere radius, zero axis,
//!   degenerate plane frame) return `GeomError`; degenerate geometry returns
//!   `None`/empty.

mod box3;
mod curve;
mod line;
mod magnitude;
mod plane;
mod polar;
mod polyline;
mod sphere;
mod types;

pub use box3::Box3;
pub use curve::{Arc3, CubicBezier3, Curve3, QuadraticBezier3};
pub use line::Line3;
pub use magnitude::MagnitudeSphere3;
pub use plane::Plane3;
pub use polar::PolarOffset3;
pub use polyline::Polyline3;
pub use sphere::{Sphere3, SphereWedge3};
pub use types::{average_of, point_on_circle, slerp, Vec3Ext};
