//! Computational-geometry and numeric-primitives kernel.
//!
//! Layers, bottom up:
//! - `scalar`: numeric trait, modulo/clamp/wrap/scale helpers, angle wrapping
//!   and wrap-aware angle ranges, `NumericRange`.
//! - `array`: resizable 1D series and 2D grids with fractional-index and
//!   bilinear interpolation, Bézier evaluation over control arrays.
//! - `geom2` / `geom3`: immutable value types and closed-form algorithms.
//!
//! Error policy
//! - Contract violations return `GeomError` (see `error`).
//! - Degenerate geometry is an expected outcome: `None`, an empty `Vec`, or a
//!   documented fallback, never `NaN`.
//!
//! Every call is pure and synchronous; only the `array` containers mutate in
//! place.

pub mod array;
pub mod cfg;
pub mod error;
pub mod geom2;
pub mod geom3;
pub mod scalar;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::array::{Edge, NumericArray1D, NumericArray2D};
    pub use crate::cfg::GeomCfg;
    pub use crate::error::{GeomError, Result};
    pub use crate::geom2::{
        Anchor, AnnularSector2, Arc2, Circle2, CubicBezier2, Curve2, Line2, PolarOffset2, Polygon2, Polyline2,
        QuadraticBezier2, Rect2, Triangle2, Vec2Ext,
    };
    pub use crate::geom3::{
        Arc3, Box3, CubicBezier3, Curve3, Line3, MagnitudeSphere3, Plane3, PolarOffset3, Polyline3,
        QuadraticBezier3, Sphere3, SphereWedge3, Vec3Ext,
    };
    pub use crate::scalar::{Numeric, NumericRange, RangeBehavior};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
