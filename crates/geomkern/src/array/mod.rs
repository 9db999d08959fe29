//! Resizable numeric arrays (1D series and 2D grids).
//!
//! Purpose
//! - Dense, single-owner buffers over any `Numeric` element type.
//! - Fractional-index interpolation is the building block for every resample
//!   operation elsewhere (polylines, heightmaps, tiles).
//!
//! Conventions
//! - Fractions run over `[0, 1]` and map onto index `[0, len - 1]`.
//! - 2D storage is row-major: `(x, y)` lives at `y * width + x`.
//! - These are the only in-place mutable containers in the crate; share them
//!   across threads only behind external synchronization.

mod array1d;
mod array2d;
mod bezier;

pub use array1d::{NumericArray1D, MAX_LEN_1D};
pub use array2d::{Edge, NumericArray2D, MAX_DIM_2D};
pub use bezier::{bezier_eval, BezierSample};

/// Map a fraction in `[0, 1]` onto the bracketing index pair of a length-`len`
/// axis. Non-finite fractions read as `0`; out-of-range ones are clamped.
#[inline]
pub(crate) fn bracket(fraction: f64, len: usize) -> (usize, usize, f64) {
    let f = if fraction.is_nan() {
        0.0
    } else {
        fraction.clamp(0.0, 1.0)
    };
    let last = len.saturating_sub(1);
    let pos = f * last as f64;
    let i0 = (pos.floor() as usize).min(last);
    let i1 = (i0 + 1).min(last);
    (i0, i1, pos - i0 as f64)
}

/// Fraction of index `i` on a length-`len` axis (`0` for single-sample axes).
#[inline]
pub(crate) fn axis_fraction(i: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        i as f64 / (len - 1) as f64
    }
}
