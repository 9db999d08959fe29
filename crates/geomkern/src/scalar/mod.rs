//! Scalar utilities over any ordered numeric type.
//!
//! Purpose
//! - One generic `Numeric` bound shared by the range type and the array
//!   engines, monomorphized at compile time.
//! - Clamp / wrap / modulo / linear remap with explicit failure on zero or
//!   negative denominators.
//!
//! Conventions
//! - Inverted `min`/`max` pairs are swapped, never rejected.
//! - Mixed integer/float math (`lerp`, `scale_to_range`) runs in `f64` and
//!   casts back with saturation (`Numeric::cast_from_f64`).

pub mod angle;
pub mod range;

pub use angle::{
    is_angle_in_range_deg, is_angle_in_range_rad, is_angle_in_range_rad_eps, normalize_deg_180,
    normalize_deg_360, normalize_rad_2pi, normalize_rad_pi, wrapped_diff_deg, wrapped_diff_rad,
};
pub use range::{NumericRange, RangeBehavior};

use std::fmt::Debug;

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

use crate::error::{GeomError, Result};

/// Numeric element bound: arithmetic, ordering, casts and bounds.
///
/// Blanket-implemented for every primitive integer and float type.
pub trait Numeric: Num + NumCast + Bounded + Copy + PartialOrd + Debug + 'static {
    /// Lossy conversion to `f64` (NaN if the value is not representable).
    #[inline]
    fn as_f64(self) -> f64 {
        ToPrimitive::to_f64(&self).unwrap_or(f64::NAN)
    }

    /// Cast from `f64`, saturating at the type bounds; NaN maps to zero for
    /// types that cannot hold it.
    #[inline]
    fn cast_from_f64(v: f64) -> Self {
        match <Self as NumCast>::from(v) {
            Some(x) => x,
            None if v.is_nan() => Self::zero(),
            None if v > 0.0 => Self::max_value(),
            None => Self::min_value(),
        }
    }
}

impl<T> Numeric for T where T: Num + NumCast + Bounded + Copy + PartialOrd + Debug + 'static {}

#[inline]
pub(crate) fn ordered<T: PartialOrd>(a: T, b: T) -> (T, T) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// `value mod modulus` in `[0, modulus)`.
///
/// Errors with `NonPositiveModulus` if `modulus <= 0`.
pub fn modulo<T: Numeric>(value: T, modulus: T) -> Result<T> {
    if !(modulus > T::zero()) {
        return Err(GeomError::NonPositiveModulus(modulus.as_f64()));
    }
    let mut r = value % modulus;
    if r < T::zero() {
        r = r + modulus;
    }
    // float rounding: tiny negative remainders land exactly on the modulus
    if r >= modulus {
        r = T::zero();
    }
    Ok(r)
}

/// Saturate `value` into `[min, max]` (bounds swapped if inverted).
#[inline]
pub fn clamp<T: Numeric>(value: T, min: T, max: T) -> T {
    let (lo, hi) = ordered(min, max);
    if value < lo {
        lo
    } else if value > hi {
        hi
    } else {
        value
    }
}

/// Wrap `value` into `[min, max)` with modulo semantics.
///
/// Errors with `ZeroSpan` if `min == max`.
pub fn wrap_to_range<T: Numeric>(value: T, min: T, max: T) -> Result<T> {
    let (lo, hi) = ordered(min, max);
    if !(hi > lo) {
        return Err(GeomError::ZeroSpan {
            min: lo.as_f64(),
            max: hi.as_f64(),
        });
    }
    Ok(wrap_within(value, lo, hi))
}

/// Wrap assuming `lo < hi`. Never subtracts below `lo`, so unsigned types are safe.
pub(crate) fn wrap_within<T: Numeric>(value: T, lo: T, hi: T) -> T {
    let span = hi - lo;
    let r = if value >= lo {
        lo + (value - lo) % span
    } else {
        let d = (lo - value) % span;
        if d == T::zero() {
            lo
        } else {
            hi - d
        }
    };
    if r >= hi || r < lo {
        lo
    } else {
        r
    }
}

/// Linear remap of `value` from `[src_min, src_max]` to `[dst_min, dst_max]`.
///
/// Errors with `OutOfRange` if `value` lies outside the source interval and
/// with `ZeroSpan` if the source interval is empty.
pub fn scale_to_range<T: Numeric>(value: T, src_min: T, src_max: T, dst_min: T, dst_max: T) -> Result<T> {
    let (lo, hi) = ordered(src_min, src_max);
    if value < lo || value > hi {
        return Err(GeomError::OutOfRange {
            value: value.as_f64(),
            min: lo.as_f64(),
            max: hi.as_f64(),
        });
    }
    scale_to_range_unchecked(value, src_min, src_max, dst_min, dst_max)
}

/// Linear remap without the bounds check: values outside the source interval
/// extrapolate. Still errors with `ZeroSpan` on an empty source interval.
pub fn scale_to_range_unchecked<T: Numeric>(
    value: T,
    src_min: T,
    src_max: T,
    dst_min: T,
    dst_max: T,
) -> Result<T> {
    let span = src_max.as_f64() - src_min.as_f64();
    if span == 0.0 {
        return Err(GeomError::ZeroSpan {
            min: src_min.as_f64(),
            max: src_max.as_f64(),
        });
    }
    let frac = (value.as_f64() - src_min.as_f64()) / span;
    Ok(lerp(dst_min, dst_max, frac))
}

/// `a + (b - a) * t`, evaluated in `f64`.
#[inline]
pub fn lerp<T: Numeric>(a: T, b: T, t: f64) -> T {
    let (a, b) = (a.as_f64(), b.as_f64());
    T::cast_from_f64(a + (b - a) * t)
}

/// Inverse of `lerp`: the `t` for which `lerp(a, b, t) == value`.
pub fn inverse_lerp<T: Numeric>(a: T, b: T, value: T) -> Result<f64> {
    let span = b.as_f64() - a.as_f64();
    if span == 0.0 {
        return Err(GeomError::ZeroSpan {
            min: a.as_f64(),
            max: b.as_f64(),
        });
    }
    Ok((value.as_f64() - a.as_f64()) / span)
}

/// `|a - b| <= tol`.
#[inline]
pub fn approx_eq<T: Numeric>(a: T, b: T, tol: T) -> bool {
    let diff = if a > b { a - b } else { b - a };
    diff <= tol
}

/// Inclusive containment, bounds swapped if inverted.
#[inline]
pub fn is_in_range<T: Numeric>(value: T, min: T, max: T) -> bool {
    let (lo, hi) = ordered(min, max);
    value >= lo && value <= hi
}
