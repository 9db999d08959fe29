//! `NumericRange`: a `[min, max]` interval with wrap or limit behavior.
//!
//! The predefined angle ranges are the reference intervals every angle-bearing
//! shape uses, so wrap semantics stay identical across the kernels.

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use super::{clamp, ordered, wrap_within, Numeric};
use crate::error::{GeomError, Result};

/// How out-of-range values are brought back into a `NumericRange`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeBehavior {
    /// Modulo wrap into `[min, max)`.
    Wrap,
    /// Saturate to the nearest bound.
    Limit,
}

/// Interval `[min, max]` with a wrap/limit behavior.
///
/// Invariants:
/// - `min <= max` (constructor swaps inverted bounds).
/// - A `Wrap` range has `min < max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NumericRange<T> {
    min: T,
    max: T,
    behavior: RangeBehavior,
}

impl<T: Numeric> NumericRange<T> {
    /// Build a range; errors with `ZeroSpan` for an empty `Wrap` range.
    pub fn new(a: T, b: T, behavior: RangeBehavior) -> Result<Self> {
        let (min, max) = ordered(a, b);
        if behavior == RangeBehavior::Wrap && !(max > min) {
            return Err(GeomError::ZeroSpan {
                min: min.as_f64(),
                max: max.as_f64(),
            });
        }
        Ok(Self { min, max, behavior })
    }

    /// Saturating range; never fails.
    pub fn limit(a: T, b: T) -> Self {
        let (min, max) = ordered(a, b);
        Self {
            min,
            max,
            behavior: RangeBehavior::Limit,
        }
    }

    /// Wrapping range; errors with `ZeroSpan` if `a == b`.
    pub fn wrap(a: T, b: T) -> Result<Self> {
        Self::new(a, b, RangeBehavior::Wrap)
    }

    #[inline]
    pub fn min(&self) -> T {
        self.min
    }
    #[inline]
    pub fn max(&self) -> T {
        self.max
    }
    #[inline]
    pub fn behavior(&self) -> RangeBehavior {
        self.behavior
    }
    #[inline]
    pub fn span(&self) -> T {
        self.max - self.min
    }

    /// Inclusive containment.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }

    /// Bring `value` into the range according to the behavior.
    pub fn apply(&self, value: T) -> T {
        match self.behavior {
            RangeBehavior::Limit => clamp(value, self.min, self.max),
            RangeBehavior::Wrap => wrap_within(value, self.min, self.max),
        }
    }

    /// Position of `value` as a fraction of the span (after `apply`).
    /// An empty `Limit` range reports `0.0`.
    pub fn fraction_of(&self, value: T) -> f64 {
        let span = self.span().as_f64();
        if span == 0.0 {
            return 0.0;
        }
        (self.apply(value).as_f64() - self.min.as_f64()) / span
    }

    /// Value at `fraction` of the span, passed through `apply`.
    pub fn value_at_fraction(&self, fraction: f64) -> T {
        let v = self.min.as_f64() + self.span().as_f64() * fraction;
        self.apply(T::cast_from_f64(v))
    }
}

impl NumericRange<f64> {
    /// Degrees `[0, 360)`.
    pub const DEG_0_360: Self = Self {
        min: 0.0,
        max: 360.0,
        behavior: RangeBehavior::Wrap,
    };
    /// Degrees `[-180, 180)`.
    pub const DEG_PM_180: Self = Self {
        min: -180.0,
        max: 180.0,
        behavior: RangeBehavior::Wrap,
    };
    /// Radians `[0, 2π)`.
    pub const RAD_0_2PI: Self = Self {
        min: 0.0,
        max: TAU,
        behavior: RangeBehavior::Wrap,
    };
    /// Radians `[-π, π)`.
    pub const RAD_PM_PI: Self = Self {
        min: -PI,
        max: PI,
        behavior: RangeBehavior::Wrap,
    };
    /// Radians `[-π/2, π/2]`, saturating (elevation).
    pub const RAD_PM_HALF_PI: Self = Self {
        min: -FRAC_PI_2,
        max: FRAC_PI_2,
        behavior: RangeBehavior::Limit,
    };
    /// `[0, 1]`, saturating.
    pub const UNIT: Self = Self {
        min: 0.0,
        max: 1.0,
        behavior: RangeBehavior::Limit,
    };
}
