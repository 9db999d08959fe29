//! Angle normalization, wrapped differences and interval containment.
//!
//! Radians are the working unit of the geometry kernels; the degree variants
//! exist for callers that store headings in degrees.

use std::f64::consts::{PI, TAU};

/// Normalize to `[0, 2π)`.
#[inline]
pub fn normalize_rad_2pi(a: f64) -> f64 {
    let r = a.rem_euclid(TAU);
    if r >= TAU {
        0.0
    } else {
        r
    }
}

/// Normalize to `[-π, π)`.
#[inline]
pub fn normalize_rad_pi(a: f64) -> f64 {
    let r = normalize_rad_2pi(a + PI) - PI;
    if r >= PI {
        -PI
    } else {
        r
    }
}

/// Normalize to `[0, 360)`.
#[inline]
pub fn normalize_deg_360(a: f64) -> f64 {
    let r = a.rem_euclid(360.0);
    if r >= 360.0 {
        0.0
    } else {
        r
    }
}

/// Normalize to `[-180, 180)`.
#[inline]
pub fn normalize_deg_180(a: f64) -> f64 {
    let r = normalize_deg_360(a + 180.0) - 180.0;
    if r >= 180.0 {
        -180.0
    } else {
        r
    }
}

/// Shortest signed turn from `from` to `to`, in `[-π, π)`.
#[inline]
pub fn wrapped_diff_rad(from: f64, to: f64) -> f64 {
    normalize_rad_pi(to - from)
}

/// Shortest signed turn from `from` to `to`, in `[-180, 180)`.
#[inline]
pub fn wrapped_diff_deg(from: f64, to: f64) -> f64 {
    normalize_deg_180(to - from)
}

/// Is `angle` inside the sweep starting at `start` and turning by `delta`?
///
/// - `delta > 0` sweeps anti-clockwise, `delta < 0` clockwise.
/// - `|delta| >= 2π` covers the full circle.
/// - Both ends are inclusive.
#[inline]
pub fn is_angle_in_range_rad(angle: f64, start: f64, delta: f64) -> bool {
    is_angle_in_range_rad_eps(angle, start, delta, 0.0)
}

/// `is_angle_in_range_rad` with an angular slack `eps` on both ends.
pub fn is_angle_in_range_rad_eps(angle: f64, start: f64, delta: f64, eps: f64) -> bool {
    if delta.abs() >= TAU {
        return true;
    }
    let (offset, sweep) = if delta >= 0.0 {
        (normalize_rad_2pi(angle - start), delta)
    } else {
        (normalize_rad_2pi(start - angle), -delta)
    };
    offset <= sweep + eps || offset >= TAU - eps
}

/// Degree variant of `is_angle_in_range_rad`.
#[inline]
pub fn is_angle_in_range_deg(angle: f64, start: f64, delta: f64) -> bool {
    is_angle_in_range_rad(angle.to_radians(), start.to_radians(), delta.to_radians())
}
