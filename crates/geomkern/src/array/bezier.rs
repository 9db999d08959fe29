//! Closed-form Bézier evaluation over scalar control values.
//!
//! The control count picks the basis: 3 → quadratic, 4 → cubic, 5 → quartic.
//! Any other count is a contract violation, never a silent fallback.

use crate::error::{GeomError, Result};
use crate::scalar::Numeric;

/// Position and derivatives of a scalar Bézier at one parameter value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierSample {
    pub value: f64,
    pub first_derivative: f64,
    pub second_derivative: f64,
}

/// Evaluate the Bézier defined by `ctrl` at `t` (clamped to `[0, 1]`).
pub fn bezier_eval<T: Numeric>(ctrl: &[T], t: f64) -> Result<BezierSample> {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let s = 1.0 - t;
    let p: Vec<f64> = ctrl.iter().map(|v| v.as_f64()).collect();
    match p.as_slice() {
        &[p0, p1, p2] => Ok(BezierSample {
            value: s * s * p0 + 2.0 * s * t * p1 + t * t * p2,
            first_derivative: 2.0 * s * (p1 - p0) + 2.0 * t * (p2 - p1),
            second_derivative: 2.0 * (p2 - 2.0 * p1 + p0),
        }),
        &[p0, p1, p2, p3] => Ok(BezierSample {
            value: s * s * s * p0 + 3.0 * s * s * t * p1 + 3.0 * s * t * t * p2 + t * t * t * p3,
            first_derivative: 3.0 * s * s * (p1 - p0)
                + 6.0 * s * t * (p2 - p1)
                + 3.0 * t * t * (p3 - p2),
            second_derivative: 6.0 * s * (p2 - 2.0 * p1 + p0) + 6.0 * t * (p3 - 2.0 * p2 + p1),
        }),
        &[p0, p1, p2, p3, p4] => {
            let (s2, t2) = (s * s, t * t);
            Ok(BezierSample {
                value: s2 * s2 * p0
                    + 4.0 * s2 * s * t * p1
                    + 6.0 * s2 * t2 * p2
                    + 4.0 * s * t2 * t * p3
                    + t2 * t2 * p4,
                first_derivative: 4.0
                    * (s2 * s * (p1 - p0)
                        + 3.0 * s2 * t * (p2 - p1)
                        + 3.0 * s * t2 * (p3 - p2)
                        + t2 * t * (p4 - p3)),
                second_derivative: 12.0
                    * (s2 * (p2 - 2.0 * p1 + p0)
                        + 2.0 * s * t * (p3 - 2.0 * p2 + p1)
                        + t2 * (p4 - 2.0 * p3 + p2)),
            })
        }
        other => Err(GeomError::UnsupportedControlPoints(other.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_are_exact() {
        for ctrl in [
            vec![1.0, 5.0, -3.0],
            vec![1.0, 5.0, -3.0, 2.0],
            vec![1.0, 5.0, -3.0, 2.0, 8.0],
        ] {
            assert_eq!(bezier_eval(&ctrl, 0.0).unwrap().value, ctrl[0]);
            assert_eq!(bezier_eval(&ctrl, 1.0).unwrap().value, *ctrl.last().unwrap());
        }
    }

    #[test]
    fn derivatives_of_linear_controls() {
        // Evenly spaced controls describe the line v(t) = 4t for every degree.
        for ctrl in [vec![0.0, 2.0, 4.0], vec![0.0, 4.0 / 3.0, 8.0 / 3.0, 4.0], vec![0.0, 1.0, 2.0, 3.0, 4.0]] {
            let s = bezier_eval(&ctrl, 0.3).unwrap();
            assert!((s.value - 1.2).abs() < 1e-12);
            assert!((s.first_derivative - 4.0).abs() < 1e-12);
            assert!(s.second_derivative.abs() < 1e-12);
        }
    }

    #[test]
    fn quadratic_second_derivative_is_constant() {
        let s = bezier_eval(&[0, 1, 0], 0.5).unwrap();
        assert!((s.value - 0.5).abs() < 1e-12);
        assert!(s.first_derivative.abs() < 1e-12);
        assert!((s.second_derivative + 4.0).abs() < 1e-12);
    }

    #[test]
    fn unsupported_counts_fail() {
        assert_eq!(
            bezier_eval(&[1.0, 2.0], 0.5),
            Err(GeomError::UnsupportedControlPoints(2))
        );
        assert!(bezier_eval(&[0.0; 6], 0.5).is_err());
    }
}
