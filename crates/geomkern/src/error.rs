//! Error type for contract violations.
//!
//! Only caller-contract and construction-time violations end up here.
//! Degenerate geometry (parallel lines, tangencies, zero-length vectors) is
//! reported through `Option`, empty `Vec`s or documented fallbacks instead.

use thiserror::Error;

/// Errors raised when an invariant or a caller contract is violated.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GeomError {
    /// Modulus must be strictly positive.
    #[error("modulus must be positive, got {0}")]
    NonPositiveModulus(f64),

    /// A range used as a denominator has zero width.
    #[error("range [{min}, {max}] has zero span")]
    ZeroSpan {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Value lies outside the range a checked operation requires.
    #[error("value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Offending value.
        value: f64,
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },

    /// Radius must be positive.
    #[error("invalid radius: {0} (must be positive)")]
    InvalidRadius(f64),

    /// Rotation axis has zero length.
    #[error("rotation axis must be non-zero")]
    ZeroAxis,

    /// Plane frame could not be built (zero normal, or up vector parallel to it).
    #[error("degenerate plane frame: {reason}")]
    DegeneratePlane {
        /// What made the frame degenerate.
        reason: &'static str,
    },

    /// Bézier evaluation supports 3, 4 or 5 control points only.
    #[error("unsupported Bézier control point count {0} (expected 3, 4 or 5)")]
    UnsupportedControlPoints(usize),

    /// Index outside the container.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Requested index.
        index: usize,
        /// Container length along the indexed axis.
        len: usize,
    },

    /// Array dimension outside the supported limits.
    #[error("array size {size} outside [1, {max}]")]
    InvalidSize {
        /// Requested size.
        size: usize,
        /// Largest permitted size.
        max: usize,
    },

    /// Element-wise operation on containers of different lengths.
    #[error("length mismatch: {left} vs {right}")]
    LengthMismatch {
        /// Length of the receiver.
        left: usize,
        /// Length of the argument.
        right: usize,
    },

    /// Tile decomposition parameters are unusable.
    #[error("invalid tiling: {reason}")]
    InvalidTiling {
        /// What is wrong with the tiling request.
        reason: &'static str,
    },

    /// Aggregate over too few items (empty centroid, average, min, ...).
    #[error("insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints {
        /// Minimum required.
        required: usize,
        /// Provided.
        actual: usize,
    },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, GeomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeomError::InvalidRadius(-1.5);
        assert_eq!(format!("{err}"), "invalid radius: -1.5 (must be positive)");

        let err = GeomError::UnsupportedControlPoints(7);
        assert!(format!("{err}").contains('7'));

        let err = GeomError::IndexOutOfBounds { index: 4, len: 3 };
        assert_eq!(format!("{err}"), "index 4 out of bounds for length 3");
    }
}
