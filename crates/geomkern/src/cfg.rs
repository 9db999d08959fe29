//! Tolerance defaults.
//!
//! Policy
//! - Defaults are fixed constants; the value types use them directly.
//! - Free solver functions take a `GeomCfg` so callers working at unusual
//!   scales can widen or tighten the tolerances per call.

/// Determinant threshold below which two directions count as parallel.
pub const DET_EPS: f64 = 1e-12;
/// Distance tolerance for on-curve / coincidence checks.
pub const DIST_EPS: f64 = 1e-9;
/// Slack on segment parameters `t, u ∈ [0, 1]`.
pub const PARAM_EPS: f64 = 1e-9;
/// Angular separation under which slerp returns the start point.
pub const ANGLE_EPS: f64 = 1e-12;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub eps_det: f64,
    pub eps_dist: f64,
    pub eps_param: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_det: DET_EPS,
            eps_dist: DIST_EPS,
            eps_param: PARAM_EPS,
        }
    }
}
