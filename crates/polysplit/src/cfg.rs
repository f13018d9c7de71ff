//! Tolerance defaults for 2D splitting.
//!
//! Policy
//! - Defaults are fixed constants. Every predicate that treats two values as
//!   "the same" goes through `EPS`; exact comparisons are spelled out at the
//!   call site (`== 0.0`) so the two regimes stay easy to tell apart.

/// Coincidence, parallelism and bounding-box slack.
pub const EPS: f64 = 1e-6;

/// Distance from the origin along x (or y) at which a line built from bare
/// coefficients gets its two synthetic endpoints.
pub(crate) const SYNTHETIC_HALF_SPAN: f64 = 1000.0;

/// Length of the upward ray used by the point-in-polygon test.
pub(crate) const RAY_LENGTH: f64 = 1e100;
