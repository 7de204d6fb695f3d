//! Numeric tolerances.

/// Determinant (and pivot) magnitude under which a matrix counts as singular.
///
/// Absolute, not scaled by the matrix norm, so very large or very small
/// matrices may be misclassified.
pub const SINGULAR_TOLERANCE: f64 = 1e-10;

/// Default per-component tolerance for `approx_eq` comparisons.
pub const DEFAULT_EPSILON: f64 = 1e-10;

/// `sqrt(R00² + R10²)` below this takes the gimbal-lock branch of Euler extraction.
pub const GIMBAL_LOCK_THRESHOLD: f64 = 1e-6;
