//! Testing utilities for averaged-sgd.
//!
//! Common assertion helpers shared by unit tests and integration tests.
//!
//! ```ignore
//! use averaged_sgd::testing::{assert_predictor_eq, DEFAULT_TOLERANCE};
//! ```

use approx::RelativeEq;

use crate::linear::LinearPredictor;

// =============================================================================
// Constants
// =============================================================================

/// Default tolerance for floating point comparisons of trained weights.
///
/// Used both as absolute epsilon (for values near zero) and as maximum
/// relative difference.
pub const DEFAULT_TOLERANCE: f64 = 1e-9;

// =============================================================================
// Floating Point Assertions
// =============================================================================

/// Assert that two f64 values are approximately equal.
///
/// Uses absolute difference comparison with the given tolerance.
///
/// # Examples
///
/// ```
/// # use averaged_sgd::assert_approx_eq;
/// assert_approx_eq!(1.0, 1.0001, 0.001);
/// ```
///
/// # Panics
///
/// Panics if the absolute difference exceeds tolerance.
#[macro_export]
macro_rules! assert_approx_eq {
    ($left:expr, $right:expr, $tolerance:expr) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)`\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                left_val, right_val, diff, tol
            );
        }
    }};
    ($left:expr, $right:expr, $tolerance:expr, $($arg:tt)+) => {{
        let left_val: f64 = $left;
        let right_val: f64 = $right;
        let tol: f64 = $tolerance;
        let diff = (left_val - right_val).abs();
        if !(diff <= tol) {
            panic!(
                "assertion failed: `(left ≈ right)` - {}\n  left: `{:?}`\n right: `{:?}`\n  diff: `{:?}` > tolerance `{:?}`",
                format_args!($($arg)+), left_val, right_val, diff, tol
            );
        }
    }};
}

/// Assert that two slices are approximately equal element-wise.
///
/// Each pair must be within `tolerance` either absolutely or relatively.
///
/// # Panics
///
/// Panics if lengths differ or any element differs by more than tolerance.
pub fn assert_slice_approx_eq(actual: &[f64], expected: &[f64], tolerance: f64, context: &str) {
    assert_eq!(
        actual.len(),
        expected.len(),
        "{context}: length mismatch - got {}, expected {}",
        actual.len(),
        expected.len()
    );

    for (i, (a, e)) in actual.iter().zip(expected.iter()).enumerate() {
        assert!(
            a.relative_eq(e, tolerance, tolerance),
            "{context}[{i}]: {a} ≠ {e} (diff={}, tolerance={tolerance})",
            (a - e).abs()
        );
    }
}

// =============================================================================
// Predictor Assertions
// =============================================================================

/// Assert that two linear predictors have the same dimension and
/// approximately equal weights and bias.
///
/// # Panics
///
/// Panics with a per-coordinate report on the first mismatch.
pub fn assert_predictor_eq(actual: &LinearPredictor, expected: &LinearPredictor, tolerance: f64) {
    assert_eq!(
        actual.dim(),
        expected.dim(),
        "predictor dimension mismatch - got {}, expected {}",
        actual.dim(),
        expected.dim()
    );

    let actual_w = actual.weights().to_vec();
    let expected_w = expected.weights().to_vec();
    assert_slice_approx_eq(&actual_w, &expected_w, tolerance, "weights");

    let (a, e) = (actual.bias(), expected.bias());
    assert!(
        a.relative_eq(&e, tolerance, tolerance),
        "bias: {a} ≠ {e} (diff={}, tolerance={tolerance})",
        (a - e).abs()
    );
}
