//! Binary classification loss functions.
//!
//! Both losses expect labels in {-1, +1} and operate on the margin
//! `m = prediction × label`.

use super::Loss;

// =============================================================================
// Hinge Loss
// =============================================================================

/// Hinge loss: L = max(0, 1 - m)
///
/// Subgradient:
/// - m < 1 (wrong side of margin): -label
/// - m >= 1 (correct side): 0
///
/// Not differentiable at m = 1; the correct-side branch is used there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HingeLoss;

impl Loss for HingeLoss {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        (1.0 - prediction * label).max(0.0)
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        if prediction * label < 1.0 {
            -label
        } else {
            0.0
        }
    }

    fn name(&self) -> &'static str {
        "hinge"
    }
}

// =============================================================================
// Log Loss
// =============================================================================

/// Logistic loss: L = ln(1 + exp(-m))
///
/// Derivative: -label / (1 + exp(m))
///
/// Both are evaluated without overflow for large |m|.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogLoss;

impl Loss for LogLoss {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        let margin = prediction * label;
        if margin > 0.0 {
            (-margin).exp().ln_1p()
        } else {
            -margin + margin.exp().ln_1p()
        }
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        let margin = prediction * label;
        // exp overflows to +inf for huge margins, which correctly yields -0.
        -label / (1.0 + margin.exp())
    }

    fn name(&self) -> &'static str {
        "log"
    }
}
