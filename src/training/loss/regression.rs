//! Regression loss functions.

use super::Loss;

/// Squared error: L = ½ (pred - label)²
///
/// Derivative: pred - label
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SquaredLoss;

impl Loss for SquaredLoss {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        let diff = prediction - label;
        0.5 * diff * diff
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        prediction - label
    }

    fn name(&self) -> &'static str {
        "squared"
    }
}
