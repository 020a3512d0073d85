//! Loss functions for online gradient updates.
//!
//! The learner only ever asks a loss for one number per example: the
//! derivative of the loss with respect to the raw prediction. Losses are
//! stateless and cheap to copy.
//!
//! # Available Losses
//!
//! ## Regression
//! - [`SquaredLoss`]: Standard squared error (L2 loss)
//!
//! ## Classification (labels in {-1, +1})
//! - [`HingeLoss`]: SVM-style margin loss
//! - [`LogLoss`]: Logistic loss on the margin

mod classification;
mod regression;

pub use classification::{HingeLoss, LogLoss};
pub use regression::SquaredLoss;

use serde::{Deserialize, Serialize};

// =============================================================================
// Loss Trait
// =============================================================================

/// A loss function for gradient-based training.
///
/// # Implementing Custom Losses
///
/// ```
/// use averaged_sgd::training::Loss;
///
/// #[derive(Clone, Copy)]
/// struct AbsoluteLoss;
///
/// impl Loss for AbsoluteLoss {
///     fn evaluate(&self, prediction: f64, label: f64) -> f64 {
///         (prediction - label).abs()
///     }
///
///     fn derivative(&self, prediction: f64, label: f64) -> f64 {
///         (prediction - label).signum()
///     }
///
///     fn name(&self) -> &'static str {
///         "absolute"
///     }
/// }
/// ```
pub trait Loss {
    /// Loss value for a raw prediction and its true label.
    fn evaluate(&self, prediction: f64, label: f64) -> f64;

    /// Derivative of the loss with respect to the prediction.
    ///
    /// This is the only operation the learner requires. It is called once per
    /// example per update.
    fn derivative(&self, prediction: f64, label: f64) -> f64;

    /// Name of the loss function (for logging).
    fn name(&self) -> &'static str;
}

impl<L: Loss + ?Sized> Loss for &L {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        (**self).evaluate(prediction, label)
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        (**self).derivative(prediction, label)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

// =============================================================================
// LossFunction Enum
// =============================================================================

/// Loss function enum for configuration.
///
/// Convenient when the loss is chosen at runtime (e.g. from a config file).
/// For custom losses, implement the [`Loss`] trait directly.
///
/// # Example
///
/// ```
/// use averaged_sgd::training::{Loss, LossFunction};
///
/// let loss: LossFunction = serde_json::from_str(r#""hinge""#).unwrap();
/// assert_eq!(loss, LossFunction::Hinge);
/// assert_eq!(loss.derivative(0.5, 1.0), -1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LossFunction {
    /// Squared error loss for regression.
    #[default]
    Squared,
    /// Hinge loss for binary classification.
    Hinge,
    /// Logistic loss for binary classification.
    Log,
}

impl Loss for LossFunction {
    #[inline]
    fn evaluate(&self, prediction: f64, label: f64) -> f64 {
        match self {
            LossFunction::Squared => SquaredLoss.evaluate(prediction, label),
            LossFunction::Hinge => HingeLoss.evaluate(prediction, label),
            LossFunction::Log => LogLoss.evaluate(prediction, label),
        }
    }

    #[inline]
    fn derivative(&self, prediction: f64, label: f64) -> f64 {
        match self {
            LossFunction::Squared => SquaredLoss.derivative(prediction, label),
            LossFunction::Hinge => HingeLoss.derivative(prediction, label),
            LossFunction::Log => LogLoss.derivative(prediction, label),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            LossFunction::Squared => SquaredLoss.name(),
            LossFunction::Hinge => HingeLoss.name(),
            LossFunction::Log => LogLoss.name(),
        }
    }
}
