//! Hyperparameters for averaged SGD.

use serde::{Deserialize, Serialize};

/// Parameters for [`AveragedSgdLearner`](super::AveragedSgdLearner).
///
/// # Example
///
/// ```
/// use averaged_sgd::training::SgdParams;
///
/// let params = SgdParams { regularization: 0.01 };
/// assert!(params.validate().is_ok());
/// assert!(SgdParams { regularization: 0.0 }.validate().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SgdParams {
    /// L2 regularization strength (lambda). Must be > 0.
    ///
    /// Also sets the step-size schedule `1 / (lambda * t)`.
    pub regularization: f64,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            regularization: 1.0,
        }
    }
}

impl SgdParams {
    /// Validate parameters.
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if !(self.regularization.is_finite() && self.regularization > 0.0) {
            return Err(ParamValidationError::InvalidRegularization(self.regularization));
        }
        Ok(())
    }
}

/// Parameter validation error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParamValidationError {
    /// Regularization must be finite and > 0.
    #[error("regularization must be finite and > 0, got {0}")]
    InvalidRegularization(f64),

    /// The driver needs at least one epoch.
    #[error("n_epochs must be > 0, got {0}")]
    InvalidEpochs(u32),
}
