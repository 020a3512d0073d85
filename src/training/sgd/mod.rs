//! Averaged stochastic gradient descent for linear predictors.
//!
//! - [`AveragedSgdLearner`]: online learner with logarithmic averaging
//! - [`SgdParams`]: hyperparameters
//! - [`ParamValidationError`]: rejected hyperparameters

mod learner;
mod params;

pub use learner::AveragedSgdLearner;
pub use params::{ParamValidationError, SgdParams};
