//! Training infrastructure for online linear models.
//!
//! - [`AveragedSgdLearner`]: averaged SGD with logarithmic averaging weights
//! - [`Loss`]: loss derivative capability the learner is generic over
//! - [`IncrementalTrainer`]: learner-agnostic single-pass trainer interface
//! - [`EpochDriver`]: multi-epoch driver with shuffling and per-epoch metrics
//! - [`Metric`]: evaluation of trained predictors
//! - [`TrainingLogger`]: logging gated by [`Verbosity`]
//! - [`TrainingConfig`]: JSON-loadable hyperparameters
//!
//! ## Loss Functions
//!
//! - [`SquaredLoss`]: squared error for regression
//! - [`HingeLoss`]: margin loss for ±1 labels
//! - [`LogLoss`]: logistic loss for ±1 labels

mod config;
mod driver;
mod logger;
mod loss;
mod metric;
mod sgd;
mod trainer;

pub use config::{ConfigError, TrainingConfig};
pub use driver::{EpochDriver, EpochParams};
pub use logger::{TrainingLogger, Verbosity};
pub use loss::{HingeLoss, LogLoss, Loss, LossFunction, SquaredLoss};
pub use metric::{evaluate, Accuracy, MeanLoss, Metric};
pub use sgd::{AveragedSgdLearner, ParamValidationError, SgdParams};
pub use trainer::{make_sgd_incremental_trainer, IncrementalTrainer, SgdIncrementalTrainer};
