//! JSON training configuration.
//!
//! ```
//! use averaged_sgd::training::{LossFunction, TrainingConfig};
//!
//! let config = TrainingConfig::from_json_str(
//!     r#"{ "loss": "hinge", "sgd": { "regularization": 0.01 }, "epochs": { "n_epochs": 3 } }"#,
//! )
//! .unwrap();
//! assert_eq!(config.loss, LossFunction::Hinge);
//! assert_eq!(config.epochs.n_epochs, 3);
//! ```

use serde::{Deserialize, Serialize};

use super::driver::{EpochDriver, EpochParams};
use super::loss::LossFunction;
use super::sgd::{ParamValidationError, SgdParams};
use super::trainer::{make_sgd_incremental_trainer, SgdIncrementalTrainer};

/// Errors from loading a [`TrainingConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid parameters: {0}")]
    Params(#[from] ParamValidationError),
}

/// Everything needed to set up a training run. Missing sections fall back to
/// their defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainingConfig {
    pub loss: LossFunction,
    pub sgd: SgdParams,
    pub epochs: EpochParams,
}

impl TrainingConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<(), ParamValidationError> {
        self.sgd.validate()?;
        self.epochs.validate()
    }

    /// Trainer for `dim`-dimensional features using the configured loss.
    pub fn build_trainer(
        &self,
        dim: usize,
    ) -> Result<SgdIncrementalTrainer<LossFunction>, ParamValidationError> {
        make_sgd_incremental_trainer(dim, self.loss, self.sgd)
    }

    pub fn build_driver(&self) -> Result<EpochDriver, ParamValidationError> {
        EpochDriver::new(self.epochs.clone())
    }
}
