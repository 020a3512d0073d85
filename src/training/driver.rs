//! Multi-epoch training driver.
//!
//! The learner itself is a single-pass component. [`EpochDriver`] runs it over
//! a dataset several times, reshuffling the order between passes, and reports
//! a metric after each pass.

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use serde::{Deserialize, Serialize};

use crate::data::{Dataset, FeatureVector};

use super::logger::{TrainingLogger, Verbosity};
use super::metric::{evaluate, Metric};
use super::sgd::ParamValidationError;
use super::trainer::IncrementalTrainer;

// ============================================================================
// EpochParams
// ============================================================================

/// Parameters for [`EpochDriver`].
///
/// Use struct construction with `..Default::default()` for convenient configuration.
///
/// ```
/// use averaged_sgd::training::{EpochParams, Verbosity};
///
/// let params = EpochParams {
///     n_epochs: 5,
///     verbosity: Verbosity::Info,
///     ..Default::default()
/// };
/// assert!(params.shuffle);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EpochParams {
    /// Number of passes over the dataset.
    pub n_epochs: u32,

    /// Shuffle the example order before every pass.
    pub shuffle: bool,

    /// Seed for the shuffling RNG.
    pub seed: u64,

    /// Verbosity level for training output.
    pub verbosity: Verbosity,
}

impl Default for EpochParams {
    fn default() -> Self {
        Self {
            n_epochs: 10,
            shuffle: true,
            seed: 42,
            verbosity: Verbosity::default(),
        }
    }
}

impl EpochParams {
    pub fn validate(&self) -> Result<(), ParamValidationError> {
        if self.n_epochs == 0 {
            return Err(ParamValidationError::InvalidEpochs(self.n_epochs));
        }
        Ok(())
    }
}

// ============================================================================
// EpochDriver
// ============================================================================

/// Runs an [`IncrementalTrainer`] for several epochs over one dataset.
#[derive(Debug, Clone)]
pub struct EpochDriver {
    params: EpochParams,
}

impl EpochDriver {
    pub fn new(params: EpochParams) -> Result<Self, ParamValidationError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EpochParams {
        &self.params
    }

    /// Train for `n_epochs` passes and return the metric after each pass.
    ///
    /// Each pass is a single `update` call over the whole dataset. An empty
    /// dataset leaves the trainer untouched and yields an empty history.
    ///
    /// # Panics
    ///
    /// Panics if the dataset dimension differs from the trainer's.
    pub fn train<T, V, M>(&self, trainer: &mut T, dataset: &Dataset<V>, metric: &M) -> Vec<f64>
    where
        T: IncrementalTrainer,
        V: FeatureVector,
        M: Metric + ?Sized,
    {
        assert_eq!(
            dataset.dim(),
            trainer.dim(),
            "dataset dimension {} doesn't match trainer dimension {}",
            dataset.dim(),
            trainer.dim()
        );

        let mut logger = TrainingLogger::new(self.params.verbosity);
        if dataset.is_empty() {
            logger.warn("empty dataset, skipping training");
            return Vec::new();
        }

        let n_epochs = self.params.n_epochs as usize;
        logger.start_training(n_epochs);

        let mut rng = Xoshiro256PlusPlus::seed_from_u64(self.params.seed);
        let mut order: Vec<usize> = (0..dataset.len()).collect();
        let mut history = Vec::with_capacity(n_epochs);

        for epoch in 0..n_epochs {
            if self.params.shuffle {
                order.shuffle(&mut rng);
            }
            trainer.update(dataset.iter_order(&order));

            let predictor = trainer.predictor();
            if !predictor.is_finite() {
                logger.warn(&format!("predictor has non-finite values after epoch {epoch}"));
            }

            let value = evaluate(predictor, dataset, metric);
            logger.log_epoch(epoch, &[(metric.name(), value)]);
            logger.debug(&format!(
                "epoch {epoch}: |w|={:.6} b={:.6}",
                predictor.weights().dot(&predictor.weights()).sqrt(),
                predictor.bias()
            ));
            history.push(value);
        }

        logger.finish_training();
        history
    }
}
