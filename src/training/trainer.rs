//! Single-pass incremental trainer capability.
//!
//! Callers that only need "feed examples, read back a predictor" program
//! against [`IncrementalTrainer`] instead of a concrete learner type.

use crate::data::{Example, FeatureVector};
use crate::linear::LinearPredictor;

use super::loss::Loss;
use super::sgd::{AveragedSgdLearner, ParamValidationError, SgdParams};

/// A trainer that consumes examples in passes and exposes its current model.
pub trait IncrementalTrainer {
    /// Consume a non-empty run of examples.
    ///
    /// # Panics
    ///
    /// Implementations panic on an exhausted iterator or on examples whose
    /// dimension differs from [`dim`](Self::dim).
    fn update<'a, V, I>(&mut self, examples: I)
    where
        V: FeatureVector + 'a,
        I: IntoIterator<Item = &'a Example<V>>,
        I::IntoIter: ExactSizeIterator;

    /// Current model.
    fn predictor(&self) -> &LinearPredictor;

    /// Return to the untrained state, handing back the current model.
    fn reset(&mut self) -> LinearPredictor;

    /// Feature dimension.
    fn dim(&self) -> usize;
}

/// [`IncrementalTrainer`] backed by an [`AveragedSgdLearner`].
#[derive(Debug, Clone)]
pub struct SgdIncrementalTrainer<L> {
    learner: AveragedSgdLearner<L>,
}

impl<L: Loss> SgdIncrementalTrainer<L> {
    pub fn new(learner: AveragedSgdLearner<L>) -> Self {
        Self { learner }
    }

    pub fn learner(&self) -> &AveragedSgdLearner<L> {
        &self.learner
    }

    pub fn into_learner(self) -> AveragedSgdLearner<L> {
        self.learner
    }
}

impl<L: Loss> IncrementalTrainer for SgdIncrementalTrainer<L> {
    fn update<'a, V, I>(&mut self, examples: I)
    where
        V: FeatureVector + 'a,
        I: IntoIterator<Item = &'a Example<V>>,
        I::IntoIter: ExactSizeIterator,
    {
        self.learner.update(examples);
    }

    fn predictor(&self) -> &LinearPredictor {
        self.learner.predictor()
    }

    fn reset(&mut self) -> LinearPredictor {
        self.learner.reset()
    }

    fn dim(&self) -> usize {
        self.learner.dim()
    }
}

/// Build an averaged SGD trainer for `dim`-dimensional features.
///
/// The given loss is the one the learner trains with.
///
/// # Example
///
/// ```
/// use averaged_sgd::training::{
///     make_sgd_incremental_trainer, IncrementalTrainer, LossFunction, SgdParams,
/// };
///
/// let trainer = make_sgd_incremental_trainer(8, LossFunction::Log, SgdParams::default()).unwrap();
/// assert_eq!(trainer.dim(), 8);
/// assert_eq!(trainer.learner().loss(), &LossFunction::Log);
/// ```
pub fn make_sgd_incremental_trainer<L: Loss>(
    dim: usize,
    loss: L,
    params: SgdParams,
) -> Result<SgdIncrementalTrainer<L>, ParamValidationError> {
    AveragedSgdLearner::new(dim, loss, params).map(SgdIncrementalTrainer::new)
}
