//! Averaged SGD learner with logarithmic averaging weights.
//!
//! The learner minimizes the L2-regularized objective
//!
//! ```text
//! λ/2 (‖w‖² + b²) + Σ weight_i · loss(w·x_i + b, y_i)
//! ```
//!
//! with the step-size schedule `η_t = 1 / (λ t)`, and tracks two predictors:
//!
//! - `last`: the raw SGD iterate
//! - `averaged`: the time-weighted mean of all past iterates
//!
//! # Averaging weights
//!
//! With `g(t) = ln(t) + 1/(2t)` (an approximation of the harmonic sum), the
//! contribution of each iterate is expressed as a difference of `g` values.
//! At the start of an update spanning `T_prev → T_next` the previously
//! accumulated average receives the history weight `g(T_next) - g(T_prev)`
//! applied to `last`, and the example processed at iteration `t` contributes
//! with weight `g(T_next) - g(t)`.
//!
//! # Deferred scaling
//!
//! The `1 - 1/t` shrinkage of every SGD step is not applied to the weight
//! vectors per example. Within one update call the true iterate before
//! iteration `t` is `(T_prev / (t - 1)) · last`, so predictions are rescaled
//! analytically and every step adds `-η_{T_prev} · β · x` with the step size
//! frozen at `T_prev`. A single `O(d)` rescale by `T_prev / T_next` at the end
//! of the call materializes the pending factor. Per-example work is therefore
//! `O(nnz(x))`.

use crate::data::{Example, FeatureVector};
use crate::linear::LinearPredictor;
use crate::training::loss::Loss;

use super::params::{ParamValidationError, SgdParams};

/// `ln(t) + 1/(2t)`.
#[inline]
fn log_weight(t: f64) -> f64 {
    t.ln() + 0.5 / t
}

/// Online learner producing an averaged linear predictor.
///
/// Generic over the loss `L`, which is resolved at compile time.
///
/// # States
///
/// - fresh: after construction or [`reset`](Self::reset);
///   `total_iterations() == 1` and both predictors are zero.
/// - trained: after at least one example; `total_iterations() > 1`.
///
/// # Example
///
/// ```
/// use averaged_sgd::data::{DenseVector, Example};
/// use averaged_sgd::training::{AveragedSgdLearner, HingeLoss, SgdParams};
///
/// let params = SgdParams { regularization: 0.1 };
/// let mut learner = AveragedSgdLearner::new(2, HingeLoss, params).unwrap();
///
/// let batch = vec![
///     Example::new(DenseVector::from(vec![1.0, 0.2]), 1.0),
///     Example::new(DenseVector::from(vec![-0.8, 0.1]), -1.0),
/// ];
/// learner.update(&batch);
///
/// let model = learner.predictor();
/// assert!(model.predict(&DenseVector::from(vec![1.0, 0.0])) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct AveragedSgdLearner<L> {
    loss: L,
    params: SgdParams,
    /// Starts at 1 so the first step size `1 / (λ · 1)` is finite.
    total_iterations: u64,
    last: LinearPredictor,
    averaged: LinearPredictor,
}

impl<L: Loss> AveragedSgdLearner<L> {
    /// Create a fresh learner for feature vectors of dimension `dim`.
    ///
    /// # Errors
    ///
    /// Returns [`ParamValidationError::InvalidRegularization`] if the
    /// regularization is not finite and strictly positive.
    pub fn new(dim: usize, loss: L, params: SgdParams) -> Result<Self, ParamValidationError> {
        params.validate()?;
        Ok(Self {
            loss,
            params,
            total_iterations: 1,
            last: LinearPredictor::zeros(dim),
            averaged: LinearPredictor::zeros(dim),
        })
    }

    /// Consume a run of examples, advancing both predictors once per example.
    ///
    /// The iterator's exact length is read before the first example is
    /// processed and the iterator is consumed to the end.
    ///
    /// # Panics
    ///
    /// - Panics if the iterator is already exhausted (`len() == 0`).
    /// - Panics if an example's dimension differs from the learner's.
    /// - In debug builds, panics if the iterator yields a different number of
    ///   examples than its reported length.
    pub fn update<'a, V, I>(&mut self, examples: I)
    where
        V: FeatureVector + 'a,
        I: IntoIterator<Item = &'a Example<V>>,
        I::IntoIter: ExactSizeIterator,
    {
        let examples = examples.into_iter();
        let remaining = examples.len();
        assert!(remaining > 0, "update called with an exhausted example iterator");

        let expected_iterations = self.total_iterations + remaining as u64;
        let t_prev = self.total_iterations as f64;
        let t_next = expected_iterations as f64;

        let eta = 1.0 / (self.params.regularization * t_prev);
        let sigma = log_weight(t_next);

        let history_weight = sigma - log_weight(t_prev);
        self.averaged.add_scaled_predictor(&self.last, history_weight);

        let dim = self.dim();
        for example in examples {
            let x = example.features();
            assert_eq!(
                x.dim(),
                dim,
                "example dimension {} doesn't match learner dimension {}",
                x.dim(),
                dim
            );

            self.total_iterations += 1;
            let t = self.total_iterations as f64;

            // `last` holds the iterate scaled by (t - 1) / T_prev.
            let alpha = (t_prev / (t - 1.0)) * self.last.predict(x);
            let beta = example.weight() * self.loss.derivative(alpha, example.label());

            let last_coeff = -eta * beta;
            if last_coeff == 0.0 {
                continue;
            }
            self.last.add_scaled(x, last_coeff);

            let avg_coeff = last_coeff * (sigma - log_weight(t));
            self.averaged.add_scaled(x, avg_coeff);
        }

        debug_assert_eq!(
            self.total_iterations, expected_iterations,
            "example iterator yielded a different number of items than it reported"
        );

        let scale = t_prev / t_next;
        self.last.scale_in_place(scale);
        self.averaged.scale_in_place(scale);
    }

    /// The averaged predictor (the trained model).
    ///
    /// Before any update this is the zero predictor.
    #[inline]
    pub fn predictor(&self) -> &LinearPredictor {
        &self.averaged
    }

    /// The raw SGD iterate.
    #[inline]
    pub fn last_predictor(&self) -> &LinearPredictor {
        &self.last
    }

    /// Reinitialize to the fresh state and hand back the previous averaged
    /// predictor.
    ///
    /// The dimension, loss and parameters are kept.
    pub fn reset(&mut self) -> LinearPredictor {
        let dim = self.dim();
        self.total_iterations = 1;
        self.last.reset();
        std::mem::replace(&mut self.averaged, LinearPredictor::zeros(dim))
    }

    /// Consume the learner and return the averaged predictor.
    pub fn into_predictor(self) -> LinearPredictor {
        self.averaged
    }

    /// One plus the number of examples processed since the last reset.
    #[inline]
    pub fn total_iterations(&self) -> u64 {
        self.total_iterations
    }

    /// Returns true once at least one example has been processed.
    #[inline]
    pub fn is_trained(&self) -> bool {
        self.total_iterations > 1
    }

    /// Feature dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.averaged.dim()
    }

    /// Hyperparameters.
    #[inline]
    pub fn params(&self) -> &SgdParams {
        &self.params
    }

    /// Loss function.
    #[inline]
    pub fn loss(&self) -> &L {
        &self.loss
    }
}

// ============================================================================
// Tests
// ============================================================================
