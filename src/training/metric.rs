//! Evaluation metrics for trained predictors.
//!
//! Metrics are separate from loss functions: a predictor might be trained with
//! one loss but monitored with a different metric.

use crate::data::{Dataset, FeatureVector};
use crate::linear::LinearPredictor;

use super::loss::Loss;

/// A metric for evaluating predictor quality.
///
/// `weights` is either empty (all examples weigh 1) or holds one weight per
/// prediction.
pub trait Metric {
    /// Compute the metric value.
    ///
    /// Returns 0 for empty input or when the total weight is 0.
    fn compute(&self, preds: &[f64], labels: &[f64], weights: &[f64]) -> f64;

    /// Whether higher values indicate better performance.
    fn higher_is_better(&self) -> bool;

    /// Name of the metric (for logging).
    fn name(&self) -> &'static str;
}

/// Weighted mean of `f(pred, label)` over all examples.
fn weighted_mean(
    preds: &[f64],
    labels: &[f64],
    weights: &[f64],
    f: impl Fn(f64, f64) -> f64,
) -> f64 {
    debug_assert_eq!(preds.len(), labels.len());
    debug_assert!(weights.is_empty() || weights.len() == preds.len());

    let mut total = 0.0;
    let mut total_weight = 0.0;
    for (i, (&p, &y)) in preds.iter().zip(labels).enumerate() {
        let w = weights.get(i).copied().unwrap_or(1.0);
        total += w * f(p, y);
        total_weight += w;
    }

    if total_weight > 0.0 {
        total / total_weight
    } else {
        0.0
    }
}

// =============================================================================
// Accuracy
// =============================================================================

/// Binary classification accuracy for labels in {-1, +1}.
///
/// A prediction is correct when its sign agrees with the label; a zero
/// prediction counts as the positive class. Higher is better.
#[derive(Debug, Clone, Copy, Default)]
pub struct Accuracy;

impl Metric for Accuracy {
    fn compute(&self, preds: &[f64], labels: &[f64], weights: &[f64]) -> f64 {
        weighted_mean(preds, labels, weights, |p, y| {
            let correct = (p >= 0.0) == (y > 0.0);
            if correct {
                1.0
            } else {
                0.0
            }
        })
    }

    fn higher_is_better(&self) -> bool {
        true
    }

    fn name(&self) -> &'static str {
        "accuracy"
    }
}

// =============================================================================
// Mean Loss
// =============================================================================

/// Weighted mean of a training loss. Lower is better.
///
/// Reported under the loss's own name.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanLoss<L>(pub L);

impl<L: Loss> Metric for MeanLoss<L> {
    fn compute(&self, preds: &[f64], labels: &[f64], weights: &[f64]) -> f64 {
        weighted_mean(preds, labels, weights, |p, y| self.0.evaluate(p, y))
    }

    fn higher_is_better(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        self.0.name()
    }
}

/// Score `predictor` on every example of `dataset` with `metric`.
///
/// # Panics
///
/// Panics if the dataset dimension differs from the predictor's.
pub fn evaluate<V, M>(predictor: &LinearPredictor, dataset: &Dataset<V>, metric: &M) -> f64
where
    V: FeatureVector,
    M: Metric + ?Sized,
{
    let preds = predictor.predict_dataset(dataset);
    metric.compute(&preds, &dataset.labels(), &dataset.weights())
}
