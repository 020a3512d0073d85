//! Labeled examples and the in-memory dataset that owns them.
//!
//! A learner consumes a contiguous run of examples through any
//! [`ExactSizeIterator`] over `&Example<V>`. The exact size is essential: the
//! averaging math needs the number of remaining examples before the first one
//! is processed. [`Dataset::iter`] and [`Dataset::iter_order`] both qualify.

use ndarray::ArrayView2;

use super::dense::DenseVector;
use super::traits::FeatureVector;

/// Dataset conversion/validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DatasetError {
    #[error("example {index} has dimension {got}, dataset expects {expected}")]
    DimensionMismatch {
        index: usize,
        expected: usize,
        got: usize,
    },

    #[error("number of targets ({targets}) does not match number of rows ({rows})")]
    TargetLenMismatch { rows: usize, targets: usize },

    #[error("number of weights ({weights}) does not match number of rows ({rows})")]
    WeightLenMismatch { rows: usize, weights: usize },

    #[error("example {index} has invalid weight {weight}; weights must be finite and >= 0")]
    InvalidWeight { index: usize, weight: f64 },

    #[error("sparse index {index} is out of range or out of order for dimension {dim}")]
    InvalidSparseIndex { index: usize, dim: usize },

    #[error("sparse vector has {indices} indices but {values} values")]
    SparseLenMismatch { indices: usize, values: usize },
}

// =============================================================================
// Example
// =============================================================================

/// A single weighted training instance.
#[derive(Debug, Clone, PartialEq)]
pub struct Example<V> {
    features: V,
    label: f64,
    weight: f64,
}

impl<V: FeatureVector> Example<V> {
    /// Create an example with unit weight.
    pub fn new(features: V, label: f64) -> Self {
        Self {
            features,
            label,
            weight: 1.0,
        }
    }

    /// Set the per-example importance weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Feature vector.
    #[inline]
    pub fn features(&self) -> &V {
        &self.features
    }

    /// Target label (±1 for classification losses, real-valued for regression).
    #[inline]
    pub fn label(&self) -> f64 {
        self.label
    }

    /// Importance weight (defaults to 1).
    #[inline]
    pub fn weight(&self) -> f64 {
        self.weight
    }
}

// =============================================================================
// Dataset
// =============================================================================

/// An in-memory collection of examples sharing one feature dimension.
///
/// Every example is validated on insertion, so any run of examples drawn from
/// a dataset satisfies the learner's dimension precondition.
#[derive(Debug, Clone)]
pub struct Dataset<V> {
    dim: usize,
    examples: Vec<Example<V>>,
}

impl<V: FeatureVector> Dataset<V> {
    /// Create an empty dataset for feature vectors of dimension `dim`.
    pub fn new(dim: usize) -> Self {
        Self {
            dim,
            examples: Vec::new(),
        }
    }

    /// Build a dataset from a list of examples.
    pub fn from_examples(
        dim: usize,
        examples: impl IntoIterator<Item = Example<V>>,
    ) -> Result<Self, DatasetError> {
        let mut dataset = Self::new(dim);
        for example in examples {
            dataset.push(example)?;
        }
        Ok(dataset)
    }

    /// Append an example.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::DimensionMismatch`] if the feature dimension differs.
    /// - [`DatasetError::InvalidWeight`] if the weight is negative or not finite.
    pub fn push(&mut self, example: Example<V>) -> Result<(), DatasetError> {
        let index = self.examples.len();
        let got = example.features().dim();
        if got != self.dim {
            return Err(DatasetError::DimensionMismatch {
                index,
                expected: self.dim,
                got,
            });
        }
        let weight = example.weight();
        if !weight.is_finite() || weight < 0.0 {
            return Err(DatasetError::InvalidWeight { index, weight });
        }
        self.examples.push(example);
        Ok(())
    }

    /// Feature dimension.
    #[inline]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of examples.
    #[inline]
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Returns true if the dataset has no examples.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// All examples in insertion order.
    #[inline]
    pub fn examples(&self) -> &[Example<V>] {
        &self.examples
    }

    /// Example at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&Example<V>> {
        self.examples.get(index)
    }

    /// Streaming cursor over all examples in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Example<V>> {
        self.examples.iter()
    }

    /// Streaming cursor over the examples named by `order`.
    ///
    /// # Panics
    ///
    /// Panics during iteration if an index in `order` is out of bounds.
    pub fn iter_order<'a>(
        &'a self,
        order: &'a [usize],
    ) -> impl ExactSizeIterator<Item = &'a Example<V>> + 'a {
        order.iter().map(move |&i| &self.examples[i])
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> Vec<f64> {
        self.examples.iter().map(Example::label).collect()
    }

    /// Weights in insertion order.
    pub fn weights(&self) -> Vec<f64> {
        self.examples.iter().map(Example::weight).collect()
    }
}

impl Dataset<DenseVector> {
    /// Create a dense dataset from a row-major feature matrix.
    ///
    /// # Arguments
    ///
    /// * `features` - Matrix with shape `[n_rows, n_features]`
    /// * `labels` - One label per row
    /// * `weights` - Optional per-row weights (None = all ones)
    pub fn from_dense(
        features: ArrayView2<'_, f64>,
        labels: &[f64],
        weights: Option<&[f64]>,
    ) -> Result<Self, DatasetError> {
        let (n_rows, n_features) = features.dim();
        if labels.len() != n_rows {
            return Err(DatasetError::TargetLenMismatch {
                rows: n_rows,
                targets: labels.len(),
            });
        }
        if let Some(w) = weights {
            if w.len() != n_rows {
                return Err(DatasetError::WeightLenMismatch {
                    rows: n_rows,
                    weights: w.len(),
                });
            }
        }

        let mut dataset = Self::new(n_features);
        dataset.examples.reserve(n_rows);
        for (i, row) in features.rows().into_iter().enumerate() {
            let weight = weights.map_or(1.0, |w| w[i]);
            dataset.push(Example::new(DenseVector::from(row), labels[i]).with_weight(weight))?;
        }
        Ok(dataset)
    }
}

impl<'a, V> IntoIterator for &'a Dataset<V> {
    type Item = &'a Example<V>;
    type IntoIter = std::slice::Iter<'a, Example<V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
