//! Dense feature vector backed by an ndarray.

use std::iter::{Copied, Enumerate};

use ndarray::{Array1, ArrayView1, ArrayViewMut1, Ix1};

use super::traits::FeatureVector;

/// Dense feature vector: every coordinate is stored.
///
/// # Example
///
/// ```
/// use averaged_sgd::data::{DenseVector, FeatureVector};
/// use ndarray::array;
///
/// let x = DenseVector::from(vec![1.0, 2.0, 3.0]);
/// let w = array![0.5, 0.0, -1.0];
/// assert_eq!(x.dim(), 3);
/// assert_eq!(x.dot(w.view()), 0.5 - 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DenseVector {
    values: Array1<f64>,
}

impl DenseVector {
    /// Wrap an existing array, copying it into standard layout if it is strided.
    pub fn new(values: Array1<f64>) -> Self {
        Self {
            values: values.as_standard_layout().into_owned(),
        }
    }

    /// All-zero vector of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            values: Array1::zeros(dim),
        }
    }

    /// View of the underlying values.
    #[inline]
    pub fn values(&self) -> ArrayView1<'_, f64> {
        self.values.view()
    }
}

impl From<Vec<f64>> for DenseVector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(Array1::from(values))
    }
}

impl From<Array1<f64>> for DenseVector {
    fn from(values: Array1<f64>) -> Self {
        Self::new(values)
    }
}

impl<'v> From<ArrayView1<'v, f64>> for DenseVector {
    fn from(values: ArrayView1<'v, f64>) -> Self {
        Self::new(Array1::from(values.to_vec()))
    }
}

impl FeatureVector for DenseVector {
    type Iter<'a> = Enumerate<Copied<ndarray::iter::Iter<'a, f64, Ix1>>>;

    #[inline]
    fn dim(&self) -> usize {
        self.values.len()
    }

    #[inline]
    fn nnz(&self) -> usize {
        self.values.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.values.iter().copied().enumerate()
    }

    #[inline]
    fn dot(&self, weights: ArrayView1<'_, f64>) -> f64 {
        self.values.dot(&weights)
    }

    #[inline]
    fn add_scaled_to(&self, mut weights: ArrayViewMut1<'_, f64>, scale: f64) {
        weights.scaled_add(scale, &self.values);
    }
}
