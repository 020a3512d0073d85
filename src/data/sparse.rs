//! Sparse feature vector (sorted index/value pairs).

use std::iter::{Copied, Zip};
use std::slice::Iter;

use super::dataset::DatasetError;
use super::traits::FeatureVector;

/// Sparse feature vector storing only non-zero coordinates.
///
/// Indices are strictly increasing and smaller than `dim`. Every coordinate
/// that is not stored is zero.
///
/// # Example
///
/// ```
/// use averaged_sgd::data::{FeatureVector, SparseVector};
/// use ndarray::Array1;
///
/// let x = SparseVector::new(1000, vec![3, 997], vec![1.0, -2.0]).unwrap();
/// let mut w = Array1::zeros(1000);
/// x.add_scaled_to(w.view_mut(), 0.5);
/// assert_eq!(w[3], 0.5);
/// assert_eq!(w[997], -1.0);
/// assert_eq!(x.nnz(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    indices: Vec<usize>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Create a sparse vector from parallel index and value lists.
    ///
    /// # Errors
    ///
    /// - [`DatasetError::SparseLenMismatch`] if the lists differ in length.
    /// - [`DatasetError::InvalidSparseIndex`] if an index is out of range or
    ///   indices are not strictly increasing.
    pub fn new(dim: usize, indices: Vec<usize>, values: Vec<f64>) -> Result<Self, DatasetError> {
        if indices.len() != values.len() {
            return Err(DatasetError::SparseLenMismatch {
                indices: indices.len(),
                values: values.len(),
            });
        }

        let mut prev: Option<usize> = None;
        for &index in &indices {
            let ordered = prev.map_or(true, |p| index > p);
            if index >= dim || !ordered {
                return Err(DatasetError::InvalidSparseIndex { index, dim });
            }
            prev = Some(index);
        }

        Ok(Self {
            dim,
            indices,
            values,
        })
    }

    /// Build from `(index, value)` pairs in any order, dropping explicit zeros.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::InvalidSparseIndex`] for out-of-range or
    /// duplicate indices.
    pub fn from_pairs(
        dim: usize,
        pairs: impl IntoIterator<Item = (usize, f64)>,
    ) -> Result<Self, DatasetError> {
        let mut pairs: Vec<(usize, f64)> = pairs.into_iter().filter(|&(_, v)| v != 0.0).collect();
        pairs.sort_unstable_by_key(|&(i, _)| i);
        let (indices, values) = pairs.into_iter().unzip();
        Self::new(dim, indices, values)
    }

    /// Stored indices.
    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Stored values.
    #[inline]
    pub fn values(&self) -> &[f64] {
        &self.values
    }
}

impl FeatureVector for SparseVector {
    type Iter<'a> = Zip<Copied<Iter<'a, usize>>, Copied<Iter<'a, f64>>>;

    #[inline]
    fn dim(&self) -> usize {
        self.dim
    }

    #[inline]
    fn nnz(&self) -> usize {
        self.indices.len()
    }

    fn iter(&self) -> Self::Iter<'_> {
        self.indices
            .iter()
            .copied()
            .zip(self.values.iter().copied())
    }
}
