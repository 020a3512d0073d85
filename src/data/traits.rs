//! Core trait for feature vector access.

use ndarray::{ArrayView1, ArrayViewMut1};

/// A single feature vector as seen by a linear learner.
///
/// The learner never inspects individual coordinates directly. It only needs
/// a dot product against a dense weight vector and a scaled addition into
/// one. Both have provided implementations in terms of [`iter()`](Self::iter),
/// so a storage format only has to describe its stored entries.
///
/// # Dense vs Sparse
///
/// For dense vectors, iteration yields every coordinate and `nnz() == dim()`.
/// For sparse vectors, iteration yields only the explicitly stored entries and
/// every other coordinate is zero. Sparse vectors make per-example work
/// proportional to `nnz()` rather than `dim()`.
pub trait FeatureVector {
    /// Iterator over stored `(index, value)` pairs.
    type Iter<'a>: Iterator<Item = (usize, f64)>
    where
        Self: 'a;

    /// Dimension of the feature space this vector lives in.
    fn dim(&self) -> usize;

    /// Number of explicitly stored entries.
    fn nnz(&self) -> usize;

    /// Iterate over stored `(index, value)` pairs in increasing index order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Dot product with a dense weight vector.
    ///
    /// # Panics
    ///
    /// May panic if a stored index is outside `weights`.
    #[inline]
    fn dot(&self, weights: ArrayView1<'_, f64>) -> f64 {
        self.iter().map(|(i, v)| v * weights[i]).sum()
    }

    /// Add `scale * self` into a dense weight vector.
    ///
    /// # Panics
    ///
    /// May panic if a stored index is outside `weights`.
    #[inline]
    fn add_scaled_to(&self, mut weights: ArrayViewMut1<'_, f64>, scale: f64) {
        for (i, v) in self.iter() {
            weights[i] += scale * v;
        }
    }
}
