//! Data input abstractions for online learning.
//!
//! # Overview
//!
//! The core abstraction is [`FeatureVector`], which gives the learner a dot
//! product and a scaled addition against a dense weight vector regardless of
//! the storage format.
//!
//! # Storage Types
//!
//! - [`DenseVector`]: every coordinate stored, backed by `ndarray::Array1`
//! - [`SparseVector`]: sorted index/value pairs, work proportional to `nnz`
//!
//! # Examples and Datasets
//!
//! [`Example`] pairs a feature vector with a label and an importance weight.
//! [`Dataset`] owns examples of a fixed dimension and validates them on
//! insertion.

mod dataset;
mod dense;
mod sparse;
mod traits;

pub use dataset::{Dataset, DatasetError, Example};
pub use dense::DenseVector;
pub use sparse::SparseVector;
pub use traits::FeatureVector;
