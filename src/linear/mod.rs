//! Linear predictor for online learning.
//!
//! Prediction is a simple dot product plus a bias:
//!
//! ```text
//! score(x) = bias + Σ(feature[i] × weight[i])
//! ```

mod model;

pub use model::LinearPredictor;
