//! Synthetic data generators for integration tests.
//!
//! For assertion helpers, use `averaged_sgd::testing`.

#![allow(dead_code)]

use averaged_sgd::data::{Dataset, DenseVector, Example, FeatureVector, SparseVector};
use rand::seq::index;
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

#[allow(unused_imports)]
pub use averaged_sgd::testing::{assert_predictor_eq, DEFAULT_TOLERANCE};

/// Direction of the separating hyperplane used by [`separable_dense`].
pub const SEPARATOR: [f64; 2] = [1.0, 0.5];

/// Two-dimensional ±1 classification data separable by [`SEPARATOR`] with a
/// margin of at least `margin`.
pub fn separable_dense(n: usize, margin: f64, seed: u64) -> Dataset<DenseVector> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let mut data = Dataset::new(2);
    while data.len() < n {
        let x = [rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)];
        let score = SEPARATOR[0] * x[0] + SEPARATOR[1] * x[1];
        if score.abs() < margin {
            continue;
        }
        let label = if score > 0.0 { 1.0 } else { -1.0 };
        data.push(Example::new(DenseVector::from(x.to_vec()), label))
            .expect("generated example has the dataset dimension");
    }
    data
}

/// One-feature regression data on `y = slope * x + intercept`, x uniform in [-1, 1].
pub fn linear_regression(n: usize, slope: f64, intercept: f64, seed: u64) -> Dataset<DenseVector> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    let examples = (0..n).map(|_| {
        let x: f64 = rng.random_range(-1.0..1.0);
        Example::new(DenseVector::from(vec![x]), slope * x + intercept)
    });
    Dataset::from_examples(1, examples).expect("generated examples have the dataset dimension")
}

/// Sparse ±1 classification stream with `nnz` stored entries per example.
pub fn sparse_stream(n: usize, dim: usize, nnz: usize, seed: u64) -> Vec<Example<SparseVector>> {
    let mut rng = Xoshiro256PlusPlus::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let pairs: Vec<(usize, f64)> = index::sample(&mut rng, dim, nnz)
                .into_iter()
                .map(|i| (i, rng.random_range(-1.0..1.0)))
                .collect();
            let label = if rng.random_bool(0.5) { 1.0 } else { -1.0 };
            let weight = rng.random_range(0.5..1.5);
            let features = SparseVector::from_pairs(dim, pairs).expect("indices are in range");
            Example::new(features, label).with_weight(weight)
        })
        .collect()
}

/// The same examples stored densely.
pub fn densify(stream: &[Example<SparseVector>]) -> Vec<Example<DenseVector>> {
    stream
        .iter()
        .map(|e| {
            let x = e.features();
            let mut values = vec![0.0; x.dim()];
            for (&i, &v) in x.indices().iter().zip(x.values()) {
                values[i] = v;
            }
            Example::new(DenseVector::from(values), e.label()).with_weight(e.weight())
        })
        .collect()
}
