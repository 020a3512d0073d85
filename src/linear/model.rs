//! Linear predictor data structure and prediction.

use ndarray::{Array1, ArrayView1};

use crate::data::{Dataset, FeatureVector};

/// Affine scoring function `score(x) = w·x + b`.
///
/// The dimension is fixed at construction. All mutating operations keep the
/// weight vector at that dimension; feeding a vector of another dimension is
/// a contract violation and panics.
///
/// # Example
///
/// ```
/// use averaged_sgd::data::DenseVector;
/// use averaged_sgd::linear::LinearPredictor;
///
/// let mut model = LinearPredictor::zeros(2);
/// let x = DenseVector::from(vec![1.0, 2.0]);
///
/// model.add_scaled(&x, 0.5); // w = [0.5, 1.0], b = 0.5
/// assert_eq!(model.predict(&x), 0.5 + 2.0 + 0.5);
///
/// model.scale_in_place(2.0);
/// assert_eq!(model.bias(), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LinearPredictor {
    /// Dense weight vector, length = dimension.
    weights: Array1<f64>,
    /// Scalar bias.
    bias: f64,
}

impl LinearPredictor {
    /// Create a zero predictor (`w = 0`, `b = 0`) of the given dimension.
    pub fn zeros(dim: usize) -> Self {
        Self {
            weights: Array1::zeros(dim),
            bias: 0.0,
        }
    }

    /// Create a predictor from explicit weights and bias.
    pub fn from_parts(weights: Array1<f64>, bias: f64) -> Self {
        Self { weights, bias }
    }

    /// Dimension of the feature space.
    #[inline]
    pub fn dim(&self) -> usize {
        self.weights.len()
    }

    /// Weight vector.
    #[inline]
    pub fn weights(&self) -> ArrayView1<'_, f64> {
        self.weights.view()
    }

    /// Bias term.
    #[inline]
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Split into owned weights and bias.
    pub fn into_parts(self) -> (Array1<f64>, f64) {
        (self.weights, self.bias)
    }

    /// Score a single feature vector: `w·x + b`.
    #[inline]
    pub fn predict<V: FeatureVector>(&self, x: &V) -> f64 {
        x.dot(self.weights.view()) + self.bias
    }

    /// Score every example of a dataset, in order.
    ///
    /// # Panics
    ///
    /// Panics if the dataset dimension differs from the predictor dimension.
    pub fn predict_dataset<V: FeatureVector>(&self, data: &Dataset<V>) -> Vec<f64> {
        assert_eq!(
            data.dim(),
            self.dim(),
            "dataset dimension {} doesn't match predictor dimension {}",
            data.dim(),
            self.dim()
        );
        data.iter().map(|ex| self.predict(ex.features())).collect()
    }

    /// Multiply weights and bias by `scale`.
    #[inline]
    pub fn scale_in_place(&mut self, scale: f64) {
        self.weights *= scale;
        self.bias *= scale;
    }

    /// Add a scaled feature vector: `w += scale * x`, `b += scale`.
    #[inline]
    pub fn add_scaled<V: FeatureVector>(&mut self, x: &V, scale: f64) {
        x.add_scaled_to(self.weights.view_mut(), scale);
        self.bias += scale;
    }

    /// Add another predictor scaled: `w += scale * other.w`, `b += scale * other.b`.
    ///
    /// # Panics
    ///
    /// Panics if the dimensions differ.
    #[inline]
    pub fn add_scaled_predictor(&mut self, other: &LinearPredictor, scale: f64) {
        assert_eq!(
            self.dim(),
            other.dim(),
            "predictor dimensions differ: {} vs {}",
            self.dim(),
            other.dim()
        );
        self.weights.scaled_add(scale, &other.weights);
        self.bias += scale * other.bias;
    }

    /// Zero the weights and bias, keeping the dimension.
    pub fn reset(&mut self) {
        self.weights.fill(0.0);
        self.bias = 0.0;
    }

    /// Returns true if every weight and the bias are finite.
    pub fn is_finite(&self) -> bool {
        self.bias.is_finite() && self.weights.iter().all(|w| w.is_finite())
    }
}
