//! averaged-sgd: online linear learning with averaged stochastic gradient descent.
//!
//! The crate trains a linear predictor `score(x) = w·x + b` one example at a
//! time. The [`AveragedSgdLearner`](training::AveragedSgdLearner) keeps two
//! predictors in lock-step: the raw SGD iterate and the time-weighted average
//! of all past iterates. The averaged predictor is the trained model.
//!
//! ```
//! use averaged_sgd::data::{Dataset, DenseVector, Example};
//! use averaged_sgd::training::{AveragedSgdLearner, SgdParams, SquaredLoss};
//!
//! let mut data = Dataset::new(2);
//! data.push(Example::new(DenseVector::from(vec![1.0, 0.0]), 1.0)).unwrap();
//! data.push(Example::new(DenseVector::from(vec![0.0, 1.0]), -1.0)).unwrap();
//!
//! let mut learner = AveragedSgdLearner::new(2, SquaredLoss, SgdParams::default()).unwrap();
//! learner.update(data.iter());
//!
//! assert_eq!(learner.total_iterations(), 3);
//! assert!(learner.predictor().weights().iter().all(|w| w.is_finite()));
//! ```

pub mod data;
pub mod linear;
pub mod testing;
pub mod training;
