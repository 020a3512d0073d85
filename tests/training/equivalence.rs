//! Splitting a stream across update calls must not change the result.
//!
//! The learner defers the per-step shrinkage to the end of each call, so one
//! call over N examples and N single-example calls take different code paths
//! to the same predictors.

use averaged_sgd::data::{DenseVector, Example};
use averaged_sgd::training::{AveragedSgdLearner, Loss, LossFunction, SgdParams};
use proptest::prelude::*;
use rstest::rstest;

use crate::common::{assert_predictor_eq, densify, sparse_stream};

const TOLERANCE: f64 = 1e-8;

fn train_in_chunks<L, V>(learner: &mut AveragedSgdLearner<L>, stream: &[Example<V>], chunk: usize)
where
    L: Loss,
    V: averaged_sgd::data::FeatureVector,
{
    for part in stream.chunks(chunk) {
        learner.update(part);
    }
}

#[rstest]
fn chunked_updates_match_single_call(
    #[values(LossFunction::Squared, LossFunction::Hinge, LossFunction::Log)] loss: LossFunction,
    #[values(1, 2, 7, 64)] chunk: usize,
) {
    let stream = sparse_stream(64, 12, 4, 5);
    let params = SgdParams { regularization: 1.0 };

    let mut whole = AveragedSgdLearner::new(12, loss, params).unwrap();
    whole.update(&stream);

    let mut split = AveragedSgdLearner::new(12, loss, params).unwrap();
    train_in_chunks(&mut split, &stream, chunk);

    assert_eq!(whole.total_iterations(), split.total_iterations());
    assert_predictor_eq(split.predictor(), whole.predictor(), TOLERANCE);
    assert_predictor_eq(split.last_predictor(), whole.last_predictor(), TOLERANCE);
}

#[rstest]
#[case::squared(LossFunction::Squared)]
#[case::hinge(LossFunction::Hinge)]
#[case::log(LossFunction::Log)]
fn sparse_and_dense_storage_agree(#[case] loss: LossFunction) {
    let sparse = sparse_stream(80, 20, 3, 17);
    let dense = densify(&sparse);
    let params = SgdParams { regularization: 1.0 };

    let mut a = AveragedSgdLearner::new(20, loss, params).unwrap();
    let mut b = AveragedSgdLearner::new(20, loss, params).unwrap();
    train_in_chunks(&mut a, &sparse, 9);
    train_in_chunks(&mut b, &dense, 9);

    assert_predictor_eq(a.predictor(), b.predictor(), TOLERANCE);
}

fn arb_stream() -> impl Strategy<Value = Vec<Example<DenseVector>>> {
    let example = (
        prop::collection::vec(-1.0f64..1.0, 3),
        prop::bool::ANY,
        0.0f64..1.0,
    )
        .prop_map(|(x, positive, weight)| {
            let label = if positive { 1.0 } else { -1.0 };
            Example::new(DenseVector::from(x), label).with_weight(weight)
        });
    prop::collection::vec(example, 1..40)
}

fn arb_smooth_loss() -> impl Strategy<Value = LossFunction> {
    prop_oneof![Just(LossFunction::Squared), Just(LossFunction::Log)]
}

proptest! {
    #[test]
    fn one_example_per_call_matches_one_call(
        stream in arb_stream(),
        loss in arb_smooth_loss(),
        regularization in 1.0f64..4.0,
    ) {
        let params = SgdParams { regularization };

        let mut single = AveragedSgdLearner::new(3, loss, params).unwrap();
        for example in &stream {
            single.update(std::iter::once(example));
        }

        let mut batch = AveragedSgdLearner::new(3, loss, params).unwrap();
        batch.update(&stream);

        prop_assert_eq!(single.total_iterations(), 1 + stream.len() as u64);
        prop_assert_eq!(single.total_iterations(), batch.total_iterations());
        assert_predictor_eq(single.predictor(), batch.predictor(), TOLERANCE);
        assert_predictor_eq(single.last_predictor(), batch.last_predictor(), TOLERANCE);
    }

    #[test]
    fn step_size_is_always_finite(
        chunks in prop::collection::vec(1usize..10, 1..10),
        regularization in 1e-6f64..10.0,
    ) {
        let stream = sparse_stream(chunks.iter().sum(), 4, 2, 1);
        let mut learner = AveragedSgdLearner::new(4, LossFunction::Hinge, SgdParams { regularization }).unwrap();

        let mut start = 0;
        for len in chunks {
            let t = learner.total_iterations();
            prop_assert!(t >= 1);
            prop_assert!((1.0 / (regularization * t as f64)).is_finite());
            learner.update(&stream[start..start + len]);
            start += len;
        }
    }
}
