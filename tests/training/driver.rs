//! End-to-end training runs through the epoch driver.

use averaged_sgd::assert_approx_eq;
use averaged_sgd::training::{
    evaluate, make_sgd_incremental_trainer, Accuracy, EpochDriver, EpochParams, HingeLoss,
    IncrementalTrainer, LogLoss, MeanLoss, Metric, SgdParams, SquaredLoss, TrainingConfig,
};
use rstest::rstest;

use crate::common::{linear_regression, separable_dense};

#[rstest]
#[case::hinge(0.01)]
#[case::hinge_strong(0.1)]
fn hinge_separates_separable_data(#[case] regularization: f64) {
    let train = separable_dense(400, 0.1, 1);
    let test = separable_dense(200, 0.1, 2);

    let driver = EpochDriver::new(EpochParams {
        n_epochs: 10,
        ..Default::default()
    })
    .unwrap();
    let mut trainer =
        make_sgd_incremental_trainer(2, HingeLoss, SgdParams { regularization }).unwrap();

    let history = driver.train(&mut trainer, &train, &Accuracy);

    assert_eq!(history.len(), 10);
    assert!(history[9] >= 0.9, "train accuracy {}", history[9]);
    let test_accuracy = evaluate(trainer.predictor(), &test, &Accuracy);
    assert!(test_accuracy >= 0.9, "test accuracy {test_accuracy}");
}

#[test]
fn log_loss_decreases_over_epochs() {
    let train = separable_dense(300, 0.05, 3);
    let metric = MeanLoss(LogLoss);
    let driver = EpochDriver::new(EpochParams {
        n_epochs: 8,
        seed: 9,
        ..Default::default()
    })
    .unwrap();
    let mut trainer =
        make_sgd_incremental_trainer(2, LogLoss, SgdParams { regularization: 0.01 }).unwrap();

    let initial = evaluate(trainer.predictor(), &train, &metric);
    let history = driver.train(&mut trainer, &train, &metric);

    assert!(!metric.higher_is_better());
    assert!(history[7] < initial, "{} !< {initial}", history[7]);
}

#[test]
fn squared_loss_approaches_ridge_solution() {
    let regularization = 1.0;
    let data = linear_regression(500, 2.0, -1.0, 4);

    let driver = EpochDriver::new(EpochParams {
        n_epochs: 20,
        ..Default::default()
    })
    .unwrap();
    let mut trainer =
        make_sgd_incremental_trainer(1, SquaredLoss, SgdParams { regularization }).unwrap();
    driver.train(&mut trainer, &data, &MeanLoss(SquaredLoss));

    // Minimizer of λ/2 (w² + b²) + mean ½ (w x + b - y)².
    let n = data.len() as f64;
    let (mut sx, mut sxx, mut sy, mut sxy) = (0.0, 0.0, 0.0, 0.0);
    for example in data.iter() {
        let x = example.features().values()[0];
        let y = example.label();
        sx += x / n;
        sxx += x * x / n;
        sy += y / n;
        sxy += x * y / n;
    }
    let (a, b, c) = (sxx + regularization, sx, 1.0 + regularization);
    let det = a * c - b * b;
    let w = (sxy * c - b * sy) / det;
    let bias = (a * sy - b * sxy) / det;

    let predictor = trainer.predictor();
    assert_approx_eq!(predictor.weights()[0], w, 0.05, "ridge weight");
    assert_approx_eq!(predictor.bias(), bias, 0.05, "ridge bias");
}

#[test]
fn config_driven_run() {
    let config = TrainingConfig::from_json_str(
        r#"{
            "loss": "hinge",
            "sgd": { "regularization": 0.05 },
            "epochs": { "n_epochs": 4, "seed": 3 }
        }"#,
    )
    .unwrap();
    let data = separable_dense(200, 0.1, 5);

    let driver = config.build_driver().unwrap();
    let mut trainer = config.build_trainer(data.dim()).unwrap();
    let history = driver.train(&mut trainer, &data, &MeanLoss(config.loss));

    assert_eq!(history.len(), 4);
    assert_eq!(trainer.learner().total_iterations(), 1 + 4 * 200);
    assert!(history.iter().all(|v| v.is_finite()));

    // Same config, same data, same model.
    let mut again = config.build_trainer(data.dim()).unwrap();
    driver.train(&mut again, &data, &MeanLoss(config.loss));
    assert_eq!(again.predictor(), trainer.predictor());
}

#[test]
fn unshuffled_epochs_follow_insertion_order() {
    let data = separable_dense(50, 0.1, 6);
    let driver = EpochDriver::new(EpochParams {
        n_epochs: 2,
        shuffle: false,
        ..Default::default()
    })
    .unwrap();
    let mut driven = make_sgd_incremental_trainer(2, HingeLoss, SgdParams::default()).unwrap();
    driver.train(&mut driven, &data, &Accuracy);

    let mut manual = make_sgd_incremental_trainer(2, HingeLoss, SgdParams::default()).unwrap();
    manual.update(data.iter());
    manual.update(data.iter());

    assert_eq!(driven.predictor(), manual.predictor());
}
