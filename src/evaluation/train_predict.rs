use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::evaluation::{EvaluationError, Measurement, Scores};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::time::Instant;

/// Rows of the training set scored after fitting.
pub const TRAIN_PREFIX: usize = 300;

/// Timings (seconds) and scores of one fit on one sample size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MetricsRecord {
    pub train_time: f64,
    pub pred_time: f64,
    pub acc_train: f64,
    pub acc_test: f64,
    pub f_train: f64,
    pub f_test: f64,
}

impl MetricsRecord {
    pub const NAMES: [&'static str; 6] = [
        "train_time",
        "pred_time",
        "acc_train",
        "acc_test",
        "f_train",
        "f_test",
    ];

    pub fn values(&self) -> [f64; 6] {
        [
            self.train_time,
            self.pred_time,
            self.acc_train,
            self.acc_test,
            self.f_train,
            self.f_test,
        ]
    }

    pub fn measurements(&self) -> Vec<Measurement> {
        Self::NAMES
            .iter()
            .zip(self.values())
            .map(|(name, value)| Measurement::new(*name, value))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        Self::NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.values()[i])
    }
}

impl Display for MetricsRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let parts: Vec<String> = self.measurements().iter().map(|m| m.to_string()).collect();
        write!(f, "{}", parts.join(", "))
    }
}

fn check_pair(what: &'static str, rows: usize, labels: usize) -> Result<(), EvaluationError> {
    if rows != labels {
        return Err(EvaluationError::LabelCount { what, rows, labels });
    }
    if rows == 0 {
        return Err(EvaluationError::Empty(what));
    }
    Ok(())
}

fn check_predictions(expected: usize, got: &[u8]) -> Result<(), EvaluationError> {
    if got.len() != expected {
        return Err(EvaluationError::PredictionCount {
            expected,
            got: got.len(),
        });
    }
    Ok(())
}

/// Fits `learner` on the first `sample_size` training rows and scores it.
///
/// Prediction time covers the full test set plus the first
/// [`TRAIN_PREFIX`] training rows. Scores use F0.5 with `1` as the
/// positive class.
pub fn evaluate(
    learner: &mut dyn Classifier,
    sample_size: usize,
    train_features: &[Vec<f64>],
    train_labels: &[u8],
    test_features: &[Vec<f64>],
    test_labels: &[u8],
) -> Result<MetricsRecord, EvaluationError> {
    check_pair("training", train_features.len(), train_labels.len())?;
    check_pair("test", test_features.len(), test_labels.len())?;
    let available = train_features.len();
    if sample_size == 0 || sample_size > available {
        return Err(EvaluationError::InvalidSampleSize {
            requested: sample_size,
            available,
        });
    }

    let start = Instant::now();
    learner.fit(&train_features[..sample_size], &train_labels[..sample_size])?;
    let train_time = start.elapsed().as_secs_f64();

    let prefix = TRAIN_PREFIX.min(available);
    let start = Instant::now();
    let test_predictions = learner.predict(test_features)?;
    let train_predictions = learner.predict(&train_features[..prefix])?;
    let pred_time = start.elapsed().as_secs_f64();

    check_predictions(test_labels.len(), &test_predictions)?;
    check_predictions(prefix, &train_predictions)?;

    let train = Scores::from_predictions(&train_labels[..prefix], &train_predictions)?;
    let test = Scores::from_predictions(test_labels, &test_predictions)?;

    tracing::info!("{} trained on {} samples.", learner.name(), sample_size);

    Ok(MetricsRecord {
        train_time,
        pred_time,
        acc_train: train.accuracy,
        acc_test: test.accuracy,
        f_train: train.f_score,
        f_test: test.f_score,
    })
}

/// [`evaluate`] over two [`Dataset`]s.
pub fn evaluate_on(
    learner: &mut dyn Classifier,
    sample_size: usize,
    train: &Dataset,
    test: &Dataset,
) -> Result<MetricsRecord, EvaluationError> {
    evaluate(
        learner,
        sample_size,
        train.features(),
        train.labels(),
        test.features(),
        test.labels(),
    )
}
