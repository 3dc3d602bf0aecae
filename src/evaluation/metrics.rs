use crate::evaluation::{
    BinaryClassificationEvaluator, DEFAULT_BETA, EvaluationError, PerformanceEvaluatorExt,
};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

fn evaluated(
    truth: &[u8],
    predicted: &[u8],
    beta: f64,
) -> Result<BinaryClassificationEvaluator, EvaluationError> {
    if truth.len() != predicted.len() {
        return Err(EvaluationError::PredictionCount {
            expected: truth.len(),
            got: predicted.len(),
        });
    }
    let mut ev = BinaryClassificationEvaluator::new(beta);
    ev.add_all(truth, predicted);
    Ok(ev)
}

fn warn_if_ill_defined(ev: &BinaryClassificationEvaluator, name: &str) {
    if ev.ill_defined(name) {
        tracing::warn!("{name} is ill-defined and being set to 0.0");
    }
}

fn score(truth: &[u8], predicted: &[u8], beta: f64, name: &str) -> Result<f64, EvaluationError> {
    let ev = evaluated(truth, predicted, beta)?;
    warn_if_ill_defined(&ev, name);
    Ok(ev.metric(name).unwrap_or(f64::NAN))
}

pub fn accuracy_score(truth: &[u8], predicted: &[u8]) -> Result<f64, EvaluationError> {
    score(truth, predicted, DEFAULT_BETA, "accuracy")
}

pub fn precision_score(truth: &[u8], predicted: &[u8]) -> Result<f64, EvaluationError> {
    score(truth, predicted, DEFAULT_BETA, "precision")
}

pub fn recall_score(truth: &[u8], predicted: &[u8]) -> Result<f64, EvaluationError> {
    score(truth, predicted, DEFAULT_BETA, "recall")
}

pub fn fbeta_score(truth: &[u8], predicted: &[u8], beta: f64) -> Result<f64, EvaluationError> {
    score(truth, predicted, beta, "fbeta")
}

/// Accuracy and F0.5 of one set of predictions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scores {
    pub accuracy: f64,
    pub f_score: f64,
}

impl Scores {
    pub fn from_predictions(truth: &[u8], predicted: &[u8]) -> Result<Self, EvaluationError> {
        let ev = evaluated(truth, predicted, DEFAULT_BETA)?;
        warn_if_ill_defined(&ev, "fbeta");
        let got = ev.metrics(["accuracy", "fbeta"]);
        Ok(Self {
            accuracy: got[0].1.unwrap_or(f64::NAN),
            f_score: got[1].1.unwrap_or(f64::NAN),
        })
    }
}

impl Display for Scores {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Accuracy score: {:.4}, F-score: {:.4}",
            self.accuracy, self.f_score
        )
    }
}
