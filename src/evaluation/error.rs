use crate::classifiers::ClassifierError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EvaluationError {
    #[error("sample size {requested} is outside 1..={available} training rows")]
    InvalidSampleSize { requested: usize, available: usize },

    #[error("{what}: {rows} rows but {labels} labels")]
    LabelCount {
        what: &'static str,
        rows: usize,
        labels: usize,
    },

    #[error("cannot evaluate on an empty {0} set")]
    Empty(&'static str),

    #[error("classifier returned {got} predictions for {expected} rows")]
    PredictionCount { expected: usize, got: usize },

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}
