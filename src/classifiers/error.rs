use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ClassifierError {
    #[error("cannot fit on an empty training set")]
    EmptyTrainingSet,

    #[error("{features} feature rows but {labels} labels")]
    LabelCount { features: usize, labels: usize },

    #[error("expected {expected} features per row, found {got}")]
    DimensionMismatch { expected: usize, got: usize },

    #[error("label {0} is not binary (expected 0 or 1)")]
    InvalidLabel(u8),

    #[error("{0} needs samples of at least two classes")]
    SingleClass(String),

    #[error("{0} must be fitted before predicting")]
    NotFitted(String),

    #[error("invalid hyperparameter: {0}")]
    InvalidParameter(String),
}
