use crate::classifiers::ClassifierError;
use crate::core::DataError;
use crate::evaluation::EvaluationError;
use crate::preprocessing::PreprocessError;
use crate::ui::types::build::BuildError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    #[error(transparent)]
    Data(#[from] DataError),

    #[error(transparent)]
    Preprocess(#[from] PreprocessError),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),

    #[error(transparent)]
    Evaluation(#[from] EvaluationError),

    #[error(transparent)]
    Build(#[from] BuildError),

    #[error("invalid parameter grid: {0}")]
    InvalidGrid(String),

    #[error("cannot make {folds} folds from {samples} samples")]
    Folds { folds: usize, samples: usize },

    #[error("{0} does not expose feature importances")]
    NoImportances(String),

    #[error("cannot keep {requested} of {available} features")]
    TopK { requested: usize, available: usize },
}
