mod error;
mod estimators;
mod evaluators;
mod measurement;
mod metrics;
pub mod preview;
mod train_predict;

pub use error::EvaluationError;
pub use estimators::{BasicEstimator, Estimator};
pub use evaluators::{
    BinaryClassificationEvaluator, DEFAULT_BETA, PerformanceEvaluator, PerformanceEvaluatorExt,
    fbeta,
};
pub use measurement::Measurement;
pub use metrics::{Scores, accuracy_score, fbeta_score, precision_score, recall_score};
pub use preview::{ComparisonRow, ComparisonTable, ReportFormat};
pub use train_predict::{MetricsRecord, TRAIN_PREFIX, evaluate, evaluate_on};
