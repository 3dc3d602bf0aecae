mod cross_validation;
mod error;
mod feature_importance;
mod grid_search;
mod learner_comparison;
mod model_comparison;
mod naive_baseline;
mod prepare;
mod report;
mod task;

pub use cross_validation::{cross_val_score, stratified_folds};
pub use error::TaskError;
pub use feature_importance::{DEFAULT_TOP_K, FeatureImportance, ImportanceReport, RankedFeature};
pub use grid_search::{
    CandidateScore, GridSearch, GridSearchOutcome, ParamGrid, default_grid, expand_grid,
};
pub use learner_comparison::{LearnerComparison, SAMPLE_FRACTIONS, sample_sizes};
pub use model_comparison::ModelComparison;
pub use naive_baseline::naive_baseline;
pub use prepare::{DataSource, PreparedData, prepare_census};
pub use report::{ReportOutcome, ReportPlan, run_report};
pub use task::{CompareTask, ImportanceTask, ReportTask, Task, TaskOutcome, TuneTask};
