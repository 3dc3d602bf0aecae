use crate::classifiers::Classifier;
use crate::evaluation::{ComparisonTable, Scores};
use crate::sources::IncomeSummary;
use crate::tasks::{
    DataSource, FeatureImportance, GridSearch, GridSearchOutcome, ImportanceReport,
    LearnerComparison, ModelComparison, ParamGrid, TaskError, naive_baseline,
};
use crate::ui::types::build::build_learner;
use crate::ui::types::choices::LearnerChoice;
use std::fmt::{Display, Formatter};

/// Everything the full report needs, with learners already built.
pub struct ReportPlan {
    pub source: DataSource,
    pub learners: Vec<Box<dyn Classifier>>,
    pub tune_base: LearnerChoice,
    pub grid: ParamGrid,
    pub folds: usize,
    pub ranker: Box<dyn Classifier>,
    pub top_k: usize,
}

pub struct ReportOutcome {
    pub summary: IncomeSummary,
    pub n_features: usize,
    pub naive: Scores,
    pub comparison: ComparisonTable,
    pub tuning: GridSearchOutcome,
    pub models: ModelComparison,
    pub importance: ImportanceReport,
}

/// Explore, preprocess and split, then run the baseline, the learner
/// comparison, tuning and feature selection in that order.
pub fn run_report(plan: &ReportPlan) -> Result<ReportOutcome, TaskError> {
    let data = plan.source.prepare()?;
    tracing::info!("{}", data.summary);

    let all_labels: Vec<u8> = [data.train.labels(), data.test.labels()].concat();
    let naive = naive_baseline(&all_labels)?;
    let learners = plan.learners.iter().map(|l| l.fresh()).collect();
    let comparison = LearnerComparison::new(learners).run(&data.train, &data.test)?;

    let tuning = GridSearch::new(plan.tune_base.clone(), plan.grid.clone(), plan.folds)
        .run(&data.train)?;
    let base = build_learner(plan.tune_base.clone())?;
    let models = ModelComparison::run(
        base.as_ref(),
        tuning.best_learner.as_ref(),
        &data.train,
        &data.test,
    )?;

    let ranker = plan.ranker.fresh();
    let importance = FeatureImportance::new(ranker, tuning.best_learner.as_ref(), plan.top_k)
        .run(&data.train, &data.test)?;

    Ok(ReportOutcome {
        summary: data.summary,
        n_features: data.train.n_features(),
        naive,
        comparison,
        tuning,
        models,
        importance,
    })
}

impl Display for ReportOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.summary)?;
        writeln!(f, "{} total features after one-hot encoding.", self.n_features)?;
        writeln!(f)?;
        writeln!(f, "Naive Predictor: [{}]", self.naive)?;
        writeln!(f)?;
        writeln!(f, "{}", self.comparison)?;
        writeln!(f, "{}", self.tuning)?;
        writeln!(f)?;
        writeln!(f, "{}", self.models)?;
        writeln!(f)?;
        write!(f, "{}", self.importance)
    }
}
