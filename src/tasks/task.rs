use crate::classifiers::Classifier;
use crate::evaluation::{ComparisonTable, Scores};
use crate::tasks::{
    DataSource, FeatureImportance, GridSearch, GridSearchOutcome, ImportanceReport,
    LearnerComparison, ModelComparison, ParamGrid, ReportOutcome, ReportPlan, TaskError,
    naive_baseline, run_report,
};
use crate::ui::types::build::build_learner;
use crate::ui::types::choices::LearnerChoice;
use std::fmt::{Display, Formatter};

pub trait Task {
    fn run(&mut self) -> Result<TaskOutcome, TaskError>;
}

pub enum TaskOutcome {
    Report(Box<ReportOutcome>),
    Compare {
        naive: Scores,
        table: ComparisonTable,
    },
    Tune {
        search: GridSearchOutcome,
        models: ModelComparison,
    },
    Importance(ImportanceReport),
}

impl TaskOutcome {
    /// Learner comparison table, for the outcomes that have one.
    pub fn comparison(&self) -> Option<&ComparisonTable> {
        match self {
            TaskOutcome::Report(r) => Some(&r.comparison),
            TaskOutcome::Compare { table, .. } => Some(table),
            _ => None,
        }
    }
}

impl Display for TaskOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            TaskOutcome::Report(r) => write!(f, "{r}"),
            TaskOutcome::Compare { naive, table } => {
                writeln!(f, "Naive Predictor: [{naive}]")?;
                writeln!(f)?;
                write!(f, "{table}")
            }
            TaskOutcome::Tune { search, models } => {
                writeln!(f, "{search}")?;
                writeln!(f)?;
                write!(f, "{models}")
            }
            TaskOutcome::Importance(r) => write!(f, "{r}"),
        }
    }
}

pub struct ReportTask {
    plan: ReportPlan,
}

impl ReportTask {
    pub fn new(plan: ReportPlan) -> Self {
        Self { plan }
    }
}

impl Task for ReportTask {
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        Ok(TaskOutcome::Report(Box::new(run_report(&self.plan)?)))
    }
}

pub struct CompareTask {
    source: DataSource,
    comparison: LearnerComparison,
}

impl CompareTask {
    pub fn new(source: DataSource, learners: Vec<Box<dyn Classifier>>) -> Self {
        Self {
            source,
            comparison: LearnerComparison::new(learners),
        }
    }
}

impl Task for CompareTask {
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        let data = self.source.prepare()?;
        let all_labels: Vec<u8> = [data.train.labels(), data.test.labels()].concat();
        let naive = naive_baseline(&all_labels)?;
        let table = self.comparison.run(&data.train, &data.test)?;
        Ok(TaskOutcome::Compare { naive, table })
    }
}

pub struct TuneTask {
    source: DataSource,
    base: LearnerChoice,
    search: GridSearch,
}

impl TuneTask {
    pub fn new(source: DataSource, base: LearnerChoice, grid: ParamGrid, folds: usize) -> Self {
        Self {
            source,
            search: GridSearch::new(base.clone(), grid, folds),
            base,
        }
    }
}

impl Task for TuneTask {
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        let data = self.source.prepare()?;
        let search = self.search.run(&data.train)?;
        let base = build_learner(self.base.clone())?;
        let models = ModelComparison::run(
            base.as_ref(),
            search.best_learner.as_ref(),
            &data.train,
            &data.test,
        )?;
        Ok(TaskOutcome::Tune { search, models })
    }
}

pub struct ImportanceTask {
    source: DataSource,
    ranker: Box<dyn Classifier>,
    model: Box<dyn Classifier>,
    top_k: usize,
}

impl ImportanceTask {
    pub fn new(
        source: DataSource,
        ranker: Box<dyn Classifier>,
        model: Box<dyn Classifier>,
        top_k: usize,
    ) -> Self {
        Self {
            source,
            ranker,
            model,
            top_k,
        }
    }
}

impl Task for ImportanceTask {
    fn run(&mut self) -> Result<TaskOutcome, TaskError> {
        let data = self.source.prepare()?;
        self.model.fit(data.train.features(), data.train.labels())?;
        let report = FeatureImportance::new(self.ranker.fresh(), self.model.as_ref(), self.top_k)
            .run(&data.train, &data.test)?;
        Ok(TaskOutcome::Importance(report))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::census_csv;
    use crate::ui::types::build::build_learners;
    use crate::ui::types::choices::{DecisionTreeParams, NoParams, SgdParams};
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn census_file(n: usize) -> NamedTempFile {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(census_csv(n, 4).as_bytes()).unwrap();
        tf
    }

    fn source(tf: &NamedTempFile) -> DataSource {
        DataSource {
            path: tf.path().to_path_buf(),
            test_fraction: 0.2,
            seed: 3,
        }
    }

    #[test]
    fn compare_task_yields_a_table() {
        let tf = census_file(200);
        let learners = build_learners(vec![LearnerChoice::Naive(NoParams::default())]).unwrap();
        let outcome = CompareTask::new(source(&tf), learners).run().unwrap();
        let table = outcome.comparison().unwrap();
        assert_eq!(table.len(), 3);
        assert!(outcome.to_string().starts_with("Naive Predictor: ["));
    }

    #[test]
    fn tune_task_has_no_table() {
        let tf = census_file(200);
        let grid = ParamGrid::from([("alpha".to_string(), vec![json!(1e-3)])]);
        let base = LearnerChoice::Sgd(SgdParams::default());
        let mut task = TuneTask::new(source(&tf), base, grid, 3);
        let outcome = task.run().unwrap();
        assert!(outcome.comparison().is_none());
        match outcome {
            TaskOutcome::Tune { search, .. } => assert_eq!(search.candidates.len(), 1),
            _ => panic!("expected a tuning outcome"),
        }
    }

    #[test]
    fn importance_task_ranks_features() {
        let tf = census_file(200);
        let tree = || {
            build_learner(LearnerChoice::DecisionTree(DecisionTreeParams::default())).unwrap()
        };
        let mut task = ImportanceTask::new(source(&tf), tree(), tree(), 3);
        match task.run().unwrap() {
            TaskOutcome::Importance(r) => assert_eq!(r.ranked.len(), 3),
            _ => panic!("expected an importance outcome"),
        }
    }
}
