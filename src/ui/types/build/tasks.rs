use crate::tasks::{
    CompareTask, DataSource, ImportanceTask, ReportPlan, ReportTask, Task, TuneTask,
};
use crate::ui::types::build::{BuildError, build_learner, build_learners};
use crate::ui::types::choices::{DatasetParameters, LearnerChoice, TaskChoice};

impl From<DatasetParameters> for DataSource {
    fn from(p: DatasetParameters) -> Self {
        DataSource {
            path: p.path.into(),
            test_fraction: p.test_fraction,
            seed: p.seed,
        }
    }
}

fn check_folds(folds: usize) -> Result<usize, BuildError> {
    if folds < 2 {
        return Err(BuildError::InvalidParameter(format!(
            "folds must be >= 2, got {folds}"
        )));
    }
    Ok(folds)
}

fn check_top_k(top_k: usize) -> Result<usize, BuildError> {
    if top_k == 0 {
        return Err(BuildError::InvalidParameter("top_k must be >= 1".into()));
    }
    Ok(top_k)
}

/// Returns `choice` once it is known to build.
fn buildable(choice: LearnerChoice) -> Result<LearnerChoice, BuildError> {
    build_learner(choice.clone())?;
    Ok(choice)
}

/// Validates a task configuration and builds every learner it names.
pub fn build_task(choice: TaskChoice) -> Result<Box<dyn Task>, BuildError> {
    Ok(match choice {
        TaskChoice::Report(p) => Box::new(ReportTask::new(ReportPlan {
            source: p.data.into(),
            learners: build_learners(p.learners)?,
            tune_base: buildable(p.tune)?,
            grid: p.grid,
            folds: check_folds(p.folds)?,
            ranker: build_learner(p.ranker)?,
            top_k: check_top_k(p.top_k)?,
        })),
        TaskChoice::Compare(p) => Box::new(CompareTask::new(
            p.data.into(),
            build_learners(p.learners)?,
        )),
        TaskChoice::Tune(p) => Box::new(TuneTask::new(
            p.data.into(),
            buildable(p.learner)?,
            p.grid,
            check_folds(p.folds)?,
        )),
        TaskChoice::Importance(p) => Box::new(ImportanceTask::new(
            p.data.into(),
            build_learner(p.ranker)?,
            build_learner(p.model)?,
            check_top_k(p.top_k)?,
        )),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{ImportanceParams, ReportParams, SgdParams, TuneParams};

    #[test]
    fn defaults_build() {
        assert!(build_task(TaskChoice::Report(ReportParams::default())).is_ok());
        assert!(build_task(TaskChoice::Tune(TuneParams::default())).is_ok());
        assert!(build_task(TaskChoice::Importance(ImportanceParams::default())).is_ok());
    }

    #[test]
    fn rejects_bad_counts_and_learners() {
        let p = ReportParams {
            folds: 1,
            ..ReportParams::default()
        };
        assert!(matches!(
            build_task(TaskChoice::Report(p)),
            Err(BuildError::InvalidParameter(_))
        ));

        let p = ImportanceParams {
            top_k: 0,
            ..ImportanceParams::default()
        };
        assert!(build_task(TaskChoice::Importance(p)).is_err());

        let p = TuneParams {
            learner: LearnerChoice::Sgd(SgdParams {
                alpha: 0.0,
                ..SgdParams::default()
            }),
            ..TuneParams::default()
        };
        assert!(matches!(
            build_task(TaskChoice::Tune(p)),
            Err(BuildError::Learner(_))
        ));
    }
}
