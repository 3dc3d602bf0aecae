use crate::classifiers::{
    Classifier, DecisionTree, NaivePredictor, RandomForest, SgdClassifier, Svc,
};
use crate::ui::types::build::BuildError;
use crate::ui::types::choices::LearnerChoice;

mod sgd;
mod svc;
mod trees;

pub fn build_learner(choice: LearnerChoice) -> Result<Box<dyn Classifier>, BuildError> {
    Ok(match choice {
        LearnerChoice::Svc(p) => Box::new(Svc::try_from(p)?),
        LearnerChoice::RandomForest(p) => Box::new(RandomForest::try_from(p)?),
        LearnerChoice::Sgd(p) => Box::new(SgdClassifier::try_from(p)?),
        LearnerChoice::DecisionTree(p) => Box::new(DecisionTree::try_from(p)?),
        LearnerChoice::Naive(_) => Box::new(NaivePredictor::new()),
    })
}

/// Builds every choice, stopping at the first invalid one.
pub fn build_learners(choices: Vec<LearnerChoice>) -> Result<Vec<Box<dyn Classifier>>, BuildError> {
    choices.into_iter().map(build_learner).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::types::choices::{RandomForestParams, SgdParams, SvcParams};

    #[test]
    fn builds_report_defaults_in_order() {
        let learners = build_learners(LearnerChoice::report_defaults()).unwrap();
        let names: Vec<&str> = learners.iter().map(|l| l.name()).collect();
        assert_eq!(names, vec!["SVC", "RandomForestClassifier", "SGDClassifier"]);
    }

    #[test]
    fn invalid_values_surface_as_learner_errors() {
        let bad = LearnerChoice::Svc(SvcParams {
            c: 0.0,
            ..SvcParams::default()
        });
        assert!(matches!(build_learner(bad), Err(BuildError::Learner(_))));

        let bad = LearnerChoice::RandomForest(RandomForestParams {
            n_estimators: 0,
            ..RandomForestParams::default()
        });
        assert!(build_learner(bad).is_err());

        let bad = LearnerChoice::Sgd(SgdParams {
            alpha: -1.0,
            ..SgdParams::default()
        });
        assert!(build_learner(bad).is_err());
    }

    #[test]
    fn naive_needs_no_params() {
        let l = build_learner(LearnerChoice::Naive(Default::default())).unwrap();
        assert_eq!(l.name(), "NaivePredictor");
    }
}
