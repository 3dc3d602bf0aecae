use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::evaluation::Scores;
use crate::tasks::TaskError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Test-set scores before and after tuning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelComparison {
    pub unoptimized: Scores,
    pub optimized: Scores,
}

impl ModelComparison {
    /// Fits a fresh copy of `base` on `train`, then scores it and the
    /// already-fitted `tuned` model on `test`.
    pub fn run(
        base: &dyn Classifier,
        tuned: &dyn Classifier,
        train: &Dataset,
        test: &Dataset,
    ) -> Result<Self, TaskError> {
        let mut unoptimized = base.fresh();
        unoptimized.fit(train.features(), train.labels())?;
        let before = unoptimized.predict(test.features())?;
        let after = tuned.predict(test.features())?;
        Ok(Self {
            unoptimized: Scores::from_predictions(test.labels(), &before)?,
            optimized: Scores::from_predictions(test.labels(), &after)?,
        })
    }
}

impl Display for ModelComparison {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Unoptimized model")?;
        writeln!(f, "------")?;
        writeln!(f, "Accuracy score on testing data: {:.4}", self.unoptimized.accuracy)?;
        writeln!(f, "F-score on testing data: {:.4}", self.unoptimized.f_score)?;
        writeln!(f)?;
        writeln!(f, "Optimized Model")?;
        writeln!(f, "------")?;
        writeln!(f, "Final accuracy score on the testing data: {:.4}", self.optimized.accuracy)?;
        write!(f, "Final F-score on the testing data: {:.4}", self.optimized.f_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::toy_dataset;
    use crate::testing::stubs::{FixedClassifier, OracleClassifier};

    #[test]
    fn base_is_refit_and_tuned_is_used_as_is() {
        let data = toy_dataset();
        let mut tuned = OracleClassifier::default();
        tuned.fit(data.features(), data.labels()).unwrap();
        let cmp = ModelComparison::run(&FixedClassifier::new(1), &tuned, &data, &data).unwrap();
        assert_eq!(cmp.unoptimized.accuracy, 0.5);
        assert_eq!(cmp.optimized.accuracy, 1.0);
        assert_eq!(cmp.optimized.f_score, 1.0);
        let text = cmp.to_string();
        assert!(text.contains("Unoptimized model"));
        assert!(text.contains("Final F-score on the testing data: 1.0000"));
    }
}
