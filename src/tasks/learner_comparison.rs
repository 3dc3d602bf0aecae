use crate::classifiers::{Classifier, ClassifierError};
use crate::core::Dataset;
use crate::evaluation::{ComparisonTable, EvaluationError, evaluate_on};
use crate::tasks::TaskError;

/// Shares of the training set each learner is fit on.
pub const SAMPLE_FRACTIONS: [f64; 3] = [0.01, 0.1, 1.0];

/// Truncated sample sizes for [`SAMPLE_FRACTIONS`] of `n` training rows.
pub fn sample_sizes(n: usize) -> Vec<usize> {
    SAMPLE_FRACTIONS
        .iter()
        .map(|f| (n as f64 * f) as usize)
        .collect()
}

/// Trains every learner on 1%, 10% and 100% of the training data.
///
/// Each run starts from an unfitted copy of the learner. Sizes that
/// truncate to zero, and samples holding a single class, are skipped with
/// a warning instead of failing the whole comparison.
pub struct LearnerComparison {
    learners: Vec<Box<dyn Classifier>>,
}

impl LearnerComparison {
    pub fn new(learners: Vec<Box<dyn Classifier>>) -> Self {
        Self { learners }
    }

    pub fn learner_names(&self) -> Vec<&str> {
        self.learners.iter().map(|l| l.name()).collect()
    }

    pub fn run(&self, train: &Dataset, test: &Dataset) -> Result<ComparisonTable, TaskError> {
        let mut table = ComparisonTable::default();
        let sizes = sample_sizes(train.len());
        for learner in &self.learners {
            for &size in &sizes {
                if size == 0 {
                    tracing::warn!("{}: skipping empty sample", learner.name());
                    continue;
                }
                let mut model = learner.fresh();
                match evaluate_on(model.as_mut(), size, train, test) {
                    Ok(metrics) => table.push(learner.name(), size, metrics),
                    Err(EvaluationError::Classifier(ClassifierError::SingleClass(name))) => {
                        tracing::warn!("{name}: sample of {size} rows holds one class, skipped");
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }
        Ok(table)
    }
}
