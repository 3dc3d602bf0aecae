use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::evaluation::Scores;
use crate::tasks::TaskError;
use crate::utils::math::argsort_desc;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const DEFAULT_TOP_K: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedFeature {
    pub name: String,
    pub importance: f64,
}

/// Top features by importance, and what keeping only them costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportanceReport {
    pub ranked: Vec<RankedFeature>,
    pub full: Scores,
    pub reduced: Scores,
}

impl ImportanceReport {
    pub fn cumulative_weight(&self) -> f64 {
        self.ranked.iter().map(|f| f.importance).sum()
    }
}

impl Display for ImportanceReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Top {} features:", self.ranked.len())?;
        for (i, feat) in self.ranked.iter().enumerate() {
            writeln!(f, "{:>2}. {:<40} {:.4}", i + 1, feat.name, feat.importance)?;
        }
        writeln!(f, "Cumulative weight: {:.4}", self.cumulative_weight())?;
        writeln!(f)?;
        writeln!(f, "Final Model trained on full data")?;
        writeln!(f, "------")?;
        writeln!(f, "Accuracy on testing data: {:.4}", self.full.accuracy)?;
        writeln!(f, "F-score on testing data: {:.4}", self.full.f_score)?;
        writeln!(f)?;
        writeln!(f, "Final Model trained on reduced data")?;
        writeln!(f, "------")?;
        writeln!(f, "Accuracy on testing data: {:.4}", self.reduced.accuracy)?;
        write!(f, "F-score on testing data: {:.4}", self.reduced.f_score)
    }
}

/// Ranks columns with `ranker`, then compares `model` on all columns against
/// a fresh copy of it on the `top_k` best.
pub struct FeatureImportance<'a> {
    ranker: Box<dyn Classifier>,
    model: &'a dyn Classifier,
    top_k: usize,
}

impl<'a> FeatureImportance<'a> {
    pub fn new(ranker: Box<dyn Classifier>, model: &'a dyn Classifier, top_k: usize) -> Self {
        Self {
            ranker,
            model,
            top_k,
        }
    }

    pub fn run(&mut self, train: &Dataset, test: &Dataset) -> Result<ImportanceReport, TaskError> {
        let available = train.n_features();
        if self.top_k == 0 || self.top_k > available {
            return Err(TaskError::TopK {
                requested: self.top_k,
                available,
            });
        }

        self.ranker.fit(train.features(), train.labels())?;
        let importances = self
            .ranker
            .feature_importances()
            .ok_or_else(|| TaskError::NoImportances(self.ranker.name().to_string()))?;
        let top: Vec<usize> = argsort_desc(&importances)
            .into_iter()
            .take(self.top_k)
            .collect();
        let ranked = top
            .iter()
            .map(|&i| RankedFeature {
                name: train.feature_names()[i].clone(),
                importance: importances[i],
            })
            .collect();

        let full = self.model.predict(test.features())?;
        let full = Scores::from_predictions(test.labels(), &full)?;

        let reduced_train = train.select_columns(&top)?;
        let reduced_test = test.select_columns(&top)?;
        let mut reduced_model = self.model.fresh();
        reduced_model.fit(reduced_train.features(), reduced_train.labels())?;
        let reduced = reduced_model.predict(reduced_test.features())?;
        let reduced = Scores::from_predictions(reduced_test.labels(), &reduced)?;

        Ok(ImportanceReport {
            ranked,
            full,
            reduced,
        })
    }
}
