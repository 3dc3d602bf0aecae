mod entropy_split_criterion;
mod gini_split_criterion;
mod split_criterion;

pub use entropy_split_criterion::EntropySplitCriterion;
pub use gini_split_criterion::GiniSplitCriterion;
pub use split_criterion::SplitCriterion;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Impurity measure used to rank candidate splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Criterion {
    #[default]
    Gini,
    Entropy,
}

impl SplitCriterion for Criterion {
    fn impurity(&self, distribution: &[f64]) -> f64 {
        match self {
            Criterion::Gini => GiniSplitCriterion.impurity(distribution),
            Criterion::Entropy => EntropySplitCriterion.impurity(distribution),
        }
    }
}
