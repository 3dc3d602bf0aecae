use crate::classifiers::Penalty;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_penalty() -> Penalty {
    Penalty::L2
}
fn default_alpha() -> f64 {
    1e-4
}
fn default_max_iter() -> usize {
    1000
}
fn default_tol() -> Option<f64> {
    Some(1e-3)
}
fn default_seed() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SgdParams {
    #[serde(default = "default_penalty")]
    #[schemars(
        title = "Penalty",
        description = "l2 or l1 regularization.",
        default = "default_penalty"
    )]
    pub penalty: Penalty,

    #[serde(default = "default_alpha")]
    #[schemars(
        title = "Alpha",
        description = "Regularization strength.",
        default = "default_alpha"
    )]
    pub alpha: f64,

    #[serde(default = "default_max_iter")]
    #[schemars(
        title = "Max epochs",
        description = "Passes over the training data.",
        range(min = 1),
        default = "default_max_iter"
    )]
    pub max_iter: usize,

    #[serde(default = "default_tol")]
    #[schemars(
        title = "Tolerance",
        description = "Early-stopping tolerance (empty = run every epoch).",
        default = "default_tol"
    )]
    pub tol: Option<f64>,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for SgdParams {
    fn default() -> Self {
        Self {
            penalty: default_penalty(),
            alpha: default_alpha(),
            max_iter: default_max_iter(),
            tol: default_tol(),
            seed: default_seed(),
        }
    }
}
