use crate::classifiers::{Criterion, MaxFeatures};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_n_estimators() -> usize {
    100
}
fn default_criterion() -> Criterion {
    Criterion::Gini
}
fn default_min_samples_split() -> usize {
    2
}
fn default_min_samples_leaf() -> usize {
    1
}
fn default_forest_max_features() -> MaxFeatures {
    MaxFeatures::Sqrt
}
fn default_tree_max_features() -> MaxFeatures {
    MaxFeatures::All
}
fn default_true() -> bool {
    true
}
fn default_seed() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DecisionTreeParams {
    #[serde(default = "default_criterion")]
    #[schemars(
        title = "Criterion",
        description = "gini or entropy.",
        default = "default_criterion"
    )]
    pub criterion: Criterion,

    #[serde(default)]
    #[schemars(
        title = "Max depth",
        description = "Depth limit (empty = grow until pure).",
        range(min = 1)
    )]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_samples_split")]
    #[schemars(
        title = "Min samples to split",
        description = "Smallest node that may be split.",
        range(min = 2),
        default = "default_min_samples_split"
    )]
    pub min_samples_split: usize,

    #[serde(default = "default_min_samples_leaf")]
    #[schemars(
        title = "Min samples per leaf",
        description = "Smallest allowed leaf.",
        range(min = 1),
        default = "default_min_samples_leaf"
    )]
    pub min_samples_leaf: usize,

    #[serde(default = "default_tree_max_features")]
    #[schemars(
        title = "Max features",
        description = "Features tried per split: sqrt, log2 or all.",
        default = "default_tree_max_features"
    )]
    pub max_features: MaxFeatures,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for DecisionTreeParams {
    fn default() -> Self {
        Self {
            criterion: default_criterion(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            max_features: default_tree_max_features(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct RandomForestParams {
    #[serde(default = "default_n_estimators")]
    #[schemars(
        title = "Trees",
        description = "Number of trees in the forest.",
        range(min = 1),
        default = "default_n_estimators"
    )]
    pub n_estimators: usize,

    #[serde(default = "default_criterion")]
    #[schemars(
        title = "Criterion",
        description = "gini or entropy.",
        default = "default_criterion"
    )]
    pub criterion: Criterion,

    #[serde(default)]
    #[schemars(
        title = "Max depth",
        description = "Depth limit (empty = grow until pure).",
        range(min = 1)
    )]
    pub max_depth: Option<usize>,

    #[serde(default = "default_min_samples_split")]
    #[schemars(
        title = "Min samples to split",
        description = "Smallest node that may be split.",
        range(min = 2),
        default = "default_min_samples_split"
    )]
    pub min_samples_split: usize,

    #[serde(default = "default_min_samples_leaf")]
    #[schemars(
        title = "Min samples per leaf",
        description = "Smallest allowed leaf.",
        range(min = 1),
        default = "default_min_samples_leaf"
    )]
    pub min_samples_leaf: usize,

    #[serde(default = "default_forest_max_features")]
    #[schemars(
        title = "Max features",
        description = "Features tried per split: sqrt, log2 or all.",
        default = "default_forest_max_features"
    )]
    pub max_features: MaxFeatures,

    #[serde(default = "default_true")]
    #[schemars(
        title = "Bootstrap",
        description = "Fit each tree on a bootstrap resample?",
        default = "default_true"
    )]
    pub bootstrap: bool,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for RandomForestParams {
    fn default() -> Self {
        Self {
            n_estimators: default_n_estimators(),
            criterion: default_criterion(),
            max_depth: None,
            min_samples_split: default_min_samples_split(),
            min_samples_leaf: default_min_samples_leaf(),
            max_features: default_forest_max_features(),
            bootstrap: default_true(),
            seed: default_seed(),
        }
    }
}
