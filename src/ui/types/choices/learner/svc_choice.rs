use crate::classifiers::KernelKind;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_c() -> f64 {
    1.0
}
fn default_kernel() -> KernelKind {
    KernelKind::Rbf
}
fn default_tol() -> f64 {
    1e-3
}
fn default_max_passes() -> usize {
    5
}
fn default_max_iter() -> usize {
    20_000
}
fn default_seed() -> u64 {
    1
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SvcParams {
    #[serde(default = "default_c")]
    #[schemars(
        title = "C",
        description = "Penalty on margin violations.",
        default = "default_c"
    )]
    pub c: f64,

    #[serde(default = "default_kernel")]
    #[schemars(
        title = "Kernel",
        description = "linear or rbf.",
        default = "default_kernel"
    )]
    pub kernel: KernelKind,

    #[serde(default)]
    #[schemars(
        title = "Gamma",
        description = "RBF bandwidth (empty = 1 / (n_features * Var(X)))."
    )]
    pub gamma: Option<f64>,

    #[serde(default = "default_tol")]
    #[schemars(
        title = "Tolerance",
        description = "KKT violation tolerance.",
        default = "default_tol"
    )]
    pub tol: f64,

    #[serde(default = "default_max_passes")]
    #[schemars(
        title = "Max passes",
        description = "Consecutive sweeps without change before stopping.",
        range(min = 1),
        default = "default_max_passes"
    )]
    pub max_passes: usize,

    #[serde(default = "default_max_iter")]
    #[schemars(
        title = "Max updates",
        description = "Upper bound on pair updates.",
        range(min = 1),
        default = "default_max_iter"
    )]
    pub max_iter: usize,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}

impl Default for SvcParams {
    fn default() -> Self {
        Self {
            c: default_c(),
            kernel: default_kernel(),
            gamma: None,
            tol: default_tol(),
            max_passes: default_max_passes(),
            max_iter: default_max_iter(),
            seed: default_seed(),
        }
    }
}
