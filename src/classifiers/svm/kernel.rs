use crate::utils::math::{dot, squared_distance};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum KernelKind {
    Linear,
    #[default]
    Rbf,
}

/// Kernel with its bandwidth resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Kernel {
    /// `K(a, b) = a · b`
    Linear,
    /// `K(a, b) = exp(-gamma * ||a - b||²)`
    Rbf { gamma: f64 },
}

impl Kernel {
    #[inline]
    pub fn compute(&self, a: &[f64], b: &[f64]) -> f64 {
        match *self {
            Kernel::Linear => dot(a, b),
            Kernel::Rbf { gamma } => (-gamma * squared_distance(a, b)).exp(),
        }
    }
}
