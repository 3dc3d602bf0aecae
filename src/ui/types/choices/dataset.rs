use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "census.csv".to_string()
}
fn default_test_fraction() -> f64 {
    0.2
}
fn default_seed() -> u64 {
    0
}

/// Census CSV location and how it is split into train and test rows.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DatasetParameters {
    #[serde(default = "default_path")]
    #[schemars(
        title = "CSV path",
        description = "Path to census.csv",
        default = "default_path"
    )]
    pub path: String,

    #[serde(default = "default_test_fraction")]
    #[schemars(
        title = "Test fraction",
        description = "Share of rows held out for testing.",
        range(min = 0.0, max = 1.0),
        default = "default_test_fraction"
    )]
    pub test_fraction: f64,

    #[serde(default = "default_seed")]
    #[schemars(
        title = "Split seed",
        description = "PRNG seed for the shuffle",
        default = "default_seed"
    )]
    pub seed: u64,
}

impl Default for DatasetParameters {
    fn default() -> Self {
        Self {
            path: default_path(),
            test_fraction: default_test_fraction(),
            seed: default_seed(),
        }
    }
}
