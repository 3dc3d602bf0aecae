pub mod dummies;
pub mod stubs;

pub use dummies::{CENSUS_SAMPLE_CSV, census_csv, separable_rows, toy_dataset};
pub use stubs::{FitSpyClassifier, FixedClassifier, OracleClassifier};
