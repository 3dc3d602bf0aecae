mod fit_spy_classifier;
mod fixed_classifier;
mod oracle_classifier;

pub use fit_spy_classifier::FitSpyClassifier;
pub use fixed_classifier::FixedClassifier;
pub use oracle_classifier::OracleClassifier;
