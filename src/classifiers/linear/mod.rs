mod sgd_classifier;

pub use sgd_classifier::{Penalty, SgdClassifier};
