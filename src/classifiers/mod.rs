pub mod classifier;
mod error;
pub mod forest;
pub mod linear;
mod naive_predictor;
pub mod svm;

pub use classifier::Classifier;
pub use error::ClassifierError;
pub use forest::{Criterion, DecisionTree, MaxFeatures, RandomForest, TreeParams};
pub use linear::{Penalty, SgdClassifier};
pub use naive_predictor::NaivePredictor;
pub use svm::{KernelKind, Svc};
