mod decision_tree;
mod random_forest;
pub mod split_criteria;

pub use decision_tree::{DecisionTree, MaxFeatures, TreeParams};
pub use random_forest::RandomForest;
pub use split_criteria::Criterion;
