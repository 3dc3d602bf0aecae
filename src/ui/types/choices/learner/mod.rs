pub mod learner_choice;
mod sgd_choice;
mod svc_choice;
mod tree_choice;

pub use sgd_choice::SgdParams;
pub use svc_choice::SvcParams;
pub use tree_choice::{DecisionTreeParams, RandomForestParams};
