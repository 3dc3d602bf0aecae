mod error;
mod learners;
mod tasks;

pub use error::BuildError;

pub use learners::{build_learner, build_learners};
pub use tasks::build_task;
