mod dataset;
mod learner;
mod schema;
mod task_choice;
mod ui_choice;

pub use dataset::DatasetParameters;
pub use learner::learner_choice::*;
pub use schema::*;
pub use task_choice::*;
pub use ui_choice::UIChoice;

pub use learner::*;
