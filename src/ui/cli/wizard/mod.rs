mod wizard;

pub use wizard::{prompt_choice, prompt_dataset, prompt_grid, prompt_learners};
