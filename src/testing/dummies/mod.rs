mod census;
mod rows;

pub use census::{CENSUS_SAMPLE_CSV, census_csv};
pub use rows::{separable_rows, toy_dataset};
