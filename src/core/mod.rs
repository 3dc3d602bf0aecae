mod dataset;
mod error;
mod frame;

pub use dataset::Dataset;
pub use error::DataError;
pub use frame::{Column, RawFrame};
