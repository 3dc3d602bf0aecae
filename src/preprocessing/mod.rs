mod log_transformer;
mod min_max_scaler;
mod one_hot_encoder;
mod pipeline;

pub use log_transformer::LogTransformer;
pub use min_max_scaler::MinMaxScaler;
pub use one_hot_encoder::OneHotEncoder;
pub use pipeline::FeaturePipeline;

use crate::core::DataError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PreprocessError {
    #[error("{0} must be fitted before transform")]
    NotFitted(&'static str),

    #[error("missing column '{0}'")]
    MissingColumn(String),

    #[error("column '{0}' is not numeric")]
    NotNumeric(String),

    #[error(transparent)]
    Data(#[from] DataError),
}
