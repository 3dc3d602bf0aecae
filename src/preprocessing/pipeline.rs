use crate::core::{Dataset, RawFrame};
use crate::preprocessing::{LogTransformer, MinMaxScaler, OneHotEncoder, PreprocessError};

/// Log transform, then min-max scaling, then one-hot encoding.
#[derive(Debug, Clone)]
pub struct FeaturePipeline {
    log: LogTransformer,
    scaler: MinMaxScaler,
    encoder: OneHotEncoder,
}

impl FeaturePipeline {
    pub fn new(log: LogTransformer, scaler: MinMaxScaler) -> Self {
        Self {
            log,
            scaler,
            encoder: OneHotEncoder::new(),
        }
    }

    /// Skewed capital columns log-transformed, the five continuous columns
    /// scaled to `[0, 1]`.
    pub fn census() -> Self {
        Self::new(LogTransformer::census(), MinMaxScaler::census())
    }

    pub fn fit_transform(
        &mut self,
        mut frame: RawFrame,
        labels: Vec<u8>,
    ) -> Result<Dataset, PreprocessError> {
        self.log.transform(&mut frame)?;
        self.scaler.fit_transform(&mut frame)?;
        self.encoder.fit(&frame);

        let names = self.encoder.feature_names()?;
        let rows = self.encoder.transform(&frame)?;
        tracing::info!(
            features = names.len(),
            "{} total features after one-hot encoding.",
            names.len()
        );
        Ok(Dataset::new(names, rows, labels)?)
    }

    /// Applies already-fitted steps to new data.
    pub fn transform(
        &self,
        mut frame: RawFrame,
        labels: Vec<u8>,
    ) -> Result<Dataset, PreprocessError> {
        self.log.transform(&mut frame)?;
        self.scaler.transform(&mut frame)?;
        let names = self.encoder.feature_names()?;
        let rows = self.encoder.transform(&frame)?;
        Ok(Dataset::new(names, rows, labels)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::census_from_reader;
    use crate::testing::dummies::CENSUS_SAMPLE_CSV;

    #[test]
    fn census_pipeline_produces_scaled_encoded_dataset() {
        let data = census_from_reader(CENSUS_SAMPLE_CSV.as_bytes()).unwrap();
        let n = data.labels.len();
        let ds = FeaturePipeline::census()
            .fit_transform(data.frame, data.labels)
            .unwrap();

        assert_eq!(ds.len(), n);
        assert_eq!(
            &ds.feature_names()[..5],
            &["age", "education-num", "capital-gain", "capital-loss", "hours-per-week"]
        );
        assert!(ds.feature_names().iter().any(|c| c == "sex_Female"));
        assert!(ds.feature_names().iter().any(|c| c == "workclass_Private"));

        for row in ds.features() {
            for &v in row {
                assert!((0.0..=1.0).contains(&v), "value {v} outside [0, 1]");
            }
        }
    }

    #[test]
    fn transform_requires_fit() {
        let data = census_from_reader(CENSUS_SAMPLE_CSV.as_bytes()).unwrap();
        let err = FeaturePipeline::census()
            .transform(data.frame, data.labels)
            .unwrap_err();
        assert!(matches!(err, PreprocessError::NotFitted(_)));
    }
}
