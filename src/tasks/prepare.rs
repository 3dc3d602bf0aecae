use crate::core::Dataset;
use crate::preprocessing::FeaturePipeline;
use crate::sources::{CensusData, IncomeSummary, load_census_csv};
use crate::tasks::TaskError;
use std::path::PathBuf;

/// Where the census file lives and how to split it.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSource {
    pub path: PathBuf,
    pub test_fraction: f64,
    pub seed: u64,
}

/// Encoded train/test split plus the class balance of the raw file.
#[derive(Debug, Clone)]
pub struct PreparedData {
    pub summary: IncomeSummary,
    pub train: Dataset,
    pub test: Dataset,
}

impl DataSource {
    pub fn prepare(&self) -> Result<PreparedData, TaskError> {
        let census = load_census_csv(&self.path)?;
        prepare_census(census, self.test_fraction, self.seed)
    }
}

/// Summarizes, encodes and splits already-loaded census rows.
pub fn prepare_census(
    census: CensusData,
    test_fraction: f64,
    seed: u64,
) -> Result<PreparedData, TaskError> {
    let summary = IncomeSummary::from_labels(&census.labels);
    let encoded = FeaturePipeline::census().fit_transform(census.frame, census.labels)?;
    let (train, test) = encoded.train_test_split(test_fraction, seed)?;
    tracing::info!("Training set has {} samples.", train.len());
    tracing::info!("Testing set has {} samples.", test.len());
    Ok(PreparedData {
        summary,
        train,
        test,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::census_csv;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn prepares_split_from_disk() {
        let mut tf = NamedTempFile::new().unwrap();
        tf.write_all(census_csv(50, 1).as_bytes()).unwrap();
        let source = DataSource {
            path: tf.path().to_path_buf(),
            test_fraction: 0.2,
            seed: 0,
        };
        let data = source.prepare().unwrap();
        assert_eq!(data.summary.n_records, 50);
        assert_eq!(data.test.len(), 10);
        assert_eq!(data.train.len(), 40);
        assert_eq!(data.train.feature_names(), data.test.feature_names());
    }

    #[test]
    fn missing_file_is_a_data_error() {
        let source = DataSource {
            path: "/definitely/not/here.csv".into(),
            test_fraction: 0.2,
            seed: 0,
        };
        assert!(matches!(source.prepare(), Err(TaskError::Data(_))));
    }
}
