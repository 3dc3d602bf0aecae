use crate::classifiers::{Classifier, ClassifierError};
use std::collections::HashMap;

/// Remembers the label of every training row and replays it; unseen rows
/// are predicted `0`.
#[derive(Debug, Clone, Default)]
pub struct OracleClassifier {
    memory: HashMap<Vec<u64>, u8>,
}

fn key(row: &[f64]) -> Vec<u64> {
    row.iter().map(|v| v.to_bits()).collect()
}

impl Classifier for OracleClassifier {
    fn name(&self) -> &str {
        "OracleClassifier"
    }

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError> {
        self.memory = features
            .iter()
            .zip(labels)
            .map(|(row, &y)| (key(row), y))
            .collect();
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        Ok(features
            .iter()
            .map(|row| self.memory.get(&key(row)).copied().unwrap_or(0))
            .collect())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(OracleClassifier::default())
    }
}
