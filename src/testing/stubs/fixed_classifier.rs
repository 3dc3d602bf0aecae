use crate::classifiers::{Classifier, ClassifierError};

/// Predicts the same label for every row.
#[derive(Debug, Clone, Copy)]
pub struct FixedClassifier {
    pub label: u8,
}

impl FixedClassifier {
    pub fn new(label: u8) -> Self {
        Self { label }
    }
}

impl Classifier for FixedClassifier {
    fn name(&self) -> &str {
        "FixedClassifier"
    }

    fn fit(&mut self, _features: &[Vec<f64>], _labels: &[u8]) -> Result<(), ClassifierError> {
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        Ok(vec![self.label; features.len()])
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(*self)
    }
}
