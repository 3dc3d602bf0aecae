use crate::classifiers::{Classifier, ClassifierError};

/// Baseline that labels every individual as earning more than 50K.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaivePredictor;

impl NaivePredictor {
    pub fn new() -> Self {
        NaivePredictor
    }
}

impl Classifier for NaivePredictor {
    fn name(&self) -> &str {
        "NaivePredictor"
    }

    fn fit(&mut self, _features: &[Vec<f64>], _labels: &[u8]) -> Result<(), ClassifierError> {
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        Ok(vec![1; features.len()])
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(NaivePredictor::new())
    }
}
