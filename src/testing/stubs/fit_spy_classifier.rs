use crate::classifiers::{Classifier, ClassifierError};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct SpyLog {
    fit_sizes: Vec<usize>,
    predict_sizes: Vec<usize>,
}

/// Predicts `0` and records the size of every `fit`/`predict` call.
///
/// Clones and `fresh()` copies share one log, so a test can keep a handle
/// while the code under test works on copies.
#[derive(Debug, Clone, Default)]
pub struct FitSpyClassifier {
    log: Arc<Mutex<SpyLog>>,
}

impl FitSpyClassifier {
    pub fn fit_sizes(&self) -> Vec<usize> {
        self.log.lock().unwrap().fit_sizes.clone()
    }

    pub fn predict_sizes(&self) -> Vec<usize> {
        self.log.lock().unwrap().predict_sizes.clone()
    }
}

impl Classifier for FitSpyClassifier {
    fn name(&self) -> &str {
        "FitSpyClassifier"
    }

    fn fit(&mut self, features: &[Vec<f64>], _labels: &[u8]) -> Result<(), ClassifierError> {
        self.log.lock().unwrap().fit_sizes.push(features.len());
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        self.log.lock().unwrap().predict_sizes.push(features.len());
        Ok(vec![0; features.len()])
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(self.clone())
    }
}
