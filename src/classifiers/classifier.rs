use crate::classifiers::ClassifierError;

/// Batch binary classifier over dense `f64` rows.
///
/// Labels are `0`/`1`. `fit` replaces any previously learned state, so a
/// classifier can be refit on a different sample without rebuilding it.
pub trait Classifier {
    /// Short type name used in reports (e.g. `"RandomForestClassifier"`).
    fn name(&self) -> &str;

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError>;

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError>;

    /// Unfitted copy carrying the same hyperparameters.
    fn fresh(&self) -> Box<dyn Classifier>;

    /// Normalized per-feature importances, for models that expose them.
    fn feature_importances(&self) -> Option<Vec<f64>> {
        None
    }
}

/// Checks a training set and returns its feature width.
pub(crate) fn check_training_set(
    features: &[Vec<f64>],
    labels: &[u8],
) -> Result<usize, ClassifierError> {
    if features.is_empty() {
        return Err(ClassifierError::EmptyTrainingSet);
    }
    if features.len() != labels.len() {
        return Err(ClassifierError::LabelCount {
            features: features.len(),
            labels: labels.len(),
        });
    }
    let width = features[0].len();
    check_width(features, width)?;
    if let Some(&bad) = labels.iter().find(|&&y| y > 1) {
        return Err(ClassifierError::InvalidLabel(bad));
    }
    Ok(width)
}

pub(crate) fn check_width(features: &[Vec<f64>], expected: usize) -> Result<(), ClassifierError> {
    match features.iter().find(|r| r.len() != expected) {
        Some(r) => Err(ClassifierError::DimensionMismatch {
            expected,
            got: r.len(),
        }),
        None => Ok(()),
    }
}

pub(crate) fn has_both_classes(labels: &[u8]) -> bool {
    labels.contains(&0) && labels.contains(&1)
}
