use crate::classifiers::{Classifier, NaivePredictor};
use crate::evaluation::Scores;
use crate::tasks::TaskError;

/// Scores of predicting `>50K` for every row of `labels`.
pub fn naive_baseline(labels: &[u8]) -> Result<Scores, TaskError> {
    let rows = vec![Vec::new(); labels.len()];
    let predicted = NaivePredictor::new().predict(&rows)?;
    let scores = Scores::from_predictions(labels, &predicted)?;
    tracing::info!("Naive Predictor: [{scores}]");
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accuracy_is_the_positive_share() {
        let s = naive_baseline(&[1, 0, 0, 0]).unwrap();
        assert_eq!(s.accuracy, 0.25);
        // P = 0.25, R = 1, F0.5 = 1.25 * 0.25 / (0.0625 + 1)
        assert!((s.f_score - 0.3125 / 1.0625).abs() < 1e-12);
    }
}
