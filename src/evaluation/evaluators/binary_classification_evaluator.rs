use crate::evaluation::{BasicEstimator, Estimator, Measurement, PerformanceEvaluator};

/// Weight of recall relative to precision in the reported F-score.
pub const DEFAULT_BETA: f64 = 0.5;

/// Accumulating evaluator for binary labels with `1` as the positive class.
///
/// Tracks:
/// - accuracy, as the mean of per-pair correctness;
/// - precision, fed only by pairs predicted positive;
/// - recall, fed only by pairs that are truly positive.
///
/// `performance()` reports `accuracy`, `precision`, `recall` and `fbeta`.
/// Precision or recall with no contributing pairs is undefined and is
/// reported as `0.0`; [`Self::ill_defined`] tells which metrics fell back.
#[derive(Debug, Clone)]
pub struct BinaryClassificationEvaluator<E: Estimator + Default = BasicEstimator> {
    weight_correct: E,
    precision: E,
    recall: E,
    beta: f64,
    seen: usize,
}

impl<E: Estimator + Default> Default for BinaryClassificationEvaluator<E> {
    fn default() -> Self {
        Self::new(DEFAULT_BETA)
    }
}

impl<E: Estimator + Default> BinaryClassificationEvaluator<E> {
    pub fn new(beta: f64) -> Self {
        Self {
            weight_correct: E::default(),
            precision: E::default(),
            recall: E::default(),
            beta,
            seen: 0,
        }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn seen(&self) -> usize {
        self.seen
    }

    /// Whether `name` is reported as `0.0` only because it has no
    /// contributing pairs. `fbeta` is ill-defined when either input is.
    pub fn ill_defined(&self, name: &str) -> bool {
        let precision = self.precision.estimation().is_nan();
        let recall = self.recall.estimation().is_nan();
        match name {
            "precision" => precision,
            "recall" => recall,
            "fbeta" => precision || recall,
            _ => false,
        }
    }

    fn or_zero(value: f64) -> f64 {
        if value.is_nan() { 0.0 } else { value }
    }
}

/// `(1+β²)·P·R / (β²·P + R)`, or `0.0` when both are zero.
pub fn fbeta(precision: f64, recall: f64, beta: f64) -> f64 {
    let b2 = beta * beta;
    let denom = b2 * precision + recall;
    if denom > 0.0 {
        (1.0 + b2) * precision * recall / denom
    } else {
        0.0
    }
}

impl<E: Estimator + Default> PerformanceEvaluator for BinaryClassificationEvaluator<E> {
    fn reset(&mut self) {
        *self = Self::new(self.beta);
    }

    fn add_result(&mut self, truth: u8, predicted: u8) {
        let hit = if truth == predicted { 1.0 } else { 0.0 };
        self.weight_correct.add(hit);
        self.precision.add(if predicted == 1 { hit } else { f64::NAN });
        self.recall.add(if truth == 1 { hit } else { f64::NAN });
        self.seen += 1;
    }

    fn performance(&self) -> Vec<Measurement> {
        let precision = Self::or_zero(self.precision.estimation());
        let recall = Self::or_zero(self.recall.estimation());
        vec![
            Measurement::new("accuracy", self.weight_correct.estimation()),
            Measurement::new("precision", precision),
            Measurement::new("recall", recall),
            Measurement::new("fbeta", fbeta(precision, recall, self.beta)),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::PerformanceEvaluatorExt;

    type Eval = BinaryClassificationEvaluator<BasicEstimator>;

    fn fed(truth: &[u8], predicted: &[u8]) -> Eval {
        let mut ev = Eval::default();
        ev.add_all(truth, predicted);
        ev
    }

    #[test]
    fn accuracy_is_nan_when_empty() {
        let ev = Eval::default();
        assert!(ev.metric("accuracy").unwrap().is_nan());
        assert_eq!(ev.metric("precision"), Some(0.0));
        assert_eq!(ev.metric("fbeta"), Some(0.0));
    }

    #[test]
    fn half_recall_example() {
        let ev = fed(&[1, 1, 0, 0], &[1, 0, 0, 0]);
        assert_eq!(ev.metric("precision"), Some(1.0));
        assert_eq!(ev.metric("recall"), Some(0.5));
        assert_eq!(ev.metric("accuracy"), Some(0.75));
        let f = ev.metric("fbeta").unwrap();
        assert!((f - 5.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn always_positive_predictions() {
        let truth = [1, 0, 1, 1, 0];
        let ev = fed(&truth, &[1; 5]);
        let acc = ev.metric("accuracy").unwrap();
        let p = ev.metric("precision").unwrap();
        assert_eq!(acc, p);
        assert_eq!(ev.metric("recall"), Some(1.0));
        let expected = 1.25 * p / (0.25 * p + 1.0);
        assert!((ev.metric("fbeta").unwrap() - expected).abs() < 1e-12);

        let ev = fed(&[1, 1, 1], &[1, 1, 1]);
        assert_eq!(ev.metric("fbeta"), ev.metric("precision"));
    }

    #[test]
    fn no_positive_predictions_gives_zero_precision() {
        let ev = fed(&[1, 0, 1], &[0, 0, 0]);
        assert_eq!(ev.metric("precision"), Some(0.0));
        assert_eq!(ev.metric("recall"), Some(0.0));
        assert_eq!(ev.metric("fbeta"), Some(0.0));
    }

    #[test]
    fn only_metrics_without_pairs_are_ill_defined() {
        let ev = fed(&[0, 0, 0], &[1, 0, 0]);
        assert!(!ev.ill_defined("precision"));
        assert!(ev.ill_defined("recall"));
        assert!(ev.ill_defined("fbeta"));
        assert!(!ev.ill_defined("accuracy"));
        assert_eq!(ev.metric("precision"), Some(0.0));

        let ev = fed(&[1, 0], &[1, 0]);
        assert!(!ev.ill_defined("fbeta"));
    }

    #[test]
    fn beta_one_is_f1() {
        let mut ev = Eval::new(1.0);
        ev.add_all(&[1, 1, 0, 0], &[1, 0, 1, 0]);
        assert!((ev.metric("fbeta").unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn reset_clears_but_keeps_beta() {
        let mut ev = Eval::new(2.0);
        ev.add_result(1, 1);
        ev.reset();
        assert_eq!(ev.seen(), 0);
        assert_eq!(ev.beta(), 2.0);
        assert!(ev.metric("accuracy").unwrap().is_nan());
    }

    #[test]
    fn metrics_preserve_requested_order() {
        let ev = fed(&[1], &[1]);
        let got = ev.metrics(["fbeta", "missing", "accuracy"]);
        assert_eq!(got[0], ("fbeta".to_string(), Some(1.0)));
        assert_eq!(got[1], ("missing".to_string(), None));
        assert_eq!(got[2], ("accuracy".to_string(), Some(1.0)));
    }
}
