use crate::classifiers::classifier::{check_training_set, check_width, has_both_classes};
use crate::classifiers::{Classifier, ClassifierError};
use crate::utils::math::dot;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Regularization term added to the hinge loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum Penalty {
    #[default]
    L2,
    L1,
}

/// Linear SVM trained by stochastic gradient descent on the hinge loss.
///
/// Uses the `optimal` step schedule `eta_t = 1 / (alpha * (t0 + t))` where
/// `t0` is derived from `alpha` so the first steps are of a sensible size.
/// L2 shrinks weights multiplicatively each step; L1 uses the cumulative
/// truncated-gradient penalty so weights can reach exactly zero.
///
/// Training stops after `max_iter` epochs, or earlier once the summed epoch
/// loss has failed to improve by `tol * n_samples` for `n_iter_no_change`
/// consecutive epochs.
#[derive(Debug, Clone)]
pub struct SgdClassifier {
    penalty: Penalty,
    alpha: f64,
    max_iter: usize,
    tol: Option<f64>,
    n_iter_no_change: usize,
    seed: u64,

    weights: Option<Vec<f64>>,
    intercept: f64,
    epochs_run: usize,
}

impl Default for SgdClassifier {
    fn default() -> Self {
        Self {
            penalty: Penalty::L2,
            alpha: 1e-4,
            max_iter: 1000,
            tol: Some(1e-3),
            n_iter_no_change: 5,
            seed: 1,
            weights: None,
            intercept: 0.0,
            epochs_run: 0,
        }
    }
}

impl SgdClassifier {
    pub fn new(
        penalty: Penalty,
        alpha: f64,
        max_iter: usize,
        tol: Option<f64>,
        seed: u64,
    ) -> Result<Self, ClassifierError> {
        if !(alpha > 0.0 && alpha.is_finite()) {
            return Err(ClassifierError::InvalidParameter(format!(
                "alpha must be > 0, got {alpha}"
            )));
        }
        if max_iter == 0 {
            return Err(ClassifierError::InvalidParameter(
                "max_iter must be > 0".into(),
            ));
        }
        Ok(Self {
            penalty,
            alpha,
            max_iter,
            tol,
            seed,
            ..Self::default()
        })
    }

    pub fn penalty(&self) -> Penalty {
        self.penalty
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn weights(&self) -> Option<&[f64]> {
        self.weights.as_deref()
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn epochs_run(&self) -> usize {
        self.epochs_run
    }

    fn decision_function(&self, weights: &[f64], row: &[f64]) -> f64 {
        dot(weights, row) + self.intercept
    }
}

impl Classifier for SgdClassifier {
    fn name(&self) -> &str {
        "SGDClassifier"
    }

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError> {
        let width = check_training_set(features, labels)?;
        if !has_both_classes(labels) {
            return Err(ClassifierError::SingleClass(self.name().to_string()));
        }

        let n = features.len();
        let alpha = self.alpha;
        let mut w = vec![0.0; width];
        let mut b = 0.0;

        // L1 bookkeeping: total penalty that could have been applied so far,
        // and the penalty actually applied per weight.
        let mut u = 0.0;
        let mut q = vec![0.0; width];

        let typw = (1.0 / alpha.sqrt()).sqrt();
        let t0 = 1.0 / (typw * alpha);
        let mut t = 1.0;

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut order: Vec<usize> = (0..n).collect();
        let mut best_loss = f64::INFINITY;
        let mut no_improvement = 0;
        let mut epochs = 0;

        for _ in 0..self.max_iter {
            order.shuffle(&mut rng);
            let mut epoch_loss = 0.0;

            for &i in &order {
                let x = &features[i];
                let y = if labels[i] == 1 { 1.0 } else { -1.0 };
                let eta = 1.0 / (alpha * (t0 + t - 1.0));
                let margin = y * (dot(&w, x) + b);
                epoch_loss += (1.0 - margin).max(0.0);

                if self.penalty == Penalty::L2 {
                    let shrink = (1.0 - eta * alpha).max(0.0);
                    w.iter_mut().for_each(|wj| *wj *= shrink);
                }
                if margin < 1.0 {
                    for (wj, xj) in w.iter_mut().zip(x) {
                        *wj += eta * y * xj;
                    }
                    b += eta * y;
                }
                if self.penalty == Penalty::L1 {
                    u += eta * alpha;
                    for (wj, qj) in w.iter_mut().zip(q.iter_mut()) {
                        let z = *wj;
                        if z > 0.0 {
                            *wj = (z - (u + *qj)).max(0.0);
                        } else if z < 0.0 {
                            *wj = (z + (u - *qj)).min(0.0);
                        }
                        *qj += *wj - z;
                    }
                }
                t += 1.0;
            }
            epochs += 1;

            if let Some(tol) = self.tol {
                if epoch_loss > best_loss - tol * n as f64 {
                    no_improvement += 1;
                } else {
                    no_improvement = 0;
                }
                if epoch_loss < best_loss {
                    best_loss = epoch_loss;
                }
                if no_improvement >= self.n_iter_no_change {
                    break;
                }
            }
        }

        if epochs == self.max_iter {
            tracing::debug!(epochs, "SGD reached max_iter before converging");
        }
        self.weights = Some(w);
        self.intercept = b;
        self.epochs_run = epochs;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        let weights = self
            .weights
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;
        check_width(features, weights.len())?;
        Ok(features
            .iter()
            .map(|row| u8::from(self.decision_function(weights, row) > 0.0))
            .collect())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(SgdClassifier {
            weights: None,
            intercept: 0.0,
            epochs_run: 0,
            ..self.clone()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::separable_rows;

    fn accuracy(c: &dyn Classifier, x: &[Vec<f64>], y: &[u8]) -> f64 {
        let p = c.predict(x).unwrap();
        p.iter().zip(y).filter(|(a, b)| a == b).count() as f64 / y.len() as f64
    }

    #[test]
    fn rejects_bad_hyperparameters() {
        assert!(SgdClassifier::new(Penalty::L2, 0.0, 10, None, 1).is_err());
        assert!(SgdClassifier::new(Penalty::L2, 1e-4, 0, None, 1).is_err());
    }

    #[test]
    fn learns_separable_data_with_l2() {
        let (x, y) = separable_rows(80, 3);
        let mut c = SgdClassifier::default();
        c.fit(&x, &y).unwrap();
        assert!(accuracy(&c, &x, &y) >= 0.9);
        assert!(c.epochs_run() >= 1 && c.epochs_run() <= 1000);
        assert!(c.weights().unwrap()[0] > 0.0);
    }

    #[test]
    fn learns_separable_data_with_l1() {
        let (x, y) = separable_rows(80, 5);
        let mut c = SgdClassifier::new(Penalty::L1, 1e-4, 1000, Some(1e-3), 1).unwrap();
        c.fit(&x, &y).unwrap();
        assert!(accuracy(&c, &x, &y) >= 0.9);
    }

    #[test]
    fn same_seed_same_model() {
        let (x, y) = separable_rows(40, 9);
        let mut a = SgdClassifier::default();
        let mut b = SgdClassifier::default();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.weights(), b.weights());
        assert_eq!(a.intercept(), b.intercept());
    }

    #[test]
    fn predict_before_fit_and_single_class() {
        let c = SgdClassifier::default();
        assert!(matches!(
            c.predict(&[vec![0.0]]).unwrap_err(),
            ClassifierError::NotFitted(_)
        ));

        let mut c = SgdClassifier::default();
        assert!(matches!(
            c.fit(&[vec![0.0], vec![1.0]], &[1, 1]).unwrap_err(),
            ClassifierError::SingleClass(_)
        ));
    }

    #[test]
    fn fresh_copy_keeps_params_but_not_weights() {
        let (x, y) = separable_rows(20, 1);
        let mut c = SgdClassifier::new(Penalty::L1, 0.01, 50, None, 3).unwrap();
        c.fit(&x, &y).unwrap();
        let f = c.fresh();
        assert_eq!(f.name(), "SGDClassifier");
        assert!(f.predict(&x).is_err());
    }
}
