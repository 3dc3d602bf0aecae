use crate::classifiers::classifier::{check_training_set, check_width, has_both_classes};
use crate::classifiers::svm::{Kernel, KernelKind};
use crate::classifiers::{Classifier, ClassifierError};
use crate::utils::math::matrix_variance;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ALPHA_EPS: f64 = 1e-8;
const MIN_ALPHA_STEP: f64 = 1e-5;

/// Learned support vectors and their signed dual coefficients.
#[derive(Debug, Clone)]
struct SvcModel {
    kernel: Kernel,
    support_vectors: Vec<Vec<f64>>,
    dual_coef: Vec<f64>,
    bias: f64,
    n_features: usize,
}

impl SvcModel {
    fn decision(&self, row: &[f64]) -> f64 {
        self.support_vectors
            .iter()
            .zip(&self.dual_coef)
            .map(|(sv, coef)| coef * self.kernel.compute(sv, row))
            .sum::<f64>()
            + self.bias
    }
}

/// C-support vector classifier trained with sequential minimal optimization.
///
/// Keeps an error cache `E_k = f(x_k) - y_k` updated after every accepted
/// pair step, so a KKT check costs O(1) and a step costs O(n·d). The partner
/// of each violating multiplier is drawn from a seeded RNG. Training ends
/// after `max_passes` consecutive sweeps with no change, or once `max_iter`
/// pair updates have been made.
///
/// `gamma = None` means `1 / (n_features · Var(X))`.
#[derive(Debug, Clone)]
pub struct Svc {
    c: f64,
    kernel: KernelKind,
    gamma: Option<f64>,
    tol: f64,
    max_passes: usize,
    max_iter: usize,
    seed: u64,
    model: Option<SvcModel>,
}

impl Default for Svc {
    fn default() -> Self {
        Self {
            c: 1.0,
            kernel: KernelKind::Rbf,
            gamma: None,
            tol: 1e-3,
            max_passes: 5,
            max_iter: 20_000,
            seed: 1,
            model: None,
        }
    }
}

impl Svc {
    pub fn new(
        c: f64,
        kernel: KernelKind,
        gamma: Option<f64>,
        tol: f64,
        max_passes: usize,
        max_iter: usize,
        seed: u64,
    ) -> Result<Self, ClassifierError> {
        if !(c > 0.0 && c.is_finite()) {
            return Err(ClassifierError::InvalidParameter(format!(
                "C must be > 0, got {c}"
            )));
        }
        if !(tol > 0.0) {
            return Err(ClassifierError::InvalidParameter(format!(
                "tol must be > 0, got {tol}"
            )));
        }
        if let Some(g) = gamma {
            if !(g > 0.0 && g.is_finite()) {
                return Err(ClassifierError::InvalidParameter(format!(
                    "gamma must be > 0, got {g}"
                )));
            }
        }
        if max_passes == 0 || max_iter == 0 {
            return Err(ClassifierError::InvalidParameter(
                "max_passes and max_iter must be > 0".into(),
            ));
        }
        Ok(Self {
            c,
            kernel,
            gamma,
            tol,
            max_passes,
            max_iter,
            seed,
            model: None,
        })
    }

    pub fn n_support(&self) -> usize {
        self.model.as_ref().map_or(0, |m| m.support_vectors.len())
    }

    fn resolve_kernel(&self, features: &[Vec<f64>], width: usize) -> Kernel {
        match self.kernel {
            KernelKind::Linear => Kernel::Linear,
            KernelKind::Rbf => {
                let gamma = self.gamma.unwrap_or_else(|| {
                    let var = matrix_variance(features);
                    if var > 0.0 && width > 0 {
                        1.0 / (width as f64 * var)
                    } else {
                        1.0
                    }
                });
                Kernel::Rbf { gamma }
            }
        }
    }
}

/// Mutable SMO working set.
struct Smo<'a> {
    x: &'a [Vec<f64>],
    y: Vec<f64>,
    alpha: Vec<f64>,
    errors: Vec<f64>,
    bias: f64,
    c: f64,
    kernel: Kernel,
}

impl Smo<'_> {
    fn violates_kkt(&self, i: usize, tol: f64) -> bool {
        let r = self.y[i] * self.errors[i];
        (r < -tol && self.alpha[i] < self.c) || (r > tol && self.alpha[i] > 0.0)
    }

    /// Jointly optimizes `alpha[i]` and `alpha[j]`; returns whether they moved.
    fn take_step(&mut self, i: usize, j: usize) -> bool {
        let (yi, yj) = (self.y[i], self.y[j]);
        let (ai_old, aj_old) = (self.alpha[i], self.alpha[j]);
        let (ei, ej) = (self.errors[i], self.errors[j]);

        let (lo, hi) = if yi != yj {
            ((aj_old - ai_old).max(0.0), (self.c + aj_old - ai_old).min(self.c))
        } else {
            ((ai_old + aj_old - self.c).max(0.0), (ai_old + aj_old).min(self.c))
        };
        if hi - lo < 1e-12 {
            return false;
        }

        let kii = self.kernel.compute(&self.x[i], &self.x[i]);
        let kjj = self.kernel.compute(&self.x[j], &self.x[j]);
        let kij = self.kernel.compute(&self.x[i], &self.x[j]);
        let eta = 2.0 * kij - kii - kjj;
        if eta >= 0.0 {
            return false;
        }

        let aj = (aj_old - yj * (ei - ej) / eta).clamp(lo, hi);
        if (aj - aj_old).abs() < MIN_ALPHA_STEP {
            return false;
        }
        let ai = ai_old + yi * yj * (aj_old - aj);

        let di = yi * (ai - ai_old);
        let dj = yj * (aj - aj_old);
        let b1 = self.bias - ei - di * kii - dj * kij;
        let b2 = self.bias - ej - di * kij - dj * kjj;
        let bias = if ai > 0.0 && ai < self.c {
            b1
        } else if aj > 0.0 && aj < self.c {
            b2
        } else {
            (b1 + b2) / 2.0
        };
        let db = bias - self.bias;

        for k in 0..self.x.len() {
            self.errors[k] += di * self.kernel.compute(&self.x[i], &self.x[k])
                + dj * self.kernel.compute(&self.x[j], &self.x[k])
                + db;
        }
        self.alpha[i] = ai;
        self.alpha[j] = aj;
        self.bias = bias;
        true
    }
}

impl Classifier for Svc {
    fn name(&self) -> &str {
        "SVC"
    }

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError> {
        let width = check_training_set(features, labels)?;
        if !has_both_classes(labels) {
            return Err(ClassifierError::SingleClass(self.name().to_string()));
        }

        let n = features.len();
        let y: Vec<f64> = labels
            .iter()
            .map(|&l| if l == 1 { 1.0 } else { -1.0 })
            .collect();
        let mut smo = Smo {
            x: features,
            errors: y.iter().map(|yi| -yi).collect(),
            y,
            alpha: vec![0.0; n],
            bias: 0.0,
            c: self.c,
            kernel: self.resolve_kernel(features, width),
        };

        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut passes = 0;
        let mut updates = 0;
        'outer: while passes < self.max_passes {
            let mut changed = 0;
            for i in 0..n {
                if !smo.violates_kkt(i, self.tol) {
                    continue;
                }
                let mut j = rng.random_range(0..n - 1);
                if j >= i {
                    j += 1;
                }
                if smo.take_step(i, j) {
                    changed += 1;
                    updates += 1;
                    if updates >= self.max_iter {
                        tracing::debug!(updates, "SMO stopped at max_iter");
                        break 'outer;
                    }
                }
            }
            passes = if changed == 0 { passes + 1 } else { 0 };
        }

        let mut support_vectors = Vec::new();
        let mut dual_coef = Vec::new();
        for (k, &a) in smo.alpha.iter().enumerate() {
            if a > ALPHA_EPS {
                support_vectors.push(features[k].clone());
                dual_coef.push(a * smo.y[k]);
            }
        }
        tracing::debug!(support = support_vectors.len(), updates, "SVC fitted");

        self.model = Some(SvcModel {
            kernel: smo.kernel,
            support_vectors,
            dual_coef,
            bias: smo.bias,
            n_features: width,
        });
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        let model = self
            .model
            .as_ref()
            .ok_or_else(|| ClassifierError::NotFitted(self.name().to_string()))?;
        check_width(features, model.n_features)?;
        Ok(features
            .iter()
            .map(|row| u8::from(model.decision(row) > 0.0))
            .collect())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Svc {
            model: None,
            ..self.clone()
        })
    }
}
