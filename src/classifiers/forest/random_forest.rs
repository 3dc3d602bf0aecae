use crate::classifiers::classifier::{check_training_set, check_width};
use crate::classifiers::forest::decision_tree::{DecisionTree, MaxFeatures, TreeParams};
use crate::classifiers::{Classifier, ClassifierError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Bagged ensemble of CART trees.
///
/// Each tree gets its own RNG seeded from the forest's master RNG, a
/// bootstrap resample of the rows (when enabled) and a fresh random feature
/// subset at every node. Predictions average the trees' leaf positive rates
/// and threshold at 0.5.
#[derive(Debug, Clone)]
pub struct RandomForest {
    n_estimators: usize,
    tree_params: TreeParams,
    bootstrap: bool,
    seed: u64,
    trees: Vec<DecisionTree>,
    n_features: usize,
}

impl Default for RandomForest {
    fn default() -> Self {
        Self {
            n_estimators: 100,
            tree_params: TreeParams {
                max_features: MaxFeatures::Sqrt,
                ..TreeParams::default()
            },
            bootstrap: true,
            seed: 1,
            trees: Vec::new(),
            n_features: 0,
        }
    }
}

impl RandomForest {
    pub fn new(
        n_estimators: usize,
        tree_params: TreeParams,
        bootstrap: bool,
        seed: u64,
    ) -> Result<Self, ClassifierError> {
        if n_estimators == 0 {
            return Err(ClassifierError::InvalidParameter(
                "n_estimators must be > 0".into(),
            ));
        }
        tree_params.validate()?;
        Ok(Self {
            n_estimators,
            tree_params,
            bootstrap,
            seed,
            trees: Vec::new(),
            n_features: 0,
        })
    }

    pub fn n_estimators(&self) -> usize {
        self.n_estimators
    }

    pub fn trees(&self) -> &[DecisionTree] {
        &self.trees
    }

    /// Mean positive-class probability per row.
    pub fn predict_proba(&self, features: &[Vec<f64>]) -> Result<Vec<f64>, ClassifierError> {
        if self.trees.is_empty() {
            return Err(ClassifierError::NotFitted(self.name().to_string()));
        }
        check_width(features, self.n_features)?;
        let k = self.trees.len() as f64;
        Ok(features
            .iter()
            .map(|row| self.trees.iter().map(|t| t.positive_rate(row)).sum::<f64>() / k)
            .collect())
    }
}

impl Classifier for RandomForest {
    fn name(&self) -> &str {
        "RandomForestClassifier"
    }

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError> {
        let width = check_training_set(features, labels)?;
        let n = features.len();
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut trees = Vec::with_capacity(self.n_estimators);
        for _ in 0..self.n_estimators {
            let mut tree_rng = StdRng::seed_from_u64(rng.random::<u64>());
            let rows: Vec<usize> = if self.bootstrap {
                (0..n).map(|_| tree_rng.random_range(0..n)).collect()
            } else {
                (0..n).collect()
            };
            let mut tree = DecisionTree::with_params(self.tree_params, 0);
            tree.fit_indices(features, labels, rows, &mut tree_rng);
            trees.push(tree);
        }
        tracing::debug!(
            trees = trees.len(),
            nodes = trees.iter().map(DecisionTree::node_count).sum::<usize>(),
            "random forest fitted"
        );

        self.trees = trees;
        self.n_features = width;
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        Ok(self
            .predict_proba(features)?
            .into_iter()
            .map(|p| u8::from(p > 0.5))
            .collect())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(RandomForest {
            trees: Vec::new(),
            n_features: 0,
            ..self.clone()
        })
    }

    /// Mean of the per-tree normalized importances, skipping single-leaf
    /// trees, renormalized to sum to one.
    fn feature_importances(&self) -> Option<Vec<f64>> {
        if self.trees.is_empty() {
            return None;
        }
        let mut sum = vec![0.0; self.n_features];
        let mut used = 0;
        for tree in self.trees.iter().filter(|t| t.node_count() > 1) {
            for (s, v) in sum.iter_mut().zip(tree.normalized_importances()) {
                *s += v;
            }
            used += 1;
        }
        if used == 0 {
            return Some(sum);
        }
        let total: f64 = sum.iter().sum();
        if total > 0.0 {
            sum.iter_mut().for_each(|s| *s /= total);
        }
        Some(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::forest::Criterion;
    use crate::testing::dummies::separable_rows;

    fn small_forest(seed: u64) -> RandomForest {
        RandomForest::new(15, TreeParams::default(), true, seed).unwrap()
    }

    #[test]
    fn rejects_zero_estimators() {
        assert!(RandomForest::new(0, TreeParams::default(), true, 0).is_err());
    }

    #[test]
    fn fits_separable_data() {
        let (x, y) = separable_rows(80, 21);
        let mut forest = small_forest(4);
        forest.fit(&x, &y).unwrap();
        assert_eq!(forest.trees().len(), 15);
        let predicted = forest.predict(&x).unwrap();
        let correct = predicted.iter().zip(&y).filter(|(a, b)| a == b).count();
        assert!(correct as f64 / y.len() as f64 >= 0.95);
        let proba = forest.predict_proba(&x).unwrap();
        assert!(proba.iter().all(|p| (0.0..=1.0).contains(p)));
    }

    #[test]
    fn importances_sum_to_one_and_rank_signal_first() {
        let (x, y) = separable_rows(80, 22);
        let mut forest = RandomForest::default();
        forest.fit(&x, &y).unwrap();
        let imp = forest.feature_importances().unwrap();
        assert_eq!(imp.len(), 2);
        assert!((imp.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(imp[0] > imp[1]);
    }

    #[test]
    fn same_seed_same_forest() {
        let (x, y) = separable_rows(40, 23);
        let params = TreeParams {
            criterion: Criterion::Entropy,
            max_features: MaxFeatures::Sqrt,
            ..TreeParams::default()
        };
        let mut a = RandomForest::new(10, params, true, 9).unwrap();
        let mut b = RandomForest::new(10, params, true, 9).unwrap();
        a.fit(&x, &y).unwrap();
        b.fit(&x, &y).unwrap();
        assert_eq!(a.predict_proba(&x).unwrap(), b.predict_proba(&x).unwrap());
        assert_eq!(a.feature_importances(), b.feature_importances());
    }

    #[test]
    fn unfitted_forest_has_no_importances() {
        let forest = RandomForest::default();
        assert!(forest.feature_importances().is_none());
        assert!(forest.predict(&[vec![0.0]]).is_err());
        assert_eq!(forest.fresh().name(), "RandomForestClassifier");
    }
}
