use crate::classifiers::classifier::{check_training_set, check_width};
use crate::classifiers::forest::split_criteria::{Criterion, SplitCriterion};
use crate::classifiers::{Classifier, ClassifierError};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::index;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Number of features examined when searching a node's split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
#[serde(rename_all = "lowercase")]
pub enum MaxFeatures {
    #[default]
    Sqrt,
    Log2,
    All,
}

impl MaxFeatures {
    pub fn resolve(&self, n_features: usize) -> usize {
        let n = n_features as f64;
        let k = match self {
            MaxFeatures::Sqrt => n.sqrt() as usize,
            MaxFeatures::Log2 => n.log2() as usize,
            MaxFeatures::All => n_features,
        };
        k.clamp(1, n_features.max(1))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TreeParams {
    pub criterion: Criterion,
    pub max_depth: Option<usize>,
    pub min_samples_split: usize,
    pub min_samples_leaf: usize,
    pub max_features: MaxFeatures,
}

impl Default for TreeParams {
    fn default() -> Self {
        Self {
            criterion: Criterion::Gini,
            max_depth: None,
            min_samples_split: 2,
            min_samples_leaf: 1,
            max_features: MaxFeatures::All,
        }
    }
}

impl TreeParams {
    pub fn validate(&self) -> Result<(), ClassifierError> {
        if self.min_samples_split < 2 {
            return Err(ClassifierError::InvalidParameter(format!(
                "min_samples_split must be >= 2, got {}",
                self.min_samples_split
            )));
        }
        if self.min_samples_leaf == 0 {
            return Err(ClassifierError::InvalidParameter(
                "min_samples_leaf must be >= 1".into(),
            ));
        }
        if self.max_depth == Some(0) {
            return Err(ClassifierError::InvalidParameter(
                "max_depth must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy)]
enum TreeNode {
    Leaf {
        positive_rate: f64,
    },
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
}

struct Split {
    feature: usize,
    threshold: f64,
    merit: f64,
}

/// CART classification tree over numeric features.
///
/// Nodes live in a flat arena; rows with `x[feature] <= threshold` go left.
/// A node is split while it is impure, holds at least `min_samples_split`
/// rows and is shallower than `max_depth`. Leaves store the fraction of
/// positive rows that reached them.
#[derive(Debug, Clone)]
pub struct DecisionTree {
    params: TreeParams,
    seed: u64,
    nodes: Vec<TreeNode>,
    importances: Vec<f64>,
    n_features: usize,
}

impl Default for DecisionTree {
    fn default() -> Self {
        Self::with_params(TreeParams::default(), 1)
    }
}

impl DecisionTree {
    pub fn new(params: TreeParams, seed: u64) -> Result<Self, ClassifierError> {
        params.validate()?;
        Ok(Self::with_params(params, seed))
    }

    pub(crate) fn with_params(params: TreeParams, seed: u64) -> Self {
        Self {
            params,
            seed,
            nodes: Vec::new(),
            importances: Vec::new(),
            n_features: 0,
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_fitted(&self) -> bool {
        !self.nodes.is_empty()
    }

    /// Impurity-decrease importances summing to one, or all zeros for a
    /// single-leaf tree.
    pub fn normalized_importances(&self) -> Vec<f64> {
        let total: f64 = self.importances.iter().sum();
        if total > 0.0 {
            self.importances.iter().map(|v| v / total).collect()
        } else {
            vec![0.0; self.n_features]
        }
    }

    pub(crate) fn positive_rate(&self, row: &[f64]) -> f64 {
        let mut id = 0;
        loop {
            match self.nodes[id] {
                TreeNode::Leaf { positive_rate } => return positive_rate,
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => id = if row[feature] <= threshold { left } else { right },
            }
        }
    }

    /// Grows the tree on the rows named by `indices`, which may repeat.
    pub(crate) fn fit_indices(
        &mut self,
        features: &[Vec<f64>],
        labels: &[u8],
        indices: Vec<usize>,
        rng: &mut StdRng,
    ) {
        let width = features.first().map_or(0, Vec::len);
        self.n_features = width;
        self.importances = vec![0.0; width];
        self.nodes.clear();
        self.nodes.push(TreeNode::Leaf { positive_rate: 0.0 });

        let k = self.params.max_features.resolve(width);
        let mut stack = vec![(0usize, indices, 0usize)];
        while let Some((id, rows, depth)) = stack.pop() {
            let dist = class_distribution(labels, &rows);
            let splittable = dist[0] > 0.0
                && dist[1] > 0.0
                && rows.len() >= self.params.min_samples_split
                && rows.len() >= 2 * self.params.min_samples_leaf
                && self.params.max_depth.is_none_or(|d| depth < d);
            let best = if splittable {
                self.best_split(features, labels, &rows, dist, k, rng)
            } else {
                None
            };

            match best {
                Some(split) => {
                    self.importances[split.feature] += split.merit.max(0.0);
                    let (left_rows, right_rows): (Vec<usize>, Vec<usize>) = rows
                        .into_iter()
                        .partition(|&i| features[i][split.feature] <= split.threshold);
                    let left = self.nodes.len();
                    let right = left + 1;
                    self.nodes.push(TreeNode::Leaf { positive_rate: 0.0 });
                    self.nodes.push(TreeNode::Leaf { positive_rate: 0.0 });
                    self.nodes[id] = TreeNode::Split {
                        feature: split.feature,
                        threshold: split.threshold,
                        left,
                        right,
                    };
                    stack.push((right, right_rows, depth + 1));
                    stack.push((left, left_rows, depth + 1));
                }
                None => {
                    self.nodes[id] = TreeNode::Leaf {
                        positive_rate: dist[1] / (dist[0] + dist[1]),
                    };
                }
            }
        }
    }

    /// Visits features in random order until `k` non-constant ones have been
    /// scanned, keeping the threshold with the largest impurity decrease.
    fn best_split(
        &self,
        features: &[Vec<f64>],
        labels: &[u8],
        rows: &[usize],
        dist: [f64; 2],
        k: usize,
        rng: &mut StdRng,
    ) -> Option<Split> {
        let n = rows.len();
        let min_leaf = self.params.min_samples_leaf;
        let mut best: Option<Split> = None;
        let mut visited = 0;
        let mut sorted: Vec<(f64, u8)> = Vec::with_capacity(n);

        for feature in index::sample(rng, self.n_features, self.n_features) {
            if visited >= k {
                break;
            }
            sorted.clear();
            sorted.extend(rows.iter().map(|&i| (features[i][feature], labels[i])));
            sorted.sort_by(|a, b| a.0.total_cmp(&b.0));
            if sorted[0].0 == sorted[n - 1].0 {
                continue;
            }
            visited += 1;

            let mut left = [0.0; 2];
            for pos in 0..n - 1 {
                left[sorted[pos].1 as usize] += 1.0;
                let n_left = pos + 1;
                if sorted[pos].0 == sorted[pos + 1].0 || n_left < min_leaf || n - n_left < min_leaf
                {
                    continue;
                }
                let right = [dist[0] - left[0], dist[1] - left[1]];
                let merit = self
                    .params
                    .criterion
                    .merit_of_split(&dist, &[&left[..], &right[..]]);
                if best.as_ref().is_none_or(|b| merit > b.merit) {
                    let (lo, hi) = (sorted[pos].0, sorted[pos + 1].0);
                    let mid = lo + (hi - lo) / 2.0;
                    best = Some(Split {
                        feature,
                        threshold: if mid < hi { mid } else { lo },
                        merit,
                    });
                }
            }
        }
        best
    }
}

fn class_distribution(labels: &[u8], rows: &[usize]) -> [f64; 2] {
    let mut dist = [0.0; 2];
    for &i in rows {
        dist[usize::from(labels[i] == 1)] += 1.0;
    }
    dist
}

impl Classifier for DecisionTree {
    fn name(&self) -> &str {
        "DecisionTreeClassifier"
    }

    fn fit(&mut self, features: &[Vec<f64>], labels: &[u8]) -> Result<(), ClassifierError> {
        check_training_set(features, labels)?;
        let mut rng = StdRng::seed_from_u64(self.seed);
        self.fit_indices(features, labels, (0..features.len()).collect(), &mut rng);
        Ok(())
    }

    fn predict(&self, features: &[Vec<f64>]) -> Result<Vec<u8>, ClassifierError> {
        if !self.is_fitted() {
            return Err(ClassifierError::NotFitted(self.name().to_string()));
        }
        check_width(features, self.n_features)?;
        Ok(features
            .iter()
            .map(|row| u8::from(self.positive_rate(row) > 0.5))
            .collect())
    }

    fn fresh(&self) -> Box<dyn Classifier> {
        Box::new(Self::with_params(self.params, self.seed))
    }

    fn feature_importances(&self) -> Option<Vec<f64>> {
        self.is_fitted().then(|| self.normalized_importances())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::separable_rows;

    fn xor() -> (Vec<Vec<f64>>, Vec<u8>) {
        let x = vec![
            vec![0.0, 0.0],
            vec![1.0, 1.0],
            vec![0.0, 1.0],
            vec![1.0, 0.0],
            vec![0.1, 0.1],
            vec![0.9, 0.9],
            vec![0.1, 0.9],
            vec![0.9, 0.1],
        ];
        (x, vec![0, 0, 1, 1, 0, 0, 1, 1])
    }

    #[test]
    fn max_features_resolution() {
        assert_eq!(MaxFeatures::Sqrt.resolve(100), 10);
        assert_eq!(MaxFeatures::Log2.resolve(100), 6);
        assert_eq!(MaxFeatures::All.resolve(7), 7);
        assert_eq!(MaxFeatures::Sqrt.resolve(1), 1);
        assert_eq!(MaxFeatures::Log2.resolve(1), 1);
    }

    #[test]
    fn invalid_params_are_rejected() {
        let bad = TreeParams {
            min_samples_split: 1,
            ..TreeParams::default()
        };
        assert!(DecisionTree::new(bad, 0).is_err());
        let bad = TreeParams {
            max_depth: Some(0),
            ..TreeParams::default()
        };
        assert!(DecisionTree::new(bad, 0).is_err());
    }

    #[test]
    fn fully_grown_tree_fits_xor() {
        let (x, y) = xor();
        let mut tree = DecisionTree::default();
        tree.fit(&x, &y).unwrap();
        assert_eq!(tree.predict(&x).unwrap(), y);
    }

    #[test]
    fn depth_limit_caps_node_count() {
        let (x, y) = xor();
        let params = TreeParams {
            max_depth: Some(1),
            ..TreeParams::default()
        };
        let mut tree = DecisionTree::new(params, 0).unwrap();
        tree.fit(&x, &y).unwrap();
        assert!(tree.node_count() <= 3);
    }

    #[test]
    fn pure_training_set_is_a_single_leaf() {
        let mut tree = DecisionTree::default();
        tree.fit(&[vec![1.0], vec![2.0]], &[1, 1]).unwrap();
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.predict(&[vec![0.0]]).unwrap(), vec![1]);
        assert_eq!(tree.feature_importances().unwrap(), vec![0.0]);
    }

    #[test]
    fn importances_favor_the_informative_feature() {
        let (x, y) = separable_rows(60, 11);
        let params = TreeParams {
            criterion: Criterion::Entropy,
            ..TreeParams::default()
        };
        let mut tree = DecisionTree::new(params, 3).unwrap();
        tree.fit(&x, &y).unwrap();
        let imp = tree.feature_importances().unwrap();
        assert!((imp.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        assert!(imp[0] > imp[1]);
        assert_eq!(tree.predict(&x).unwrap(), y);
    }

    #[test]
    fn predict_checks_state_and_width() {
        let tree = DecisionTree::default();
        assert!(matches!(
            tree.predict(&[vec![1.0]]).unwrap_err(),
            ClassifierError::NotFitted(_)
        ));
        let (x, y) = xor();
        let mut tree = DecisionTree::default();
        tree.fit(&x, &y).unwrap();
        assert!(matches!(
            tree.predict(&[vec![1.0]]).unwrap_err(),
            ClassifierError::DimensionMismatch { .. }
        ));
    }
}
