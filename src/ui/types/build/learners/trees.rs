use crate::classifiers::{ClassifierError, DecisionTree, RandomForest, TreeParams};
use crate::ui::types::choices::{DecisionTreeParams, RandomForestParams};

impl TryFrom<DecisionTreeParams> for DecisionTree {
    type Error = ClassifierError;

    fn try_from(p: DecisionTreeParams) -> Result<Self, Self::Error> {
        let params = TreeParams {
            criterion: p.criterion,
            max_depth: p.max_depth,
            min_samples_split: p.min_samples_split,
            min_samples_leaf: p.min_samples_leaf,
            max_features: p.max_features,
        };
        DecisionTree::new(params, p.seed)
    }
}

impl TryFrom<RandomForestParams> for RandomForest {
    type Error = ClassifierError;

    fn try_from(p: RandomForestParams) -> Result<Self, Self::Error> {
        let params = TreeParams {
            criterion: p.criterion,
            max_depth: p.max_depth,
            min_samples_split: p.min_samples_split,
            min_samples_leaf: p.min_samples_leaf,
            max_features: p.max_features,
        };
        RandomForest::new(p.n_estimators, params, p.bootstrap, p.seed)
    }
}
