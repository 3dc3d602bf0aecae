use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::tasks::{TaskError, cross_val_score};
use crate::ui::types::build::build_learner;
use crate::ui::types::choices::LearnerChoice;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Parameter name to the values it is searched over.
pub type ParamGrid = BTreeMap<String, Vec<Value>>;

/// `penalty ∈ {l2, l1}` crossed with eight `alpha` values.
pub fn default_grid() -> ParamGrid {
    BTreeMap::from([
        (
            "alpha".to_string(),
            [1e-4, 3e-4, 5e-4, 1e-3, 5e-3, 1e-2, 1.5e-2, 1e-1]
                .into_iter()
                .map(|a| json!(a))
                .collect(),
        ),
        ("penalty".to_string(), vec![json!("l2"), json!("l1")]),
    ])
}

/// Cartesian product of `grid` in key order; the last key varies fastest.
pub fn expand_grid(grid: &ParamGrid) -> Result<Vec<Map<String, Value>>, TaskError> {
    let mut candidates = vec![Map::new()];
    for (name, values) in grid {
        if values.is_empty() {
            return Err(TaskError::InvalidGrid(format!("'{name}' has no values")));
        }
        candidates = candidates
            .into_iter()
            .flat_map(|partial| {
                values.iter().map(move |v| {
                    let mut next = partial.clone();
                    next.insert(name.clone(), v.clone());
                    next
                })
            })
            .collect();
    }
    Ok(candidates)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateScore {
    pub params: Map<String, Value>,
    pub mean_score: f64,
    pub fold_scores: Vec<f64>,
}

pub struct GridSearchOutcome {
    pub candidates: Vec<CandidateScore>,
    pub best_index: usize,
    /// Winner refit on the whole training set.
    pub best_learner: Box<dyn Classifier>,
}

impl GridSearchOutcome {
    pub fn best(&self) -> &CandidateScore {
        &self.candidates[self.best_index]
    }
}

impl Display for GridSearchOutcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for c in &self.candidates {
            writeln!(f, "{:<40} {:.4}", Value::Object(c.params.clone()), c.mean_score)?;
        }
        let best = self.best();
        write!(
            f,
            "Best: {} (mean F-score {:.4})",
            Value::Object(best.params.clone()),
            best.mean_score
        )
    }
}

/// Exhaustive cross-validated search over a [`ParamGrid`].
#[derive(Debug, Clone)]
pub struct GridSearch {
    base: LearnerChoice,
    grid: ParamGrid,
    folds: usize,
}

impl GridSearch {
    pub fn new(base: LearnerChoice, grid: ParamGrid, folds: usize) -> Self {
        Self { base, grid, folds }
    }

    pub fn run(&self, train: &Dataset) -> Result<GridSearchOutcome, TaskError> {
        let mut candidates = Vec::new();
        let mut best: Option<(usize, f64)> = None;

        for params in expand_grid(&self.grid)? {
            let learner = build_learner(self.base.with_params(&params)?)?;
            let fold_scores = cross_val_score(learner.as_ref(), train, self.folds)?;
            let mean_score = fold_scores.iter().sum::<f64>() / fold_scores.len() as f64;
            let shown = Value::Object(params.clone());
            tracing::info!("{} {shown}: mean F-score {mean_score:.4}", learner.name());
            if best.is_none_or(|(_, s)| mean_score > s) {
                best = Some((candidates.len(), mean_score));
            }
            candidates.push(CandidateScore {
                params,
                mean_score,
                fold_scores,
            });
        }

        let (best_index, _) =
            best.ok_or_else(|| TaskError::InvalidGrid("no candidates".to_string()))?;
        let mut best_learner =
            build_learner(self.base.with_params(&candidates[best_index].params)?)?;
        best_learner.fit(train.features(), train.labels())?;

        Ok(GridSearchOutcome {
            candidates,
            best_index,
            best_learner,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::separable_rows;
    use crate::ui::types::choices::{DecisionTreeParams, SgdParams};

    fn data() -> Dataset {
        let (x, y) = separable_rows(60, 11);
        Dataset::new(vec!["a".into(), "b".into()], x, y).unwrap()
    }

    #[test]
    fn expansion_varies_last_key_fastest() {
        let grid = ParamGrid::from([
            ("a".to_string(), vec![json!(1), json!(2)]),
            ("b".to_string(), vec![json!("x"), json!("y")]),
        ]);
        let got: Vec<Value> = expand_grid(&grid)
            .unwrap()
            .into_iter()
            .map(Value::Object)
            .collect();
        assert_eq!(
            got,
            vec![
                json!({"a": 1, "b": "x"}),
                json!({"a": 1, "b": "y"}),
                json!({"a": 2, "b": "x"}),
                json!({"a": 2, "b": "y"}),
            ]
        );
    }

    #[test]
    fn empty_grid_is_the_base_learner_and_empty_values_are_rejected() {
        assert_eq!(expand_grid(&ParamGrid::new()).unwrap(), vec![Map::new()]);
        let grid = ParamGrid::from([("alpha".to_string(), vec![])]);
        assert!(matches!(expand_grid(&grid), Err(TaskError::InvalidGrid(_))));
    }

    #[test]
    fn default_grid_has_sixteen_candidates() {
        assert_eq!(expand_grid(&default_grid()).unwrap().len(), 16);
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        // separable data: every depth scores perfectly
        let grid = ParamGrid::from([("max_depth".to_string(), vec![json!(3), json!(5)])]);
        let search = GridSearch::new(
            LearnerChoice::DecisionTree(DecisionTreeParams::default()),
            grid,
            3,
        );
        let outcome = search.run(&data()).unwrap();
        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.best_index, 0);
        assert_eq!(outcome.best().params["max_depth"], json!(3));
        assert!(outcome.best_learner.predict(data().features()).is_ok());
    }

    #[test]
    fn unknown_parameter_fails() {
        let grid = ParamGrid::from([("depth".to_string(), vec![json!(1)])]);
        let search = GridSearch::new(LearnerChoice::Sgd(SgdParams::default()), grid, 3);
        assert!(matches!(search.run(&data()), Err(TaskError::Build(_))));
    }
}
