use crate::classifiers::Classifier;
use crate::core::Dataset;
use crate::evaluation::{DEFAULT_BETA, fbeta_score};
use crate::tasks::TaskError;

/// Test indices of `k` stratified folds, without shuffling.
///
/// Classes are numbered in order of first appearance. Sorting those codes
/// and dealing them round-robin across folds fixes how many members of each
/// class every fold receives; members are then handed out in row order, so
/// each fold holds a contiguous run of every class.
pub fn stratified_folds(labels: &[u8], k: usize) -> Result<Vec<Vec<usize>>, TaskError> {
    let n = labels.len();
    if k < 2 || k > n {
        return Err(TaskError::Folds {
            folds: k,
            samples: n,
        });
    }

    let mut classes: Vec<u8> = Vec::new();
    let encoded: Vec<usize> = labels
        .iter()
        .map(|l| match classes.iter().position(|c| c == l) {
            Some(p) => p,
            None => {
                classes.push(*l);
                classes.len() - 1
            }
        })
        .collect();

    let mut counts = vec![0usize; classes.len()];
    encoded.iter().for_each(|&c| counts[c] += 1);
    if let Some(&smallest) = counts.iter().min() {
        if smallest < k {
            tracing::warn!(
                "the least populated class has only {smallest} members, fewer than {k} folds"
            );
        }
    }

    let mut sorted = encoded.clone();
    sorted.sort_unstable();
    let mut allocation = vec![vec![0usize; classes.len()]; k];
    for (p, &c) in sorted.iter().enumerate() {
        allocation[p % k][c] += 1;
    }

    let mut assignment = vec![0usize; n];
    for class in 0..classes.len() {
        let mut fold_of_member = (0..k).flat_map(|f| std::iter::repeat_n(f, allocation[f][class]));
        for (row, _) in encoded.iter().enumerate().filter(|(_, c)| **c == class) {
            assignment[row] = fold_of_member.next().unwrap_or(k - 1);
        }
    }

    let mut folds = vec![Vec::new(); k];
    for (row, &fold) in assignment.iter().enumerate() {
        folds[fold].push(row);
    }
    Ok(folds)
}

/// F0.5 of a fresh copy of `learner` on each of `k` stratified folds.
pub fn cross_val_score(
    learner: &dyn Classifier,
    data: &Dataset,
    k: usize,
) -> Result<Vec<f64>, TaskError> {
    let folds = stratified_folds(data.labels(), k)?;
    let mut scores = Vec::with_capacity(k);
    for (i, test_idx) in folds.iter().enumerate() {
        let mut in_test = vec![false; data.len()];
        test_idx.iter().for_each(|&r| in_test[r] = true);
        let train_idx: Vec<usize> = (0..data.len()).filter(|&r| !in_test[r]).collect();

        let train = data.subset(&train_idx);
        let test = data.subset(test_idx);
        let mut model = learner.fresh();
        model.fit(train.features(), train.labels())?;
        let predicted = model.predict(test.features())?;
        let score = fbeta_score(test.labels(), &predicted, DEFAULT_BETA)?;
        tracing::debug!("{} fold {}: F-score {:.4}", learner.name(), i + 1, score);
        scores.push(score);
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::{DecisionTree, TreeParams};
    use crate::testing::dummies::separable_rows;
    use crate::testing::stubs::{FitSpyClassifier, OracleClassifier};

    #[test]
    fn folds_partition_rows_and_keep_class_balance() {
        let labels: Vec<u8> = (0..20).map(|i| u8::from(i % 4 == 0)).collect();
        let folds = stratified_folds(&labels, 5).unwrap();
        let mut all: Vec<usize> = folds.concat();
        all.sort_unstable();
        assert_eq!(all, (0..20).collect::<Vec<_>>());
        for fold in &folds {
            assert_eq!(fold.len(), 4);
            assert_eq!(fold.iter().filter(|&&r| labels[r] == 1).count(), 1);
        }
    }

    #[test]
    fn members_are_dealt_in_row_order() {
        let labels = [0, 0, 0, 0, 1, 1];
        let folds = stratified_folds(&labels, 2).unwrap();
        assert_eq!(folds, vec![vec![0, 1, 4], vec![2, 3, 5]]);
    }

    #[test]
    fn rejects_bad_fold_counts() {
        assert!(matches!(
            stratified_folds(&[0, 1, 0], 1),
            Err(TaskError::Folds { folds: 1, .. })
        ));
        assert!(matches!(
            stratified_folds(&[0, 1, 0], 4),
            Err(TaskError::Folds { samples: 3, .. })
        ));
    }

    #[test]
    fn scores_one_value_per_fold() {
        let (x, y) = separable_rows(60, 5);
        let data = Dataset::new(vec!["a".into(), "b".into()], x, y).unwrap();
        let tree = DecisionTree::new(TreeParams::default(), 0).unwrap();
        let scores = cross_val_score(&tree, &data, 3).unwrap();
        assert_eq!(scores.len(), 3);
        assert!(scores.iter().all(|&s| s > 0.9));
    }

    #[test]
    fn each_fold_trains_on_the_rest() {
        let (x, y) = separable_rows(30, 1);
        let data = Dataset::new(vec!["a".into(), "b".into()], x, y).unwrap();
        let spy = FitSpyClassifier::default();
        cross_val_score(&spy, &data, 3).unwrap();
        assert_eq!(spy.fit_sizes(), vec![20, 20, 20]);
        assert_eq!(spy.predict_sizes(), vec![10, 10, 10]);
    }

    #[test]
    fn unseen_rows_cost_the_oracle() {
        let (x, y) = separable_rows(20, 9);
        let data = Dataset::new(vec!["a".into(), "b".into()], x, y).unwrap();
        let scores = cross_val_score(&OracleClassifier::default(), &data, 2).unwrap();
        // held-out rows are never memorized, so every prediction is 0
        assert!(scores.iter().all(|&s| s == 0.0));
    }
}
