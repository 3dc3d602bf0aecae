use crate::core::DataError;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Encoded feature matrix with its parallel binary label vector.
///
/// Rows all have `feature_names.len()` values; labels are `0` (income at most
/// 50K) or `1` (above 50K).
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    feature_names: Vec<String>,
    features: Vec<Vec<f64>>,
    labels: Vec<u8>,
}

impl Dataset {
    pub fn new(
        feature_names: Vec<String>,
        features: Vec<Vec<f64>>,
        labels: Vec<u8>,
    ) -> Result<Self, DataError> {
        if features.len() != labels.len() {
            return Err(DataError::LabelCount {
                rows: features.len(),
                labels: labels.len(),
            });
        }
        let width = feature_names.len();
        if let Some((row, r)) = features.iter().enumerate().find(|(_, r)| r.len() != width) {
            return Err(DataError::RowWidth {
                row,
                expected: width,
                got: r.len(),
            });
        }
        Ok(Self {
            feature_names,
            features,
            labels,
        })
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn features(&self) -> &[Vec<f64>] {
        &self.features
    }

    pub fn labels(&self) -> &[u8] {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn n_features(&self) -> usize {
        self.feature_names.len()
    }

    pub fn positives(&self) -> usize {
        self.labels.iter().filter(|&&y| y == 1).count()
    }

    /// First `n` rows (all rows if `n` exceeds the length).
    pub fn head(&self, n: usize) -> Dataset {
        let n = n.min(self.len());
        Dataset {
            feature_names: self.feature_names.clone(),
            features: self.features[..n].to_vec(),
            labels: self.labels[..n].to_vec(),
        }
    }

    /// Rows at `indices`, in that order. Indices must be in bounds.
    pub fn subset(&self, indices: &[usize]) -> Dataset {
        Dataset {
            feature_names: self.feature_names.clone(),
            features: indices.iter().map(|&i| self.features[i].clone()).collect(),
            labels: indices.iter().map(|&i| self.labels[i]).collect(),
        }
    }

    /// Keeps only the columns at `indices`, in the given order.
    pub fn select_columns(&self, indices: &[usize]) -> Result<Dataset, DataError> {
        let width = self.n_features();
        if let Some(&index) = indices.iter().find(|&&i| i >= width) {
            return Err(DataError::ColumnIndex { index, width });
        }
        Ok(Dataset {
            feature_names: indices
                .iter()
                .map(|&i| self.feature_names[i].clone())
                .collect(),
            features: self
                .features
                .iter()
                .map(|row| indices.iter().map(|&i| row[i]).collect())
                .collect(),
            labels: self.labels.clone(),
        })
    }

    /// Shuffles row indices with a seeded RNG and returns `(train, test)`.
    ///
    /// The test set receives `ceil(len * test_fraction)` rows taken from the
    /// front of the permutation; the rest, in permutation order, is training
    /// data. Identical seeds always produce identical splits.
    pub fn train_test_split(
        &self,
        test_fraction: f64,
        seed: u64,
    ) -> Result<(Dataset, Dataset), DataError> {
        if !(test_fraction > 0.0 && test_fraction < 1.0) {
            return Err(DataError::TestFraction(test_fraction));
        }
        let n = self.len();
        let n_test = (n as f64 * test_fraction).ceil() as usize;
        if n < 2 || n_test >= n {
            return Err(DataError::Empty);
        }

        let mut order: Vec<usize> = (0..n).collect();
        let mut rng = StdRng::seed_from_u64(seed);
        order.shuffle(&mut rng);

        let (test_idx, train_idx) = order.split_at(n_test);
        Ok((self.subset(train_idx), self.subset(test_idx)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ds(n: usize) -> Dataset {
        Dataset::new(
            vec!["a".into(), "b".into()],
            (0..n).map(|i| vec![i as f64, (i * 10) as f64]).collect(),
            (0..n).map(|i| (i % 2) as u8).collect(),
        )
        .unwrap()
    }

    #[test]
    fn new_validates_shape() {
        let err = Dataset::new(vec!["a".into()], vec![vec![1.0]], vec![]).unwrap_err();
        assert!(matches!(err, DataError::LabelCount { rows: 1, labels: 0 }));

        let rows = vec![vec![1.0], vec![1.0, 2.0]];
        let err = Dataset::new(vec!["a".into()], rows, vec![0, 1]).unwrap_err();
        assert!(matches!(
            err,
            DataError::RowWidth {
                row: 1,
                expected: 1,
                got: 2
            }
        ));
    }

    #[test]
    fn head_clamps_to_length() {
        let d = ds(5);
        assert_eq!(d.head(3).len(), 3);
        assert_eq!(d.head(3).features()[2], vec![2.0, 20.0]);
        assert_eq!(d.head(50).len(), 5);
    }

    #[test]
    fn select_columns_reorders_and_checks_bounds() {
        let d = ds(3);
        let s = d.select_columns(&[1, 0]).unwrap();
        assert_eq!(s.feature_names(), &["b".to_string(), "a".to_string()]);
        assert_eq!(s.features()[2], vec![20.0, 2.0]);
        assert_eq!(s.labels(), d.labels());

        assert!(matches!(
            d.select_columns(&[2]).unwrap_err(),
            DataError::ColumnIndex { index: 2, width: 2 }
        ));
    }

    #[test]
    fn split_sizes_use_ceiling_for_test() {
        let d = ds(11);
        let (train, test) = d.train_test_split(0.2, 0).unwrap();
        assert_eq!(test.len(), 3);
        assert_eq!(train.len(), 8);
    }

    #[test]
    fn split_is_a_partition_and_deterministic() {
        let d = ds(50);
        let (train, test) = d.train_test_split(0.2, 7).unwrap();
        let (train2, test2) = d.train_test_split(0.2, 7).unwrap();
        assert_eq!(train, train2);
        assert_eq!(test, test2);

        let mut firsts: Vec<i64> = train
            .features()
            .iter()
            .chain(test.features().iter())
            .map(|r| r[0] as i64)
            .collect();
        firsts.sort();
        assert_eq!(firsts, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn split_rejects_bad_fraction() {
        let d = ds(10);
        assert!(matches!(
            d.train_test_split(0.0, 0).unwrap_err(),
            DataError::TestFraction(_)
        ));
        assert!(matches!(
            d.train_test_split(1.0, 0).unwrap_err(),
            DataError::TestFraction(_)
        ));
    }
}
