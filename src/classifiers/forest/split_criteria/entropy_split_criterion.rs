use crate::classifiers::forest::split_criteria::split_criterion::SplitCriterion;

/// Shannon entropy in bits.
pub struct EntropySplitCriterion;

impl EntropySplitCriterion {
    pub fn compute_entropy(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for &w in distribution {
            if w > 0.0 {
                let p = w / distribution_sum_of_weights;
                entropy -= p * p.log2();
            }
        }
        entropy
    }
}

impl SplitCriterion for EntropySplitCriterion {
    fn impurity(&self, distribution: &[f64]) -> f64 {
        self.compute_entropy(distribution, distribution.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entropy_bounds() {
        let e = EntropySplitCriterion;
        assert_eq!(e.impurity(&[3.0, 0.0]), 0.0);
        assert!((e.impurity(&[5.0, 5.0]) - 1.0).abs() < 1e-12);
    }
}
