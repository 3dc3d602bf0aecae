use crate::classifiers::forest::split_criteria::split_criterion::SplitCriterion;

pub struct GiniSplitCriterion;

impl GiniSplitCriterion {
    pub fn compute_gini(&self, distribution: &[f64], distribution_sum_of_weights: f64) -> f64 {
        if distribution_sum_of_weights <= 0.0 {
            return 0.0;
        }
        let mut gini = 1.0;
        for i in distribution {
            let rel_freq = i / distribution_sum_of_weights;
            gini -= rel_freq * rel_freq;
        }
        gini
    }
}

impl SplitCriterion for GiniSplitCriterion {
    fn impurity(&self, distribution: &[f64]) -> f64 {
        self.compute_gini(distribution, distribution.iter().sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pure_and_balanced_nodes() {
        let g = GiniSplitCriterion;
        assert_eq!(g.impurity(&[4.0, 0.0]), 0.0);
        assert!((g.impurity(&[2.0, 2.0]) - 0.5).abs() < 1e-12);
        assert_eq!(g.impurity(&[0.0, 0.0]), 0.0);
    }

    #[test]
    fn perfect_split_recovers_full_weighted_impurity() {
        let g = GiniSplitCriterion;
        let merit = g.merit_of_split(&[2.0, 2.0], &[&[2.0, 0.0], &[0.0, 2.0]]);
        assert!((merit - 2.0).abs() < 1e-12);
    }
}
