pub trait SplitCriterion {
    /// Impurity of a class distribution given as per-class weights.
    fn impurity(&self, distribution: &[f64]) -> f64;

    /// Weighted impurity decrease of splitting `pre_split_distribution` into
    /// `post_split_dists`. Scaled by node weight, so it can be summed across
    /// nodes as a feature-importance contribution.
    fn merit_of_split(&self, pre_split_distribution: &[f64], post_split_dists: &[&[f64]]) -> f64 {
        let weight = |d: &[f64]| d.iter().sum::<f64>();
        let before = weight(pre_split_distribution) * self.impurity(pre_split_distribution);
        let after: f64 = post_split_dists
            .iter()
            .map(|d| weight(d) * self.impurity(d))
            .sum();
        before - after
    }
}
