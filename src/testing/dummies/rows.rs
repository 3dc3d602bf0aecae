use crate::core::Dataset;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Two features where the first separates the classes with a margin and the
/// second is noise. Labels alternate, starting with `0`.
pub fn separable_rows(n: usize, seed: u64) -> (Vec<Vec<f64>>, Vec<u8>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut features = Vec::with_capacity(n);
    let mut labels = Vec::with_capacity(n);
    for i in 0..n {
        let label = (i % 2) as u8;
        let signal = if label == 1 {
            rng.random_range(0.7..=1.0)
        } else {
            rng.random_range(0.0..=0.3)
        };
        features.push(vec![signal, rng.random_range(0.0..1.0)]);
        labels.push(label);
    }
    (features, labels)
}

/// Ten distinct rows, five of them positive.
pub fn toy_dataset() -> Dataset {
    let features = (0..10)
        .map(|i| vec![i as f64 / 10.0, (i % 3) as f64])
        .collect();
    let labels = vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 0];
    Dataset::new(vec!["x".into(), "bucket".into()], features, labels)
        .expect("toy dataset is well formed")
}
