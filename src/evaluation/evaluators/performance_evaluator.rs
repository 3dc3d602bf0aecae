use crate::evaluation::Measurement;
use std::collections::HashMap;

/// Accumulating evaluator of predictive performance.
///
/// Consumes one `(truth, predicted)` label pair at a time and exposes the
/// aggregated metrics via [`performance`](PerformanceEvaluator::performance).
pub trait PerformanceEvaluator {
    /// Clears accumulated state.
    fn reset(&mut self);

    fn add_result(&mut self, truth: u8, predicted: u8);

    fn performance(&self) -> Vec<Measurement>;
}

pub trait PerformanceEvaluatorExt {
    /// Returns (name, Some(value)|None) for each requested metric, preserving order.
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>;

    fn metric(&self, name: &str) -> Option<f64> {
        self.metrics([name]).into_iter().next().and_then(|(_, v)| v)
    }

    /// Feeds every pair of two parallel label slices.
    fn add_all(&mut self, truth: &[u8], predicted: &[u8]);
}

impl<T: PerformanceEvaluator + ?Sized> PerformanceEvaluatorExt for T {
    fn metrics<'a, I>(&self, names: I) -> Vec<(String, Option<f64>)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let ms = self.performance();
        let map: HashMap<_, _> = ms.into_iter().map(|m| (m.name, m.value)).collect();
        names
            .into_iter()
            .map(|n| (n.to_string(), map.get(n).copied()))
            .collect()
    }

    fn add_all(&mut self, truth: &[u8], predicted: &[u8]) {
        for (&t, &p) in truth.iter().zip(predicted) {
            self.add_result(t, p);
        }
    }
}
