use crate::evaluation::estimators::Estimator;

/// Running mean `sum / len`. `NaN` inputs are skipped, and an empty
/// estimator reports `NaN`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BasicEstimator {
    len: f64,
    sum: f64,
}

impl BasicEstimator {
    pub fn count(&self) -> f64 {
        self.len
    }
}

impl Estimator for BasicEstimator {
    #[inline]
    fn add(&mut self, v: f64) {
        if v.is_nan() {
            return;
        }
        self.len += 1.0;
        self.sum += v;
    }

    #[inline]
    fn estimation(&self) -> f64 {
        if self.len > 0.0 {
            self.sum / self.len
        } else {
            f64::NAN
        }
    }
}
