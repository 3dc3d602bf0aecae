use crate::core::{Column, RawFrame};
use crate::preprocessing::PreprocessError;
use crate::sources::CENSUS_NUMERIC_COLUMNS;

/// Linearly rescales numeric columns into `feature_range` (default `[0, 1]`).
///
/// A column whose observed min equals its max maps every value to the lower
/// bound of the range.
#[derive(Debug, Clone)]
pub struct MinMaxScaler {
    columns: Vec<String>,
    feature_range: (f64, f64),
    bounds: Option<Vec<(f64, f64)>>,
}

impl MinMaxScaler {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            feature_range: (0.0, 1.0),
            bounds: None,
        }
    }

    pub fn census() -> Self {
        Self::new(CENSUS_NUMERIC_COLUMNS)
    }

    pub fn with_range(mut self, lo: f64, hi: f64) -> Self {
        self.feature_range = (lo, hi);
        self
    }

    /// Per-column `(min, max)` learned by [`fit`](Self::fit).
    pub fn bounds(&self) -> Option<&[(f64, f64)]> {
        self.bounds.as_deref()
    }

    pub fn fit(&mut self, frame: &RawFrame) -> Result<(), PreprocessError> {
        let mut bounds = Vec::with_capacity(self.columns.len());
        for name in &self.columns {
            let values = numeric_column(frame, name)?;
            let (lo, hi) = values
                .iter()
                .filter(|v| !v.is_nan())
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                    (lo.min(v), hi.max(v))
                });
            bounds.push((lo, hi));
        }
        self.bounds = Some(bounds);
        Ok(())
    }

    pub fn transform(&self, frame: &mut RawFrame) -> Result<(), PreprocessError> {
        let bounds = self
            .bounds
            .as_ref()
            .ok_or(PreprocessError::NotFitted("MinMaxScaler"))?;
        let (range_lo, range_hi) = self.feature_range;
        let scale = range_hi - range_lo;

        for (name, &(lo, hi)) in self.columns.iter().zip(bounds) {
            let span = hi - lo;
            match frame.column_mut(name) {
                Some(Column::Numeric(values)) => {
                    for v in values.iter_mut() {
                        *v = if span > 0.0 {
                            (*v - lo) / span * scale + range_lo
                        } else {
                            range_lo
                        };
                    }
                }
                Some(Column::Categorical(_)) => {
                    return Err(PreprocessError::NotNumeric(name.clone()));
                }
                None => return Err(PreprocessError::MissingColumn(name.clone())),
            }
        }
        Ok(())
    }

    pub fn fit_transform(&mut self, frame: &mut RawFrame) -> Result<(), PreprocessError> {
        self.fit(frame)?;
        self.transform(frame)
    }
}

fn numeric_column<'a>(frame: &'a RawFrame, name: &str) -> Result<&'a [f64], PreprocessError> {
    match frame.column(name) {
        Some(Column::Numeric(values)) => Ok(values),
        Some(Column::Categorical(_)) => Err(PreprocessError::NotNumeric(name.to_string())),
        None => Err(PreprocessError::MissingColumn(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(values: Vec<f64>) -> RawFrame {
        let mut f = RawFrame::new();
        f.push_column("x", Column::Numeric(values)).unwrap();
        f
    }

    fn values(f: &RawFrame) -> Vec<f64> {
        match f.column("x").unwrap() {
            Column::Numeric(v) => v.clone(),
            _ => unreachable!(),
        }
    }

    #[test]
    fn scales_into_unit_interval() {
        let mut f = frame(vec![10.0, 20.0, 15.0, 30.0]);
        let mut s = MinMaxScaler::new(["x"]);
        s.fit_transform(&mut f).unwrap();

        assert_eq!(s.bounds().unwrap(), &[(10.0, 30.0)]);
        assert_eq!(values(&f), vec![0.0, 0.5, 0.25, 1.0]);
    }

    #[test]
    fn custom_range_and_constant_column() {
        let mut f = frame(vec![2.0, 4.0]);
        MinMaxScaler::new(["x"])
            .with_range(-1.0, 1.0)
            .fit_transform(&mut f)
            .unwrap();
        assert_eq!(values(&f), vec![-1.0, 1.0]);

        let mut f = frame(vec![7.0, 7.0, 7.0]);
        MinMaxScaler::new(["x"]).fit_transform(&mut f).unwrap();
        assert_eq!(values(&f), vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn transform_uses_fitted_bounds() {
        let mut train = frame(vec![0.0, 10.0]);
        let mut s = MinMaxScaler::new(["x"]);
        s.fit(&train).unwrap();
        s.transform(&mut train).unwrap();

        let mut other = frame(vec![5.0, 20.0]);
        s.transform(&mut other).unwrap();
        assert_eq!(values(&other), vec![0.5, 2.0]);
    }

    #[test]
    fn transform_before_fit_fails() {
        let mut f = frame(vec![1.0]);
        assert!(matches!(
            MinMaxScaler::new(["x"]).transform(&mut f).unwrap_err(),
            PreprocessError::NotFitted(_)
        ));
    }
}
