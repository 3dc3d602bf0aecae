use crate::core::{Column, RawFrame};
use crate::preprocessing::PreprocessError;
use crate::sources::CENSUS_SKEWED_COLUMNS;

/// Replaces `x` with `ln(x + 1)` in each configured numeric column.
///
/// Stateless: there is nothing to fit.
#[derive(Debug, Clone)]
pub struct LogTransformer {
    columns: Vec<String>,
}

impl LogTransformer {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    pub fn census() -> Self {
        Self::new(CENSUS_SKEWED_COLUMNS)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn transform(&self, frame: &mut RawFrame) -> Result<(), PreprocessError> {
        for name in &self.columns {
            match frame.column_mut(name) {
                Some(Column::Numeric(values)) => {
                    for v in values.iter_mut() {
                        *v = v.ln_1p();
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_log1p_only_to_listed_columns() {
        let mut f = RawFrame::new();
        f.push_column("gain", Column::Numeric(vec![0.0, std::f64::consts::E - 1.0]))
            .unwrap();
        f.push_column("age", Column::Numeric(vec![10.0, 20.0])).unwrap();

        LogTransformer::new(["gain"]).transform(&mut f).unwrap();

        match f.column("gain").unwrap() {
            Column::Numeric(v) => {
                assert_eq!(v[0], 0.0);
                assert!((v[1] - 1.0).abs() < 1e-12);
            }
            _ => unreachable!(),
        }
        assert_eq!(f.column("age"), Some(&Column::Numeric(vec![10.0, 20.0])));
    }

    #[test]
    fn errors_on_missing_or_categorical_column() {
        let mut f = RawFrame::new();
        f.push_column("sex", Column::Categorical(vec!["Male".into()]))
            .unwrap();

        assert!(matches!(
            LogTransformer::new(["gain"]).transform(&mut f).unwrap_err(),
            PreprocessError::MissingColumn(ref c) if c == "gain"
        ));
        assert!(matches!(
            LogTransformer::new(["sex"]).transform(&mut f).unwrap_err(),
            PreprocessError::NotNumeric(ref c) if c == "sex"
        ));
    }
}
