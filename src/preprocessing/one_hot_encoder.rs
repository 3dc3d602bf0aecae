use crate::core::{Column, RawFrame};
use crate::preprocessing::PreprocessError;
use std::collections::BTreeSet;

/// Expands categorical columns into binary indicator columns.
///
/// Output layout: numeric columns first, in frame order, then for each
/// categorical column (frame order) one `"{column}_{value}"` indicator per
/// category, categories sorted lexicographically. Values not seen during
/// [`fit`](Self::fit) encode as all zeros.
#[derive(Debug, Clone, Default)]
pub struct OneHotEncoder {
    numeric: Vec<String>,
    categories: Option<Vec<(String, Vec<String>)>>,
}

impl OneHotEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fit(&mut self, frame: &RawFrame) {
        let mut numeric = Vec::new();
        let mut categories = Vec::new();
        for (name, column) in frame.columns() {
            match column {
                Column::Numeric(_) => numeric.push(name.to_string()),
                Column::Categorical(values) => {
                    let distinct: BTreeSet<&str> = values.iter().map(String::as_str).collect();
                    categories.push((
                        name.to_string(),
                        distinct.into_iter().map(str::to_string).collect(),
                    ));
                }
            }
        }
        self.numeric = numeric;
        self.categories = Some(categories);
    }

    /// Names of the encoded columns, in output order.
    pub fn feature_names(&self) -> Result<Vec<String>, PreprocessError> {
        let categories = self
            .categories
            .as_ref()
            .ok_or(PreprocessError::NotFitted("OneHotEncoder"))?;
        let mut names = self.numeric.clone();
        for (column, values) in categories {
            names.extend(values.iter().map(|v| format!("{column}_{v}")));
        }
        Ok(names)
    }

    /// Row-major encoded matrix.
    pub fn transform(&self, frame: &RawFrame) -> Result<Vec<Vec<f64>>, PreprocessError> {
        let categories = self
            .categories
            .as_ref()
            .ok_or(PreprocessError::NotFitted("OneHotEncoder"))?;
        let n_rows = frame.n_rows();
        let width = self.numeric.len() + categories.iter().map(|(_, v)| v.len()).sum::<usize>();
        let mut rows = vec![Vec::with_capacity(width); n_rows];

        for name in &self.numeric {
            match frame.column(name) {
                Some(Column::Numeric(values)) => {
                    for (row, &v) in rows.iter_mut().zip(values) {
                        row.push(v);
                    }
                }
                Some(Column::Categorical(_)) => {
                    return Err(PreprocessError::NotNumeric(name.clone()));
                }
                None => return Err(PreprocessError::MissingColumn(name.clone())),
            }
        }

        for (name, known) in categories {
            let values = match frame.column(name) {
                Some(Column::Categorical(values)) => values,
                Some(Column::Numeric(_)) | None => {
                    return Err(PreprocessError::MissingColumn(name.clone()));
                }
            };
            for (row, value) in rows.iter_mut().zip(values) {
                let hot = known.binary_search(value).ok();
                row.extend((0..known.len()).map(|i| if Some(i) == hot { 1.0 } else { 0.0 }));
            }
        }

        Ok(rows)
    }
}
