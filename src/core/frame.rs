use crate::core::DataError;

/// One named column of a [`RawFrame`], before encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<f64>),
    Categorical(Vec<String>),
}

impl Column {
    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(v) => v.len(),
            Column::Categorical(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }
}

/// Column-oriented table as read from disk.
///
/// Every column has the same number of rows and column names are unique.
/// Order of insertion is preserved, which downstream encoders rely on.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawFrame {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl RawFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_column<N: Into<String>>(
        &mut self,
        name: N,
        column: Column,
    ) -> Result<(), DataError> {
        let name = name.into();
        if self.names.iter().any(|n| *n == name) {
            return Err(DataError::DuplicateColumn(name));
        }
        if let Some(first) = self.columns.first() {
            if first.len() != column.len() {
                return Err(DataError::ColumnLength {
                    name,
                    expected: first.len(),
                    got: column.len(),
                });
            }
        }
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|i| &self.columns[i])
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        let i = self.position(name)?;
        Some(&mut self.columns[i])
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_lookup_preserve_order() {
        let mut f = RawFrame::new();
        f.push_column("age", Column::Numeric(vec![30.0, 40.0])).unwrap();
        f.push_column("sex", Column::Categorical(vec!["Male".into(), "Female".into()]))
            .unwrap();

        assert_eq!(f.names(), &["age".to_string(), "sex".to_string()]);
        assert_eq!(f.n_rows(), 2);
        assert_eq!(f.n_columns(), 2);
        assert!(f.column("age").unwrap().is_numeric());
        assert!(!f.column("sex").unwrap().is_numeric());
        assert!(f.column("race").is_none());
    }

    #[test]
    fn rejects_ragged_and_duplicate_columns() {
        let mut f = RawFrame::new();
        f.push_column("a", Column::Numeric(vec![1.0, 2.0])).unwrap();

        let err = f.push_column("b", Column::Numeric(vec![1.0])).unwrap_err();
        assert!(matches!(
            err,
            DataError::ColumnLength {
                expected: 2,
                got: 1,
                ..
            }
        ));

        let err = f.push_column("a", Column::Numeric(vec![3.0, 4.0])).unwrap_err();
        assert!(matches!(err, DataError::DuplicateColumn(ref n) if n == "a"));
    }

    #[test]
    fn column_mut_allows_in_place_edits() {
        let mut f = RawFrame::new();
        f.push_column("x", Column::Numeric(vec![1.0])).unwrap();
        if let Some(Column::Numeric(v)) = f.column_mut("x") {
            v[0] = 5.0;
        }
        assert_eq!(f.column("x"), Some(&Column::Numeric(vec![5.0])));
    }
}
