use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),

    #[error("unrecognized income label '{0}' (expected '<=50K' or '>50K')")]
    UnknownIncome(String),

    #[error("column '{name}' has {got} rows, expected {expected}")]
    ColumnLength {
        name: String,
        expected: usize,
        got: usize,
    },

    #[error("duplicate column '{0}'")]
    DuplicateColumn(String),

    #[error("feature matrix has {rows} rows but {labels} labels")]
    LabelCount { rows: usize, labels: usize },

    #[error("row {row} has {got} values, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("column index {index} out of bounds for {width} columns")]
    ColumnIndex { index: usize, width: usize },

    #[error("test fraction must be in (0, 1), got {0}")]
    TestFraction(f64),

    #[error("dataset is empty")]
    Empty,
}
