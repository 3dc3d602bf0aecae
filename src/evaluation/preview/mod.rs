mod comparison_table;

pub use comparison_table::{ComparisonRow, ComparisonTable, ReportFormat};
