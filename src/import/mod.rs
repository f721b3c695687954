//! Import functionality
//!
//! Parses delimited text into a [`RawTable`]: a verbatim header plus data rows
//! that all match the header width.

mod reader;
mod table;

pub use reader::{CsvImporter, CsvOptions};
pub use table::{Column, RawTable};

/// Error during import
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),
    #[error("Invalid CSV dialect: {0}")]
    InvalidDialect(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// A data row whose cell count differs from the header's
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("data row {row} has {actual} cells, expected {expected}")]
pub struct RowShapeError {
    /// Zero-based data row index
    pub row: usize,
    /// One-based source line where the record starts, when known
    pub line: Option<u64>,
    pub expected: usize,
    pub actual: usize,
}
