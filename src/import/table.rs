//! Parsed tabular data

use std::collections::HashSet;

use super::{ImportError, RowShapeError};

/// Header plus data rows of a parsed CSV document.
///
/// Every retained row has exactly as many cells as there are columns; rows that
/// do not are rejected by [`RawTable::push_row`] and may be recorded as skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    skipped: Vec<RowShapeError>,
}

impl RawTable {
    /// Create an empty table with the given header.
    ///
    /// Column names are kept verbatim and must be unique.
    pub fn new(columns: Vec<String>) -> Result<Self, ImportError> {
        let mut seen = HashSet::with_capacity(columns.len());
        for name in &columns {
            if !seen.insert(name.as_str()) {
                return Err(ImportError::DuplicateColumn(name.clone()));
            }
        }

        Ok(Self {
            columns,
            rows: Vec::new(),
            skipped: Vec::new(),
        })
    }

    /// Append a data row, rejecting it if its width differs from the header
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), RowShapeError> {
        if row.len() != self.columns.len() {
            return Err(RowShapeError {
                row: self.rows.len() + self.skipped.len(),
                line: None,
                expected: self.columns.len(),
                actual: row.len(),
            });
        }

        self.rows.push(row);
        Ok(())
    }

    /// Record a row that was dropped because of its shape
    pub fn record_skipped(&mut self, error: RowShapeError) {
        self.skipped.push(error);
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Rows dropped for having the wrong number of cells
    pub fn skipped_rows(&self) -> &[RowShapeError] {
        &self.skipped
    }

    /// Column views in header order
    pub fn columns(&self) -> impl Iterator<Item = Column<'_>> {
        (0..self.columns.len()).map(move |index| Column { table: self, index })
    }

    /// Look up a column view by name
    pub fn column(&self, name: &str) -> Option<Column<'_>> {
        self.columns
            .iter()
            .position(|c| c == name)
            .map(|index| Column { table: self, index })
    }
}

/// A single header position viewed across all rows
#[derive(Debug, Clone, Copy)]
pub struct Column<'a> {
    table: &'a RawTable,
    index: usize,
}

impl<'a> Column<'a> {
    pub fn name(&self) -> &'a str {
        &self.table.columns[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Cell values in row order
    pub fn values(self) -> impl Iterator<Item = &'a str> {
        let index = self.index;
        self.table.rows.iter().map(move |row| row[index].as_str())
    }
}
