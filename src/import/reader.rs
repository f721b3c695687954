//! CSV reader producing a [`RawTable`]

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{ImportError, RawTable};

/// CSV dialect options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvOptions {
    /// Field delimiter (single ASCII character)
    pub delimiter: char,
    /// Quote character (single ASCII character)
    pub quote: char,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            quote: '"',
        }
    }
}

impl CsvOptions {
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = quote;
        self
    }

    /// Check that the dialect can be handed to the CSV reader
    pub fn validate(&self) -> Result<(), ImportError> {
        let delimiter = dialect_byte("delimiter", self.delimiter)?;
        let quote = dialect_byte("quote", self.quote)?;
        if delimiter == quote {
            return Err(ImportError::InvalidDialect(format!(
                "delimiter and quote must differ, both are {:?}",
                self.delimiter
            )));
        }
        Ok(())
    }
}

fn dialect_byte(name: &str, c: char) -> Result<u8, ImportError> {
    if !c.is_ascii() || c == '\n' || c == '\r' {
        return Err(ImportError::InvalidDialect(format!(
            "{} must be a single ASCII character other than a line break, got {:?}",
            name, c
        )));
    }
    Ok(c as u8)
}

/// CSV importer
///
/// The first record is the header; every later record is a data row. Rows whose
/// width differs from the header are skipped and recorded on the table.
#[derive(Debug, Clone, Default)]
pub struct CsvImporter {
    options: CsvOptions,
}

impl CsvImporter {
    pub fn new(options: CsvOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &CsvOptions {
        &self.options
    }

    /// Parse CSV text into a table
    pub fn parse(&self, text: &str) -> Result<RawTable, ImportError> {
        self.options.validate()?;
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .delimiter(self.options.delimiter as u8)
            .quote(self.options.quote as u8)
            .from_reader(text.as_bytes());
        let mut records = reader.records();

        let header = match records.next() {
            Some(record) => record.map_err(|e| ImportError::ParseError(e.to_string()))?,
            None => return RawTable::new(Vec::new()),
        };
        let mut table = RawTable::new(header.iter().map(str::to_string).collect())?;

        for record in records {
            let record = record.map_err(|e| ImportError::ParseError(e.to_string()))?;
            let line = record.position().map(|p| p.line());
            let row: Vec<String> = record.iter().map(str::to_string).collect();

            if let Err(mut err) = table.push_row(row) {
                err.line = line;
                warn!(
                    row = err.row,
                    line = ?err.line,
                    expected = err.expected,
                    actual = err.actual,
                    "Skipping malformed CSV row"
                );
                table.record_skipped(err);
            }
        }

        if !table.skipped_rows().is_empty() {
            info!(
                rows = table.row_count(),
                skipped = table.skipped_rows().len(),
                "CSV parsed with skipped rows"
            );
        }

        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RawTable {
        CsvImporter::default().parse(text).unwrap()
    }

    #[test]
    fn test_parse_simple() {
        let table = parse("name,age\nAlice,30\nBob,25\n");
        assert_eq!(table.column_names(), &["name", "age"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["Bob", "25"]);
    }

    #[test]
    fn test_parse_crlf_and_blank_lines() {
        let table = parse("a,b\r\n1,2\r\n\r\n3,4\r\n");
        assert_eq!(table.row_count(), 2);
        assert!(table.skipped_rows().is_empty());
    }

    #[test]
    fn test_parse_quoted_fields() {
        let table = parse("id,note\n1,\"hello, world\"\n2,\"say \"\"hi\"\"\"\n3,\"two\nlines\"\n");
        assert_eq!(table.row_count(), 3);
        let notes: Vec<&str> = table.column("note").unwrap().values().collect();
        assert_eq!(notes, vec!["hello, world", "say \"hi\"", "two\nlines"]);
    }

    #[test]
    fn test_header_is_verbatim() {
        let table = parse(" Name ,AGE\nx,1\n");
        assert_eq!(table.column_names(), &[" Name ", "AGE"]);
    }

    #[test]
    fn test_strips_bom() {
        let table = parse("\u{feff}name\nAlice\n");
        assert_eq!(table.column_names(), &["name"]);
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let table = parse("a,b\n1,2\n3\n4,5,6\n7,8\n");
        assert_eq!(table.row_count(), 2);

        let skipped = table.skipped_rows();
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].row, 1);
        assert_eq!(skipped[0].line, Some(3));
        assert_eq!(skipped[0].actual, 1);
        assert_eq!(skipped[1].row, 2);
        assert_eq!(skipped[1].line, Some(4));
        assert_eq!(skipped[1].actual, 3);
    }

    #[test]
    fn test_header_only() {
        let table = parse("a,b\n");
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_empty_text_has_no_columns() {
        let table = parse("");
        assert_eq!(table.column_count(), 0);
    }

    #[test]
    fn test_duplicate_header() {
        let err = CsvImporter::default().parse("id,id\n1,2\n").unwrap_err();
        assert_eq!(err, ImportError::DuplicateColumn("id".to_string()));
    }

    #[test]
    fn test_custom_delimiter() {
        let importer = CsvImporter::new(CsvOptions::default().with_delimiter(';'));
        let table = importer.parse("a;b\n1,5;2\n").unwrap();
        assert_eq!(table.rows()[0], vec!["1,5", "2"]);
    }

    #[test]
    fn test_invalid_dialect() {
        let importer = CsvImporter::new(CsvOptions::default().with_delimiter('§'));
        assert!(matches!(
            importer.parse("a\n1\n"),
            Err(ImportError::InvalidDialect(_))
        ));

        let options = CsvOptions::default().with_delimiter('"');
        assert!(options.validate().is_err());
    }
}
