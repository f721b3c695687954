//! Schema inference engine

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

use super::config::InferenceConfig;
use super::types::{InferredField, Schema, TypeCandidate};
use crate::import::{Column, RawTable};

/// Schema inference engine
///
/// Classifies every column of a [`RawTable`] independently. Inference is total:
/// a column that contradicts every specific candidate resolves to `string`.
#[derive(Debug, Clone, Default)]
pub struct SchemaInferrer {
    config: InferenceConfig,
}

impl SchemaInferrer {
    /// Create a new schema inferrer with default configuration
    pub fn new() -> Self {
        Self::with_config(InferenceConfig::default())
    }

    /// Create a new schema inferrer with custom configuration
    pub fn with_config(config: InferenceConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Infer one field per column, in header order
    pub fn infer(&self, table: &RawTable) -> Schema {
        let columns: Vec<Column<'_>> = table.columns().collect();

        #[cfg(feature = "parallel")]
        let fields: Vec<InferredField> = columns
            .par_iter()
            .map(|column| self.infer_column(column))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let fields: Vec<InferredField> = columns
            .iter()
            .map(|column| self.infer_column(column))
            .collect();

        Schema {
            fields,
            record_count: self.sampled_rows(table),
            skipped_count: table.skipped_rows().len(),
        }
    }

    /// Classify a single column
    pub fn infer_column(&self, column: &Column<'_>) -> InferredField {
        let mut survivors: Vec<TypeCandidate> = TypeCandidate::ALL.to_vec();
        let mut occurrences = 0usize;
        let mut missing = 0usize;

        for value in column.values().take(self.row_limit()) {
            if self.config.is_missing(value) {
                missing += 1;
                continue;
            }

            occurrences += 1;
            if survivors.len() > 1 {
                survivors.retain(|candidate| candidate.accepts(value, &self.config));
            }
        }

        // An all-missing column never eliminates anything, so it must be
        // forced down to the catch-all explicitly.
        let detected = if occurrences == 0 {
            TypeCandidate::String
        } else {
            survivors
                .first()
                .copied()
                .unwrap_or(TypeCandidate::String)
        };

        debug!(
            column = column.name(),
            detected = %detected,
            occurrences,
            missing,
            "column classified"
        );

        InferredField::new(column.name(), detected)
            .with_occurrences(occurrences)
            .with_nullable(missing > 0)
    }

    fn row_limit(&self) -> usize {
        if self.config.sample_size == 0 {
            usize::MAX
        } else {
            self.config.sample_size
        }
    }

    fn sampled_rows(&self, table: &RawTable) -> usize {
        table.row_count().min(self.row_limit())
    }
}

/// Infer a schema with the default configuration
pub fn infer_schema(table: &RawTable) -> Schema {
    SchemaInferrer::new().infer(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::OutputType;

    fn table(columns: &[&str], rows: &[&[&str]]) -> RawTable {
        let mut table = RawTable::new(columns.iter().map(|c| c.to_string()).collect()).unwrap();
        for row in rows {
            table
                .push_row(row.iter().map(|c| c.to_string()).collect())
                .unwrap();
        }
        table
    }

    fn detected(schema: &Schema, column: &str) -> TypeCandidate {
        schema.field(column).unwrap().detected_type
    }

    #[test]
    fn test_infer_simple_table() {
        let table = table(&["name", "age"], &[&["Alice", "30"], &["Bob", "25"]]);
        let schema = infer_schema(&table);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.record_count, 2);
        assert_eq!(detected(&schema, "name"), TypeCandidate::String);
        assert_eq!(detected(&schema, "age"), TypeCandidate::Integer);
        assert_eq!(schema.fields[1].output_type, OutputType::Number);
    }

    #[test]
    fn test_integer_and_float_resolve_to_float() {
        let table = table(&["price"], &[&["10"], &["10.5"], &["-3"]]);
        let schema = infer_schema(&table);
        assert_eq!(detected(&schema, "price"), TypeCandidate::Float);
    }

    #[test]
    fn test_numeric_and_text_resolve_to_string() {
        let table = table(&["code"], &[&["10"], &["A7"]]);
        let schema = infer_schema(&table);
        assert_eq!(detected(&schema, "code"), TypeCandidate::String);
    }

    #[test]
    fn test_missing_cells_do_not_vote() {
        let table = table(&["n"], &[&["1"], &[""], &["2"], &[""]]);
        let schema = infer_schema(&table);

        let field = schema.field("n").unwrap();
        assert_eq!(field.detected_type, TypeCandidate::Integer);
        assert_eq!(field.occurrences, 2);
        assert!(field.nullable);
    }

    #[test]
    fn test_all_missing_column_is_string() {
        let table = table(&["empty", "n"], &[&["", "1"], &["", "2"]]);
        let schema = infer_schema(&table);

        let field = schema.field("empty").unwrap();
        assert_eq!(field.detected_type, TypeCandidate::String);
        assert_eq!(field.occurrences, 0);
        assert!(field.nullable);
    }

    #[test]
    fn test_no_rows_falls_back_to_string() {
        let table = table(&["a", "b"], &[]);
        let schema = infer_schema(&table);

        assert_eq!(schema.len(), 2);
        assert_eq!(schema.record_count, 0);
        assert!(
            schema
                .fields
                .iter()
                .all(|f| f.detected_type == TypeCandidate::String)
        );
    }

    #[test]
    fn test_no_columns_yields_empty_schema() {
        let table = table(&[], &[]);
        let schema = infer_schema(&table);
        assert!(schema.is_empty());
    }

    #[test]
    fn test_configured_null_tokens() {
        let table = table(&["score"], &[&["1.5"], &["NA"], &["n/a"], &["2"]]);

        let schema = infer_schema(&table);
        assert_eq!(detected(&schema, "score"), TypeCandidate::String);

        let config = InferenceConfig::builder()
            .missing_value("NA")
            .missing_value("n/a")
            .build();
        let schema = SchemaInferrer::with_config(config).infer(&table);
        assert_eq!(detected(&schema, "score"), TypeCandidate::Float);
    }

    #[test]
    fn test_temporal_columns() {
        let table = table(
            &["day", "at", "clock", "mixed"],
            &[
                &["2024-01-15", "2024-01-15T10:30:00Z", "10:30:00", "2024-01-15"],
                &["2024-02-29", "2024-01-16 08:00:00", "23:59:59", "10:30:00"],
            ],
        );
        let schema = infer_schema(&table);

        assert_eq!(detected(&schema, "day"), TypeCandidate::Date);
        assert_eq!(detected(&schema, "at"), TypeCandidate::DateTime);
        assert_eq!(detected(&schema, "clock"), TypeCandidate::Time);
        assert_eq!(detected(&schema, "mixed"), TypeCandidate::String);
        assert!(
            schema
                .fields
                .iter()
                .all(|f| f.output_type == OutputType::String)
        );
    }

    #[test]
    fn test_sample_size_limit() {
        let table = table(&["v"], &[&["1"], &["2"], &["oops"]]);

        let config = InferenceConfig::builder().sample_size(2).build();
        let schema = SchemaInferrer::with_config(config).infer(&table);
        assert_eq!(detected(&schema, "v"), TypeCandidate::Integer);
        assert_eq!(schema.record_count, 2);

        let schema = infer_schema(&table);
        assert_eq!(detected(&schema, "v"), TypeCandidate::String);
        assert_eq!(schema.record_count, 3);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let table = table(
            &["a", "b", "c"],
            &[&["1", "x", "true"], &["2.5", "y", "false"], &["", "z", "TRUE"]],
        );
        let inferrer = SchemaInferrer::new();
        let first = inferrer.infer(&table);
        for _ in 0..10 {
            assert_eq!(inferrer.infer(&table), first);
        }
    }
}
