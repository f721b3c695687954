//! Column types and the inferred schema

use std::fmt;

use serde::{Deserialize, Serialize};

/// Detectable column kind, ordered from most to least specific
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeCandidate {
    /// `true` / `false` tokens
    Boolean,
    /// Base-10 signed whole numbers
    Integer,
    /// Decimal or exponential real numbers (integers included)
    Float,
    /// ISO 8601 calendar date
    Date,
    /// ISO 8601 date and time
    DateTime,
    /// Time of day
    Time,
    /// Anything
    String,
}

impl TypeCandidate {
    /// Every candidate in specificity order
    pub const ALL: [TypeCandidate; 7] = [
        TypeCandidate::Boolean,
        TypeCandidate::Integer,
        TypeCandidate::Float,
        TypeCandidate::Date,
        TypeCandidate::DateTime,
        TypeCandidate::Time,
        TypeCandidate::String,
    ];

    /// Get the name used in serialized output
    pub fn type_name(&self) -> &'static str {
        match self {
            TypeCandidate::Boolean => "boolean",
            TypeCandidate::Integer => "integer",
            TypeCandidate::Float => "float",
            TypeCandidate::Date => "date",
            TypeCandidate::DateTime => "datetime",
            TypeCandidate::Time => "time",
            TypeCandidate::String => "string",
        }
    }

    /// Map to the public output vocabulary
    pub fn output_type(&self) -> OutputType {
        match self {
            TypeCandidate::Integer | TypeCandidate::Float => OutputType::Number,
            TypeCandidate::Boolean => OutputType::Boolean,
            TypeCandidate::Date
            | TypeCandidate::DateTime
            | TypeCandidate::Time
            | TypeCandidate::String => OutputType::String,
        }
    }

    /// Whether this is one of the date-like candidates
    pub fn is_temporal(&self) -> bool {
        matches!(
            self,
            TypeCandidate::Date | TypeCandidate::DateTime | TypeCandidate::Time
        )
    }
}

impl fmt::Display for TypeCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// Public type vocabulary exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputType {
    Number,
    Boolean,
    String,
}

impl OutputType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputType::Number => "number",
            OutputType::Boolean => "boolean",
            OutputType::String => "string",
        }
    }
}

impl fmt::Display for OutputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An inferred column in a schema
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InferredField {
    /// Column name, verbatim from the header
    pub column: String,
    /// Most specific candidate matching every non-missing cell
    pub detected_type: TypeCandidate,
    /// Public type, always `detected_type.output_type()`
    pub output_type: OutputType,
    /// Number of non-missing cells
    pub occurrences: usize,
    /// Whether any cell was missing
    pub nullable: bool,
}

impl InferredField {
    /// Create a new inferred field
    pub fn new(column: impl Into<String>, detected_type: TypeCandidate) -> Self {
        Self {
            column: column.into(),
            detected_type,
            output_type: detected_type.output_type(),
            occurrences: 0,
            nullable: false,
        }
    }

    /// Set the non-missing cell count
    pub fn with_occurrences(mut self, occurrences: usize) -> Self {
        self.occurrences = occurrences;
        self
    }

    /// Mark this field as nullable
    pub fn with_nullable(mut self, nullable: bool) -> Self {
        self.nullable = nullable;
        self
    }

    /// Wire representation
    pub fn to_wire(&self) -> SchemaField {
        SchemaField {
            field_type: self.output_type,
            column: self.column.clone(),
        }
    }
}

/// One `{type, column}` entry of the wire format.
///
/// Field order matters to existing clients: `type` is serialized before `column`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchemaField {
    #[serde(rename = "type")]
    pub field_type: OutputType,
    pub column: String,
}

/// Complete inferred schema, one field per column in header order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Inferred fields in header order
    pub fields: Vec<InferredField>,
    /// Number of data rows analysed
    pub record_count: usize,
    /// Number of malformed rows skipped while parsing
    pub skipped_count: usize,
}

impl Schema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field by column name
    pub fn field(&self, column: &str) -> Option<&InferredField> {
        self.fields.iter().find(|f| f.column == column)
    }

    /// Convert to the `[{type, column}]` wire format
    pub fn to_wire(&self) -> Vec<SchemaField> {
        self.fields.iter().map(InferredField::to_wire).collect()
    }
}
