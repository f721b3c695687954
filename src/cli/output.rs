//! Output formatting for CLI

use std::str::FromStr;

use csv_schema_sdk::Schema;

use crate::error::CliError;

/// How a schema is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[{"type", "column"}]`, same as the HTTP service
    #[default]
    Wire,
    /// Full inferred fields with counts, as JSON
    Detailed,
    /// Full inferred fields as YAML
    Yaml,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wire" | "json" => Ok(OutputFormat::Wire),
            "detailed" => Ok(OutputFormat::Detailed),
            "yaml" => Ok(OutputFormat::Yaml),
            _ => Err(CliError::InvalidArgument(format!(
                "Unknown output format: {} (expected wire, detailed or yaml)",
                s
            ))),
        }
    }
}

/// Render a schema in the requested format
pub fn format_schema(schema: &Schema, format: OutputFormat) -> Result<String, CliError> {
    let rendered = match format {
        OutputFormat::Wire => serde_json::to_string_pretty(&schema.to_wire())
            .map_err(|e| CliError::SerializationError(e.to_string()))?,
        OutputFormat::Detailed => serde_json::to_string_pretty(schema)
            .map_err(|e| CliError::SerializationError(e.to_string()))?,
        OutputFormat::Yaml => {
            serde_yaml::to_string(schema).map_err(|e| CliError::SerializationError(e.to_string()))?
        }
    };
    Ok(rendered)
}

/// One line per column for stderr summaries
pub fn format_summary(schema: &Schema) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Inferred {} column(s) from {} row(s)",
        schema.len(),
        schema.record_count
    ));
    if schema.skipped_count > 0 {
        output.push_str(&format!(", {} malformed row(s) skipped", schema.skipped_count));
    }
    output.push('\n');

    for field in &schema.fields {
        output.push_str(&format!(
            "  {}: {} ({})\n",
            field.column, field.output_type, field.detected_type
        ));
    }
    output
}
