//! CLI error types

use std::path::PathBuf;

use csv_schema_sdk::SchemaError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Failed to read {0}: {1}")]
    FileReadError(PathBuf, String),

    #[error("Failed to write {0}: {1}")]
    FileWriteError(PathBuf, String),

    #[error("Schema inference failed: {0}")]
    InferenceError(#[from] SchemaError),

    #[error("Failed to serialize output: {0}")]
    SerializationError(String),
}
