//! CSV Schema SDK - per-column type inference for delimited text
//!
//! Provides:
//! - CSV parsing into a header-checked table
//! - Column type inference with a fixed specificity order
//! - Payload decoding (raw or gzip) for service front ends

pub mod import;
pub mod inference;
pub mod ingress;

// Re-export commonly used types
pub use import::{Column, CsvImporter, CsvOptions, ImportError, RawTable, RowShapeError};
pub use inference::{
    InferenceConfig, InferredField, OutputType, Schema, SchemaField, SchemaInferrer, TypeCandidate,
    infer_schema,
};
pub use ingress::{ContentEncoding, SchemaError, SchemaGenerator, decode_payload};
