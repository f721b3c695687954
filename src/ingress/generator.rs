//! Payload decoding and the decode → parse → infer pipeline

use std::io::Read;

use flate2::read::MultiGzDecoder;
use tracing::debug;

use super::{ContentEncoding, SchemaError};
use crate::import::{CsvImporter, CsvOptions};
use crate::inference::{InferenceConfig, Schema, SchemaInferrer};

/// Default cap on decoded payload size (100 MiB)
pub const DEFAULT_MAX_DECODED_BYTES: usize = 100 * 1024 * 1024;

/// Decode a request body into CSV text.
///
/// Gzip payloads are inflated up to `max_decoded_bytes`, reading every concatenated
/// member; bytes after the last member are an error. The result must be UTF-8.
/// A leading byte-order mark is removed.
pub fn decode_payload(
    body: &[u8],
    encoding: ContentEncoding,
    max_decoded_bytes: usize,
) -> Result<String, SchemaError> {
    if body.is_empty() {
        return Err(SchemaError::EmptyBody);
    }

    let bytes = match encoding {
        ContentEncoding::Gzip => {
            let limit = u64::try_from(max_decoded_bytes)
                .unwrap_or(u64::MAX)
                .saturating_add(1);
            let mut decoded = Vec::new();
            MultiGzDecoder::new(body)
                .take(limit)
                .read_to_end(&mut decoded)
                .map_err(|e| {
                    SchemaError::TransportDecode(format!("Failed to decompress gzip data: {}", e))
                })?;
            if decoded.len() > max_decoded_bytes {
                return Err(SchemaError::TransportDecode(format!(
                    "Decompressed payload exceeds {} bytes",
                    max_decoded_bytes
                )));
            }
            decoded
        }
        ContentEncoding::Identity => {
            if body.len() > max_decoded_bytes {
                return Err(SchemaError::TransportDecode(format!(
                    "Payload exceeds {} bytes",
                    max_decoded_bytes
                )));
            }
            body.to_vec()
        }
    };

    let text = String::from_utf8(bytes)
        .map_err(|e| SchemaError::TransportDecode(format!("Failed to decode CSV data: {}", e)))?;

    Ok(match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    })
}

/// Turns request payloads into schemas.
///
/// Built once from immutable configuration and shared across requests.
#[derive(Debug, Clone)]
pub struct SchemaGenerator {
    importer: CsvImporter,
    inferrer: SchemaInferrer,
    max_decoded_bytes: usize,
}

impl Default for SchemaGenerator {
    fn default() -> Self {
        Self::new(CsvOptions::default(), InferenceConfig::default())
    }
}

impl SchemaGenerator {
    pub fn new(csv: CsvOptions, inference: InferenceConfig) -> Self {
        Self {
            importer: CsvImporter::new(csv),
            inferrer: SchemaInferrer::with_config(inference),
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
        }
    }

    pub fn with_max_decoded_bytes(mut self, max_decoded_bytes: usize) -> Self {
        self.max_decoded_bytes = max_decoded_bytes;
        self
    }

    pub fn max_decoded_bytes(&self) -> usize {
        self.max_decoded_bytes
    }

    /// Decode, parse and infer in one step
    pub fn generate(&self, body: &[u8], encoding: ContentEncoding) -> Result<Schema, SchemaError> {
        let text = decode_payload(body, encoding, self.max_decoded_bytes)?;
        self.generate_from_text(&text)
    }

    /// Parse and infer already-decoded CSV text
    pub fn generate_from_text(&self, text: &str) -> Result<Schema, SchemaError> {
        if text.trim().is_empty() {
            return Err(SchemaError::EmptyInput);
        }

        let table = self.importer.parse(text)?;
        let schema = self.inferrer.infer(&table);

        debug!(
            columns = schema.len(),
            records = schema.record_count,
            skipped = schema.skipped_count,
            "Schema generated"
        );

        Ok(schema)
    }
}
