//! Ingress error taxonomy

use crate::import::ImportError;

/// Failure while turning a request payload into a schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// Payload could not be decompressed, was not UTF-8, or was too large once decoded
    #[error("{0}")]
    TransportDecode(String),

    #[error("No data provided")]
    EmptyBody,

    #[error("Empty CSV data")]
    EmptyInput,

    #[error("Duplicate column name: {0}")]
    DuplicateColumn(String),

    #[error("Failed to parse CSV data: {0}")]
    Parse(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl SchemaError {
    /// Whether the caller sent something unusable (as opposed to a server fault)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, SchemaError::Internal(_))
    }
}

impl From<ImportError> for SchemaError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::DuplicateColumn(name) => SchemaError::DuplicateColumn(name),
            ImportError::InvalidDialect(msg) | ImportError::ParseError(msg) => {
                SchemaError::Parse(msg)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_errors() {
        assert!(SchemaError::EmptyBody.is_client_error());
        assert!(SchemaError::EmptyInput.is_client_error());
        assert!(SchemaError::TransportDecode("bad gzip".into()).is_client_error());
        assert!(SchemaError::DuplicateColumn("id".into()).is_client_error());
        assert!(SchemaError::Parse("bad".into()).is_client_error());
        assert!(!SchemaError::Internal("panic".into()).is_client_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(SchemaError::EmptyBody.to_string(), "No data provided");
        assert_eq!(SchemaError::EmptyInput.to_string(), "Empty CSV data");
        assert_eq!(
            SchemaError::from(ImportError::DuplicateColumn("id".into())).to_string(),
            "Duplicate column name: id"
        );
    }
}
