//! Service configuration
//!
//! Loaded once at startup from an optional TOML file, then overridden by
//! command-line flags. Immutable afterwards.

use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use csv_schema_sdk::ingress::DEFAULT_MAX_DECODED_BYTES;
use csv_schema_sdk::{CsvOptions, InferenceConfig, SchemaGenerator};
use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Either a simple level like "info" or a full EnvFilter string.
    /// `RUST_LOG` takes precedence when set.
    pub level: String,
    /// Emit logs as JSON lines when true; otherwise human-readable text.
    pub json: bool,
    /// Include event targets in log lines.
    pub with_targets: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
            with_targets: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Reported by `GET /health`
    pub service_name: String,
    /// Origins allowed to make credentialed cross-origin requests
    pub allowed_origins: Vec<String>,
    /// Largest accepted request body, before decompression
    pub max_body_bytes: usize,
    /// Largest accepted payload after gzip decompression
    pub max_decoded_bytes: usize,
    pub logging: LoggingConfig,
    pub csv: CsvOptions,
    pub inference: InferenceConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_owned(),
            port: 5002,
            service_name: "csv-schema-generator".to_owned(),
            allowed_origins: vec!["http://localhost:5173".to_owned()],
            max_body_bytes: 100 * 1024 * 1024,
            max_decoded_bytes: DEFAULT_MAX_DECODED_BYTES,
            logging: LoggingConfig::default(),
            csv: CsvOptions::default(),
            inference: InferenceConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read a TOML config file; missing keys fall back to defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&raw)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.service_name.trim().is_empty() {
            return Err(ConfigError::Invalid("service_name must not be empty".into()));
        }
        if self.max_body_bytes == 0 {
            return Err(ConfigError::Invalid("max_body_bytes must be positive".into()));
        }
        if self.max_decoded_bytes == 0 {
            return Err(ConfigError::Invalid(
                "max_decoded_bytes must be positive".into(),
            ));
        }
        for origin in &self.allowed_origins {
            let well_formed = origin.starts_with("http://") || origin.starts_with("https://");
            if !well_formed || HeaderValue::from_str(origin).is_err() {
                return Err(ConfigError::Invalid(format!(
                    "allowed origin {origin:?} is not an http(s) origin"
                )));
            }
        }
        self.csv
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        Ok(())
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the shared schema generator
    pub fn generator(&self) -> SchemaGenerator {
        SchemaGenerator::new(self.csv, self.inference.clone())
            .with_max_decoded_bytes(self.max_decoded_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let cfg = ServerConfig::default();
        assert_eq!(cfg.bind_addr(), "0.0.0.0:5002");
        assert_eq!(cfg.service_name, "csv-schema-generator");
        assert_eq!(cfg.allowed_origins, vec!["http://localhost:5173"]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let cfg = ServerConfig::from_toml_str(
            r#"
            port = 8080
            allowed_origins = ["http://localhost:5173", "https://app.example.com"]

            [logging]
            json = true

            [csv]
            delimiter = ";"

            [inference]
            missing_values = ["", "NA"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.port, 8080);
        assert_eq!(cfg.host, "0.0.0.0");
        assert_eq!(cfg.allowed_origins.len(), 2);
        assert!(cfg.logging.json);
        assert_eq!(cfg.logging.level, "info");
        assert_eq!(cfg.csv.delimiter, ';');
        assert_eq!(cfg.csv.quote, '"');
        assert_eq!(cfg.inference.missing_values, vec!["", "NA"]);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "service_name = \"schemas\"").unwrap();

        let cfg = ServerConfig::load(file.path()).unwrap();
        assert_eq!(cfg.service_name, "schemas");
    }

    #[test]
    fn test_missing_file() {
        let err = ServerConfig::load(Path::new("/nonexistent/csv-schema.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            ServerConfig::from_toml_str("port = \"not a number\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let cfg = ServerConfig {
            allowed_origins: vec!["*".into()],
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            max_body_bytes: 0,
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());

        let cfg = ServerConfig {
            csv: CsvOptions::default().with_delimiter('"'),
            ..ServerConfig::default()
        };
        assert!(cfg.validate().is_err());
    }
}
