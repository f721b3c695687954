//! Configuration for column type inference

use serde::{Deserialize, Serialize};

/// Configuration for column type inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Maximum number of data rows to analyse (0 = all)
    pub sample_size: usize,

    /// Cell values treated as missing. Missing cells never vote on a column's type.
    pub missing_values: Vec<String>,

    /// Tokens recognised as boolean `true` (compared case-insensitively)
    pub true_values: Vec<String>,

    /// Tokens recognised as boolean `false` (compared case-insensitively)
    pub false_values: Vec<String>,

    /// Run the date, datetime and time detectors
    pub detect_temporal: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            sample_size: 0, // All rows
            missing_values: vec![String::new()],
            true_values: vec!["true".to_string()],
            false_values: vec!["false".to_string()],
            detect_temporal: true,
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InferenceConfigBuilder {
        InferenceConfigBuilder::default()
    }

    /// Whether a raw cell value counts as missing
    pub fn is_missing(&self, value: &str) -> bool {
        self.missing_values.iter().any(|m| m == value)
    }

    /// Whether a raw cell value is one of the boolean tokens
    pub fn is_boolean_token(&self, value: &str) -> bool {
        self.true_values
            .iter()
            .chain(self.false_values.iter())
            .any(|token| token.eq_ignore_ascii_case(value))
    }
}

/// Builder for InferenceConfig
#[derive(Debug, Default)]
pub struct InferenceConfigBuilder {
    config: InferenceConfig,
}

impl InferenceConfigBuilder {
    /// Set the sample size (0 = all rows)
    pub fn sample_size(mut self, size: usize) -> Self {
        self.config.sample_size = size;
        self
    }

    /// Replace the missing-value tokens
    pub fn missing_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.missing_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Add one missing-value token to the current set
    pub fn missing_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        if !self.config.missing_values.contains(&value) {
            self.config.missing_values.push(value);
        }
        self
    }

    /// Replace the boolean `true` tokens
    pub fn true_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.true_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the boolean `false` tokens
    pub fn false_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.false_values = values.into_iter().map(Into::into).collect();
        self
    }

    /// Enable or disable date/datetime/time detection
    pub fn detect_temporal(mut self, detect: bool) -> Self {
        self.config.detect_temporal = detect;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InferenceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = InferenceConfig::default();
        assert_eq!(config.sample_size, 0);
        assert_eq!(config.missing_values, vec![String::new()]);
        assert!(config.detect_temporal);
        assert!(config.is_missing(""));
        assert!(!config.is_missing("NA"));
    }

    #[test]
    fn test_builder() {
        let config = InferenceConfig::builder()
            .sample_size(1000)
            .missing_value("NA")
            .detect_temporal(false)
            .build();

        assert_eq!(config.sample_size, 1000);
        assert!(config.is_missing(""));
        assert!(config.is_missing("NA"));
        assert!(!config.detect_temporal);
    }

    #[test]
    fn test_missing_value_not_duplicated() {
        let config = InferenceConfig::builder()
            .missing_value("")
            .missing_value("null")
            .missing_value("null")
            .build();

        assert_eq!(config.missing_values, vec!["".to_string(), "null".to_string()]);
    }

    #[test]
    fn test_boolean_tokens_case_insensitive() {
        let config = InferenceConfig::default();
        assert!(config.is_boolean_token("TRUE"));
        assert!(config.is_boolean_token("False"));
        assert!(!config.is_boolean_token("yes"));
        assert!(!config.is_boolean_token("1"));

        let config = InferenceConfig::builder()
            .true_values(["yes", "y"])
            .false_values(["no", "n"])
            .build();
        assert!(config.is_boolean_token("YES"));
        assert!(!config.is_boolean_token("true"));
    }
}
