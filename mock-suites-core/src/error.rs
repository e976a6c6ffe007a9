//! Error types for the mock suite library
//!
//! Generation itself never fails. These errors cover the edges around it:
//! loading configuration, rendering exports and reading dashboard documents.

use thiserror::Error;

/// Main error type for mock suite operations
#[derive(Debug, Error)]
pub enum MockSuiteError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown export format '{format}' (expected json, csv or markdown)")]
    UnknownFormat { format: String },
}

impl MockSuiteError {
    /// Create an invalid configuration error
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// Create an unknown format error
    pub fn unknown_format(format: impl Into<String>) -> Self {
        Self::UnknownFormat { format: format.into() }
    }
}

/// Result type for mock suite operations
pub type Result<T> = std::result::Result<T, MockSuiteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MockSuiteError::unknown_format("xml");
        assert_eq!(err.to_string(), "Unknown export format 'xml' (expected json, csv or markdown)");

        let err = MockSuiteError::invalid_config("reference_time out of range");
        assert_eq!(err.to_string(), "Invalid configuration: reference_time out of range");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err: MockSuiteError = json_err.into();
        assert!(matches!(err, MockSuiteError::Serialization(_)));

        let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();
        let err: MockSuiteError = toml_err.into();
        assert!(matches!(err, MockSuiteError::ConfigParse(_)));
    }
}
