//! Error types for Mentora
//!
//! This module defines all error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for Mentora operations
///
/// This enum encompasses all possible errors that can occur during
/// configuration loading, responder creation, and output serialization.
/// Session store operations are total and never produce errors.
#[derive(Error, Debug)]
pub enum MentoraError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Responder-related errors (unknown type, backend failures)
    #[error("Responder error: {0}")]
    Responder(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type alias for Mentora operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = MentoraError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_responder_error_display() {
        let error = MentoraError::Responder("unknown type".to_string());
        assert_eq!(error.to_string(), "Responder error: unknown type");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: MentoraError = io_error.into();
        assert!(matches!(error, MentoraError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_str = "{invalid json}";
        let json_error = serde_json::from_str::<serde_json::Value>(json_str).unwrap_err();
        let error: MentoraError = json_error.into();
        assert!(matches!(error, MentoraError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_str = "invalid: : yaml";
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>(yaml_str).unwrap_err();
        let error: MentoraError = yaml_error.into();
        assert!(matches!(error, MentoraError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MentoraError>();
    }
}
