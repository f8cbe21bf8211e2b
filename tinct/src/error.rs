//! Error handling module for the tinct CLI.
//!
//! This module provides custom error types using `thiserror` for structured
//! error handling throughout the application.

use thiserror::Error;
use tinc_lang::RegistryError;
use tinc_lex::ScanError;

/// Main error type for the tinct CLI application.
#[derive(Error, Debug)]
pub enum TinctError {
    /// The configuration file is missing, malformed or inconsistent.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A file could not be read.
    #[error("File operation failed: {0}")]
    FileOperation(String),

    /// Arguments were rejected.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A command ran but did not finish cleanly.
    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    /// Error when IO operations fail.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error when JSON serialization fails.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A language definition failed validation.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Language lookup or registration failed.
    #[error(transparent)]
    Registry(#[from] RegistryError),
}

/// Result type alias using TinctError.
pub type Result<T> = std::result::Result<T, TinctError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = TinctError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");
    }

    #[test]
    fn test_file_operation_error_display() {
        let err = TinctError::FileOperation("permission denied".to_string());
        assert_eq!(err.to_string(), "File operation failed: permission denied");
    }

    #[test]
    fn test_validation_error_display() {
        let err = TinctError::Validation("jobs must be at least 1".to_string());
        assert_eq!(err.to_string(), "Validation error: jobs must be at least 1");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TinctError = io_err.into();
        assert!(matches!(err, TinctError::Io(_)));
    }

    #[test]
    fn test_registry_error_is_transparent() {
        let err: TinctError = RegistryError::UnknownLanguage("cobol".to_string()).into();
        assert_eq!(err.to_string(), "unknown language: cobol");
    }

    #[test]
    fn test_scan_error_conversion() {
        let scan = tinc_lex::LanguageSpec::builder(" ").build().unwrap_err();
        let err: TinctError = scan.into();
        assert!(matches!(err, TinctError::Scan(_)));
    }
}
