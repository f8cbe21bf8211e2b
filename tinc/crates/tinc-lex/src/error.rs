//! Error types for tinc-lex.
//!
//! Scanning itself never fails. The only error surface is building a
//! [`LanguageSpec`](crate::LanguageSpec) from an inconsistent configuration.

use thiserror::Error;

/// Error raised before scanning begins.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScanError {
    /// The language configuration cannot drive a scanner.
    #[error("invalid configuration for language `{language}`: {reason}")]
    InvalidConfiguration {
        /// Name of the language being built (may be empty).
        language: String,
        /// What is wrong with it.
        reason: String,
    },
}

impl ScanError {
    pub(crate) fn invalid(language: &str, reason: impl Into<String>) -> Self {
        ScanError::InvalidConfiguration {
            language: language.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result type alias for configuration operations.
pub type ScanResult<T> = std::result::Result<T, ScanError>;
