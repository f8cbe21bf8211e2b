//! Error types for the language registry.

use thiserror::Error;
use tinc_lex::ScanError;

/// Error type for registry operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A language with the same canonical name is already registered.
    #[error("language `{0}` is already registered")]
    DuplicateName(String),

    /// An alias is already claimed by another language.
    #[error("alias `{alias}` is already used by language `{language}`")]
    DuplicateAlias {
        /// The contested alias.
        alias: String,
        /// The language that owns it.
        language: String,
    },

    /// No registered language answers to the name.
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    /// A language definition failed validation.
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// Result type alias for registry operations.
pub type RegistryResult<T> = std::result::Result<T, RegistryError>;
