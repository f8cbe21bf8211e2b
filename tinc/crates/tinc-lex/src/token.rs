//! Token definitions for the scanner.
//!
//! A token is a classified slice of the source text. Tokens borrow from the
//! buffer they were scanned from and never own or copy it.

use std::fmt;
use std::str::FromStr;

/// Classification of a scanned lexeme.
///
/// The set is closed: every byte of input lands in exactly one token of one
/// of these kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    /// Whitespace runs and characters no other rule claims.
    Text,
    /// Line (`// ...`) and block (`/* ... */`) comments.
    Comment,
    /// Double-quoted strings and single-quoted character literals.
    String,
    /// A directive line such as `#include <stdio.h>`.
    Preprocessor,
    /// A numeric literal, unvalidated.
    Number,
    /// A word found in neither classification set.
    Identifier,
    /// A word found in the keyword set.
    Keyword,
    /// A word found in the built-in type set.
    Type,
    /// An operator run such as `+=` or `=>`.
    Operator,
    /// A single punctuation character.
    Punctuation,
}

impl TokenKind {
    /// Every kind, in declaration order.
    pub const ALL: [TokenKind; 10] = [
        TokenKind::Text,
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Preprocessor,
        TokenKind::Number,
        TokenKind::Identifier,
        TokenKind::Keyword,
        TokenKind::Type,
        TokenKind::Operator,
        TokenKind::Punctuation,
    ];

    /// Returns the stable lowercase name of this kind.
    ///
    /// # Example
    ///
    /// ```
    /// use tinc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::Preprocessor.as_str(), "preprocessor");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Text => "text",
            TokenKind::Comment => "comment",
            TokenKind::String => "string",
            TokenKind::Preprocessor => "preprocessor",
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::Type => "type",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown token kind name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown token kind: {0}")]
pub struct UnknownTokenKind(pub String);

impl FromStr for TokenKind {
    type Err = UnknownTokenKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TokenKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownTokenKind(s.to_string()))
    }
}

/// A classified lexeme.
///
/// `lexeme` is the verbatim source slice, delimiters and escape sequences
/// included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What the lexeme was classified as.
    pub kind: TokenKind,
    /// The exact source text the token covers.
    pub lexeme: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'src str) -> Self {
        Self { kind, lexeme }
    }

    /// Length of the lexeme in bytes.
    pub fn len(&self) -> usize {
        self.lexeme.len()
    }

    /// Returns true if the lexeme is empty. The scanner never produces one.
    pub fn is_empty(&self) -> bool {
        self.lexeme.is_empty()
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in TokenKind::ALL {
            assert_eq!(kind.as_str().parse::<TokenKind>(), Ok(kind));
        }
    }

    #[test]
    fn test_unknown_kind_name() {
        let err = "keywords".parse::<TokenKind>().unwrap_err();
        assert_eq!(err.to_string(), "unknown token kind: keywords");
    }

    #[test]
    fn test_kind_names_are_case_sensitive() {
        assert!("Keyword".parse::<TokenKind>().is_err());
    }

    #[test]
    fn test_token_display() {
        let token = Token::new(TokenKind::String, "\"hi\"");
        assert_eq!(token.to_string(), "string(\"\\\"hi\\\"\")");
        assert_eq!(token.len(), 4);
        assert!(!token.is_empty());
    }
}
