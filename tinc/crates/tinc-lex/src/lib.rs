//! tinc-lex - Lexical Scanner for Syntax Highlighting
//!
//! This crate turns source text into a flat stream of classified tokens for
//! downstream syntax colouring. One generic scanning loop is parametrized by
//! a per-language [`LanguageSpec`] holding the keyword and built-in type sets
//! and the operator, punctuation and number character classes.
//!
//! # Example Usage
//!
//! ```
//! use tinc_lex::{LanguageSpec, Scanner, TokenKind};
//!
//! let lang = LanguageSpec::builder("mini")
//!     .keywords(["let"])
//!     .types(["int"])
//!     .operators("=+-", "=")
//!     .punctuation(";")
//!     .build()
//!     .unwrap();
//!
//! let scanner = Scanner::new(&lang);
//! let tokens = scanner.tokenize("let x = 42;");
//! assert_eq!(tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(tokens[6].kind, TokenKind::Number);
//!
//! // Every byte of the input is covered, in order.
//! let joined: String = tokens.iter().map(|t| t.lexeme).collect();
//! assert_eq!(joined, "let x = 42;");
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token and token kind definitions
//! - [`language`] - Per-language configuration and its builder
//! - [`scanner`] - The scanning loop and its recognizers
//! - [`cursor`] - Character cursor for source traversal
//! - [`unicode`] - Character predicates
//! - [`error`] - Configuration errors
//!
//! # Recognizers
//!
//! At every position the first matching rule wins:
//!
//! 1. whitespace run → `Text`
//! 2. `//` to end of line → `Comment`
//! 3. `/* ... */`, or to end of input → `Comment`
//! 4. `"..."` with backslash escapes, or to end of input → `String`
//! 5. `'...'`, same rules → `String`
//! 6. directive marker to end of line → `Preprocessor`
//! 7. ASCII digit, then digits and allowed number characters → `Number`
//! 8. optional verbatim prefix and a word → `Type`, `Keyword` or `Identifier`
//! 9. operator start, then continuation characters → `Operator`
//! 10. punctuation character → `Punctuation`
//! 11. anything else, one character → `Text`
//!
//! Scanning never fails; malformed input degrades to the rules above.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod cursor;
mod edge_cases;
pub mod error;
pub mod language;
pub mod scanner;
pub mod token;
pub mod unicode;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{ScanError, ScanResult};
pub use language::{CharClass, LanguageBuilder, LanguageSpec};
pub use scanner::{Scanner, Spanned, Tokens};
pub use token::{Token, TokenKind, UnknownTokenKind};

/// Scans `source` with `language` and collects the tokens.
///
/// Shorthand for `Scanner::new(language).tokenize(source)`.
pub fn tokenize<'s>(language: &LanguageSpec, source: &'s str) -> Vec<Token<'s>> {
    Scanner::new(language).tokenize(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scanner::testing::c_like;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(&c_like(), source).iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_hello_world_program() {
        let source = r#"
            using System;

            public class Hello {
                public static void Main() {
                    Console.WriteLine("Hello, tincture!");
                }
            }
        "#;
        let tokens = tokenize(&c_like(), source);

        assert!(tokens.contains(&Token::new(TokenKind::Keyword, "using")));
        assert!(tokens.contains(&Token::new(TokenKind::Keyword, "class")));
        assert!(tokens.contains(&Token::new(TokenKind::Identifier, "Console")));
        assert!(tokens.contains(&Token::new(
            TokenKind::String,
            "\"Hello, tincture!\""
        )));
    }

    #[test]
    fn test_fibonacci_program() {
        let source = r#"
            static int Fib(int n) {
                if (n <= 1) { return n; }
                return Fib(n - 1) + Fib(n - 2);
            }
        "#;
        let tokens = tokenize(&c_like(), source);

        assert!(tokens.contains(&Token::new(TokenKind::Type, "int")));
        assert!(tokens.contains(&Token::new(TokenKind::Keyword, "if")));
        assert!(tokens.contains(&Token::new(TokenKind::Operator, "<=")));
        assert!(tokens.contains(&Token::new(TokenKind::Operator, "-")));
        assert!(tokens.contains(&Token::new(TokenKind::Operator, "+")));
        assert!(tokens.contains(&Token::new(TokenKind::Number, "1")));
    }

    #[test]
    fn test_directive_then_code() {
        assert_eq!(
            kinds("#if DEBUG\nint x;\n#endif"),
            [
                TokenKind::Preprocessor,
                TokenKind::Text,
                TokenKind::Type,
                TokenKind::Text,
                TokenKind::Identifier,
                TokenKind::Punctuation,
                TokenKind::Text,
                TokenKind::Preprocessor,
            ]
        );
    }

    #[test]
    fn test_empty_source() {
        assert!(kinds("").is_empty());
    }

    #[test]
    fn test_whitespace_only() {
        assert_eq!(kinds("   \n\t  \n  "), [TokenKind::Text]);
    }

    #[test]
    fn test_comments_only() {
        assert_eq!(
            kinds("// comment\n/* block */\n// another"),
            [
                TokenKind::Comment,
                TokenKind::Text,
                TokenKind::Comment,
                TokenKind::Text,
                TokenKind::Comment,
            ]
        );
    }

    #[test]
    fn test_language_is_shareable_across_threads() {
        let lang = c_like();
        let scanner = Scanner::new(&lang);
        let sources = ["int a = 1;", "string b = \"x\";", "// c"];
        std::thread::scope(|scope| {
            let handles: Vec<_> = sources
                .iter()
                .map(|source| scope.spawn(move || scanner.tokenize(source).len()))
                .collect();
            let counts: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
            assert_eq!(counts, [8, 8, 1]);
        });
    }
}
