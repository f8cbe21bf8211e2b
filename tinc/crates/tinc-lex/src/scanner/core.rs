//! Core scanner implementation.
//!
//! This module contains the `Scanner` entry point, the lazy `Tokens`
//! iterator that owns the cursor, and the dispatch that picks a recognizer
//! for the character under the cursor.

use std::iter::FusedIterator;
use std::ops::Range;

use crate::cursor::Cursor;
use crate::language::LanguageSpec;
use crate::token::{Token, TokenKind};

/// Scanner for one language.
///
/// A scanner is a thin handle on an immutable [`LanguageSpec`]; it is `Copy`
/// and may be shared freely across threads. All per-scan state lives in the
/// [`Tokens`] iterator returned by [`Scanner::scan`].
///
/// # Example
///
/// ```
/// use tinc_lex::{LanguageSpec, Scanner, TokenKind};
///
/// let lang = LanguageSpec::builder("demo")
///     .keywords(["return"])
///     .punctuation(";")
///     .build()
///     .unwrap();
/// let kinds: Vec<_> = Scanner::new(&lang).scan("return x;").map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [
///         TokenKind::Keyword,
///         TokenKind::Text,
///         TokenKind::Identifier,
///         TokenKind::Punctuation,
///     ]
/// );
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Scanner<'l> {
    language: &'l LanguageSpec,
}

impl<'l> Scanner<'l> {
    /// Creates a scanner driven by `language`.
    pub fn new(language: &'l LanguageSpec) -> Self {
        Self { language }
    }

    /// The language this scanner classifies against.
    pub fn language(&self) -> &'l LanguageSpec {
        self.language
    }

    /// Returns a lazy iterator over the tokens of `source`.
    pub fn scan<'s>(&self, source: &'s str) -> Tokens<'l, 's> {
        Tokens {
            cursor: Cursor::new(source),
            language: self.language,
            token_start: 0,
        }
    }

    /// Scans `source` eagerly.
    pub fn tokenize<'s>(&self, source: &'s str) -> Vec<Token<'s>> {
        self.scan(source).collect()
    }
}

/// Lazy token stream over one source buffer.
///
/// Every call to `next` runs exactly one recognizer and advances the cursor
/// by at least one character, so the stream always ends after at most as
/// many tokens as the input has characters.
#[derive(Debug, Clone)]
pub struct Tokens<'l, 's> {
    /// Character cursor for source traversal.
    pub(super) cursor: Cursor<'s>,

    /// Classification sets and character classes.
    pub(super) language: &'l LanguageSpec,

    /// Byte offset where the current token starts.
    pub(super) token_start: usize,
}

impl<'l, 's> Tokens<'l, 's> {
    /// Byte offset of the next token to be produced.
    pub fn offset(&self) -> usize {
        self.cursor.position()
    }

    /// The unscanned remainder of the source.
    pub fn remaining(&self) -> &'s str {
        self.cursor.remaining()
    }

    /// Pairs every token with the byte range it covers.
    ///
    /// ```
    /// use tinc_lex::{LanguageSpec, Scanner};
    ///
    /// let lang = LanguageSpec::builder("demo").build().unwrap();
    /// let ranges: Vec<_> = Scanner::new(&lang).scan("a b").spanned().map(|(r, _)| r).collect();
    /// assert_eq!(ranges, [0..1, 1..2, 2..3]);
    /// ```
    pub fn spanned(self) -> Spanned<'l, 's> {
        Spanned { inner: self }
    }

    /// Produces the next token, or `None` at the end of input.
    ///
    /// Recognizers are tried in a fixed priority order; the first one whose
    /// opening character matches owns the token.
    pub fn next_token(&mut self) -> Option<Token<'s>> {
        let c = self.cursor.first()?;
        self.token_start = self.cursor.position();

        let kind = if c.is_whitespace() {
            self.cursor.eat_while(char::is_whitespace);
            TokenKind::Text
        } else if self.cursor.starts_with("//") {
            self.lex_line_comment()
        } else if self.cursor.starts_with("/*") {
            self.lex_block_comment()
        } else if c == '"' || c == '\'' {
            self.lex_quoted(c)
        } else if self.language.directive_marker() == Some(c) {
            self.lex_directive()
        } else if c.is_ascii_digit() {
            self.lex_number()
        } else if self.is_word_start(c) {
            self.lex_word()
        } else if self.language.operator_start().contains(c) {
            self.lex_operator()
        } else if self.language.punctuation().contains(c) {
            self.cursor.bump();
            TokenKind::Punctuation
        } else {
            self.cursor.bump();
            TokenKind::Text
        };

        Some(Token::new(kind, self.cursor.slice_from(self.token_start)))
    }
}

impl<'s> Iterator for Tokens<'_, 's> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let lower = usize::from(!self.cursor.is_at_end());
        (lower, Some(self.cursor.remaining().len()))
    }
}

impl FusedIterator for Tokens<'_, '_> {}

/// Iterator adapter yielding `(byte range, token)` pairs.
///
/// Created by [`Tokens::spanned`].
#[derive(Debug, Clone)]
pub struct Spanned<'l, 's> {
    inner: Tokens<'l, 's>,
}

impl<'s> Iterator for Spanned<'_, 's> {
    type Item = (Range<usize>, Token<'s>);

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.inner.offset();
        let token = self.inner.next_token()?;
        Some((start..start + token.len(), token))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Spanned<'_, '_> {}
