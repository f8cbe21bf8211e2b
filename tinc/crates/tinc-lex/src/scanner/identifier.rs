//! Identifier, keyword and type recognizer.
//!
//! A word is an optional verbatim prefix followed by the longest run of
//! letters, digits, underscores and the language's extra word characters.
//! The prefix stays in the lexeme but is stripped before classification, so
//! `@class` in C# is looked up as `class`.

use super::Tokens;
use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_ident_start};

impl Tokens<'_, '_> {
    /// Returns true if `c` opens a word in the current language.
    pub(super) fn is_word_start(&self, c: char) -> bool {
        is_ident_start(c)
            || self.language.ident_extra().contains(c)
            || self.language.verbatim_prefix() == Some(c)
    }

    /// Lexes a word and classifies it.
    pub(super) fn lex_word(&mut self) -> TokenKind {
        let lang = self.language;

        if lang.verbatim_prefix().is_some() && self.cursor.first() == lang.verbatim_prefix() {
            self.cursor.bump();
        }

        let word_start = self.cursor.position();
        self.cursor
            .eat_while(|c| is_ident_continue(c) || lang.ident_extra().contains(c));

        lang.classify(self.cursor.slice_from(word_start))
    }
}
