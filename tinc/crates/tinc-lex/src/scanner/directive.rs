//! Preprocessor directive recognizer.

use super::Tokens;
use crate::token::TokenKind;

impl Tokens<'_, '_> {
    /// Lexes a directive line from the marker up to, not including, `\n`.
    pub(super) fn lex_directive(&mut self) -> TokenKind {
        self.cursor.eat_line();
        TokenKind::Preprocessor
    }
}
