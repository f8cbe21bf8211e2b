//! String and character literal recognizers.
//!
//! Both quote styles share one rule: a backslash escapes whatever character
//! follows it, the first unescaped matching quote closes the literal, and a
//! missing closer lets the literal run to the end of input. Escapes are left
//! verbatim in the lexeme.

use super::Tokens;
use crate::token::TokenKind;

impl Tokens<'_, '_> {
    /// Lexes a literal delimited by `quote` (`"` or `'`).
    pub(super) fn lex_quoted(&mut self, quote: char) -> TokenKind {
        self.cursor.bump();

        while let Some(c) = self.cursor.bump() {
            if c == quote {
                break;
            }
            if c == '\\' {
                self.cursor.bump();
            }
        }

        TokenKind::String
    }
}
