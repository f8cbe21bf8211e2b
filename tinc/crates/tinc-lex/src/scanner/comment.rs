//! Comment recognizers.
//!
//! Line comments stop at the newline without consuming it. Block comments do
//! not nest and run to the end of input when unterminated.

use super::Tokens;
use crate::token::TokenKind;

impl Tokens<'_, '_> {
    /// Lexes a line comment (from `//` to end of line).
    pub(super) fn lex_line_comment(&mut self) -> TokenKind {
        self.cursor.eat_line();
        TokenKind::Comment
    }

    /// Lexes a block comment (from `/*` past the first `*/`).
    pub(super) fn lex_block_comment(&mut self) -> TokenKind {
        self.cursor.bump_str("/*");
        self.cursor.eat_past("*/");
        TokenKind::Comment
    }
}
