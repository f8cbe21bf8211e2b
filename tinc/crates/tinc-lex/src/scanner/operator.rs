//! Operator recognizer.
//!
//! An operator is one start-class character followed by the longest run of
//! continuation-class characters. There is no table of valid operators, so
//! `=>`, `??=` and nonsense such as `<=>=` are all taken whole.

use super::Tokens;
use crate::token::TokenKind;

impl Tokens<'_, '_> {
    /// Lexes an operator run.
    pub(super) fn lex_operator(&mut self) -> TokenKind {
        let continuation = self.language.operator_continue();
        self.cursor.bump();
        self.cursor.eat_while(|c| continuation.contains(c));
        TokenKind::Operator
    }
}
