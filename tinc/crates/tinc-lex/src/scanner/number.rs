//! Numeric literal recognizer.
//!
//! A number starts on an ASCII digit and takes the longest run of digits and
//! the language's allow-listed in-number characters (decimal point, radix
//! markers, hex digits, suffixes, separators). The run is not validated:
//! `1.2.3` and `0x1..2` come out as single tokens.

use super::Tokens;
use crate::token::TokenKind;

impl Tokens<'_, '_> {
    /// Lexes a number literal.
    pub(super) fn lex_number(&mut self) -> TokenKind {
        let allowed = self.language.number_chars();
        self.cursor
            .eat_while(|c| c.is_ascii_digit() || allowed.contains(c));
        TokenKind::Number
    }
}

#[cfg(test)]
mod tests {
    use crate::scanner::testing::lex;
    use crate::token::TokenKind;
    use crate::{LanguageSpec, Scanner};

    #[test]
    fn test_decimal_integer() {
        assert_eq!(lex("42"), [(TokenKind::Number, "42")]);
        assert_eq!(lex("0"), [(TokenKind::Number, "0")]);
    }

    #[test]
    fn test_float_and_suffixes() {
        assert_eq!(lex("3.14"), [(TokenKind::Number, "3.14")]);
        assert_eq!(lex("2.5f"), [(TokenKind::Number, "2.5f")]);
        assert_eq!(lex("10UL"), [(TokenKind::Number, "10UL")]);
        assert_eq!(lex("1.5m"), [(TokenKind::Number, "1.5m")]);
        assert_eq!(lex("1_000_000"), [(TokenKind::Number, "1_000_000")]);
    }

    #[test]
    fn test_hex_literal() {
        assert_eq!(lex("0xDEADBEEF"), [(TokenKind::Number, "0xDEADBEEF")]);
    }

    #[test]
    fn test_invalid_runs_are_accepted_verbatim() {
        assert_eq!(lex("1.2.3"), [(TokenKind::Number, "1.2.3")]);
        assert_eq!(lex("1..2"), [(TokenKind::Number, "1..2")]);
        assert_eq!(lex("0xx1"), [(TokenKind::Number, "0xx1")]);
    }

    #[test]
    fn test_number_stops_at_disallowed_char() {
        assert_eq!(lex("12px"), [
            (TokenKind::Number, "12"),
            (TokenKind::Identifier, "px"),
        ]);
        assert_eq!(lex("1+2"), [
            (TokenKind::Number, "1"),
            (TokenKind::Operator, "+"),
            (TokenKind::Number, "2"),
        ]);
    }

    #[test]
    fn test_leading_dot_is_punctuation() {
        assert_eq!(lex(".5"), [
            (TokenKind::Punctuation, "."),
            (TokenKind::Number, "5"),
        ]);
    }

    #[test]
    fn test_non_ascii_digits_do_not_start_a_number() {
        // U+0663 ARABIC-INDIC DIGIT THREE is numeric but not an ASCII digit.
        assert_eq!(lex("\u{663}"), [(TokenKind::Text, "\u{663}")]);
    }

    #[test]
    fn test_digits_only_language() {
        let lang = LanguageSpec::builder("digits").build().unwrap();
        let tokens = Scanner::new(&lang).tokenize("3.14");
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].lexeme, "3");
        assert_eq!(tokens[1].kind, TokenKind::Text);
        assert_eq!(tokens[2].lexeme, "14");
    }
}
