//! Edge case tests for tinc-lex

#[cfg(test)]
mod tests {
    use crate::scanner::testing::{c_like, lex};
    use crate::{Scanner, TokenKind};

    fn concat(source: &str) -> String {
        lex(source).into_iter().map(|(_, lexeme)| lexeme).collect()
    }

    // ==================== COVERAGE ====================

    #[test]
    fn test_edge_coverage_of_mixed_program() {
        let source = r#"
#region Main
using System;
namespace Demo {
    public static class Program {
        /* entry */ static void Main(string[] args) {
            var path = @"C:\temp";      // verbatim-ish
            char c = '\'';
            double d = 1.5e3 + 0xFFu;
            if (args.Length >= 2 && d != 0) return;
        }
    }
}
#endregion
"#;
        assert_eq!(concat(source), source);
    }

    #[test]
    fn test_edge_coverage_of_garbage() {
        let source = "\u{0}\u{1}`§¶😀\u{FEFF}\\\"'";
        assert_eq!(concat(source), source);
    }

    #[test]
    fn test_edge_byte_order_mark_is_fallback_text() {
        assert_eq!(lex("\u{FEFF}x"), [
            (TokenKind::Text, "\u{FEFF}"),
            (TokenKind::Identifier, "x"),
        ]);
    }

    // ==================== PRIORITY ORDER ====================

    #[test]
    fn test_edge_string_beats_directive() {
        assert_eq!(lex("\"#x\""), [(TokenKind::String, "\"#x\"")]);
    }

    #[test]
    fn test_edge_comment_beats_string() {
        assert_eq!(lex("// \"x"), [(TokenKind::Comment, "// \"x")]);
    }

    #[test]
    fn test_edge_number_beats_word() {
        assert_eq!(lex("0xff"), [(TokenKind::Number, "0xff")]);
        assert_eq!(lex("1abc"), [(TokenKind::Number, "1abc")]);
    }

    #[test]
    fn test_edge_word_then_number_chars() {
        assert_eq!(lex("abc1"), [(TokenKind::Identifier, "abc1")]);
    }

    // ==================== TERMINATION ====================

    #[test]
    fn test_edge_token_count_bounded_by_chars() {
        let source = "`~`~`~((((;;;;😀😀";
        let tokens = lex(source);
        assert!(tokens.len() <= source.chars().count());
        assert!(tokens.iter().all(|(_, lexeme)| !lexeme.is_empty()));
    }

    #[test]
    fn test_edge_long_unterminated_string() {
        let source = format!("\"{}", "x".repeat(100_000));
        let tokens = lex(&source);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].0, TokenKind::String);
    }

    #[test]
    fn test_edge_many_small_tokens() {
        let source = "a;".repeat(10_000);
        assert_eq!(lex(&source).len(), 20_000);
    }

    // ==================== DETERMINISM ====================

    #[test]
    fn test_edge_rescan_is_identical() {
        let lang = c_like();
        let scanner = Scanner::new(&lang);
        let source = "int x = @\"a\\\"b\" /* c */ + 'd';";
        let first = scanner.tokenize(source);
        let joined: String = first.iter().map(|t| t.lexeme).collect();
        let second = scanner.tokenize(&joined);
        assert_eq!(first, second);
    }
}
