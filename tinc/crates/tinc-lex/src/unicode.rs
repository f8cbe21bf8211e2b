//! Character predicates shared by the recognizers and configuration checks.
//!
//! Words are Unicode-aware: any alphabetic character may start one. Numbers
//! only start on ASCII digits.

/// Checks if a character may start a word.
///
/// # Example
///
/// ```
/// use tinc_lex::unicode::is_ident_start;
///
/// assert!(is_ident_start('a'));
/// assert!(is_ident_start('_'));
/// assert!(is_ident_start('α'));
/// assert!(!is_ident_start('1'));
/// assert!(!is_ident_start('+'));
/// ```
#[inline]
pub fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue a word.
///
/// # Example
///
/// ```
/// use tinc_lex::unicode::is_ident_continue;
///
/// assert!(is_ident_continue('a'));
/// assert!(is_ident_continue('1'));
/// assert!(is_ident_continue('_'));
/// assert!(!is_ident_continue('-'));
/// assert!(!is_ident_continue(' '));
/// ```
#[inline]
pub fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_alphanumeric()
}

/// Checks if a character opens a string or character literal.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"' || c == '\''
}

/// Checks if every character of `word` could be produced by the word
/// recognizer, with `extra` admitted as additional word characters.
///
/// ```
/// use tinc_lex::unicode::is_word;
///
/// assert!(is_word("class", |_| false));
/// assert!(is_word("$el", |c| c == '$'));
/// assert!(!is_word("", |_| false));
/// assert!(!is_word("2x", |_| false));
/// assert!(!is_word("a-b", |_| false));
/// ```
pub fn is_word(word: &str, extra: impl Fn(char) -> bool) -> bool {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) || extra(first) => {
            chars.all(|c| is_ident_continue(c) || extra(c))
        },
        _ => false,
    }
}
