//! Character cursor for traversing source text.
//!
//! This module provides the `Cursor` struct which holds the single position
//! the scanner advances through the source. The position is a byte offset
//! that always sits on a `char` boundary, so multi-byte characters are
//! consumed as whole units and slices taken from the cursor are always valid.

/// A forward-only cursor over source text.
///
/// # Example
///
/// ```
/// use tinc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("let x");
/// assert_eq!(cursor.first(), Some('l'));
/// cursor.bump();
/// assert_eq!(cursor.first(), Some('e'));
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    /// The source text being traversed.
    source: &'a str,

    /// Current byte position in the source.
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            position: 0,
        }
    }

    /// Returns the character under the cursor, or `None` at the end.
    #[inline]
    pub fn first(&self) -> Option<char> {
        let rest = self.remaining();
        // ASCII fast path
        match rest.as_bytes().first() {
            Some(&b) if b < 128 => Some(b as char),
            Some(_) => rest.chars().next(),
            None => None,
        }
    }

    /// Returns true if the remaining text starts with `prefix`.
    #[inline]
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.remaining().starts_with(prefix)
    }

    /// Consumes one character and returns it.
    ///
    /// Does nothing at the end of input.
    ///
    /// ```
    /// use tinc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("αβ");
    /// assert_eq!(cursor.bump(), Some('α'));
    /// assert_eq!(cursor.position(), 2);
    /// ```
    #[inline]
    pub fn bump(&mut self) -> Option<char> {
        let c = self.first()?;
        self.position += c.len_utf8();
        Some(c)
    }

    /// Consumes the given ASCII prefix, which the caller has already matched.
    #[inline]
    pub fn bump_str(&mut self, prefix: &str) {
        debug_assert!(self.starts_with(prefix));
        self.position += prefix.len();
    }

    /// Consumes characters while `pred` holds.
    ///
    /// ```
    /// use tinc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("123abc");
    /// cursor.eat_while(|c| c.is_ascii_digit());
    /// assert_eq!(cursor.remaining(), "abc");
    /// ```
    #[inline]
    pub fn eat_while(&mut self, mut pred: impl FnMut(char) -> bool) {
        let rest = self.remaining();
        let len = rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map_or(rest.len(), |(i, _)| i);
        self.position += len;
    }

    /// Consumes everything up to, but not including, the next `\n`.
    ///
    /// ```
    /// use tinc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("// hi\nx");
    /// cursor.eat_line();
    /// assert_eq!(cursor.remaining(), "\nx");
    /// ```
    #[inline]
    pub fn eat_line(&mut self) {
        let rest = self.remaining();
        self.position += rest.find('\n').unwrap_or(rest.len());
    }

    /// Consumes up to and including the next occurrence of `terminator`, or
    /// to the end of input if there is none. Returns true if it was found.
    ///
    /// ```
    /// use tinc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(" a */b");
    /// assert!(cursor.eat_past("*/"));
    /// assert_eq!(cursor.remaining(), "b");
    ///
    /// let mut cursor = Cursor::new(" a *");
    /// assert!(!cursor.eat_past("*/"));
    /// assert!(cursor.is_at_end());
    /// ```
    pub fn eat_past(&mut self, terminator: &str) -> bool {
        let rest = self.remaining();
        match rest.find(terminator) {
            Some(i) => {
                self.position += i + terminator.len();
                true
            },
            None => {
                self.position = self.source.len();
                false
            },
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns a slice of the source from `start` to the current position.
    ///
    /// ```
    /// use tinc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new("let x");
    /// let start = cursor.position();
    /// cursor.eat_while(|c| c.is_alphabetic());
    /// assert_eq!(cursor.slice_from(start), "let");
    /// ```
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        &self.source[start..self.position]
    }

    /// Returns the source text from the current position to the end.
    #[inline]
    pub fn remaining(&self) -> &'a str {
        &self.source[self.position..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor() {
        let cursor = Cursor::new("let x = 42;");
        assert_eq!(cursor.first(), Some('l'));
        assert_eq!(cursor.position(), 0);
        assert!(!cursor.is_at_end());
    }

    #[test]
    fn test_bump_utf8() {
        let mut cursor = Cursor::new("αβγ");
        assert_eq!(cursor.bump(), Some('α'));
        assert_eq!(cursor.bump(), Some('β'));
        assert_eq!(cursor.first(), Some('γ'));
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_bump_astral() {
        let mut cursor = Cursor::new("😀!");
        assert_eq!(cursor.bump(), Some('😀'));
        assert_eq!(cursor.remaining(), "!");
    }

    #[test]
    fn test_embedded_nul_is_a_character() {
        let mut cursor = Cursor::new("\0");
        assert_eq!(cursor.first(), Some('\0'));
        cursor.bump();
        assert_eq!(cursor.first(), None);
    }

    #[test]
    fn test_eat_while_to_end() {
        let mut cursor = Cursor::new("   ");
        cursor.eat_while(char::is_whitespace);
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_eat_line_without_newline() {
        let mut cursor = Cursor::new("#define X");
        cursor.eat_line();
        assert!(cursor.is_at_end());
    }

    #[test]
    fn test_bump_str() {
        let mut cursor = Cursor::new("/*x");
        cursor.bump_str("/*");
        assert_eq!(cursor.remaining(), "x");
    }

    #[test]
    fn test_empty_source() {
        let mut cursor = Cursor::new("");
        assert!(cursor.is_at_end());
        assert_eq!(cursor.first(), None);
        assert_eq!(cursor.bump(), None);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_slice_from() {
        let mut cursor = Cursor::new("let x = 42;");
        let start = cursor.position();
        cursor.eat_while(|c| c != ' ');
        assert_eq!(cursor.slice_from(start), "let");
        let start = cursor.position();
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.slice_from(start), " x");
    }
}
