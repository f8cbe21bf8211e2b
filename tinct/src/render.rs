//! ANSI rendering of scanned tokens.
//!
//! A [`Theme`] assigns a [`Style`] to each token kind. `Text` tokens are
//! always written unstyled, so whitespace and unclaimed characters pass
//! through untouched.

use std::collections::BTreeMap;

use tinc_lex::{Token, TokenKind};

use crate::error::{Result, TinctError};

const RESET: &str = "\x1b[0m";

/// A single SGR attribute, or no styling at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style(Option<u8>);

impl Style {
    /// No styling.
    pub const NONE: Style = Style(None);

    /// Parses a colour name such as `blue`, `bright-red`, `bold` or `none`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_ascii_lowercase();
        let code = match name.as_str() {
            "none" => return Some(Self::NONE),
            "bold" => 1,
            "dim" => 2,
            "italic" => 3,
            "underline" => 4,
            _ => {
                let (base, color) = match name.strip_prefix("bright-") {
                    Some(color) => (90, color),
                    None => (30, name.as_str()),
                };
                base + color_offset(color)?
            }
        };
        Some(Self(Some(code)))
    }

    /// Appends `text` to `out`, wrapped in this style.
    pub fn paint(self, text: &str, out: &mut String) {
        match self.0 {
            Some(code) => {
                out.push_str("\x1b[");
                out.push_str(&code.to_string());
                out.push('m');
                out.push_str(text);
                out.push_str(RESET);
            }
            None => out.push_str(text),
        }
    }
}

fn color_offset(name: &str) -> Option<u8> {
    Some(match name {
        "black" => 0,
        "red" => 1,
        "green" => 2,
        "yellow" => 3,
        "blue" => 4,
        "magenta" => 5,
        "cyan" => 6,
        "white" => 7,
        _ => return None,
    })
}

/// Styles for every token kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    styles: [Style; TokenKind::ALL.len()],
}

impl Default for Theme {
    fn default() -> Self {
        let mut theme = Self {
            styles: [Style::NONE; TokenKind::ALL.len()],
        };
        let defaults = [
            (TokenKind::Comment, "bright-black"),
            (TokenKind::String, "green"),
            (TokenKind::Preprocessor, "magenta"),
            (TokenKind::Number, "bright-magenta"),
            (TokenKind::Keyword, "blue"),
            (TokenKind::Type, "cyan"),
            (TokenKind::Operator, "yellow"),
        ];
        for (kind, name) in defaults {
            theme.set(kind, Style::from_name(name).unwrap_or_default());
        }
        theme
    }
}

impl Theme {
    /// Builds the default theme with overrides from a `kind = "colour"` table.
    ///
    /// `text` is not a valid key, since text tokens are never styled.
    pub fn from_config(overrides: &BTreeMap<String, String>) -> Result<Self> {
        let mut theme = Self::default();
        for (kind, color) in overrides {
            let kind: TokenKind = kind
                .parse()
                .map_err(|e| TinctError::Config(format!("theme: {}", e)))?;
            if kind == TokenKind::Text {
                return Err(TinctError::Config(
                    "theme: text is always written unstyled".to_string(),
                ));
            }
            let style = Style::from_name(color).ok_or_else(|| {
                TinctError::Config(format!("theme: unknown colour `{}` for {}", color, kind))
            })?;
            theme.set(kind, style);
        }
        Ok(theme)
    }

    /// The style for `kind`.
    pub fn style(&self, kind: TokenKind) -> Style {
        self.styles[kind as usize]
    }

    /// Replaces the style for `kind`.
    pub fn set(&mut self, kind: TokenKind, style: Style) {
        self.styles[kind as usize] = style;
    }
}

/// Concatenates `tokens`, wrapping each non-`Text` lexeme in its theme style.
pub fn render_ansi(tokens: &[Token<'_>], theme: &Theme) -> String {
    let capacity = tokens.iter().map(|t| t.len()).sum::<usize>();
    let mut out = String::with_capacity(capacity + capacity / 2);
    for token in tokens {
        let style = match token.kind {
            TokenKind::Text => Style::NONE,
            kind => theme.style(kind),
        };
        style.paint(token.lexeme, &mut out);
    }
    out
}
