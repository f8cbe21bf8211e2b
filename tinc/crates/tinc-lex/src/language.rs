//! Per-language scanner configuration.
//!
//! A [`LanguageSpec`] is the data half of the scanner: the classification
//! sets and character classes that parametrize the single generic scanning
//! loop. Specs are built once through [`LanguageBuilder`], validated, and
//! never mutated afterwards.

use rustc_hash::FxHashSet;

use crate::error::{ScanError, ScanResult};
use crate::token::TokenKind;
use crate::unicode::{is_ident_continue, is_quote, is_word};

/// An immutable set of characters.
///
/// ASCII members live in a 128-bit mask; anything else is kept in a sorted
/// slice and binary-searched.
///
/// # Example
///
/// ```
/// use tinc_lex::CharClass;
///
/// let ops = CharClass::from("+-*/");
/// assert!(ops.contains('+'));
/// assert!(!ops.contains('('));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharClass {
    ascii: u128,
    other: Box<[char]>,
}

impl CharClass {
    /// Creates an empty class.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if `c` is a member.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1u128 << (c as u32)) != 0
        } else {
            self.other.binary_search(&c).is_ok()
        }
    }

    /// Returns true if the class has no members.
    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.other.is_empty()
    }

    /// Iterates over the members in code point order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..128)
            .filter(move |&b| self.ascii & (1u128 << b) != 0)
            .map(char::from)
            .chain(self.other.iter().copied())
    }

    /// Returns the first member for which `pred` holds.
    pub fn find(&self, pred: impl Fn(char) -> bool) -> Option<char> {
        self.iter().find(|&c| pred(c))
    }
}

impl FromIterator<char> for CharClass {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut ascii = 0u128;
        let mut other = Vec::new();
        for c in iter {
            if c.is_ascii() {
                ascii |= 1u128 << (c as u32);
            } else {
                other.push(c);
            }
        }
        other.sort_unstable();
        other.dedup();
        Self {
            ascii,
            other: other.into_boxed_slice(),
        }
    }
}

impl From<&str> for CharClass {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.iter().try_for_each(|c| write!(f, "{}", c))
    }
}

/// Scanner configuration for one language.
///
/// Holds the classification policy (keyword and built-in type sets), the
/// operator, punctuation and number character classes, and the optional
/// directive marker and verbatim prefix. Registry metadata (aliases and file
/// extensions) rides along so a registry can index it directly.
#[derive(Debug, Clone)]
pub struct LanguageSpec {
    name: String,
    aliases: Vec<String>,
    extensions: Vec<String>,
    keywords: FxHashSet<String>,
    types: FxHashSet<String>,
    operator_start: CharClass,
    operator_continue: CharClass,
    punctuation: CharClass,
    number_chars: CharClass,
    ident_extra: CharClass,
    directive_marker: Option<char>,
    verbatim_prefix: Option<char>,
}

impl LanguageSpec {
    /// Starts building a language with the given canonical name.
    pub fn builder(name: impl Into<String>) -> LanguageBuilder {
        LanguageBuilder::new(name)
    }

    /// Canonical name, e.g. `csharp`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names, e.g. `cs` and `c#`.
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    /// File extensions without the leading dot.
    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Returns true if `word` is a keyword. Case-sensitive.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    /// Returns true if `word` is a built-in type name. Case-sensitive.
    pub fn is_type(&self, word: &str) -> bool {
        self.types.contains(word)
    }

    /// Classifies a word with any verbatim prefix already stripped.
    ///
    /// Built-in types win over keywords; anything else is an identifier.
    ///
    /// # Example
    ///
    /// ```
    /// use tinc_lex::{LanguageSpec, TokenKind};
    ///
    /// let lang = LanguageSpec::builder("demo")
    ///     .keywords(["class", "int"])
    ///     .types(["int"])
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(lang.classify("class"), TokenKind::Keyword);
    /// assert_eq!(lang.classify("int"), TokenKind::Type);
    /// assert_eq!(lang.classify("classy"), TokenKind::Identifier);
    /// ```
    pub fn classify(&self, word: &str) -> TokenKind {
        if self.is_type(word) {
            TokenKind::Type
        } else if self.is_keyword(word) {
            TokenKind::Keyword
        } else {
            TokenKind::Identifier
        }
    }

    /// Iterates over the keyword set in no particular order.
    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    /// Iterates over the built-in type set in no particular order.
    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(String::as_str)
    }

    /// Characters that may start an operator.
    pub fn operator_start(&self) -> &CharClass {
        &self.operator_start
    }

    /// Characters that may continue an operator.
    pub fn operator_continue(&self) -> &CharClass {
        &self.operator_continue
    }

    /// Single-character punctuation.
    pub fn punctuation(&self) -> &CharClass {
        &self.punctuation
    }

    /// Characters, besides ASCII digits, allowed inside a number.
    pub fn number_chars(&self) -> &CharClass {
        &self.number_chars
    }

    /// Extra characters treated as part of words.
    pub fn ident_extra(&self) -> &CharClass {
        &self.ident_extra
    }

    /// The character that starts a directive line, if any.
    pub fn directive_marker(&self) -> Option<char> {
        self.directive_marker
    }

    /// The character that escapes a word, if any.
    pub fn verbatim_prefix(&self) -> Option<char> {
        self.verbatim_prefix
    }
}

/// Fluent constructor for [`LanguageSpec`].
///
/// # Example
///
/// ```
/// use tinc_lex::LanguageSpec;
///
/// let lang = LanguageSpec::builder("mini")
///     .aliases(["mn"])
///     .keywords(["let", "fn"])
///     .operators("+-*/=<>!", "=>")
///     .punctuation("(){};,")
///     .number_chars("._")
///     .directive_marker('#')
///     .build()
///     .unwrap();
/// assert_eq!(lang.aliases(), ["mn"]);
/// ```
#[derive(Debug, Clone, Default)]
#[must_use]
pub struct LanguageBuilder {
    name: String,
    aliases: Vec<String>,
    extensions: Vec<String>,
    keywords: Vec<String>,
    types: Vec<String>,
    operator_start: String,
    operator_continue: String,
    punctuation: String,
    number_chars: String,
    ident_extra: String,
    directive_marker: Option<char>,
    verbatim_prefix: Option<char>,
}

impl LanguageBuilder {
    /// Creates a builder with every set empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Adds alternative names.
    pub fn aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }

    /// Adds file extensions. A leading dot is optional.
    pub fn extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extensions.extend(extensions.into_iter().map(Into::into));
        self
    }

    /// Adds words to the keyword set.
    pub fn keywords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(words.into_iter().map(Into::into));
        self
    }

    /// Adds words to the built-in type set.
    pub fn types<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types.extend(words.into_iter().map(Into::into));
        self
    }

    /// Sets the operator start and continuation classes.
    pub fn operators(mut self, start: &str, continuation: &str) -> Self {
        self.operator_start = start.to_string();
        self.operator_continue = continuation.to_string();
        self
    }

    /// Sets the single-character punctuation class.
    pub fn punctuation(mut self, chars: &str) -> Self {
        self.punctuation = chars.to_string();
        self
    }

    /// Sets the characters allowed inside a number besides ASCII digits.
    pub fn number_chars(mut self, chars: &str) -> Self {
        self.number_chars = chars.to_string();
        self
    }

    /// Sets extra characters that count as word characters.
    pub fn ident_extra(mut self, chars: &str) -> Self {
        self.ident_extra = chars.to_string();
        self
    }

    /// Sets the directive line marker.
    pub fn directive_marker(mut self, marker: char) -> Self {
        self.directive_marker = Some(marker);
        self
    }

    /// Sets the verbatim word prefix.
    pub fn verbatim_prefix(mut self, prefix: char) -> Self {
        self.verbatim_prefix = Some(prefix);
        self
    }

    /// Validates the configuration and produces the language.
    ///
    /// Aliases and extensions are trimmed, and a leading dot is dropped from
    /// each extension.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::InvalidConfiguration`] when the configuration
    /// could not drive a scanner as described: an empty name, alias or
    /// extension, a classified word the scanner could never produce, or a
    /// character claimed by two recognizers where the later one could never
    /// see it.
    pub fn build(self) -> ScanResult<LanguageSpec> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return Err(ScanError::invalid(&name, "language name is empty"));
        }

        let aliases = collect_names(&name, "alias", self.aliases, |alias| alias)?;
        let extensions = collect_names(&name, "extension", self.extensions, |ext| {
            ext.strip_prefix('.').unwrap_or(ext)
        })?;

        let ident_extra = CharClass::from(self.ident_extra.as_str());
        if let Some(c) = ident_extra.find(|c| c.is_whitespace() || is_quote(c)) {
            return Err(ScanError::invalid(
                &name,
                format!("{:?} cannot be a word character", c),
            ));
        }

        let keywords = collect_words(&name, "keyword", self.keywords, &ident_extra)?;
        let types = collect_words(&name, "type", self.types, &ident_extra)?;

        let operator_start = CharClass::from(self.operator_start.as_str());
        let punctuation = CharClass::from(self.punctuation.as_str());
        let shadowed = |c: char| operator_start.contains(c) || punctuation.contains(c);

        for (what, marker) in [
            ("directive marker", self.directive_marker),
            ("verbatim prefix", self.verbatim_prefix),
        ] {
            if let Some(c) = marker {
                if c.is_whitespace()
                    || is_ident_continue(c)
                    || ident_extra.contains(c)
                    || is_quote(c)
                    || shadowed(c)
                {
                    return Err(ScanError::invalid(
                        &name,
                        format!("{} {:?} would be shadowed by another rule", what, c),
                    ));
                }
            }
        }
        if self.directive_marker.is_some() && self.directive_marker == self.verbatim_prefix {
            return Err(ScanError::invalid(
                &name,
                "directive marker and verbatim prefix are the same character",
            ));
        }
        if let Some(c) = ident_extra.find(shadowed) {
            return Err(ScanError::invalid(
                &name,
                format!("word character {:?} would be shadowed by another rule", c),
            ));
        }

        if let Some(c) = punctuation.find(|c| operator_start.contains(c)) {
            return Err(ScanError::invalid(
                &name,
                format!("{:?} is both an operator start and punctuation", c),
            ));
        }

        let number_chars = CharClass::from(self.number_chars.as_str());
        if let Some(c) = number_chars.find(|c| c.is_whitespace() || is_quote(c)) {
            return Err(ScanError::invalid(
                &name,
                format!("{:?} cannot appear inside a number", c),
            ));
        }

        Ok(LanguageSpec {
            name,
            aliases,
            extensions,
            keywords,
            types,
            operator_start,
            operator_continue: CharClass::from(self.operator_continue.as_str()),
            punctuation,
            number_chars,
            ident_extra,
            directive_marker: self.directive_marker,
            verbatim_prefix: self.verbatim_prefix,
        })
    }
}

fn collect_names(
    language: &str,
    what: &str,
    names: Vec<String>,
    normalize: impl Fn(&str) -> &str,
) -> ScanResult<Vec<String>> {
    names
        .iter()
        .map(|raw| {
            let name = normalize(raw.trim());
            if name.is_empty() {
                Err(ScanError::invalid(
                    language,
                    format!("{} {:?} is empty", what, raw),
                ))
            } else {
                Ok(name.to_string())
            }
        })
        .collect()
}

fn collect_words(
    language: &str,
    what: &str,
    words: Vec<String>,
    ident_extra: &CharClass,
) -> ScanResult<FxHashSet<String>> {
    let mut set = FxHashSet::default();
    set.reserve(words.len());
    for word in words {
        if !is_word(&word, |c| ident_extra.contains(c)) {
            return Err(ScanError::invalid(
                language,
                format!("{} {:?} is not a word", what, word),
            ));
        }
        set.insert(word);
    }
    Ok(set)
}
