//! Scanner module.
//!
//! This module organizes the scanner into smaller, focused components:
//! - `core` - `Scanner`, the `Tokens` iterator and recognizer dispatch
//! - `comment` - Line and block comments
//! - `string` - Quoted strings and character literals
//! - `directive` - Preprocessor directive lines
//! - `number` - Numeric literals
//! - `identifier` - Words, verbatim prefixes and classification
//! - `operator` - Operator runs

mod comment;
mod core;
mod directive;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::{Scanner, Spanned, Tokens};
